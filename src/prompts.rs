pub const EXTRACT_SYSTEM: &str = include_str!("../data/prompts/extract_system.txt");

const TAG_SEPARATOR: &str = ", ";

/// Join the image description with its optional category and style tags.
///
/// Blank tags are skipped entirely so the prompt never carries a trailing or
/// doubled separator.
pub fn compose_image_prompt(description: &str, category: &str, style: &str) -> String {
    let mut prompt = description.to_string();
    for tag in [category, style] {
        let tag = tag.trim();
        if !tag.is_empty() {
            prompt.push_str(TAG_SEPARATOR);
            prompt.push_str(tag);
        }
    }
    prompt
}
