use super::Presenter;
use crate::interpret::{TextResult, LINE_BREAK};

/// Writes results to stdout and error dialogs to stderr.
#[derive(Debug, Default)]
pub struct TerminalPresenter;

impl TerminalPresenter {
    pub fn new() -> Self {
        Self
    }
}

/// Undo the line-break markup for plain-text output.
pub fn render_plain(result: &TextResult) -> String {
    result.content.replace(LINE_BREAK, "\n")
}

pub fn render_gallery(urls: &[String]) -> String {
    if urls.is_empty() {
        return "No images returned.".to_string();
    }
    urls.iter()
        .enumerate()
        .map(|(i, url)| format!("[{}] {}", i + 1, url))
        .collect::<Vec<_>>()
        .join("\n")
}

impl Presenter for TerminalPresenter {
    fn show_error(&self, title: &str, message: &str) {
        eprintln!("{}: {}", title, message);
    }

    fn show_text(&self, result: &TextResult) {
        println!("{}", render_plain(result));
    }

    fn show_images(&self, urls: &[String]) {
        println!("{}", render_gallery(urls));
    }
}
