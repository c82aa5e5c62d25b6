//! Local checks run before any request leaves the process.

use crate::models::Credential;
use crate::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Word count past which the input field turns into a warning.
pub const WORD_LIMIT: usize = 1000;

// ASCII `\W`; non-ASCII letters split words the same way a browser regex does.
static NON_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^A-Za-z0-9_]+").expect("static word-splitting pattern is valid")
});

/// Count the tokens left after splitting `text` on runs of non-word characters.
///
/// Leading and trailing separators do not produce empty words, so blank input
/// counts as zero.
pub fn word_count(text: &str) -> usize {
    NON_WORD.split(text).filter(|token| !token.is_empty()).count()
}

/// Live word-count readout for the extraction input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordCount {
    pub words: usize,
    pub over_limit: bool,
}

impl WordCount {
    pub fn of(text: &str) -> Self {
        let words = word_count(text);
        Self {
            words,
            over_limit: words > WORD_LIMIT,
        }
    }
}

/// Check the extraction form. The credential is checked first.
pub fn validate_extraction(credential: &str, text: &str) -> Result<(Credential, String)> {
    let credential = Credential::parse(credential)?;
    if text.trim().is_empty() {
        return Err(Error::MissingInput);
    }
    Ok((credential, text.to_string()))
}

/// Check the image form. The description is deliberately left unchecked.
pub fn validate_image(credential: &str) -> Result<Credential> {
    Credential::parse(credential)
}
