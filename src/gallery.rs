//! Session-scoped image results.

use crate::interpret::ImageResult;
use crate::Result;

/// Image URLs currently on display for one session.
///
/// Only [`ImageGallery::apply`] writes to it. A successful result replaces the
/// whole list; a failed one leaves the previous images in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageGallery {
    urls: Vec<String>,
}

impl ImageGallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Returns whether the gallery changed.
    pub fn apply(&mut self, outcome: &Result<ImageResult>) -> bool {
        match outcome {
            Ok(result) => {
                self.urls = result.urls.clone();
                true
            }
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn result(urls: &[&str]) -> Result<ImageResult> {
        Ok(ImageResult {
            urls: urls.iter().map(|u| u.to_string()).collect(),
        })
    }

    #[test]
    fn test_success_replaces_whole_list() {
        let mut gallery = ImageGallery::new();
        assert!(gallery.apply(&result(&["http://x/1", "http://x/2", "http://x/3"])));
        assert!(gallery.apply(&result(&["http://y/1"])));
        assert_eq!(gallery.urls(), ["http://y/1".to_string()]);
    }

    #[test]
    fn test_failure_keeps_previous_results() {
        let mut gallery = ImageGallery::new();
        gallery.apply(&result(&["http://x/1", "http://x/2"]));

        let changed = gallery.apply(&Err(Error::InvalidResponse("no data".to_string())));
        assert!(!changed);
        assert_eq!(gallery.urls(), ["http://x/1".to_string(), "http://x/2".to_string()]);
    }

    #[test]
    fn test_empty_success_clears_gallery() {
        let mut gallery = ImageGallery::new();
        gallery.apply(&result(&["http://x/1"]));
        gallery.apply(&result(&[]));
        assert!(gallery.is_empty());
    }
}
