use super::Presenter;
use crate::interpret::TextResult;
use std::sync::{Arc, Mutex};

/// Everything a [`MockPresenter`] was asked to show, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Error { title: String, message: String },
    Text(String),
    Images(Vec<String>),
}

/// Presenter that records calls instead of rendering them.
#[derive(Clone, Default)]
pub struct MockPresenter {
    shown: Arc<Mutex<Vec<Shown>>>,
}

impl MockPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Vec<Shown> {
        self.shown.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.shown()
            .into_iter()
            .filter_map(|entry| match entry {
                Shown::Error { message, .. } => Some(message),
                _ => None,
            })
            .collect()
    }
}

impl Presenter for MockPresenter {
    fn show_error(&self, title: &str, message: &str) {
        self.shown.lock().unwrap().push(Shown::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    fn show_text(&self, result: &TextResult) {
        self.shown
            .lock()
            .unwrap()
            .push(Shown::Text(result.content.clone()));
    }

    fn show_images(&self, urls: &[String]) {
        self.shown.lock().unwrap().push(Shown::Images(urls.to_vec()));
    }
}
