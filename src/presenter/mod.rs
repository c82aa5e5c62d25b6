//! Result presentation
//!
//! The flows never render anything themselves; they hand results and error
//! messages to a [`Presenter`] supplied by the front end.

pub mod mock;
pub mod terminal;

pub use mock::MockPresenter;
pub use terminal::TerminalPresenter;

use crate::interpret::TextResult;

/// Title of every error dialog.
pub const ERROR_TITLE: &str = "Error";

pub trait Presenter: Send + Sync {
    fn show_error(&self, title: &str, message: &str);
    fn show_text(&self, result: &TextResult);
    fn show_images(&self, urls: &[String]);
}
