//! Front-end core for summary extraction and image generation over the OpenAI API
//!
//! Validates form input, builds the chat-completion and image-generation
//! payloads, sends them through a [`ai::Transport`], and interprets the replies
//! into results a presenter can display.

pub mod ai;
pub mod app;
pub mod error;
pub mod gallery;
pub mod interpret;
pub mod models;
pub mod presenter;
pub mod prompts;
pub mod validation;

pub use error::{Error, ErrorKind, Result, GENERIC_FAILURE_MESSAGE};
