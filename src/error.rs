//! Error handling and custom error types
//!
//! Provides unified error handling across the crate using thiserror. Every
//! failure of a submission flow maps onto one [`ErrorKind`], which is what the
//! presenter and the tests reason about.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Please enter your API key")]
    MissingCredential,

    #[error("Please enter some text")]
    MissingInput,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("HTTP request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("OpenAI API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed response: {0}")]
    InvalidResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse failure classes a submission can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingCredential,
    MissingInput,
    InvalidInput,
    Transport,
    Api,
    InvalidResponse,
    Internal,
}

/// Message shown for every failure that happens after the request was sent.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingCredential => ErrorKind::MissingCredential,
            Error::MissingInput => ErrorKind::MissingInput,
            Error::InvalidInput(_) => ErrorKind::InvalidInput,
            Error::Transport(_) => ErrorKind::Transport,
            Error::Api { .. } => ErrorKind::Api,
            Error::InvalidResponse(_) => ErrorKind::InvalidResponse,
            Error::Serialization(_) | Error::Config(_) => ErrorKind::Internal,
        }
    }

    /// Short text for the error dialog.
    ///
    /// Validation failures keep their own wording; everything detected after
    /// the call returns collapses to [`GENERIC_FAILURE_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            Error::MissingCredential | Error::MissingInput | Error::InvalidInput(_) => {
                self.to_string()
            }
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
