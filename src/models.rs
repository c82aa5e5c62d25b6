//! Data models and configuration
//!
//! Defines the user-facing inputs of both flows and the runtime configuration
//! read from the environment.

use crate::{Error, Result};
use std::fmt;

/// Bearer token typed in by the user. Lives for one submission only.
///
/// The token is opaque: it is sent exactly as entered. Whitespace only
/// decides whether the field counts as empty.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(Error::MissingCredential);
        }
        Ok(Self(raw.to_string()))
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Keep keys out of logs and panic messages.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Number of images to request, 1 through 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageCount(u8);

impl ImageCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    pub fn new(n: u8) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&n) {
            return Err(Error::InvalidInput(format!(
                "image count must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                n
            )));
        }
        Ok(Self(n))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for ImageCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

/// Raw field values of the image-generation form.
#[derive(Debug, Clone, Default)]
pub struct ImageForm {
    pub credential: String,
    pub description: String,
    pub category: String,
    pub style: String,
    pub count: ImageCount,
}

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4";

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub chat_model: String,
    /// Fallback key for the command line only; the library never reads it.
    pub openai_api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            openai_api_key: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "OPENAI_BASE_URL must be an http(s) URL, got '{}'",
                base_url
            )));
        }

        let chat_model =
            std::env::var("CHAT_MODEL").unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string());
        if chat_model.trim().is_empty() {
            return Err(Error::Config("CHAT_MODEL must not be empty".to_string()));
        }

        Ok(Self {
            base_url,
            chat_model,
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
        })
    }
}
