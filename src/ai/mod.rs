//! OpenAI service integration for text extraction and image generation
//!
//! The [`Transport`] trait is the single network seam: the flow clients build
//! payloads, hand them to a transport, and interpret whatever comes back.

pub mod mock;
pub mod openai;

pub use mock::MockTransport;
pub use openai::{OpenAiChatClient, OpenAiHttpClient, OpenAiImageClient};

use crate::models::Credential;
use crate::Result;
use async_trait::async_trait;

/// Remote operations the crate knows how to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    ChatCompletions,
    ImageGenerations,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::ChatCompletions => "/v1/chat/completions",
            Endpoint::ImageGenerations => "/v1/images/generations",
        }
    }
}

/// Status and decoded body of a completed HTTP exchange.
///
/// A body that is not valid JSON is carried as `Value::Null`.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: serde_json::Value,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one POST. Only failures to complete the exchange are errors;
    /// non-2xx statuses come back as an ordinary reply.
    async fn post(
        &self,
        endpoint: Endpoint,
        credential: &Credential,
        payload: &serde_json::Value,
    ) -> Result<HttpReply>;
}
