use super::types::{ChatCompletionRequest, ChatMessage};
use crate::ai::{Endpoint, Transport};
use crate::interpret::{interpret_text, TextResult};
use crate::models::Credential;
use crate::{prompts, Result};
use std::sync::Arc;

/// Summary extraction over the chat-completions endpoint.
pub struct OpenAiChatClient {
    transport: Arc<dyn Transport>,
    model: String,
}

impl OpenAiChatClient {
    pub fn new(transport: Arc<dyn Transport>, model: String) -> Self {
        Self { transport, model }
    }

    /// The fixed system instruction followed by the user's text.
    pub fn build_request(&self, text: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(prompts::EXTRACT_SYSTEM),
                ChatMessage::user(text),
            ],
        }
    }

    pub async fn extract(&self, credential: &Credential, text: &str) -> Result<TextResult> {
        let payload = serde_json::to_value(self.build_request(text))?;

        tracing::debug!(
            "Sending chat completion request to OpenAI (model {})",
            self.model
        );
        let reply = self
            .transport
            .post(Endpoint::ChatCompletions, credential, &payload)
            .await?;

        interpret_text(reply)
    }
}
