use super::types::ImageGenerationRequest;
use crate::ai::{Endpoint, Transport};
use crate::interpret::{interpret_images, ImageResult};
use crate::models::{Credential, ImageCount};
use crate::Result;
use std::sync::Arc;

/// Gallery generation over the images endpoint.
pub struct OpenAiImageClient {
    transport: Arc<dyn Transport>,
}

impl OpenAiImageClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn build_request(prompt: &str, count: ImageCount) -> ImageGenerationRequest {
        ImageGenerationRequest {
            prompt: prompt.to_string(),
            n: count.get(),
        }
    }

    pub async fn generate(
        &self,
        credential: &Credential,
        prompt: &str,
        count: ImageCount,
    ) -> Result<ImageResult> {
        let payload = serde_json::to_value(Self::build_request(prompt, count))?;

        tracing::debug!(
            "Sending image generation request to OpenAI ({} images)",
            count.get()
        );
        let reply = self
            .transport
            .post(Endpoint::ImageGenerations, credential, &payload)
            .await?;

        interpret_images(reply)
    }
}
