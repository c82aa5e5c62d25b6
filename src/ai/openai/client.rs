use crate::ai::{Endpoint, HttpReply, Transport};
use crate::models::{Credential, DEFAULT_BASE_URL};
use crate::Result;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;

/// reqwest-backed [`Transport`] talking to the OpenAI REST API.
///
/// No timeout is configured; requests wait as long as reqwest's defaults allow.
pub struct OpenAiHttpClient {
    client: Client,
    base_url: String,
}

impl OpenAiHttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::new_with_client(Client::new(), base_url)
    }

    pub fn new_with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for OpenAiHttpClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl Transport for OpenAiHttpClient {
    async fn post(
        &self,
        endpoint: Endpoint,
        credential: &Credential,
        payload: &serde_json::Value,
    ) -> Result<HttpReply> {
        let url = format!("{}{}", self.base_url, endpoint.path());
        tracing::debug!("Sending POST {}", url);

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, credential.bearer())
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(payload)?)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to OpenAI: {}", e);
                e
            })?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read OpenAI response body: {}", e);
            e
        })?;

        let body = serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            tracing::warn!(
                "OpenAI response (status {}) is not JSON: {}\nBody: {}",
                status,
                e,
                String::from_utf8_lossy(&bytes)
            );
            serde_json::Value::Null
        });

        let reply = HttpReply { status, body };
        if !reply.is_success() {
            tracing::error!("OpenAI API error (status {}): {}", reply.status, reply.body);
        }

        Ok(reply)
    }
}
