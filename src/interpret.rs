//! Response interpretation
//!
//! Turns an [`HttpReply`] into a typed result. The parsed body is first
//! classified into a [`ResponseShape`] for the endpoint that produced it;
//! anything that does not fit becomes [`Error::InvalidResponse`].

use crate::ai::openai::types::{
    ApiErrorBody, ChatChoice, ChatCompletionResponse, ImageGenerationResponse,
};
use crate::ai::{Endpoint, HttpReply};
use crate::{Error, Result};

/// Line-break marker substituted for each `\n` in extracted text.
pub const LINE_BREAK: &str = "<br/>";

/// Extracted summary ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextResult {
    pub content: String,
}

/// Image URLs in the order the API returned them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResult {
    pub urls: Vec<String>,
}

/// Structural form of a reply body.
#[derive(Debug)]
pub enum ResponseShape {
    Text(ChatCompletionResponse),
    Images(ImageGenerationResponse),
    Error { status: u16, body: ApiErrorBody },
    Unrecognized(serde_json::Value),
}

impl ResponseShape {
    /// Classify a reply from `endpoint`, decoding only the shape that endpoint
    /// returns. Any non-2xx status is an error shape whatever the body says.
    pub fn classify(endpoint: Endpoint, reply: HttpReply) -> Self {
        if !reply.is_success() {
            let body = serde_json::from_value(reply.body).unwrap_or_default();
            return ResponseShape::Error {
                status: reply.status,
                body,
            };
        }

        let decoded = match endpoint {
            Endpoint::ChatCompletions => {
                serde_json::from_value(reply.body.clone()).map(ResponseShape::Text)
            }
            Endpoint::ImageGenerations => {
                serde_json::from_value(reply.body.clone()).map(ResponseShape::Images)
            }
        };
        decoded.unwrap_or(ResponseShape::Unrecognized(reply.body))
    }
}

fn api_error(status: u16, body: ApiErrorBody) -> Error {
    let message = body
        .error
        .and_then(|detail| detail.message)
        .unwrap_or_else(|| "request failed".to_string());
    Error::Api { status, message }
}

/// Rewrite every `\n` as [`LINE_BREAK`], leaving all other characters alone.
pub fn escape_newlines(text: &str) -> String {
    text.replace('\n', LINE_BREAK)
}

/// Read `choices[0].message.content` from a chat completion reply.
pub fn interpret_text(reply: HttpReply) -> Result<TextResult> {
    match ResponseShape::classify(Endpoint::ChatCompletions, reply) {
        ResponseShape::Text(response) => response
            .choices
            .into_iter()
            .next()
            .and_then(|first| serde_json::from_value::<ChatChoice>(first).ok())
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .map(|content| TextResult {
                content: escape_newlines(&content),
            })
            .ok_or_else(|| {
                Error::InvalidResponse("no message content in first choice".to_string())
            }),
        ResponseShape::Error { status, body } => Err(api_error(status, body)),
        ResponseShape::Images(_) | ResponseShape::Unrecognized(_) => Err(Error::InvalidResponse(
            "expected a chat completion with choices".to_string(),
        )),
    }
}

/// Collect `data[*].url` from an image generation reply.
pub fn interpret_images(reply: HttpReply) -> Result<ImageResult> {
    match ResponseShape::classify(Endpoint::ImageGenerations, reply) {
        ResponseShape::Images(response) => {
            let urls = response
                .data
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    item.url.ok_or_else(|| {
                        Error::InvalidResponse(format!("image {} has no url", index))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(ImageResult { urls })
        }
        ResponseShape::Error { status, body } => Err(api_error(status, body)),
        ResponseShape::Text(_) | ResponseShape::Unrecognized(_) => Err(Error::InvalidResponse(
            "expected an image response with data".to_string(),
        )),
    }
}
