//! Flow orchestration for text extraction and image generation.
//!
//! Each submission runs validate, build, send, interpret, present exactly
//! once. Failures are reported to the presenter and returned; nothing is
//! retried.

use crate::ai::{OpenAiChatClient, OpenAiHttpClient, OpenAiImageClient, Transport};
use crate::gallery::ImageGallery;
use crate::interpret::{ImageResult, TextResult};
use crate::models::{Config, ImageForm};
use crate::presenter::{Presenter, ERROR_TITLE};
use crate::prompts::compose_image_prompt;
use crate::validation::{self, WordCount};
use crate::Result;
use std::sync::Arc;
use tracing::{info, warn};

/// Wires the two flows to a transport and a presenter.
pub struct App {
    chat: OpenAiChatClient,
    images: OpenAiImageClient,
    presenter: Box<dyn Presenter>,
}

/// Injectable service bundle used to construct [`App`] in tests/harnesses.
pub struct AppServices {
    pub transport: Arc<dyn Transport>,
    pub presenter: Box<dyn Presenter>,
}

impl App {
    pub fn with_services(services: AppServices, config: &Config) -> Self {
        Self {
            chat: OpenAiChatClient::new(services.transport.clone(), config.chat_model.clone()),
            images: OpenAiImageClient::new(services.transport),
            presenter: services.presenter,
        }
    }

    /// Build an app that talks to the configured OpenAI base URL.
    pub fn new(config: &Config, presenter: Box<dyn Presenter>) -> Self {
        info!(
            "Using OpenAI at {} (chat model: {})",
            config.base_url, config.chat_model
        );
        Self::with_services(
            AppServices {
                transport: Arc::new(OpenAiHttpClient::new(config.base_url.clone())),
                presenter,
            },
            config,
        )
    }

    /// Live word count for the extraction input. Never blocks submission.
    pub fn word_count_status(&self, text: &str) -> WordCount {
        WordCount::of(text)
    }

    pub async fn submit_extraction(&self, credential: &str, text: &str) -> Result<TextResult> {
        let outcome = self.run_extraction(credential, text).await;
        match &outcome {
            Ok(result) => {
                info!("Extraction complete ({} chars)", result.content.len());
                self.presenter.show_text(result);
            }
            Err(e) => self.report(e),
        }
        outcome
    }

    async fn run_extraction(&self, credential: &str, text: &str) -> Result<TextResult> {
        let (credential, text) = validation::validate_extraction(credential, text)?;

        let count = WordCount::of(&text);
        if count.over_limit {
            warn!(
                "Input has {} words, above the {} word guideline",
                count.words,
                validation::WORD_LIMIT
            );
        }

        self.chat.extract(&credential, &text).await
    }

    /// Run the image flow and refresh `gallery` on success.
    ///
    /// On failure the gallery keeps whatever it showed before.
    pub async fn submit_image_generation(
        &self,
        form: &ImageForm,
        gallery: &mut ImageGallery,
    ) -> Result<ImageResult> {
        let outcome = self.run_image_generation(form).await;
        if gallery.apply(&outcome) {
            info!("Gallery updated with {} images", gallery.urls().len());
            self.presenter.show_images(gallery.urls());
        }
        if let Err(e) = &outcome {
            self.report(e);
        }
        outcome
    }

    async fn run_image_generation(&self, form: &ImageForm) -> Result<ImageResult> {
        let credential = validation::validate_image(&form.credential)?;
        let prompt = compose_image_prompt(&form.description, &form.category, &form.style);
        self.images.generate(&credential, &prompt, form.count).await
    }

    fn report(&self, error: &crate::Error) {
        warn!("Submission failed ({:?}): {}", error.kind(), error);
        self.presenter.show_error(ERROR_TITLE, &error.user_message());
    }
}

#[cfg(test)]
mod tests {
    use super::{App, AppServices};
    use crate::ai::{Endpoint, MockTransport};
    use crate::gallery::ImageGallery;
    use crate::models::{Config, ImageCount, ImageForm};
    use crate::presenter::mock::Shown;
    use crate::presenter::MockPresenter;
    use crate::{ErrorKind, GENERIC_FAILURE_MESSAGE};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn build_test_app(transport: &MockTransport, presenter: &MockPresenter) -> App {
        App::with_services(
            AppServices {
                transport: std::sync::Arc::new(transport.clone()),
                presenter: Box::new(presenter.clone()),
            },
            &Config::default(),
        )
    }

    fn image_form(credential: &str) -> ImageForm {
        ImageForm {
            credential: credential.to_string(),
            description: "sunset".to_string(),
            category: "Line Drawing".to_string(),
            style: String::new(),
            count: ImageCount::new(2).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_extraction_without_credential_never_calls_network() {
        let transport = MockTransport::new();
        let presenter = MockPresenter::new();
        let app = build_test_app(&transport, &presenter);

        let err = app.submit_extraction("", "").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingCredential);
        assert_eq!(transport.get_call_count(), 0);
        assert_eq!(
            presenter.shown(),
            vec![Shown::Error {
                title: "Error".to_string(),
                message: "Please enter your API key".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_extraction_without_text_never_calls_network() {
        let transport = MockTransport::new();
        let presenter = MockPresenter::new();
        let app = build_test_app(&transport, &presenter);

        let err = app.submit_extraction("sk-test", "").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingInput);
        assert_eq!(transport.get_call_count(), 0);
        assert_eq!(presenter.errors(), vec!["Please enter some text".to_string()]);
    }

    #[tokio::test]
    async fn test_extraction_success_is_presented() {
        let transport = MockTransport::new().with_reply(
            200,
            json!({ "choices": [{ "message": { "role": "assistant", "content": "Plot A\nPlot B" } }] }),
        );
        let presenter = MockPresenter::new();
        let app = build_test_app(&transport, &presenter);

        let result = app
            .submit_extraction("sk-test", "A tale of two cities")
            .await
            .unwrap();
        assert_eq!(result.content, "Plot A<br/>Plot B");
        assert_eq!(
            presenter.shown(),
            vec![Shown::Text("Plot A<br/>Plot B".to_string())]
        );

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].endpoint, Endpoint::ChatCompletions);
        assert_eq!(requests[0].authorization, "Bearer sk-test");
        assert_eq!(requests[0].payload["messages"][1]["content"], "A tale of two cities");
    }

    #[tokio::test]
    async fn test_extraction_over_word_limit_still_submits() {
        let transport = MockTransport::new().with_reply(
            200,
            json!({ "choices": [{ "message": { "role": "assistant", "content": "ok" } }] }),
        );
        let presenter = MockPresenter::new();
        let app = build_test_app(&transport, &presenter);
        let long_text = "word ".repeat(1500);

        assert!(app.word_count_status(&long_text).over_limit);
        app.submit_extraction("sk-test", &long_text).await.unwrap();
        assert_eq!(transport.get_call_count(), 1);
    }

    #[tokio::test]
    async fn test_api_failure_shows_generic_message() {
        let transport = MockTransport::new().with_reply(
            401,
            json!({ "error": { "message": "Incorrect API key provided" } }),
        );
        let presenter = MockPresenter::new();
        let app = build_test_app(&transport, &presenter);

        let err = app.submit_extraction("sk-bad", "text").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Api);
        assert_eq!(presenter.errors(), vec![GENERIC_FAILURE_MESSAGE.to_string()]);
        assert_eq!(transport.get_call_count(), 1);
    }

    #[tokio::test]
    async fn test_image_without_credential_never_calls_network() {
        let transport = MockTransport::new();
        let presenter = MockPresenter::new();
        let app = build_test_app(&transport, &presenter);
        let mut gallery = ImageGallery::new();

        let err = app
            .submit_image_generation(&image_form(""), &mut gallery)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingCredential);
        assert_eq!(transport.get_call_count(), 0);
        assert!(gallery.is_empty());
    }

    #[tokio::test]
    async fn test_image_empty_description_is_still_sent() {
        let transport = MockTransport::new().with_reply(200, json!({ "data": [] }));
        let presenter = MockPresenter::new();
        let app = build_test_app(&transport, &presenter);
        let mut gallery = ImageGallery::new();

        let form = ImageForm {
            description: String::new(),
            category: String::new(),
            ..image_form("sk-test")
        };
        app.submit_image_generation(&form, &mut gallery).await.unwrap();

        assert_eq!(transport.requests()[0].payload, json!({ "prompt": "", "n": 2 }));
    }

    #[tokio::test]
    async fn test_image_success_replaces_gallery() {
        let transport = MockTransport::new().with_reply(
            200,
            json!({ "data": [{ "url": "http://x/1" }, { "url": "http://x/2" }] }),
        );
        let presenter = MockPresenter::new();
        let app = build_test_app(&transport, &presenter);
        let mut gallery = ImageGallery::new();

        app.submit_image_generation(&image_form("sk-test"), &mut gallery)
            .await
            .unwrap();

        let expected = vec!["http://x/1".to_string(), "http://x/2".to_string()];
        assert_eq!(gallery.urls(), expected.as_slice());
        assert_eq!(presenter.shown(), vec![Shown::Images(expected)]);
        assert_eq!(
            transport.requests()[0].payload,
            json!({ "prompt": "sunset, Line Drawing", "n": 2 })
        );
    }

    #[tokio::test]
    async fn test_image_malformed_response_keeps_gallery() {
        let transport = MockTransport::new()
            .with_reply(200, json!({ "data": [{ "url": "http://x/1" }] }))
            .with_reply(200, json!({ "created": 1700000000 }));
        let presenter = MockPresenter::new();
        let app = build_test_app(&transport, &presenter);
        let mut gallery = ImageGallery::new();

        app.submit_image_generation(&image_form("sk-test"), &mut gallery)
            .await
            .unwrap();
        let err = app
            .submit_image_generation(&image_form("sk-test"), &mut gallery)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidResponse);
        assert_eq!(gallery.urls(), ["http://x/1".to_string()]);
        assert_eq!(presenter.errors(), vec![GENERIC_FAILURE_MESSAGE.to_string()]);
    }
}
