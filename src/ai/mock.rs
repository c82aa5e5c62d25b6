use super::{Endpoint, HttpReply, Transport};
use crate::models::Credential;
use crate::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// One request as seen by [`MockTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub endpoint: Endpoint,
    pub authorization: String,
    pub payload: Value,
}

/// In-memory transport that replays canned replies and records what it was sent.
///
/// Clones share state, so a clone kept by a test observes calls made through
/// the one handed to the app.
#[derive(Clone)]
pub struct MockTransport {
    replies: Arc<Mutex<Vec<HttpReply>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_reply(self, status: u16, body: Value) -> Self {
        self.replies.lock().unwrap().push(HttpReply { status, body });
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post(
        &self,
        endpoint: Endpoint,
        credential: &Credential,
        payload: &Value,
    ) -> Result<HttpReply> {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            endpoint,
            authorization: credential.bearer(),
            payload: payload.clone(),
        });

        let replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            // Empty object: interpreters report it as malformed
            Ok(HttpReply {
                status: 200,
                body: Value::Object(Default::default()),
            })
        } else {
            let index = (requests.len() - 1) % replies.len();
            Ok(replies[index].clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mock_transport_cycles_replies() {
        let transport = MockTransport::new()
            .with_reply(200, json!({ "data": [] }))
            .with_reply(500, Value::Null);
        let credential = Credential::parse("key").unwrap();

        tokio_test::block_on(async {
            let first = transport
                .post(Endpoint::ImageGenerations, &credential, &json!({}))
                .await
                .unwrap();
            let second = transport
                .post(Endpoint::ImageGenerations, &credential, &json!({}))
                .await
                .unwrap();
            let third = transport
                .post(Endpoint::ImageGenerations, &credential, &json!({}))
                .await
                .unwrap();

            assert_eq!(first.status, 200);
            assert_eq!(second.status, 500);
            assert_eq!(third.status, 200);
        });
    }

    #[tokio::test]
    async fn test_mock_transport_records_requests() {
        let transport = MockTransport::new();
        let observer = transport.clone();
        let credential = Credential::parse("sk-test").unwrap();

        assert_eq!(observer.get_call_count(), 0);

        transport
            .post(Endpoint::ChatCompletions, &credential, &json!({ "model": "gpt-4" }))
            .await
            .unwrap();

        assert_eq!(observer.get_call_count(), 1);
        let recorded = observer.requests();
        assert_eq!(recorded[0].endpoint, Endpoint::ChatCompletions);
        assert_eq!(recorded[0].authorization, "Bearer sk-test");
        assert_eq!(recorded[0].payload, json!({ "model": "gpt-4" }));
    }
}
