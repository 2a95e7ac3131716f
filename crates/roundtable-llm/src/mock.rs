//! Mock generation provider for testing
//!
//! Returns queued responses in order, or a default canned reply once the
//! queue is empty. Failure injection is keyed on request content so tests
//! stay deterministic under concurrent fan-out, where call order is not.

use crate::completion::{CompletionRequest, CompletionResponse};
use crate::error::{Error, Result};
use crate::provider::GenerationProvider;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A scriptable mock provider.
pub struct MockProvider {
    responses: Arc<Mutex<VecDeque<String>>>,
    fail_markers: Arc<Mutex<Vec<String>>>,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProvider {
    /// Create a new mock provider.
    #[must_use]
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            fail_markers: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a response to be returned by the next call.
    pub fn add_response(&self, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(response.into());
    }

    /// Fail any request whose message content contains `marker`.
    pub fn fail_when_contains(&self, marker: impl Into<String>) {
        self.fail_markers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(marker.into());
    }

    /// Requests seen so far, in arrival order.
    #[must_use]
    pub fn recorded_calls(&self) -> Vec<CompletionRequest> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait::async_trait]
impl GenerationProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn available_models(&self) -> Vec<String> {
        vec!["mock-model".to_string()]
    }

    fn default_model(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request.clone());

        let markers = self
            .fail_markers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        for marker in &markers {
            if request.messages.iter().any(|m| m.content.contains(marker)) {
                return Err(Error::Api(format!("injected failure for '{marker}'")));
            }
        }

        let queued = self
            .responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();

        Ok(CompletionResponse {
            content: queued.unwrap_or_else(|| "mock response".to_string()),
            usage: None,
            finish_reason: Some("stop".to_string()),
            model: "mock-model".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Message;

    #[tokio::test]
    async fn test_queued_then_default() {
        let mock = MockProvider::new();
        mock.add_response("first");

        let request = CompletionRequest::new("mock-model").with_message(Message::user("hi"));
        let response = mock.complete(request.clone()).await.unwrap();
        assert_eq!(response.content, "first");

        let response = mock.complete(request).await.unwrap();
        assert_eq!(response.content, "mock response");
    }

    #[tokio::test]
    async fn test_failure_injection_by_marker() {
        let mock = MockProvider::new();
        mock.fail_when_contains("Maria");

        let failing = CompletionRequest::new("mock-model")
            .with_message(Message::system("You are Maria Rodriguez"));
        assert!(mock.complete(failing).await.is_err());

        let passing =
            CompletionRequest::new("mock-model").with_message(Message::system("You are Alex Chen"));
        assert!(mock.complete(passing).await.is_ok());
    }

    #[tokio::test]
    async fn test_records_calls() {
        let mock = MockProvider::new();
        let request = CompletionRequest::new("mock-model").with_message(Message::user("hello"));
        mock.complete(request).await.unwrap();

        let calls = mock.recorded_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].messages[0].content, "hello");
    }
}
