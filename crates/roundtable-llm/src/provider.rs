//! Generation provider trait definition

use crate::completion::{CompletionRequest, CompletionResponse};
use crate::error::Result;

/// Trait for text-generation backends
///
/// A provider turns one [`CompletionRequest`] into one
/// [`CompletionResponse`]. Providers are stateless from the caller's point
/// of view and safe to share across concurrent requests.
#[async_trait::async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Get available models
    fn available_models(&self) -> Vec<String>;

    /// Get the default model
    fn default_model(&self) -> &str;

    /// Complete a conversation
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;
}
