//! The generative text service contract.

mod http;

pub use http::OpenAiCompatibleGenerator;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::cancel::CancelToken;

/// One completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    /// Rendered prompt.
    pub prompt: String,
    /// Output budget in tokens.
    pub max_output_length: usize,
    /// Ask for a JSON object instead of prose.
    pub json: bool,
}

/// Failure to obtain a completion.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationError {
    /// No service is configured or reachable.
    #[error("generation service unavailable: {0}")]
    Unavailable(String),

    /// The request failed in transport or with a non-success status.
    #[error("generation request failed: {0}")]
    Http(String),

    /// The request did not finish in time.
    #[error("generation request timed out")]
    Timeout,

    /// The service answered with something that is not a completion.
    #[error("invalid response from generation service: {0}")]
    InvalidResponse(String),

    /// The session was torn down while the request was in flight.
    #[error("generation cancelled")]
    Cancelled,
}

/// A text completion service.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Complete `request`, aborting when `cancel` fires.
    async fn complete(
        &self,
        request: CompletionRequest,
        cancel: &CancelToken,
    ) -> Result<String, GenerationError>;
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for Arc<T> {
    async fn complete(
        &self,
        request: CompletionRequest,
        cancel: &CancelToken,
    ) -> Result<String, GenerationError> {
        (**self).complete(request, cancel).await
    }
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for Box<T> {
    async fn complete(
        &self,
        request: CompletionRequest,
        cancel: &CancelToken,
    ) -> Result<String, GenerationError> {
        (**self).complete(request, cancel).await
    }
}

/// A generator that never answers, so every reading gets the static
/// interpretation.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineGenerator;

#[async_trait]
impl TextGenerator for OfflineGenerator {
    async fn complete(
        &self,
        _request: CompletionRequest,
        _cancel: &CancelToken,
    ) -> Result<String, GenerationError> {
        Err(GenerationError::Unavailable("offline mode".into()))
    }
}
