//! Text completion client for the recipe assistant.
//!
//! This crate provides the one seam the assistant uses to reach a language
//! model:
//! - `CompletionService`: prompt string in, completion string out
//! - `ChatCompletionClient`: OpenAI-compatible HTTP implementation (Groq by default)
//! - `CompletionConfig`: configuration from environment variables
//! - `ScriptedCompletion`: deterministic stand-in for tests
//!
//! Calls are single-shot: no streaming, no retries, no timeout policy. A
//! caller that wants those wraps the service.

use async_trait::async_trait;
use thiserror::Error;

pub mod client;
pub mod config;
pub mod scripted;

pub use client::ChatCompletionClient;
pub use config::{CompletionConfig, ConfigError};
pub use scripted::ScriptedCompletion;

/// Errors that can occur when talking to the completion service
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Completion request failed: {0}")]
    RequestFailed(String),

    #[error("Completion service returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),

    #[error("Completion service not configured: {0}")]
    NotConfigured(#[from] ConfigError),
}

/// The text completion service the assistant consumes.
///
/// There is no structured-output guarantee: callers parse the returned text
/// defensively.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Send one prompt and return the model's full text reply.
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;

    /// Model identifier, for logging.
    fn model_name(&self) -> &str;
}
