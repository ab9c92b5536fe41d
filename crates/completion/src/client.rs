//! Chat-completions client for OpenAI-compatible APIs (Groq, OpenRouter, local servers).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::config::CompletionConfig;
use crate::{CompletionError, CompletionService};

/// Completion service backed by a `/chat/completions` endpoint.
///
/// Each prompt is sent as a single user message.
#[derive(Debug, Clone)]
pub struct ChatCompletionClient {
    config: CompletionConfig,
    client: reqwest::Client,
}

impl ChatCompletionClient {
    /// Create a new client with the given configuration.
    pub fn new(config: CompletionConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[async_trait]
impl CompletionService for ChatCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Calling completion API"
        );

        let response = self
            .client
            .post(self.config.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Completion request failed: {}", e);
                CompletionError::RequestFailed(e.to_string())
            })?;

        let status = response.status().as_u16();

        if status == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(CompletionError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CompletionError::RequestFailed(e.to_string()))?;

        if !(200..300).contains(&status) {
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|r| r.error.message)
                .unwrap_or(body);
            error!("Completion API returned {}: {}", status, message);
            return Err(CompletionError::ApiError { status, message });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or_else(|| CompletionError::MalformedResponse("no choices in response".to_string()))
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
