//! Scripted completion service for tests.
//!
//! Responses are matched by checking if the prompt contains a registered
//! substring, first registration wins. Every prompt is recorded so tests
//! can assert on what was (or was not) sent.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::{CompletionError, CompletionService};

/// Deterministic completion service.
#[derive(Debug, Default)]
pub struct ScriptedCompletion {
    /// (prompt substring, response) in registration order
    responses: Vec<(String, String)>,
    /// Returned when nothing matches; `None` means "fail the call"
    default_response: Option<String>,
    fail_all: bool,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedCompletion {
    /// Create a service with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `response` to any prompt containing `prompt_contains`.
    pub fn with_response(mut self, prompt_contains: &str, response: &str) -> Self {
        self.responses
            .push((prompt_contains.to_string(), response.to_string()));
        self
    }

    /// Answer `response` when no scripted substring matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Fail every call, as an unreachable service would.
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    /// Every prompt received so far, oldest first
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }

    /// Number of calls made so far
    pub fn call_count(&self) -> usize {
        self.prompts.lock().map(|p| p.len()).unwrap_or_default()
    }
}

#[async_trait]
impl CompletionService for ScriptedCompletion {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        if self.fail_all {
            return Err(CompletionError::RequestFailed(
                "scripted service is offline".to_string(),
            ));
        }

        self.responses
            .iter()
            .find(|(pattern, _)| prompt.contains(pattern.as_str()))
            .map(|(_, response)| response.clone())
            .or_else(|| self.default_response.clone())
            .ok_or_else(|| {
                CompletionError::MalformedResponse(format!(
                    "no scripted response for prompt: {}",
                    prompt.chars().take(80).collect::<String>()
                ))
            })
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}
