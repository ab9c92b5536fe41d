//! Intent Classifier.
//!
//! Routes a message to refusal, recipe search, or cooking instructions
//! using a one-word completion.

use completion::{CompletionError, CompletionService};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::prompts;
use crate::types::Intent;

/// Classifies raw user text via the completion service.
#[derive(Clone)]
pub struct IntentClassifier {
    service: Arc<dyn CompletionService>,
}

impl IntentClassifier {
    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self { service }
    }

    /// Classify one user message.
    ///
    /// A completion failure is returned as-is; there is no fallback label.
    pub async fn classify(&self, user_text: &str) -> Result<Intent, CompletionError> {
        let response = self
            .service
            .complete(&prompts::intent_prompt(user_text))
            .await?;
        let intent = parse_intent(&response);

        if intent == Intent::OffTopic {
            warn!("Off-topic input given to the assistant");
        }
        debug!(%intent, raw = response.trim(), "Classified message");
        Ok(intent)
    }
}

/// Map free completion text to an intent.
///
/// Precedence is INVALID, then INSTRUCTION, then SEARCH for everything else,
/// so a verbose reply naming several labels resolves to the most restrictive.
pub fn parse_intent(response: &str) -> Intent {
    let label = response.trim().to_uppercase();
    if label.contains("INVALID") {
        Intent::OffTopic
    } else if label.contains("INSTRUCTION") {
        Intent::InstructionRequest
    } else {
        Intent::SearchRequest
    }
}
