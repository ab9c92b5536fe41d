//! Conversation session state carried between turns.
//!
//! A `Session` is a plain value. The orchestrator reads one and returns a
//! new one; nothing is shared or mutated behind the caller's back.

use pipeline::RankedRecipe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One entry in the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

/// Everything that survives from one turn to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Append-only transcript
    pub(crate) messages: Vec<ChatMessage>,
    /// Ranking produced by the most recent search turn
    pub(crate) matched_recipes: Vec<RankedRecipe>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing transcript and ranking (e.g. restored by a host).
    pub fn with_state(messages: Vec<ChatMessage>, matched_recipes: Vec<RankedRecipe>) -> Self {
        Self {
            messages,
            matched_recipes,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn matched_recipes(&self) -> &[RankedRecipe] {
        &self.matched_recipes
    }

    /// Most recent assistant reply, if any
    pub fn last_reply(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::Assistant)
            .map(|m| m.text.as_str())
    }

    /// Number of completed turns
    pub fn turn_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.role == Role::Assistant)
            .count()
    }
}
