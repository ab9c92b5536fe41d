//! Assistant
//!
//! Conversation turn handling for the recipe assistant. A turn takes the
//! previous `Session` and one user message and produces a new `Session`
//! plus exactly one assistant reply.
//!
//! ## Example Usage
//!
//! ```ignore
//! use assistant::{RecipeAssistant, Session, failure_message};
//! use completion::{ChatCompletionClient, CompletionConfig};
//! use std::sync::Arc;
//!
//! let service = Arc::new(ChatCompletionClient::new(CompletionConfig::from_env()?));
//! let assistant = RecipeAssistant::new(Arc::new(recipes), service);
//!
//! let mut session = Session::new();
//! match assistant.handle_turn(&session, "I have eggs and spaghetti").await {
//!     Ok(outcome) => {
//!         println!("{}", outcome.reply);
//!         session = outcome.session;
//!     }
//!     Err(e) => println!("{}", failure_message(&e)),
//! }
//! ```

// Public modules
pub mod error;
pub mod orchestrator;
pub mod response;
pub mod session;

// Re-export main types
pub use error::{TurnError, failure_message};
pub use orchestrator::{
    AssistantConfig, INSTRUCTION_KEYWORDS, RecipeAssistant, TurnOutcome, TurnStage,
    asks_for_instructions,
};
pub use response::{
    CLARIFICATION_MESSAGE, DEFAULT_SUMMARY_LIMIT, REFUSAL_MESSAGE, ResponseGenerator,
    render_summary,
};
pub use session::{ChatMessage, Role, Session};
