//! # NLU Crate
//!
//! Reads one user message and turns it into something the recipe pipeline
//! can act on.
//!
//! ## Components
//!
//! ### Intent Classifier
//! One completion call, parsed with a fixed precedence:
//! `INVALID` → off-topic, `INSTRUCTION` → instruction request, anything else
//! → search.
//!
//! ### Constraint Extractor
//! - Ingredients: one completion call returning a comma-separated list
//! - Preferences: local matching for "<n> min" and diet words
//!
//! ## Example Usage
//!
//! ```ignore
//! use nlu::{ConstraintExtractor, IntentClassifier, Intent};
//! use std::sync::Arc;
//!
//! let service: Arc<dyn completion::CompletionService> = Arc::new(client);
//! let classifier = IntentClassifier::new(service.clone());
//! let extractor = ConstraintExtractor::new(service);
//!
//! if classifier.classify(text).await? == Intent::SearchRequest {
//!     let constraints = extractor.extract(text).await?;
//! }
//! ```

// Public modules
pub mod types;
pub mod prompts;
pub mod classifier;
pub mod extractor;

// Re-export commonly used types
pub use types::{ANY_CUISINE, DEFAULT_MAX_COOKING_TIME, Intent, UserConstraints};
pub use classifier::{IntentClassifier, parse_intent};
pub use extractor::{ConstraintExtractor, Preferences, extract_preferences, parse_ingredient_list};
