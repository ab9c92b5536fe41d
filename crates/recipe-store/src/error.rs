//! Error types for the recipe-store crate.
//!
//! Every failure while turning a recipe document into a `RecipeCollection`
//! is one of these variants. Callers that want the forgiving behaviour
//! (empty collection plus a diagnostic) go through `load_or_empty`.

use thiserror::Error;

/// Errors that can occur while loading and validating a recipe document
#[derive(Error, Debug)]
pub enum RecipeStoreError {
    /// Document could not be found or opened
    #[error("Failed to open recipe document: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the document
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Document text is not a JSON array of recipe objects
    ///
    /// Line and column come straight from serde_json so the user can find
    /// the broken spot in their upload.
    #[error("Parse error in {source_name} at line {line}, column {column}: {reason}")]
    ParseError {
        source_name: String,
        line: usize,
        column: usize,
        reason: String,
    },

    /// A recipe field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Two recipes share a name (compared case-insensitively)
    #[error("Duplicate recipe name: {name}")]
    DuplicateRecipe { name: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RecipeStoreError>;
