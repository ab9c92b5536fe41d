//! Parser for recipe documents.
//!
//! The document text is a single JSON array of recipe objects:
//!
//! ```text
//! [
//!   {"name": "Carbonara", "ingredients": ["spaghetti", "eggs", "pancetta"],
//!    "cooking_time": 20, "cuisine": "Italian", "dietary": []}
//! ]
//! ```
//!
//! Unknown keys are ignored. Missing optional keys fall back to the
//! permissive defaults declared on `Recipe`.

use crate::error::{RecipeStoreError, Result};
use crate::types::Recipe;

/// Parse the whole document text into recipes, in document order.
///
/// `source_name` only shows up in error messages.
pub fn parse_recipes(text: &str, source_name: &str) -> Result<Vec<Recipe>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(RecipeStoreError::ParseError {
            source_name: source_name.to_string(),
            line: 1,
            column: 1,
            reason: "document is empty".to_string(),
        });
    }

    serde_json::from_str::<Vec<Recipe>>(trimmed).map_err(|e| RecipeStoreError::ParseError {
        source_name: source_name.to_string(),
        line: e.line(),
        column: e.column(),
        reason: e.to_string(),
    })
}
