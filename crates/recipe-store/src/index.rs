//! Collection validation.
//!
//! Names identify recipes for the rest of the system (the orchestrator
//! resolves "how to make X" by name), so they must be present and unique.

use crate::error::{RecipeStoreError, Result};
use crate::types::RecipeCollection;
use std::collections::HashSet;

impl RecipeCollection {
    /// Validate collection integrity
    ///
    /// Check that:
    /// - Every recipe has a non-blank name
    /// - No two recipes share a name, ignoring case
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for recipe in &self.recipes {
            let key = recipe.name.trim().to_lowercase();
            if key.is_empty() {
                return Err(RecipeStoreError::InvalidValue {
                    field: "name".to_string(),
                    value: recipe.name.clone(),
                });
            }
            if !seen.insert(key) {
                return Err(RecipeStoreError::DuplicateRecipe {
                    name: recipe.name.clone(),
                });
            }
        }
        Ok(())
    }
}
