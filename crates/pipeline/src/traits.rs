//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible hard constraints to be applied to a recipe collection.

use anyhow::Result;
use nlu::UserConstraints;
use recipe_store::Recipe;

/// Core trait for filtering recipes.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - Filters take ownership of the Vec<Recipe> and return the survivors
/// - Survivors keep their input order; ranking ties depend on it
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of recipes.
    ///
    /// # Arguments
    /// * `recipes` - The recipes to filter (takes ownership)
    /// * `constraints` - Constraints read from the latest user message
    ///
    /// # Returns
    /// * `Ok(Vec<Recipe>)` - The filtered recipes, in input order
    /// * `Err` - If filtering fails
    fn apply(&self, recipes: Vec<Recipe>, constraints: &UserConstraints) -> Result<Vec<Recipe>>;
}
