//! Filter to enforce the user's time ceiling.
//!
//! Recipes whose document gives no cooking time always pass; only an
//! explicit time above the ceiling excludes a recipe.

use crate::traits::Filter;
use anyhow::Result;
use nlu::UserConstraints;
use recipe_store::Recipe;

/// Keeps recipes with `cooking_time <= max_cooking_time`.
pub struct MaxCookingTimeFilter;

impl Filter for MaxCookingTimeFilter {
    fn name(&self) -> &str {
        "MaxCookingTimeFilter"
    }

    fn apply(&self, recipes: Vec<Recipe>, constraints: &UserConstraints) -> Result<Vec<Recipe>> {
        let filtered: Vec<Recipe> = recipes
            .into_iter()
            .filter(|recipe| match recipe.cooking_time {
                Some(minutes) => minutes <= constraints.max_cooking_time,
                None => true,
            })
            .collect();
        Ok(filtered)
    }
}
