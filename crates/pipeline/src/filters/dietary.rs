//! Filter to keep only recipes matching a requested diet.

use crate::traits::Filter;
use anyhow::Result;
use nlu::UserConstraints;
use recipe_store::Recipe;

/// Keeps recipes tagged with at least one requested diet (case-insensitive).
///
/// With no restrictions requested every recipe passes, including ones
/// with no tags at all.
pub struct DietaryFilter;

impl Filter for DietaryFilter {
    fn name(&self) -> &str {
        "DietaryFilter"
    }

    fn apply(&self, recipes: Vec<Recipe>, constraints: &UserConstraints) -> Result<Vec<Recipe>> {
        if constraints.dietary_restrictions.is_empty() {
            return Ok(recipes);
        }

        let filtered: Vec<Recipe> = recipes
            .into_iter()
            .filter(|recipe| {
                constraints
                    .dietary_restrictions
                    .iter()
                    .any(|diet| recipe.has_dietary_tag(diet))
            })
            .collect();
        Ok(filtered)
    }
}
