//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::{DietaryFilter, MaxCookingTimeFilter};
use crate::traits::Filter;
use anyhow::Result;
use nlu::UserConstraints;
use recipe_store::Recipe;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(MaxCookingTimeFilter)
///     .add_filter(DietaryFilter);
///
/// let survivors = pipeline.apply(recipes, &constraints)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The hard constraints every search applies: time ceiling, then diet.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(MaxCookingTimeFilter)
            .add_filter(DietaryFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the recipes.
    ///
    /// Each filter is stable, so the composition is stable too.
    pub fn apply(&self, recipes: Vec<Recipe>, constraints: &UserConstraints) -> Result<Vec<Recipe>> {
        let mut current = recipes;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, constraints)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

/// Apply the standard hard constraints to a whole collection.
pub fn filter_recipes(recipes: &[Recipe], constraints: &UserConstraints) -> Result<Vec<Recipe>> {
    FilterPipeline::standard().apply(recipes.to_vec(), constraints)
}
