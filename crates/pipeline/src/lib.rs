//! Pipeline for filtering and ranking recipe candidates.
//!
//! This crate provides:
//! - Filter trait and implementations for hard constraints
//! - FilterPipeline for composing filters
//! - Ingredient-overlap ranking
//!
//! ## Architecture
//! The pipeline processes a collection in two stages:
//! 1. Filters remove recipes that violate a stated constraint (too slow, wrong diet)
//! 2. The ranker scores survivors by ingredient overlap and sorts them, stably
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterPipeline, rank};
//!
//! let survivors = FilterPipeline::standard().apply(collection.recipes().to_vec(), &constraints)?;
//! let ranked = rank(survivors, &constraints.ingredients);
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod ranking;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::{FilterPipeline, filter_recipes};
pub use ranking::{RankedRecipe, rank, score_recipe};
