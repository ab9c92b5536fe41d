//! Filter implementations for the recipe pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod dietary;
pub mod max_cooking_time;

// Re-export for convenience
pub use dietary::DietaryFilter;
pub use max_cooking_time::MaxCookingTimeFilter;
