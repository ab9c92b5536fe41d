//! # Recipe Store Crate
//!
//! This crate handles loading the user's recipe collection.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Recipe, RecipeCollection)
//! - **parser**: Parse a JSON recipe document into Rust structs
//! - **index**: Collection validation (names present and unique)
//! - **loader**: `RecipeLoader` trait, file/text loaders, forgiving `load_or_empty`
//! - **error**: Error types for recipe loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use recipe_store::{load_or_empty, JsonFileLoader};
//! use std::path::Path;
//!
//! let report = load_or_empty(&JsonFileLoader, Path::new("recipes.json"));
//! if let Some(diagnostic) = &report.diagnostic {
//!     eprintln!("{diagnostic}");
//! }
//! println!("{} recipes available", report.recipes.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;
pub mod loader;

// Re-export commonly used types for convenience
pub use error::{RecipeStoreError, Result};
pub use loader::{JsonFileLoader, JsonTextLoader, LoadReport, RecipeLoader, load_or_empty};
pub use types::{Recipe, RecipeCollection, UNSPECIFIED_CUISINE};
