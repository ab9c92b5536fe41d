//! Recipe Store Loader.
//!
//! A loader turns an opaque handle (a file path, an in-memory upload) into
//! a validated `RecipeCollection`. `load_or_empty` is the forgiving entry
//! point the assistant uses: a bad upload yields an empty collection plus a
//! diagnostic, and the session carries on.

use crate::error::{RecipeStoreError, Result};
use crate::parser;
use crate::types::RecipeCollection;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{error, info};

/// Anything that can produce a recipe collection from a handle.
pub trait RecipeLoader {
    /// What identifies a document for this loader (a path, a text buffer)
    type Handle: ?Sized;

    /// Load and validate every recipe behind `handle`.
    fn load(&self, handle: &Self::Handle) -> Result<RecipeCollection>;
}

/// Loads a JSON recipe document from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFileLoader;

impl RecipeLoader for JsonFileLoader {
    type Handle = Path;

    fn load(&self, path: &Path) -> Result<RecipeCollection> {
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => RecipeStoreError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => RecipeStoreError::IoError(e),
        })?;

        let source_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let recipes = parser::parse_recipes(&text, &source_name)?;
        RecipeCollection::from_recipes(recipes)
    }
}

/// Loads a JSON recipe document that is already in memory (e.g. an upload
/// whose text was extracted by the host application).
#[derive(Debug, Clone, Default)]
pub struct JsonTextLoader {
    source_name: String,
}

impl JsonTextLoader {
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
        }
    }
}

impl RecipeLoader for JsonTextLoader {
    type Handle = str;

    fn load(&self, text: &str) -> Result<RecipeCollection> {
        let recipes = parser::parse_recipes(text, &self.source_name)?;
        RecipeCollection::from_recipes(recipes)
    }
}

/// Outcome of a forgiving load.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub recipes: RecipeCollection,
    /// Human-readable reason the document was rejected, if it was
    pub diagnostic: Option<String>,
}

impl LoadReport {
    pub fn is_ok(&self) -> bool {
        self.diagnostic.is_none()
    }
}

/// Load recipes, degrading any failure to an empty collection.
///
/// Parse failures are not fatal: the caller shows the diagnostic and the
/// user may retry with a corrected document.
pub fn load_or_empty<L: RecipeLoader>(loader: &L, handle: &L::Handle) -> LoadReport {
    match loader.load(handle) {
        Ok(recipes) => {
            info!("Loaded {} recipes", recipes.len());
            LoadReport {
                recipes,
                diagnostic: None,
            }
        }
        Err(e) => {
            error!("Recipe document rejected: {}", e);
            LoadReport {
                recipes: RecipeCollection::new(),
                diagnostic: Some(format!("Failed to load recipes: {}", e)),
            }
        }
    }
}
