//! Core domain types for recipe documents.
//!
//! A `Recipe` is immutable once loaded. Turn-scoped attributes such as a
//! ranking score live on the pipeline's `RankedRecipe`, never here.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

// =============================================================================
// Recipe
// =============================================================================

/// Cuisine used when the source record does not name one.
pub const UNSPECIFIED_CUISINE: &str = "Unspecified";

fn default_cuisine() -> String {
    UNSPECIFIED_CUISINE.to_string()
}

/// An explicit `null` reads the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_unspecified<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_cuisine))
}

/// A single recipe record from the user's recipe document.
///
/// Optional fields default to permissive values so a record is only ever
/// excluded by violating a stated constraint, never by a missing key (an
/// explicit `null` counts as missing):
/// - no `cooking_time` passes every time ceiling
/// - no `dietary` means an empty tag set
/// - no `cuisine` renders as "Unspecified"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    /// Ingredient lines in document order
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<String>,
    /// Minutes; `None` when the document omits it
    #[serde(default)]
    pub cooking_time: Option<u32>,
    #[serde(default = "default_cuisine", deserialize_with = "null_as_unspecified")]
    pub cuisine: String,
    /// Diet tags as written in the document (e.g. "vegan")
    #[serde(default, deserialize_with = "null_as_default")]
    pub dietary: BTreeSet<String>,
}

impl Recipe {
    /// Create a recipe with only a name and ingredients; everything else permissive.
    pub fn new(name: impl Into<String>, ingredients: &[&str]) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            cooking_time: None,
            cuisine: default_cuisine(),
            dietary: BTreeSet::new(),
        }
    }

    /// Builder-style setter for the cooking time in minutes
    pub fn with_cooking_time(mut self, minutes: u32) -> Self {
        self.cooking_time = Some(minutes);
        self
    }

    /// Builder-style setter for the cuisine
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = cuisine.into();
        self
    }

    /// Builder-style setter for diet tags
    pub fn with_dietary(mut self, tags: &[&str]) -> Self {
        self.dietary = tags.iter().map(|s| s.to_string()).collect();
        self
    }

    /// True if any of the recipe's diet tags equals `tag`, ignoring case
    pub fn has_dietary_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.dietary.iter().any(|d| d.to_lowercase() == tag)
    }

    /// Cooking time for display ("25 min" or "n/a")
    pub fn cooking_time_label(&self) -> String {
        match self.cooking_time {
            Some(minutes) => format!("{} min", minutes),
            None => "n/a".to_string(),
        }
    }
}

// =============================================================================
// RecipeCollection
// =============================================================================

/// Ordered, validated set of recipes loaded from one document.
///
/// Order is the document order; the filter stage relies on it for stable
/// tie-breaking later on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeCollection {
    pub(crate) recipes: Vec<Recipe>,
}

impl RecipeCollection {
    /// Creates a new, empty collection
    pub fn new() -> Self {
        Self {
            recipes: Vec::new(),
        }
    }

    /// Build a collection from already-validated recipes.
    pub fn from_recipes(recipes: Vec<Recipe>) -> crate::Result<Self> {
        let collection = Self { recipes };
        collection.validate()?;
        Ok(collection)
    }

    /// All recipes in document order
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Find a recipe by exact name, ignoring case
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        let name = name.to_lowercase();
        self.recipes.iter().find(|r| r.name.to_lowercase() == name)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
