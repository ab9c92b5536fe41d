//! Types produced by reading one user message.

use std::fmt;

/// Time ceiling used when the message names none.
pub const DEFAULT_MAX_COOKING_TIME: u32 = 60;

/// Cuisine slot value when the user expresses no preference.
pub const ANY_CUISINE: &str = "Any";

/// Coarse classification of a user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Not about food or cooking; the turn is refused.
    OffTopic,
    /// Asking how to cook a specific, already-suggested dish.
    InstructionRequest,
    /// Listing ingredients or asking for suggestions.
    SearchRequest,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Intent::OffTopic => "off-topic",
            Intent::InstructionRequest => "instruction",
            Intent::SearchRequest => "search",
        };
        f.write_str(label)
    }
}

/// Hard and soft criteria read from the latest user message.
///
/// Rebuilt from scratch every turn; nothing carries over from earlier
/// messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserConstraints {
    /// Lower-cased ingredient tokens, first-mention order, no duplicates
    pub ingredients: Vec<String>,
    /// Diet words found in the message (e.g. "vegan")
    pub dietary_restrictions: Vec<String>,
    /// Minutes
    pub max_cooking_time: u32,
    /// Always "Any" today; kept so a cuisine filter can slot in later
    pub cuisine_preference: String,
}

impl UserConstraints {
    pub fn new() -> Self {
        Self {
            ingredients: Vec::new(),
            dietary_restrictions: Vec::new(),
            max_cooking_time: DEFAULT_MAX_COOKING_TIME,
            cuisine_preference: ANY_CUISINE.to_string(),
        }
    }

    /// Builder-style setter that keeps the first occurrence of each token.
    pub fn with_ingredients<S: AsRef<str>>(mut self, ingredients: &[S]) -> Self {
        self.ingredients.clear();
        for ingredient in ingredients {
            self.add_ingredient(ingredient.as_ref());
        }
        self
    }

    pub fn with_dietary_restrictions(mut self, restrictions: &[&str]) -> Self {
        self.dietary_restrictions = restrictions.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_max_cooking_time(mut self, minutes: u32) -> Self {
        self.max_cooking_time = minutes;
        self
    }

    /// Add one ingredient token unless it is already present.
    pub fn add_ingredient(&mut self, ingredient: &str) {
        if !self.ingredients.iter().any(|i| i == ingredient) {
            self.ingredients.push(ingredient.to_string());
        }
    }
}

impl Default for UserConstraints {
    fn default() -> Self {
        Self::new()
    }
}
