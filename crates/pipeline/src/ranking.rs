//! Recipe Ranker.
//!
//! Scores filtered recipes by how many of the user's ingredient tokens they
//! use. A user token counts when it is a substring of a recipe ingredient
//! ("lentils" matches "red lentils"); the reverse direction never counts.

use recipe_store::Recipe;

/// A recipe with its turn-scoped score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedRecipe {
    pub recipe: Recipe,
    /// Number of distinct user tokens found in the recipe's ingredients
    pub score: usize,
    /// Lower-cased recipe-side ingredients that produced the score,
    /// first-match order, no duplicates
    pub matched_items: Vec<String>,
}

impl RankedRecipe {
    pub fn name(&self) -> &str {
        &self.recipe.name
    }
}

/// Score one recipe against the user's tokens.
///
/// Each distinct user token contributes at most once: the first recipe
/// ingredient containing it wins and the scan moves on.
pub fn score_recipe(recipe: &Recipe, user_tokens: &[String]) -> RankedRecipe {
    let (score, matched_items) = overlap(recipe, user_tokens);
    RankedRecipe {
        recipe: recipe.clone(),
        score,
        matched_items,
    }
}

fn overlap(recipe: &Recipe, user_tokens: &[String]) -> (usize, Vec<String>) {
    let recipe_ingredients: Vec<String> =
        recipe.ingredients.iter().map(|i| i.to_lowercase()).collect();

    let mut seen_tokens: Vec<String> = Vec::new();
    let mut matched_items: Vec<String> = Vec::new();
    let mut score = 0;

    for token in user_tokens {
        let token = token.to_lowercase();
        if seen_tokens.contains(&token) {
            continue;
        }
        if let Some(hit) = recipe_ingredients.iter().find(|ing| ing.contains(&token)) {
            score += 1;
            if !matched_items.contains(hit) {
                matched_items.push(hit.clone());
            }
        }
        seen_tokens.push(token);
    }

    (score, matched_items)
}

/// Score and order recipes, highest score first.
///
/// The sort is stable, so equal scores keep the filter-stage order.
pub fn rank(recipes: Vec<Recipe>, user_tokens: &[String]) -> Vec<RankedRecipe> {
    let mut ranked: Vec<RankedRecipe> = recipes
        .into_iter()
        .map(|recipe| {
            let (score, matched_items) = overlap(&recipe, user_tokens);
            RankedRecipe {
                recipe,
                score,
                matched_items,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    tracing::debug!(
        "Ranked {} recipes (top score: {})",
        ranked.len(),
        ranked.first().map(|r| r.score).unwrap_or(0)
    );
    ranked
}
