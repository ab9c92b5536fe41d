//! Response Generator.
//!
//! Two render modes:
//! - summary: a short, ranked list of recipes that use the user's ingredients
//! - instructions: full cooking steps for one named recipe, written by the
//!   completion service

use completion::{CompletionError, CompletionService};
use pipeline::RankedRecipe;
use std::fmt::Write;
use std::sync::Arc;
use tracing::{debug, info};

/// Reply for messages that are not about food.
pub const REFUSAL_MESSAGE: &str = "I'm sorry, I'm a specialized cooking assistant. \
I can't help with trading or other non-food topics.";

/// Reply when an instruction request names no recipe we suggested.
pub const CLARIFICATION_MESSAGE: &str =
    "I'm not sure which recipe you'd like. Could you please type the exact name?";

/// Recipes shown in a summary at most.
pub const DEFAULT_SUMMARY_LIMIT: usize = 3;

/// Render the ranked short-list.
///
/// Zero-score recipes are never shown. When nothing is left the reply
/// echoes the extracted ingredients back instead.
pub fn render_summary(ranked: &[RankedRecipe], ingredients: &[String], limit: usize) -> String {
    let top: Vec<&RankedRecipe> = ranked.iter().filter(|r| r.score > 0).take(limit).collect();

    if top.is_empty() {
        return no_overlap_message(ingredients);
    }

    let mut msg = String::from("### Best Matches for your Ingredients:\n");
    for r in top {
        // Writing to a String cannot fail
        let _ = writeln!(
            msg,
            "- **{}** | Score: {} (Uses: {})",
            r.recipe.name,
            r.score,
            r.matched_items.join(", ")
        );
        let _ = writeln!(
            msg,
            "  *Time: {} | Cuisine: {}*\n",
            r.recipe.cooking_time_label(),
            r.recipe.cuisine
        );
    }
    msg
}

/// Reply when no candidate uses any of the user's ingredients.
pub fn no_overlap_message(ingredients: &[String]) -> String {
    format!(
        "I found recipes that fit your time and diet, but **none of them use the ingredients** \
         you mentioned ({}). \n\nTry adding different ingredients or check your recipe file!",
        ingredients.join(", ")
    )
}

/// First recipe whose lower-cased name appears in the lower-cased message.
///
/// Order-sensitive: earlier entries in `matched` win.
pub fn resolve_target<'a>(matched: &'a [RankedRecipe], user_text: &str) -> Option<&'a RankedRecipe> {
    let lowered = user_text.to_lowercase();
    matched
        .iter()
        .find(|r| lowered.contains(&r.recipe.name.to_lowercase()))
}

/// Prompt asking for full instructions for one recipe.
pub fn instruction_prompt(recipe: &RankedRecipe) -> String {
    format!(
        "You are an expert chef. The user wants the full recipe for: {}.\n\
         Ingredients available: {}.\n\
         Please provide the full instructions, portions, and cooking steps.",
        recipe.recipe.name,
        recipe.recipe.ingredients.join(", ")
    )
}

/// Writes instruction replies through the completion service.
#[derive(Clone)]
pub struct ResponseGenerator {
    service: Arc<dyn CompletionService>,
}

impl ResponseGenerator {
    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self { service }
    }

    /// Full instructions for the recipe the user named, or a clarification
    /// request (without calling the service) when no name matches.
    pub async fn instructions(
        &self,
        matched: &[RankedRecipe],
        user_text: &str,
    ) -> Result<String, CompletionError> {
        let Some(target) = resolve_target(matched, user_text) else {
            debug!(
                candidates = matched.len(),
                "No matched recipe named in message"
            );
            return Ok(CLARIFICATION_MESSAGE.to_string());
        };

        info!(
            "Requesting instructions for {} from {}",
            target.recipe.name,
            self.service.model_name()
        );
        self.service.complete(&instruction_prompt(target)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use completion::ScriptedCompletion;
    use recipe_store::Recipe;

    fn ranked(name: &str, ingredients: &[&str], score: usize, matched: &[&str]) -> RankedRecipe {
        RankedRecipe {
            recipe: Recipe::new(name, ingredients)
                .with_cooking_time(20)
                .with_cuisine("Italian"),
            score,
            matched_items: matched.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_summary_lists_top_three_nonzero() {
        let list = vec![
            ranked("A", &["eggs"], 3, &["eggs", "rice", "peas"]),
            ranked("B", &["eggs"], 2, &["eggs", "rice"]),
            ranked("C", &["eggs"], 1, &["eggs"]),
            ranked("D", &["eggs"], 1, &["eggs"]),
            ranked("E", &["beef"], 0, &[]),
        ];

        let msg = render_summary(&list, &[], DEFAULT_SUMMARY_LIMIT);

        assert!(msg.starts_with("### Best Matches for your Ingredients:\n"));
        assert!(msg.contains("- **A** | Score: 3 (Uses: eggs, rice, peas)"));
        assert!(msg.contains("  *Time: 20 min | Cuisine: Italian*"));
        assert!(msg.contains("**C**"));
        assert!(!msg.contains("**D**"));
        assert!(!msg.contains("**E**"));
        let a = msg.find("**A**").unwrap();
        let b = msg.find("**B**").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_summary_without_overlap_echoes_ingredients() {
        let list = vec![ranked("E", &["beef"], 0, &[])];
        let ingredients = vec!["eggs".to_string(), "spaghetti".to_string()];

        let msg = render_summary(&list, &ingredients, DEFAULT_SUMMARY_LIMIT);

        assert_eq!(msg, no_overlap_message(&ingredients));
        assert!(msg.contains("(eggs, spaghetti)"));
    }

    #[test]
    fn test_resolve_target_first_match_wins() {
        let list = vec![
            ranked("Beef Tacos", &["beef"], 1, &["beef"]),
            ranked("Tacos", &["shells"], 1, &["shells"]),
        ];

        let target = resolve_target(&list, "how to make beef tacos?").unwrap();
        assert_eq!(target.recipe.name, "Beef Tacos");

        let target = resolve_target(&list, "TACOS please").unwrap();
        assert_eq!(target.recipe.name, "Tacos");

        assert!(resolve_target(&list, "lasagne").is_none());
    }

    #[tokio::test]
    async fn test_instructions_calls_service_with_recipe() {
        let service = Arc::new(
            ScriptedCompletion::new().with_response("expert chef", "1. Boil water.\n2. Cook pasta."),
        );
        let generator = ResponseGenerator::new(service.clone());
        let list = vec![ranked("Carbonara", &["spaghetti", "eggs", "bacon"], 2, &["eggs"])];

        let reply = generator.instructions(&list, "how to make Carbonara").await.unwrap();

        assert_eq!(reply, "1. Boil water.\n2. Cook pasta.");
        let prompt = &service.prompts()[0];
        assert!(prompt.contains("full recipe for: Carbonara."));
        assert!(prompt.contains("Ingredients available: spaghetti, eggs, bacon."));
    }

    #[tokio::test]
    async fn test_unresolved_target_asks_without_calling_service() {
        let service = Arc::new(ScriptedCompletion::failing());
        let generator = ResponseGenerator::new(service.clone());

        let reply = generator.instructions(&[], "how to make Carbonara").await.unwrap();

        assert_eq!(reply, CLARIFICATION_MESSAGE);
        assert_eq!(service.call_count(), 0);
    }
}
