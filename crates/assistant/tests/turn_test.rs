//! Turn-level tests driven by a scripted completion service.

use std::sync::Arc;

use assistant::{
    CLARIFICATION_MESSAGE, REFUSAL_MESSAGE, RecipeAssistant, Role, Session, TurnError, TurnStage,
    failure_message,
};
use completion::ScriptedCompletion;
use nlu::Intent;
use recipe_store::{Recipe, RecipeCollection};

const INTENT: &str = "Determine if the following user input";
const INGREDIENTS: &str = "Extract the food ingredients";
const INSTRUCTIONS: &str = "expert chef";

fn cookbook() -> Arc<RecipeCollection> {
    let recipes = vec![
        Recipe::new("Carbonara", &["spaghetti", "eggs", "bacon"])
            .with_cooking_time(20)
            .with_cuisine("Italian"),
        Recipe::new("Beef Tacos", &["beef", "shells"])
            .with_cooking_time(15)
            .with_cuisine("Mexican"),
        Recipe::new("Lentil Curry", &["red lentils", "coconut milk", "spinach"])
            .with_cooking_time(40)
            .with_cuisine("Indian")
            .with_dietary(&["vegan", "vegetarian"]),
    ];
    Arc::new(RecipeCollection::from_recipes(recipes).unwrap())
}

fn user_input(text: &str) -> String {
    format!("User Input: \"{text}\"")
}

#[tokio::test]
async fn test_off_topic_is_refused_without_further_calls() {
    let service = Arc::new(ScriptedCompletion::new().with_response(INTENT, "INVALID"));
    let assistant = RecipeAssistant::new(cookbook(), service.clone());

    let outcome = assistant
        .handle_turn(&Session::new(), "Should I buy NVDA stock?")
        .await
        .unwrap();

    assert_eq!(outcome.reply, REFUSAL_MESSAGE);
    assert_eq!(outcome.intent, Intent::OffTopic);
    assert_eq!(
        outcome.path,
        vec![TurnStage::Classify, TurnStage::Rejected, TurnStage::Done]
    );
    assert_eq!(service.call_count(), 1);
    assert_eq!(outcome.session.messages().len(), 2);
    assert_eq!(outcome.session.messages()[0].role, Role::User);
    assert_eq!(outcome.session.last_reply(), Some(REFUSAL_MESSAGE));
}

#[tokio::test]
async fn test_mixed_labels_prefer_off_topic() {
    let service = Arc::new(ScriptedCompletion::new().with_response(INTENT, "INSTRUCTION or INVALID"));
    let assistant = RecipeAssistant::new(cookbook(), service);

    let outcome = assistant
        .handle_turn(&Session::new(), "recipe for a stock portfolio")
        .await
        .unwrap();

    assert_eq!(outcome.intent, Intent::OffTopic);
    assert_eq!(outcome.reply, REFUSAL_MESSAGE);
}

#[tokio::test]
async fn test_search_summarizes_ranked_recipes() {
    let service = Arc::new(
        ScriptedCompletion::new()
            .with_response(INTENT, "SEARCH")
            .with_response(INGREDIENTS, "eggs, spaghetti"),
    );
    let assistant = RecipeAssistant::new(cookbook(), service.clone());

    let outcome = assistant
        .handle_turn(&Session::new(), "I have eggs and spaghetti")
        .await
        .unwrap();

    assert_eq!(outcome.intent, Intent::SearchRequest);
    assert!(outcome.reply.starts_with("### Best Matches for your Ingredients:"));
    assert!(
        outcome
            .reply
            .contains("- **Carbonara** | Score: 2 (Uses: eggs, spaghetti)")
    );
    assert!(outcome.reply.contains("*Time: 20 min | Cuisine: Italian*"));
    assert!(!outcome.reply.contains("Beef Tacos"));
    assert_eq!(
        outcome.path,
        vec![
            TurnStage::Classify,
            TurnStage::ExtractIngredients,
            TurnStage::ExtractPreferences,
            TurnStage::Filter,
            TurnStage::Rank,
            TurnStage::Summarize,
            TurnStage::Done,
        ]
    );
    assert_eq!(service.call_count(), 2);

    // Lentil Curry (40 min) survives the default 60 minute ceiling
    let names: Vec<&str> = outcome
        .session
        .matched_recipes()
        .iter()
        .map(|r| r.name())
        .collect();
    assert_eq!(names, vec!["Carbonara", "Beef Tacos", "Lentil Curry"]);
    assert_eq!(outcome.session.matched_recipes()[0].score, 2);
    assert_eq!(outcome.session.matched_recipes()[1].score, 0);
}

#[tokio::test]
async fn test_how_to_after_summary_uses_carried_over_list() {
    let first_text = "I have eggs and spaghetti";
    let second_text = "how to make Carbonara";
    let service = Arc::new(
        ScriptedCompletion::new()
            .with_response(&user_input(second_text), "INSTRUCTION")
            .with_response(INTENT, "SEARCH")
            .with_response(INGREDIENTS, "eggs, spaghetti")
            .with_response(INSTRUCTIONS, "1. Boil the spaghetti.\n2. Fold in eggs."),
    );
    let assistant = RecipeAssistant::new(cookbook(), service.clone());

    let first = assistant
        .handle_turn(&Session::new(), first_text)
        .await
        .unwrap();
    let second = assistant
        .handle_turn(&first.session, second_text)
        .await
        .unwrap();

    assert_eq!(second.intent, Intent::InstructionRequest);
    assert_eq!(second.reply, "1. Boil the spaghetti.\n2. Fold in eggs.");
    assert_eq!(
        second.path,
        vec![TurnStage::Classify, TurnStage::GetRecipe, TurnStage::Done]
    );

    // No fresh extraction on the instruction path
    let prompts = service.prompts();
    assert_eq!(prompts.len(), 4);
    assert!(prompts[3].contains("full recipe for: Carbonara."));
    assert!(prompts[3].contains("spaghetti, eggs, bacon"));

    assert_eq!(second.session.matched_recipes(), first.session.matched_recipes());
    assert_eq!(second.session.messages().len(), 4);
    assert_eq!(second.session.turn_count(), 2);
}

#[tokio::test]
async fn test_search_with_how_to_phrase_reenters_instructions() {
    let service = Arc::new(
        ScriptedCompletion::new()
            .with_response(INTENT, "SEARCH")
            .with_response(INGREDIENTS, "beef")
            .with_response(INSTRUCTIONS, "Warm the shells."),
    );
    let assistant = RecipeAssistant::new(cookbook(), service.clone());

    let outcome = assistant
        .handle_turn(&Session::new(), "I have beef, give me the recipe for beef tacos")
        .await
        .unwrap();

    assert_eq!(outcome.reply, "Warm the shells.");
    assert_eq!(outcome.session.messages().len(), 2);
    assert_eq!(
        &outcome.path[outcome.path.len() - 3..],
        &[TurnStage::Summarize, TurnStage::GetRecipe, TurnStage::Done][..]
    );
    assert_eq!(outcome.session.matched_recipes()[0].name(), "Beef Tacos");
}

#[tokio::test]
async fn test_unresolved_instruction_target_asks_for_name() {
    let service = Arc::new(ScriptedCompletion::new().with_response(INTENT, "INSTRUCTION"));
    let assistant = RecipeAssistant::new(cookbook(), service.clone());

    let outcome = assistant
        .handle_turn(&Session::new(), "give me the recipe for lasagne")
        .await
        .unwrap();

    assert_eq!(outcome.reply, CLARIFICATION_MESSAGE);
    assert_eq!(service.call_count(), 1);
}

#[tokio::test]
async fn test_empty_collection_gives_no_overlap_message() {
    let service = Arc::new(
        ScriptedCompletion::new()
            .with_response(INTENT, "SEARCH")
            .with_response(INGREDIENTS, "eggs, spaghetti"),
    );
    let assistant = RecipeAssistant::new(Arc::new(RecipeCollection::new()), service);

    let outcome = assistant
        .handle_turn(&Session::new(), "eggs and spaghetti please")
        .await
        .unwrap();

    assert!(outcome.reply.contains("none of them use the ingredients"));
    assert!(outcome.reply.contains("(eggs, spaghetti)"));
    assert!(outcome.session.matched_recipes().is_empty());
}

#[tokio::test]
async fn test_sentinel_response_degrades_to_no_overlap() {
    let service = Arc::new(
        ScriptedCompletion::new()
            .with_response(INTENT, "SEARCH")
            .with_response(INGREDIENTS, "None"),
    );
    let assistant = RecipeAssistant::new(cookbook(), service);

    let outcome = assistant
        .handle_turn(&Session::new(), "something quick for dinner")
        .await
        .unwrap();

    assert!(outcome.reply.contains("none of them use the ingredients"));
    assert!(outcome.reply.contains("()"));
}

#[tokio::test]
async fn test_constraints_come_from_latest_message_only() {
    let service = Arc::new(
        ScriptedCompletion::new()
            .with_response(INTENT, "SEARCH")
            .with_response(INGREDIENTS, "spinach"),
    );
    let assistant = RecipeAssistant::new(cookbook(), service);

    let first = assistant
        .handle_turn(&Session::new(), "vegan spinach ideas in 20 min")
        .await
        .unwrap();
    assert!(first.session.matched_recipes().is_empty());

    // The earlier diet and time ceiling are forgotten
    let second = assistant
        .handle_turn(&first.session, "what about spinach")
        .await
        .unwrap();
    assert_eq!(second.session.matched_recipes().len(), 3);
    assert!(second.reply.contains("**Lentil Curry**"));
}

#[tokio::test]
async fn test_completion_failure_leaves_session_untouched() {
    let service = Arc::new(ScriptedCompletion::failing());
    let assistant = RecipeAssistant::new(cookbook(), service);
    let session = Session::new();

    let err = assistant
        .handle_turn(&session, "I have eggs")
        .await
        .unwrap_err();

    assert!(matches!(err, TurnError::Completion(_)));
    assert!(failure_message(&err).contains("scripted service is offline"));
    assert!(session.messages().is_empty());
}
