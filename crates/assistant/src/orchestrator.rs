//! # Turn Orchestrator
//!
//! Runs one conversation turn as a small state machine:
//!
//! ```text
//! Classify ─┬─ off-topic ──> Rejected ─────────────────────────────> Done
//!           ├─ instruction > GetRecipe ────────────────────────────> Done
//!           └─ search ─────> ExtractIngredients > ExtractPreferences
//!                            > Filter > Rank > Summarize ─┬────────> Done
//!                                                         └ how-to > GetRecipe
//! ```
//!
//! `handle_turn` is a function of (session, user text) to (new session,
//! one assistant message). Stages run strictly one after another; the only
//! awaits are completion-service calls.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use completion::CompletionService;
use nlu::{ConstraintExtractor, Intent, IntentClassifier, UserConstraints};
use pipeline::{FilterPipeline, RankedRecipe, rank};
use recipe_store::{Recipe, RecipeCollection};

use crate::error::TurnError;
use crate::response::{self, DEFAULT_SUMMARY_LIMIT, REFUSAL_MESSAGE, ResponseGenerator};
use crate::session::{ChatMessage, Session};

/// Phrases that turn a search turn into an instruction request when the
/// message also names a just-ranked recipe.
pub const INSTRUCTION_KEYWORDS: &[&str] = &[
    "how to make",
    "give me the recipe",
    "instructions",
    "steps",
    "how do i cook",
];

/// Tunables for the assistant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantConfig {
    /// Recipes listed in a summary at most
    pub summary_limit: usize,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            summary_limit: DEFAULT_SUMMARY_LIMIT,
        }
    }
}

/// Stages of one turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStage {
    Classify,
    ExtractIngredients,
    ExtractPreferences,
    Filter,
    Rank,
    Summarize,
    GetRecipe,
    Rejected,
    Done,
}

/// Result of a completed turn
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// Session to pass into the next turn
    pub session: Session,
    /// The single assistant message produced
    pub reply: String,
    pub intent: Intent,
    /// Stages visited, in order, ending with `Done`
    pub path: Vec<TurnStage>,
}

/// Working record for one turn; dropped when the turn ends except for the
/// transcript and the matched-recipe list.
#[derive(Debug)]
struct TurnState {
    conversation: Vec<ChatMessage>,
    user_text: String,
    constraints: UserConstraints,
    candidates: Vec<Recipe>,
    matched_recipes: Vec<RankedRecipe>,
    intent: Option<Intent>,
    is_valid: bool,
    reply: Option<String>,
}

impl TurnState {
    fn start(session: &Session, user_text: &str) -> Self {
        let mut conversation = session.messages.clone();
        conversation.push(ChatMessage::user(user_text));
        Self {
            conversation,
            user_text: user_text.to_string(),
            constraints: UserConstraints::new(),
            candidates: Vec::new(),
            matched_recipes: session.matched_recipes.clone(),
            intent: None,
            is_valid: true,
            reply: None,
        }
    }

    /// Close the turn: append the reply and build the next session.
    ///
    /// Every path to `Done` sets both the intent and the reply; a missing one
    /// is a broken transition.
    fn into_outcome(self, path: Vec<TurnStage>) -> Result<TurnOutcome, TurnError> {
        let intent = self.intent.ok_or(TurnError::Unfinished("intent"))?;
        let reply = self.reply.ok_or(TurnError::Unfinished("reply"))?;

        let mut messages = self.conversation;
        messages.push(ChatMessage::assistant(reply.clone()));

        Ok(TurnOutcome {
            session: Session::with_state(messages, self.matched_recipes),
            reply,
            intent,
            path,
        })
    }
}

/// Main orchestrator that coordinates one conversation turn
#[derive(Clone)]
pub struct RecipeAssistant {
    recipes: Arc<RecipeCollection>,
    classifier: IntentClassifier,
    extractor: ConstraintExtractor,
    filter_pipeline: Arc<FilterPipeline>,
    responder: ResponseGenerator,
    config: AssistantConfig,
}

impl RecipeAssistant {
    /// Create an assistant over `recipes`, using `service` for every
    /// completion call.
    pub fn new(recipes: Arc<RecipeCollection>, service: Arc<dyn CompletionService>) -> Self {
        Self::with_config(recipes, service, AssistantConfig::default())
    }

    pub fn with_config(
        recipes: Arc<RecipeCollection>,
        service: Arc<dyn CompletionService>,
        config: AssistantConfig,
    ) -> Self {
        Self {
            recipes,
            classifier: IntentClassifier::new(service.clone()),
            extractor: ConstraintExtractor::new(service.clone()),
            filter_pipeline: Arc::new(FilterPipeline::standard()),
            responder: ResponseGenerator::new(service),
            config,
        }
    }

    pub fn recipes(&self) -> &RecipeCollection {
        &self.recipes
    }

    /// Run one turn.
    ///
    /// On error the input session is still valid; the caller decides how to
    /// tell the user (see `failure_message`).
    pub async fn handle_turn(
        &self,
        session: &Session,
        user_text: &str,
    ) -> Result<TurnOutcome, TurnError> {
        let start_time = Instant::now();
        let mut state = TurnState::start(session, user_text);
        let mut path = Vec::new();
        let mut stage = TurnStage::Classify;

        loop {
            path.push(stage);
            if stage == TurnStage::Done {
                break;
            }
            let next = self.step(stage, &mut state).await?;
            debug!(from = ?stage, to = ?next, "Turn transition");
            stage = next;
        }

        let is_valid = state.is_valid;
        let outcome = state.into_outcome(path)?;

        info!(
            "Turn complete: intent={}, valid={}, {} stages in {:.2?}",
            outcome.intent,
            is_valid,
            outcome.path.len(),
            start_time.elapsed()
        );

        Ok(outcome)
    }

    /// Execute one stage and return the next.
    async fn step(&self, stage: TurnStage, state: &mut TurnState) -> Result<TurnStage, TurnError> {
        let next = match stage {
            TurnStage::Classify => {
                let intent = self.classifier.classify(&state.user_text).await?;
                state.intent = Some(intent);
                match intent {
                    Intent::OffTopic => TurnStage::Rejected,
                    Intent::InstructionRequest => TurnStage::GetRecipe,
                    Intent::SearchRequest => TurnStage::ExtractIngredients,
                }
            }
            TurnStage::ExtractIngredients => {
                let ingredients = self.extractor.extract_ingredients(&state.user_text).await?;
                state.constraints = UserConstraints::new().with_ingredients(&ingredients);
                TurnStage::ExtractPreferences
            }
            TurnStage::ExtractPreferences => {
                let prefs = self.extractor.extract_preferences(&state.user_text);
                state.constraints.max_cooking_time = prefs.max_cooking_time;
                state.constraints.dietary_restrictions = prefs.dietary_restrictions;
                TurnStage::Filter
            }
            TurnStage::Filter => {
                state.candidates = self
                    .filter_pipeline
                    .apply(self.recipes.recipes().to_vec(), &state.constraints)?;
                TurnStage::Rank
            }
            TurnStage::Rank => {
                let candidates = std::mem::take(&mut state.candidates);
                state.matched_recipes = rank(candidates, &state.constraints.ingredients);
                TurnStage::Summarize
            }
            TurnStage::Summarize => {
                state.reply = Some(response::render_summary(
                    &state.matched_recipes,
                    &state.constraints.ingredients,
                    self.config.summary_limit,
                ));
                if asks_for_instructions(&state.user_text, &state.matched_recipes) {
                    TurnStage::GetRecipe
                } else {
                    TurnStage::Done
                }
            }
            TurnStage::GetRecipe => {
                let reply = self
                    .responder
                    .instructions(&state.matched_recipes, &state.user_text)
                    .await?;
                state.reply = Some(reply);
                TurnStage::Done
            }
            TurnStage::Rejected => {
                state.is_valid = false;
                state.reply = Some(REFUSAL_MESSAGE.to_string());
                TurnStage::Done
            }
            TurnStage::Done => TurnStage::Done,
        };
        Ok(next)
    }
}

/// True if the message uses a how-to phrase and names one of `matched`.
pub fn asks_for_instructions(user_text: &str, matched: &[RankedRecipe]) -> bool {
    let lowered = user_text.to_lowercase();
    let is_asking_how = INSTRUCTION_KEYWORDS.iter().any(|k| lowered.contains(k));
    is_asking_how
        && matched
            .iter()
            .any(|r| lowered.contains(&r.recipe.name.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(names: &[&str]) -> Vec<RankedRecipe> {
        names
            .iter()
            .map(|n| RankedRecipe {
                recipe: Recipe::new(*n, &[]),
                score: 1,
                matched_items: Vec::new(),
            })
            .collect()
    }

    #[test]
    fn test_asks_for_instructions_needs_both_signals() {
        let list = matched(&["Carbonara", "Beef Tacos"]);

        assert!(asks_for_instructions("How to make Carbonara?", &list));
        assert!(asks_for_instructions("give me the recipe for beef tacos", &list));
        assert!(!asks_for_instructions("I want carbonara with eggs", &list));
        assert!(!asks_for_instructions("how to make lasagne", &list));
        assert!(!asks_for_instructions("how to make carbonara", &[]));
    }

    #[test]
    fn test_turn_without_reply_is_an_error() {
        let mut state = TurnState::start(&Session::new(), "eggs");
        state.intent = Some(Intent::SearchRequest);

        let err = state.into_outcome(vec![TurnStage::Done]).unwrap_err();

        assert!(matches!(err, TurnError::Unfinished("reply")));
    }

    #[test]
    fn test_turn_without_intent_is_an_error() {
        let mut state = TurnState::start(&Session::new(), "eggs");
        state.reply = Some("hello".to_string());

        let err = state.into_outcome(vec![TurnStage::Done]).unwrap_err();

        assert!(matches!(err, TurnError::Unfinished("intent")));
    }

    #[test]
    fn test_outcome_appends_reply_to_transcript() {
        let mut state = TurnState::start(&Session::new(), "eggs");
        state.intent = Some(Intent::OffTopic);
        state.reply = Some(REFUSAL_MESSAGE.to_string());

        let outcome = state.into_outcome(vec![TurnStage::Done]).unwrap();

        assert_eq!(outcome.session.messages().len(), 2);
        assert_eq!(outcome.session.last_reply(), Some(REFUSAL_MESSAGE));
    }
}
