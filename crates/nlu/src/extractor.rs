//! Constraint Extractor.
//!
//! Two independent halves, both reading only the latest user message:
//! - ingredients come from the completion service as a comma-separated list
//! - time ceiling and diet words come from local pattern matching

use completion::{CompletionError, CompletionService};
use regex::Regex;
use std::sync::{Arc, LazyLock};
use tracing::{debug, error};

use crate::prompts;
use crate::types::{DEFAULT_MAX_COOKING_TIME, UserConstraints};

/// Diet words recognised in user text, matched as lower-case substrings.
pub const DIET_VOCABULARY: &[&str] = &["vegan", "vegetarian", "gluten-free"];

/// Sentinel the model returns when the message names no ingredients.
pub const NO_INGREDIENTS_SENTINEL: &str = "None";

/// First integer followed by a minutes unit ("30 min", "45minutes").
static TIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*min").expect("time pattern is a valid regex"));

/// Any Unicode decimal digit (what `\d` matches).
static DECIMAL_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{Nd}$").expect("digit pattern is a valid regex"));

/// Time ceiling and diet tags read locally from the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub dietary_restrictions: Vec<String>,
    pub max_cooking_time: u32,
}

/// Builds `UserConstraints` from one user message.
#[derive(Clone)]
pub struct ConstraintExtractor {
    service: Arc<dyn CompletionService>,
}

impl ConstraintExtractor {
    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self { service }
    }

    /// Ask the completion service for the ingredients named in `user_text`.
    pub async fn extract_ingredients(
        &self,
        user_text: &str,
    ) -> Result<Vec<String>, CompletionError> {
        let response = self
            .service
            .complete(&prompts::ingredients_prompt(user_text))
            .await?;
        let ingredients = parse_ingredient_list(&response);
        debug!(?ingredients, "Extracted ingredients");
        Ok(ingredients)
    }

    /// Local half; never calls the service.
    pub fn extract_preferences(&self, user_text: &str) -> Preferences {
        extract_preferences(user_text)
    }

    /// Run both halves and assemble fresh constraints.
    pub async fn extract(&self, user_text: &str) -> Result<UserConstraints, CompletionError> {
        let ingredients = self.extract_ingredients(user_text).await?;
        let preferences = self.extract_preferences(user_text);
        Ok(UserConstraints::new()
            .with_ingredients(&ingredients)
            .with_max_cooking_time(preferences.max_cooking_time)
            .with_dietary_restrictions(
                &preferences
                    .dietary_restrictions
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>(),
            ))
    }
}

/// Turn a raw completion into ingredient tokens.
///
/// Splits on commas, drops every character that is neither alphanumeric
/// nor whitespace, trims, lower-cases and skips empties. If the raw text
/// contains the `None` sentinel anywhere the whole list is discarded, even
/// when a real item merely contains that substring.
pub fn parse_ingredient_list(response: &str) -> Vec<String> {
    if response.contains(NO_INGREDIENTS_SENTINEL) {
        error!("Completion returned no usable ingredients");
        return Vec::new();
    }

    let mut found: Vec<String> = Vec::new();
    for item in response.split(',') {
        let cleaned: String = item
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect();
        let cleaned = cleaned.trim().to_lowercase();
        if !cleaned.is_empty() && !found.contains(&cleaned) {
            found.push(cleaned);
        }
    }
    found
}

/// Value of a run of decimal digits in any script, saturating at `u32::MAX`.
fn parse_minutes(digits: &str) -> Option<u32> {
    digits.chars().try_fold(0u32, |acc, c| {
        let digit = digit_value(c)?;
        Some(acc.saturating_mul(10).saturating_add(digit))
    })
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}

/// Numeric value of one decimal digit.
///
/// Unicode encodes every decimal digit set as ten consecutive code points
/// from 0 to 9, so the value is the offset from the start of the
/// surrounding run of digits, modulo ten.
fn digit_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    if !is_decimal_digit(c) {
        return None;
    }
    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    Some((c as u32 - start) % 10)
}

/// Read the time ceiling and diet words from the message.
pub fn extract_preferences(user_text: &str) -> Preferences {
    let lowered = user_text.to_lowercase();

    let max_cooking_time = TIME_PATTERN
        .captures(&lowered)
        .and_then(|caps| caps.get(1))
        .and_then(|m| parse_minutes(m.as_str()))
        .unwrap_or(DEFAULT_MAX_COOKING_TIME);

    let dietary_restrictions = DIET_VOCABULARY
        .iter()
        .filter(|diet| lowered.contains(**diet))
        .map(|diet| diet.to_string())
        .collect();

    Preferences {
        dietary_restrictions,
        max_cooking_time,
    }
}
