//! Prompt templates sent to the completion service.

/// Asks the model for exactly one routing label.
pub fn intent_prompt(user_input: &str) -> String {
    format!(
        r#"You are a kitchen assistant. Determine if the following user input is related to
food, cooking, recipes, or dietary preferences.

If it is about trading, stocks, politics, or any non-cooking topic, respond with 'INVALID'.
If it is NOT about food, respond: INVALID
If the user is asking HOW to cook a specific dish (e.g., "give me the recipe for..."), respond: INSTRUCTION
If the user is listing ingredients or asking for suggestions, respond: SEARCH

Respond with ONLY one word.

User Input: "{user_input}"
Response:"#
    )
}

/// Asks the model for a bare comma-separated ingredient list, or `None`.
pub fn ingredients_prompt(user_input: &str) -> String {
    format!(
        r#"Extract the food ingredients from this text: "{user_input}".
Return ONLY a comma-separated list of ingredients.
No periods, no introductory text. If none, return 'None'."#
    )
}
