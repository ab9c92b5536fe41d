use completion::CompletionError;
use thiserror::Error;

/// Errors that end a turn without an assistant message
#[derive(Error, Debug)]
pub enum TurnError {
    #[error("Completion service failed: {0}")]
    Completion(#[from] CompletionError),

    #[error(transparent)]
    Pipeline(#[from] anyhow::Error),

    #[error("Turn ended without a {0}")]
    Unfinished(&'static str),
}

/// Assistant message for a turn that failed.
///
/// Hosts show this in place of a reply and keep the previous session.
pub fn failure_message(err: &TurnError) -> String {
    format!(
        "Sorry, the kitchen is having trouble right now ({}). Please try again in a moment.",
        err
    )
}
