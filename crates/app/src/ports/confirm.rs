//! Confirm port: synchronous yes/no question before a quick risk change.

/// Ask the user to confirm an action.
///
/// Blocking by nature in the browser (`window.confirm`); returns `false`
/// when the prompt cannot be shown.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}
