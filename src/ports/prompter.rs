//! Operator prompt port definition.

use crate::domain::{AppError, parse_confirmation};

/// Port for asking the operator free-text questions one at a time.
pub trait Prompter {
    /// Show `message` and return the typed answer, or `default` when nothing was entered.
    fn prompt_string(&mut self, message: &str, default: &str) -> Result<String, AppError>;

    /// Ask a yes/no question. Anything but an explicit affirmative is `false`.
    fn prompt_confirmation(&mut self, message: &str) -> Result<bool, AppError> {
        let answer = self.prompt_string(message, "")?;
        Ok(parse_confirmation(&answer))
    }
}
