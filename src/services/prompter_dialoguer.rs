//! Interactive terminal prompts rendered with dialoguer.

use dialoguer::{Error as DialoguerError, Input};
use std::io::ErrorKind;

use crate::domain::AppError;
use crate::ports::Prompter;

#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn prompt_string(&mut self, message: &str, default: &str) -> Result<String, AppError> {
        let mut input = Input::<String>::new().with_prompt(message).allow_empty(true);
        if !default.is_empty() {
            input = input.default(default.to_string());
        }

        resolve_answer(input.interact_text(), message, default)
    }
}

/// Map a dialoguer answer to the prompt result.
///
/// An empty answer takes `default`; Ctrl-C aborts the whole command.
fn resolve_answer(
    answer: Result<String, DialoguerError>,
    message: &str,
    default: &str,
) -> Result<String, AppError> {
    match answer {
        Ok(value) if value.is_empty() => Ok(default.to_string()),
        Ok(value) => Ok(value),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
            Err(AppError::Aborted)
        }
        Err(err) => {
            Err(AppError::Prompt { what: message.to_lowercase(), details: err.to_string() })
        }
    }
}
