//! Collects scaffold parameters the operator did not pass on the command line.

use crate::domain::{AppError, DEFAULT_APP_NAME, ScaffoldRequest};
use crate::ports::Prompter;

pub const NAME_PROMPT: &str = "Application name";
pub const AUTHOR_PROMPT: &str = "Author name";
pub const EMAIL_PROMPT: &str = "Author email";
pub const DESCRIPTION_PROMPT: &str = "Description";

/// Resolve the scaffold request.
///
/// With a name argument nothing is asked. Otherwise name, author, email and
/// description are asked strictly in that order, one at a time.
pub fn resolve_request<P: Prompter + ?Sized>(
    name: Option<String>,
    template: Option<String>,
    prompter: &mut P,
) -> Result<ScaffoldRequest, AppError> {
    if let Some(name) = name {
        return Ok(ScaffoldRequest::named(name).with_template(template));
    }

    let app_name = prompter.prompt_string(NAME_PROMPT, DEFAULT_APP_NAME)?;
    let author_name = prompter.prompt_string(AUTHOR_PROMPT, "")?;
    let author_email = prompter.prompt_string(EMAIL_PROMPT, "")?;
    let description = prompter.prompt_string(DESCRIPTION_PROMPT, "")?;
    tracing::debug!(app_name = %app_name, "collected scaffold parameters");

    Ok(ScaffoldRequest {
        app_name,
        template,
        author_name: Some(author_name),
        author_email: Some(author_email),
        description: Some(description),
    })
}
