//! Init command implementation.

use crate::app::api::{self, InitOptions};
use crate::domain::AppError;

pub fn run_init(
    name: Option<String>,
    template: Option<String>,
    force: bool,
) -> Result<(), AppError> {
    let outcome = api::init(InitOptions { name, template, force })?;
    tracing::info!(
        project = %outcome.project_root.display(),
        files = outcome.written.len(),
        "project initialized"
    );
    Ok(())
}
