//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together configuration,
//! concrete services and command execution.

use std::io::{self, IsTerminal};
use std::path::Path;

use crate::app::commands::{init, prompt_sequence, run};
use crate::app::config::load_config;
use crate::domain::validate_app_name;
use crate::ports::Prompter;
use crate::services::{
    ConsoleReporter, DialoguerPrompter, HttpTemplateClient, ProcessRuntimeLauncher, StdioPrompter,
};

pub use crate::app::commands::init::InitOutcome;
pub use crate::app::commands::run::RunOptions;
pub use crate::domain::{AppError, ScaffoldRequest, ShellFlavor};

/// Arguments of `allcount init`.
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub name: Option<String>,
    pub template: Option<String>,
    /// Scaffold into a non-empty directory without asking.
    pub force: bool,
}

/// Scaffold a new project in the current directory.
pub fn init(options: InitOptions) -> Result<InitOutcome, AppError> {
    init_at(&std::env::current_dir()?, options)
}

/// Scaffold a new project below `base_dir`, prompting on the terminal for missing values.
pub fn init_at(base_dir: &Path, options: InitOptions) -> Result<InitOutcome, AppError> {
    let config = load_config()?;
    let client = HttpTemplateClient::new(&config.template_service)?;
    let reporter = ConsoleReporter::stdout();
    let mut prompter = terminal_prompter();

    let request = prompt_sequence::resolve_request(
        options.name,
        options.template,
        prompter.as_mut(),
    )?;
    validate_app_name(&request.app_name)?;
    init::confirm_target(&base_dir.join(&request.app_name), options.force, prompter.as_mut())?;
    init::execute(&request, base_dir, &client, &reporter, ShellFlavor::from_env())
}

// =============================================================================
// Run Command API
// =============================================================================

/// Launch the runtime for the project in the current directory.
pub fn run(options: RunOptions) -> Result<i32, AppError> {
    run_at(&std::env::current_dir()?, options)
}

/// Launch the runtime for the project at `project_root` and return its exit code.
pub fn run_at(project_root: &Path, options: RunOptions) -> Result<i32, AppError> {
    let config = load_config()?;
    run::execute(project_root, &options, &config.runtime, &ProcessRuntimeLauncher)
}

/// Rich prompts when a person is at the terminal, plain line reads otherwise.
fn terminal_prompter() -> Box<dyn Prompter> {
    if console::user_attended() && io::stdin().is_terminal() {
        Box::new(DialoguerPrompter)
    } else {
        Box::new(StdioPrompter)
    }
}
