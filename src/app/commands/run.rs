//! Launch the installed runtime for the project in a directory.

use std::fs;
use std::path::Path;

use crate::domain::{
    APP_CONFIG_DIR, AppError, ProjectLayout, RUNTIME_PACKAGE, RuntimeConfig, default_db_url,
    read_project_name,
};
use crate::ports::{LaunchSpec, RuntimeLauncher};

/// Options for `allcount run`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// App config directory, relative to the project root.
    pub app_dir: String,
    /// Explicit database URL; defaults to a local MongoDB named after the project.
    pub db_url: Option<String>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self { app_dir: APP_CONFIG_DIR.to_string(), db_url: None }
    }
}

/// Verify `project_root` is an installed project and build the runtime invocation.
pub fn prepare(
    project_root: &Path,
    options: &RunOptions,
    runtime: &RuntimeConfig,
) -> Result<LaunchSpec, AppError> {
    let layout = ProjectLayout::new(project_root);

    let manifest_path = layout.manifest();
    if !manifest_path.is_file() {
        return Err(AppError::NotAProject { manifest: manifest_path });
    }
    let content =
        fs::read_to_string(&manifest_path).map_err(|e| AppError::filesystem(&manifest_path, e))?;
    let name = read_project_name(&content)?;

    if !layout.runtime_package().is_dir() {
        return Err(AppError::RuntimeNotInstalled { package: RUNTIME_PACKAGE.to_string() });
    }

    let db_url = options.db_url.clone().unwrap_or_else(|| default_db_url(&name));
    let app_dir = project_root.join(&options.app_dir);
    let entry = project_root.join(&runtime.entry);

    Ok(LaunchSpec {
        program: runtime.program.clone(),
        args: vec![entry.to_string_lossy().into_owned()],
        working_dir: project_root.to_path_buf(),
        env: vec![
            ("DB_URL".to_string(), db_url),
            ("APP".to_string(), app_dir.to_string_lossy().into_owned()),
        ],
    })
}

/// Launch the runtime and return its exit code.
pub fn execute<L: RuntimeLauncher + ?Sized>(
    project_root: &Path,
    options: &RunOptions,
    runtime: &RuntimeConfig,
    launcher: &L,
) -> Result<i32, AppError> {
    let spec = prepare(project_root, options, runtime)?;
    launcher.launch(&spec)
}
