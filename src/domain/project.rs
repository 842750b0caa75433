//! On-disk layout of a scaffolded project.

use std::path::{Component, Path, PathBuf};

use super::AppError;

/// Manifest file written at the project root.
pub const MANIFEST_FILE: &str = "package.json";

/// Directory holding the template files.
pub const APP_CONFIG_DIR: &str = "app-config";

/// npm package providing the runtime.
pub const RUNTIME_PACKAGE: &str = "allcountjs";

/// Version constraint written for the runtime dependency.
pub const RUNTIME_VERSION: &str = "^1.12.0";

/// Directory npm installs packages into.
pub const NODE_MODULES_DIR: &str = "node_modules";

/// Template used when the operator does not pick one.
pub const DEFAULT_TEMPLATE: &str = "twenty-two-lines";

/// Application name offered by the name prompt.
pub const DEFAULT_APP_NAME: &str = "helloworld-app";

/// Paths derived from a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    pub fn app_config(&self) -> PathBuf {
        self.root.join(APP_CONFIG_DIR)
    }

    /// Marker directory proving `npm install` has run.
    pub fn runtime_package(&self) -> PathBuf {
        self.root.join(NODE_MODULES_DIR).join(RUNTIME_PACKAGE)
    }
}

/// Accept only names that form a single directory below the working directory.
pub fn validate_app_name(name: &str) -> Result<(), AppError> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None)
            if part.to_str() == Some(name) && !name.trim().is_empty() =>
        {
            Ok(())
        }
        _ => Err(AppError::InvalidAppName(name.to_string())),
    }
}

/// Connection string used when `run --db` is not given.
pub fn default_db_url(app_name: &str) -> String {
    format!("mongodb://localhost:27017/{}", app_name)
}
