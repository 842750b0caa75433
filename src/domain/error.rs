use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for allcount operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// I/O failure tied to a specific path on disk.
    #[error("{}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Application name is empty or unusable as a directory name.
    #[error("Invalid application name '{0}': must be a single directory name")]
    InvalidAppName(String),

    /// Operator declined to continue.
    #[error("aborting")]
    Aborted,

    /// Reading an answer from the operator failed.
    #[error("Failed to read {what}: {details}")]
    Prompt { what: String, details: String },

    /// Transport, status, or decoding failure talking to the template service.
    #[error("{0}")]
    TemplateRequest(String),

    /// The template service request failed or returned an unusable body.
    #[error(
        "Template service error: {details}. The project skeleton at {} was left in place; rerun init to retry",
        project.display()
    )]
    TemplateService { project: PathBuf, details: String },

    /// A template file name would escape the app-config directory.
    #[error("Refusing to write template file '{0}': path must stay inside app-config")]
    UnsafeTemplatePath(String),

    /// One or more template file writes failed.
    #[error("Failed to write {} template file(s): {}", failures.len(), failures.join("; "))]
    TemplateWrites { failures: Vec<String> },

    /// Current directory does not contain a project manifest.
    #[error(
        "Not an allcount project: {} not found. Run 'allcount init' first.",
        manifest.display()
    )]
    NotAProject { manifest: PathBuf },

    /// Runtime dependency is missing from node_modules.
    #[error("{package} is not installed. Run 'npm install' in the project directory first.")]
    RuntimeNotInstalled { package: String },

    /// Runtime process could not be started.
    #[error("Failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Manifest JSON is malformed.
    #[error("Failed to parse project manifest: {0}")]
    ManifestParse(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::Filesystem { path: path.into(), source }
    }
}
