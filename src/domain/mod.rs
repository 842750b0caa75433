pub mod configuration;
pub mod confirmation;
pub mod error;
pub mod manifest;
pub mod project;
pub mod scaffold_request;
pub mod shell;
pub mod summary;
pub mod template_file;

pub use configuration::{CliConfig, RuntimeConfig, TemplateServiceConfig};
pub use confirmation::parse_confirmation;
pub use error::AppError;
pub use manifest::{Author, ProjectManifest, read_project_name};
pub use project::{
    APP_CONFIG_DIR, DEFAULT_APP_NAME, DEFAULT_TEMPLATE, MANIFEST_FILE, ProjectLayout,
    RUNTIME_PACKAGE, default_db_url, validate_app_name,
};
pub use scaffold_request::ScaffoldRequest;
pub use shell::ShellFlavor;
pub use summary::CompletionSummary;
pub use template_file::TemplateFile;
