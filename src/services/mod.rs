mod console_reporter;
mod project_filesystem;
mod prompter_dialoguer;
mod prompter_stdio;
mod runtime_process;
mod template_client_http;

pub use console_reporter::ConsoleReporter;
pub use project_filesystem::{ensure_dir, is_non_empty_dir, write_template_file, write_text};
pub use prompter_dialoguer::DialoguerPrompter;
pub use prompter_stdio::StdioPrompter;
pub use runtime_process::ProcessRuntimeLauncher;
pub use template_client_http::HttpTemplateClient;
