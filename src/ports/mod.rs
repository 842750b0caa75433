mod prompter;
mod runtime_launcher;
mod scaffold_reporter;
mod template_client;

pub use prompter::Prompter;
pub use runtime_launcher::{LaunchSpec, RuntimeLauncher};
pub use scaffold_reporter::ScaffoldReporter;
pub use template_client::TemplateClient;
