mod fake_template_client;

pub use fake_runtime_launcher::FakeRuntimeLauncher;
pub use fake_template_client::FakeTemplateClient;
pub use recording_reporter::RecordingReporter;
pub use scripted_prompter::ScriptedPrompter;
