use super::shell::ShellFlavor;

/// Next-step instructions printed once a project has been scaffolded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionSummary {
    pub project_dir: String,
    pub db_url: String,
    pub shell: ShellFlavor,
}

impl CompletionSummary {
    pub fn lines(&self) -> Vec<String> {
        let prompt = self.shell.prompt_symbol();
        vec![
            String::new(),
            "   install dependencies:".to_string(),
            format!("     {} cd {} && npm install", prompt, self.project_dir),
            String::new(),
            "   run the app:".to_string(),
            format!("     {} {}", prompt, self.shell.with_env("DB_URL", &self.db_url, "npm start")),
            String::new(),
            "   or run via CLI:".to_string(),
            format!("     {} cd {} && allcount run", prompt, self.project_dir),
            String::new(),
        ]
    }
}
