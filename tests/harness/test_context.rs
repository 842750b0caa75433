//! Shared testing harness for `allcount` integration tests.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Port 9 (discard) refuses connections, so a test that forgets a mock server fails fast.
const UNREACHABLE_TEMPLATE_SERVICE: &str = "http://127.0.0.1:9/api/app-template-for-cli-init";

pub(crate) const TEMPLATE_PATH: &str = "/api/app-template-for-cli-init";

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    template_url: String,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir, template_url: UNREACHABLE_TEMPLATE_SERVICE.to_string() }
    }

    /// Point `init` at a mock template service.
    pub(crate) fn with_template_service(mut self, server: &mockito::Server) -> Self {
        self.template_url = format!("{}{}", server.url(), TEMPLATE_PATH);
        self
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `allcount` binary within the work directory.
    pub(crate) fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `allcount` binary within a custom directory.
    pub(crate) fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("allcount").expect("Failed to locate allcount binary");
        cmd.current_dir(dir.as_ref())
            .env("HOME", self.home())
            .env("ALLCOUNT_TEMPLATE_SERVICE_URL", &self.template_url)
            .env("ALLCOUNT_TEMPLATE_TIMEOUT_SECS", "5")
            .env_remove("ALLCOUNT_CONFIG")
            .env_remove("ALLCOUNT_RUNTIME_PROGRAM")
            .env_remove("ALLCOUNT_LOG");
        cmd
    }

    /// Path of a project directory created by `init <name>`.
    pub(crate) fn project_path(&self, name: &str) -> PathBuf {
        self.work_dir.join(name)
    }

    /// Parsed `package.json` of a scaffolded project.
    pub(crate) fn read_manifest(&self, name: &str) -> Value {
        let path = self.project_path(name).join("package.json");
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
        serde_json::from_str(&content).expect("package.json should be valid JSON")
    }

    /// Lay out an installed project (manifest + runtime package) in the work directory.
    pub(crate) fn install_project(&self, name: &str) {
        fs::write(self.work_dir.join("package.json"), format!("{{\"name\": \"{}\"}}\n", name))
            .expect("Failed to write package.json");
        fs::create_dir_all(self.work_dir.join("node_modules/allcountjs"))
            .expect("Failed to create runtime package directory");
    }

    /// Entries directly inside the work directory.
    pub(crate) fn work_dir_entries(&self) -> Vec<String> {
        let mut entries: Vec<String> = fs::read_dir(&self.work_dir)
            .expect("Failed to list work directory")
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        entries.sort();
        entries
    }
}

/// Paths from `create : <path>` lines, in output order, with `/` separators.
///
/// Piped prompts are not followed by an echoed newline, so a create line may share
/// its line with the preceding prompt text.
pub(crate) fn created_paths(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter_map(|line| {
            let (label, path) = line.split_once(" : ")?;
            label.trim_end().ends_with("create").then(|| path.trim().replace('\\', "/"))
        })
        .collect()
}

/// Mock a successful template response carrying `files` as `(fileName, content)` pairs.
pub(crate) fn mock_template_files(
    server: &mut mockito::Server,
    files: &[(&str, &str)],
) -> mockito::Mock {
    let files: Vec<Value> = files
        .iter()
        .map(|(name, content)| serde_json::json!({ "fileName": name, "content": content }))
        .collect();
    server
        .mock("POST", TEMPLATE_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(serde_json::json!({ "files": files }).to_string())
        .create()
}
