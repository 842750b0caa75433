//! Runtime launch port definition.

use std::path::PathBuf;

use crate::domain::AppError;

/// Fully resolved child-process invocation of the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
    /// Variables added to the inherited environment.
    pub env: Vec<(String, String)>,
}

impl LaunchSpec {
    pub fn env_var(&self, name: &str) -> Option<&str> {
        self.env.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
    }
}

/// Port for handing execution off to the runtime.
pub trait RuntimeLauncher {
    /// Run to completion and return the child's exit code.
    fn launch(&self, spec: &LaunchSpec) -> Result<i32, AppError>;
}
