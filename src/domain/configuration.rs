//! CLI configuration models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration loaded from defaults, an optional TOML file, and environment overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Template service configuration.
    #[serde(default)]
    pub template_service: TemplateServiceConfig,
    /// Runtime launch configuration.
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

impl CliConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.template_service.validate()?;
        self.runtime.validate()?;
        Ok(())
    }
}

/// Template service configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateServiceConfig {
    /// Endpoint receiving the manifest.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for TemplateServiceConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), timeout_secs: default_timeout() }
    }
}

impl TemplateServiceConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        if !matches!(self.api_url.scheme(), "http" | "https") {
            return Err(AppError::config_error(format!(
                "api_url must be an http(s) URL, got '{}'",
                self.api_url
            )));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://allcountjs.com/api/app-template-for-cli-init")
        .expect("Default API URL must be valid")
}

fn default_timeout() -> u64 {
    30
}

/// How the installed runtime is started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Interpreter executable.
    #[serde(default = "default_program")]
    pub program: String,
    /// Entry script, relative to the project root.
    #[serde(default = "default_entry")]
    pub entry: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self { program: default_program(), entry: default_entry() }
    }
}

impl RuntimeConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.program.trim().is_empty() {
            return Err(AppError::config_error("runtime.program must not be empty"));
        }
        if self.entry.trim().is_empty() {
            return Err(AppError::config_error("runtime.entry must not be empty"));
        }
        Ok(())
    }
}

fn default_program() -> String {
    "node".to_string()
}

fn default_entry() -> String {
    "node_modules/allcountjs/allcount.js".to_string()
}
