//! CLI configuration loading from file and environment.

use std::fs;
use std::path::Path;

use url::Url;

use crate::domain::{AppError, CliConfig};

/// Path to an optional TOML configuration file.
pub const CONFIG_PATH_ENV: &str = "ALLCOUNT_CONFIG";
pub const TEMPLATE_URL_ENV: &str = "ALLCOUNT_TEMPLATE_SERVICE_URL";
pub const TEMPLATE_TIMEOUT_ENV: &str = "ALLCOUNT_TEMPLATE_TIMEOUT_SECS";
pub const RUNTIME_PROGRAM_ENV: &str = "ALLCOUNT_RUNTIME_PROGRAM";

/// Load configuration from the process environment.
pub fn load_config() -> Result<CliConfig, AppError> {
    load_config_with(|key| std::env::var(key).ok())
}

/// Defaults, then the file named by `ALLCOUNT_CONFIG`, then single-value overrides.
pub fn load_config_with<F>(env: F) -> Result<CliConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match env(CONFIG_PATH_ENV) {
        Some(path) => {
            let path = Path::new(&path);
            let content = fs::read_to_string(path).map_err(|e| AppError::filesystem(path, e))?;
            parse_config_content(&content)?
        }
        None => CliConfig::default(),
    };

    if let Some(value) = env(TEMPLATE_URL_ENV) {
        config.template_service.api_url = Url::parse(&value).map_err(|e| {
            AppError::config_error(format!(
                "{} is not a valid URL ({}): {}",
                TEMPLATE_URL_ENV, e, value
            ))
        })?;
    }
    if let Some(value) = env(TEMPLATE_TIMEOUT_ENV) {
        config.template_service.timeout_secs = value.trim().parse().map_err(|_| {
            AppError::config_error(format!(
                "{} must be a whole number of seconds",
                TEMPLATE_TIMEOUT_ENV
            ))
        })?;
    }
    if let Some(value) = env(RUNTIME_PROGRAM_ENV) {
        config.runtime.program = value;
    }

    config.validate()?;
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

/// Parse configuration from string content.
///
/// Validation runs in `load_config_with`, after environment overrides are applied.
pub fn parse_config_content(content: &str) -> Result<CliConfig, AppError> {
    Ok(toml::from_str(content)?)
}
