//! Template service client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Deserialize;
use url::Url;

use crate::domain::{AppError, ProjectManifest, TemplateFile, TemplateServiceConfig};
use crate::ports::TemplateClient;

/// HTTP client for the template service.
#[derive(Debug, Clone)]
pub struct HttpTemplateClient {
    api_url: Url,
    client: Client,
}

impl HttpTemplateClient {
    pub fn new(config: &TemplateServiceConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("allcount-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_url: config.api_url.clone(), client })
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    files: Option<Vec<TemplateFile>>,
}

impl TemplateClient for HttpTemplateClient {
    fn fetch_template_files(
        &self,
        manifest: &ProjectManifest,
    ) -> Result<Vec<TemplateFile>, AppError> {
        tracing::debug!(
            url = %self.api_url,
            template = %manifest.template_name,
            "requesting template files"
        );

        let response = self
            .client
            .post(self.api_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(manifest)
            .send()
            .map_err(|e| AppError::TemplateRequest(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::TemplateRequest(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text.trim()
            )));
        }

        let api_response: ApiResponse = response
            .json()
            .map_err(|e| AppError::TemplateRequest(format!("Failed to parse response: {}", e)))?;

        let files = api_response.files.ok_or_else(|| {
            AppError::TemplateRequest("Response does not contain a 'files' array".into())
        })?;
        tracing::debug!(count = files.len(), "template service returned files");
        Ok(files)
    }
}
