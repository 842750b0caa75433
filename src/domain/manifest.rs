use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::AppError;
use super::project::{DEFAULT_TEMPLATE, RUNTIME_PACKAGE, RUNTIME_VERSION, validate_app_name};
use super::scaffold_request::ScaffoldRequest;

const MANIFEST_VERSION: &str = "0.0.1";
const START_SCRIPT: &str = "node node_modules/allcountjs/allcount.js";

/// Project descriptor written to `package.json` and posted to the template service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectManifest {
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "Author::is_empty")]
    pub author: Author,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    #[serde(default)]
    pub scripts: BTreeMap<String, String>,
    #[serde(default = "default_template_name")]
    pub template_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Author {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

impl ProjectManifest {
    /// Build the manifest for a resolved scaffold request.
    pub fn from_request(request: &ScaffoldRequest) -> Result<Self, AppError> {
        validate_app_name(&request.app_name)?;

        let mut dependencies = BTreeMap::new();
        dependencies.insert(RUNTIME_PACKAGE.to_string(), RUNTIME_VERSION.to_string());

        let mut scripts = BTreeMap::new();
        scripts.insert("start".to_string(), START_SCRIPT.to_string());

        Ok(Self {
            name: request.app_name.clone(),
            version: MANIFEST_VERSION.to_string(),
            author: Author {
                name: non_empty(request.author_name.as_deref()),
                email: non_empty(request.author_email.as_deref()),
            },
            description: non_empty(request.description.as_deref()),
            dependencies,
            scripts,
            template_name: request
                .template
                .as_deref()
                .and_then(|value| non_empty(Some(value)))
                .unwrap_or_else(default_template_name),
        })
    }

    pub fn parse(content: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Pretty JSON with two-space indentation and a trailing newline.
    pub fn to_json_pretty(&self) -> Result<String, AppError> {
        let mut rendered = serde_json::to_string_pretty(self)?;
        rendered.push('\n');
        Ok(rendered)
    }
}

#[derive(Deserialize)]
struct NameOnly {
    name: String,
}

/// Read just the project name, tolerating any other `package.json` shape.
pub fn read_project_name(content: &str) -> Result<String, AppError> {
    let NameOnly { name } = serde_json::from_str(content)?;
    Ok(name)
}

fn default_template_name() -> String {
    DEFAULT_TEMPLATE.to_string()
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
