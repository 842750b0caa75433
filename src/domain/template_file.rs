use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::AppError;

/// One file of a template as returned by the template service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateFile {
    pub file_name: String,
    pub content: String,
}

impl TemplateFile {
    pub fn new(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self { file_name: file_name.into(), content: content.into() }
    }

    /// Relative path of this file, rejecting anything that would leave the target directory.
    pub fn relative_path(&self) -> Result<PathBuf, AppError> {
        let path = Path::new(&self.file_name);
        let mut cleaned = PathBuf::new();
        for component in path.components() {
            match component {
                Component::Normal(part) => cleaned.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(AppError::UnsafeTemplatePath(self.file_name.clone()));
                }
            }
        }
        if cleaned.as_os_str().is_empty() {
            return Err(AppError::UnsafeTemplatePath(self.file_name.clone()));
        }
        Ok(cleaned)
    }
}
