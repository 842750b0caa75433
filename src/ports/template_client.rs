//! Template service port definition.

use crate::domain::{AppError, ProjectManifest, TemplateFile};

/// Port for retrieving the files of a named template.
pub trait TemplateClient {
    /// Request the template files for `manifest.template_name`, posting the manifest itself.
    fn fetch_template_files(
        &self,
        manifest: &ProjectManifest,
    ) -> Result<Vec<TemplateFile>, AppError>;
}
