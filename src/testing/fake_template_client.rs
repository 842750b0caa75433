use std::sync::{Arc, Mutex};

use crate::domain::{AppError, ProjectManifest, TemplateFile};
use crate::ports::TemplateClient;

type Check = Arc<dyn Fn(&ProjectManifest) + Send + Sync>;

/// Template client that records requests and answers from memory.
#[derive(Clone)]
pub struct FakeTemplateClient {
    requests: Arc<Mutex<Vec<ProjectManifest>>>,
    response: Result<Vec<TemplateFile>, String>,
    check: Option<Check>,
}

impl FakeTemplateClient {
    pub fn returning(files: Vec<TemplateFile>) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), response: Ok(files), check: None }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self { response: Err(message.into()), ..Self::returning(vec![]) }
    }

    /// Run `check` against the manifest at request time, then answer with no files.
    pub fn with_check(check: impl Fn(&ProjectManifest) + Send + Sync + 'static) -> Self {
        Self { check: Some(Arc::new(check)), ..Self::returning(vec![]) }
    }

    pub fn requests(&self) -> Vec<ProjectManifest> {
        self.requests.lock().unwrap().clone()
    }
}

impl TemplateClient for FakeTemplateClient {
    fn fetch_template_files(
        &self,
        manifest: &ProjectManifest,
    ) -> Result<Vec<TemplateFile>, AppError> {
        if let Some(check) = &self.check {
            check(manifest);
        }
        self.requests.lock().unwrap().push(manifest.clone());
        self.response.clone().map_err(AppError::TemplateRequest)
    }
}
