//! Progress output port for scaffolding.

use std::path::Path;

use crate::domain::CompletionSummary;

/// Receives progress while a project is materialized.
///
/// Template files are written in parallel, so `created` may be called from several threads.
pub trait ScaffoldReporter: Sync {
    /// The template is chosen and nothing has been written yet.
    fn initializing(&self, template: &str);

    /// A directory or file now exists at `path`.
    fn created(&self, path: &Path);

    /// Every write completed.
    fn finished(&self, summary: &CompletionSummary);
}
