//! Project scaffolding: directories, manifest, and template files.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::domain::{
    AppError, CompletionSummary, ProjectLayout, ProjectManifest, ScaffoldRequest, ShellFlavor,
    TemplateFile, default_db_url,
};
use crate::ports::{Prompter, ScaffoldReporter, TemplateClient};
use crate::services::{ensure_dir, is_non_empty_dir, write_template_file, write_text};

const NON_EMPTY_PROMPT: &str = "destination is not empty, continue? [y/N]";

/// Result of a completed scaffold.
#[derive(Debug, Clone)]
pub struct InitOutcome {
    pub manifest: ProjectManifest,
    /// Project root on disk.
    pub project_root: PathBuf,
    /// Template files written, in the order the service listed them.
    pub written: Vec<PathBuf>,
}

/// Ask before scaffolding into a directory that already has content.
///
/// A directory holding a project manifest is a previous scaffold and is reused
/// without asking. Returns `Err(AppError::Aborted)` when the operator declines.
pub fn confirm_target<P: Prompter + ?Sized>(
    target: &Path,
    force: bool,
    prompter: &mut P,
) -> Result<(), AppError> {
    if force || ProjectLayout::new(target).manifest().is_file() || !is_non_empty_dir(target)? {
        return Ok(());
    }
    if prompter.prompt_confirmation(NON_EMPTY_PROMPT)? { Ok(()) } else { Err(AppError::Aborted) }
}

/// Materialize the project for `request` under `base_dir`.
///
/// The root, manifest and `app-config` directory are in place before the template
/// service is contacted, so a failed fetch leaves a skeleton that `init` can be rerun on.
pub fn execute<C, R>(
    request: &ScaffoldRequest,
    base_dir: &Path,
    client: &C,
    reporter: &R,
    shell: ShellFlavor,
) -> Result<InitOutcome, AppError>
where
    C: TemplateClient + ?Sized,
    R: ScaffoldReporter + ?Sized,
{
    let manifest = ProjectManifest::from_request(request)?;
    let shown = ProjectLayout::new(&manifest.name);
    let disk = ProjectLayout::new(base_dir.join(&manifest.name));
    tracing::info!(
        project = %disk.root().display(),
        template = %manifest.template_name,
        "initializing project"
    );

    reporter.initializing(&manifest.template_name);
    ensure_dir(disk.root())?;
    reporter.created(shown.root());

    write_text(&disk.manifest(), &manifest.to_json_pretty()?)?;
    reporter.created(&shown.manifest());

    ensure_dir(&disk.app_config())?;
    reporter.created(&shown.app_config());

    let files = client.fetch_template_files(&manifest).map_err(|err| {
        tracing::warn!(error = %err, "template request failed");
        AppError::TemplateService { project: shown.root().to_path_buf(), details: err.to_string() }
    })?;

    let written = write_files(&files, &disk.app_config(), &shown.app_config(), reporter)?;

    reporter.finished(&CompletionSummary {
        project_dir: shown.root().display().to_string(),
        db_url: default_db_url(&manifest.name),
        shell,
    });

    Ok(InitOutcome { manifest, project_root: disk.root().to_path_buf(), written })
}

/// Write every file in parallel, then join on all of them before reporting failures.
fn write_files<R: ScaffoldReporter + ?Sized>(
    files: &[TemplateFile],
    target_dir: &Path,
    shown_dir: &Path,
    reporter: &R,
) -> Result<Vec<PathBuf>, AppError> {
    // Reject the whole set before touching disk if any name escapes app-config.
    let relative: Vec<PathBuf> =
        files.iter().map(TemplateFile::relative_path).collect::<Result<_, _>>()?;

    let results: Vec<Result<PathBuf, String>> = files
        .par_iter()
        .zip(relative.par_iter())
        .map(|(file, rel)| match write_template_file(target_dir, file) {
            Ok(path) => {
                tracing::debug!(file = %file.file_name, "wrote template file");
                reporter.created(&shown_dir.join(rel));
                Ok(path)
            }
            Err(err) => Err(format!("{}: {}", file.file_name, err)),
        })
        .collect();

    let mut written = Vec::with_capacity(results.len());
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(path) => written.push(path),
            Err(failure) => failures.push(failure),
        }
    }

    if failures.is_empty() { Ok(written) } else { Err(AppError::TemplateWrites { failures }) }
}
