//! Filesystem operations used while materializing a project.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, TemplateFile};

/// Create `dir` and any missing parents. Existing directories are fine.
pub fn ensure_dir(dir: &Path) -> Result<(), AppError> {
    fs::create_dir_all(dir).map_err(|e| AppError::filesystem(dir, e))
}

pub fn write_text(path: &Path, content: &str) -> Result<(), AppError> {
    fs::write(path, content).map_err(|e| AppError::filesystem(path, e))
}

/// Write `file` below `base`, creating the intermediate directories its name implies.
pub fn write_template_file(base: &Path, file: &TemplateFile) -> Result<PathBuf, AppError> {
    let target = base.join(file.relative_path()?);
    if let Some(parent) = target.parent() {
        ensure_dir(parent)?;
    }
    write_text(&target, &file.content)?;
    Ok(target)
}

/// True when `dir` exists and has at least one entry.
pub fn is_non_empty_dir(dir: &Path) -> Result<bool, AppError> {
    if !dir.is_dir() {
        return Ok(false);
    }
    let mut entries = fs::read_dir(dir).map_err(|e| AppError::filesystem(dir, e))?;
    Ok(entries.next().is_some())
}
