//! allcount: scaffold AllcountJS applications from remote templates and run them locally.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{InitOptions, InitOutcome, RunOptions, init, init_at, run, run_at};
pub use domain::{AppError, ProjectManifest, ScaffoldRequest, ShellFlavor, TemplateFile};
