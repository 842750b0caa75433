//! Runtime launcher backed by `std::process::Command`.

use std::process::{Command, Stdio};

use crate::domain::AppError;
use crate::ports::{LaunchSpec, RuntimeLauncher};

/// Spawns the runtime with inherited stdio and waits for it to exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRuntimeLauncher;

impl RuntimeLauncher for ProcessRuntimeLauncher {
    fn launch(&self, spec: &LaunchSpec) -> Result<i32, AppError> {
        tracing::info!(program = %spec.program, args = ?spec.args, "launching runtime");

        let status = Command::new(&spec.program)
            .args(&spec.args)
            .current_dir(&spec.working_dir)
            .envs(spec.env.iter().map(|(key, value)| (key.as_str(), value.as_str())))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| AppError::Launch { program: spec.program.clone(), source })?;

        // Signal-terminated children have no code; report them as a generic failure.
        let code = status.code().unwrap_or(1);
        tracing::debug!(code, "runtime exited");
        Ok(code)
    }
}
