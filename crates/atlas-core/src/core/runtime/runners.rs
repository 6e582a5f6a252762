use std::path::Path;

use crate::process::{self, SpawnError};

/// Seam between command planning and the operating system.
pub trait CommandRunner {
    /// Runs `program` with inherited stdio, blocking until it exits.
    ///
    /// # Errors
    /// Returns a [`SpawnError`] when the program cannot be started or awaited.
    fn run_command_passthrough(
        &self,
        program: &str,
        args: &[String],
        envs: &[(String, String)],
        cwd: &Path,
    ) -> Result<crate::RunOutput, SpawnError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct HostCommandRunner;

impl CommandRunner for HostCommandRunner {
    fn run_command_passthrough(
        &self,
        program: &str,
        args: &[String],
        envs: &[(String, String)],
        cwd: &Path,
    ) -> Result<crate::RunOutput, SpawnError> {
        process::run_command_passthrough(program, args, envs, cwd)
    }
}
