use std::{
    io,
    path::Path,
    process::{Command, ExitStatus, Stdio},
};

use thiserror::Error;

/// Shell convention for "command not found".
pub const EXIT_EXECUTABLE_NOT_FOUND: i32 = 127;
/// Shell convention for "found but could not be executed".
pub const EXIT_SPAWN_FAILED: i32 = 126;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutput {
    pub code: i32,
    /// Terminating signal when the child was killed rather than exiting.
    pub signal: Option<i32>,
}

/// Infrastructure failures that happen before a child can report a status.
#[derive(Debug, Error)]
pub enum SpawnError {
    #[error("`{program}` was not found on PATH")]
    ExecutableNotFound { program: String },
    #[error("failed to start `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to wait for `{program}`")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl SpawnError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            SpawnError::ExecutableNotFound { .. } => EXIT_EXECUTABLE_NOT_FOUND,
            SpawnError::Spawn { .. } | SpawnError::Wait { .. } => EXIT_SPAWN_FAILED,
        }
    }

    #[must_use]
    pub fn reason(&self) -> &'static str {
        match self {
            SpawnError::ExecutableNotFound { .. } => "executable_not_found",
            SpawnError::Spawn { .. } => "spawn_failed",
            SpawnError::Wait { .. } => "wait_failed",
        }
    }

    #[must_use]
    pub fn program(&self) -> &str {
        match self {
            SpawnError::ExecutableNotFound { program }
            | SpawnError::Spawn { program, .. }
            | SpawnError::Wait { program, .. } => program,
        }
    }
}

/// Execute a program with inherited stdio and block until it exits.
///
/// The child inherits the parent environment plus `envs`.
///
/// # Errors
///
/// Returns [`SpawnError::ExecutableNotFound`] when the program cannot be
/// located and another [`SpawnError`] variant when it cannot be started or
/// waited on.
pub fn run_command_passthrough(
    program: &str,
    args: &[String],
    envs: &[(String, String)],
    cwd: &Path,
) -> Result<RunOutput, SpawnError> {
    let mut command = configured_command(program, args, envs, cwd);
    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());

    let mut child = command.spawn().map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            SpawnError::ExecutableNotFound {
                program: program.to_string(),
            }
        } else {
            SpawnError::Spawn {
                program: program.to_string(),
                source,
            }
        }
    })?;
    let status = child.wait().map_err(|source| SpawnError::Wait {
        program: program.to_string(),
        source,
    })?;
    Ok(run_output_from_status(status))
}

fn configured_command(
    program: &str,
    args: &[String],
    envs: &[(String, String)],
    cwd: &Path,
) -> Command {
    let mut command = Command::new(program);
    command.args(args);
    for (key, value) in envs {
        command.env(key, value);
    }
    command.current_dir(cwd);
    command
}

#[cfg(unix)]
fn run_output_from_status(status: ExitStatus) -> RunOutput {
    use std::os::unix::process::ExitStatusExt;

    match (status.code(), status.signal()) {
        (Some(code), _) => RunOutput { code, signal: None },
        // Shell-style: 128 + signal number.
        (None, Some(signal)) => RunOutput {
            code: 128 + signal,
            signal: Some(signal),
        },
        (None, None) => RunOutput {
            code: -1,
            signal: None,
        },
    }
}

#[cfg(not(unix))]
fn run_output_from_status(status: ExitStatus) -> RunOutput {
    RunOutput {
        code: status.code().unwrap_or(-1),
        signal: None,
    }
}
