//! The `process` command: publish the target environment to pytest, probe for
//! an environment config file, run pytest, and report its exit status.
//!
//! Work is split into [`prepare_plan`], which never spawns anything, and
//! [`execute_plan`], which runs the planned command through a
//! [`CommandRunner`]. Callers announce the plan in between so that progress
//! notices always precede pytest's own output.

use std::path::{Path, PathBuf};

use serde_json::json;
use tracing::debug;

use super::EnvPairs;
use crate::outcome::{ExecutionOutcome, USAGE_EXIT_CODE};
use crate::process::SpawnError;
use crate::runners::CommandRunner;
use crate::{CommandContext, TestConfig};

pub const DEFAULT_MARKERS: &str = "bdd";
pub const PYTEST_PROGRAM: &str = "pytest";
pub const ALLURE_RESULTS_DIR: &str = "allure-results";
pub const CONFIG_DIR: &str = "config";

pub const ENVIRONMENT_ENV: &str = "TEST_ENVIRONMENT";
pub const REGION_ENV: &str = "TEST_REGION";
pub const MARKERS_ENV: &str = "TEST_MARKERS";

const PYTEST_BASE_ARGS: [&str; 2] = ["--tb=short", "-v"];

#[derive(Clone, Debug)]
pub struct ProcessRequest {
    pub environment: String,
    pub region: String,
    pub markers: String,
    /// Forwarded to pytest verbatim after the generated flags.
    pub extra_args: Vec<String>,
    pub dry_run: bool,
}

impl ProcessRequest {
    pub fn new(environment: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            region: region.into(),
            markers: DEFAULT_MARKERS.to_string(),
            extra_args: Vec::new(),
            dry_run: false,
        }
    }

    #[must_use]
    pub fn with_markers(mut self, markers: impl Into<String>) -> Self {
        self.markers = markers.into();
        self
    }

    /// Variables the child sees in addition to the inherited environment.
    #[must_use]
    pub fn child_envs(&self) -> EnvPairs {
        vec![
            (ENVIRONMENT_ENV.to_string(), self.environment.clone()),
            (REGION_ENV.to_string(), self.region.clone()),
            (MARKERS_ENV.to_string(), self.markers.clone()),
        ]
    }

    fn validate(&self) -> Result<(), ExecutionOutcome> {
        let fields = [
            ("environment", &self.environment),
            ("region", &self.region),
            ("markers", &self.markers),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ExecutionOutcome::user_error(
                    format!("--{name} must not be empty"),
                    json!({
                        "reason": "empty_parameter",
                        "parameter": name,
                        "hint": format!("Pass a non-empty value with --{name}."),
                    }),
                )
                .with_code(USAGE_EXIT_CODE));
            }
        }
        Ok(())
    }
}

/// Result of looking for `config/<environment>.yaml`. The file is never read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigProbe {
    Found(PathBuf),
    Missing(PathBuf),
}

impl ConfigProbe {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigProbe::Found(path) | ConfigProbe::Missing(path) => path,
        }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, ConfigProbe::Found(_))
    }
}

/// Relative location of the config file for `environment`.
#[must_use]
pub fn config_path(environment: &str) -> PathBuf {
    PathBuf::from(format!("{CONFIG_DIR}/{environment}.yaml"))
}

fn probe_config(working_dir: &Path, environment: &str) -> ConfigProbe {
    let relative = config_path(environment);
    if working_dir.join(&relative).exists() {
        ConfigProbe::Found(relative)
    } else {
        ConfigProbe::Missing(relative)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PytestInvocation {
    pub program: String,
    pub args: Vec<String>,
}

impl PytestInvocation {
    /// Space-joined rendering for humans; the child receives `args` as argv.
    #[must_use]
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Assembles `pytest --tb=short -v -m=<markers> [--alluredir=...] [extra...]`.
///
/// `markers` is passed as a single argv token and never goes through a shell,
/// so spaces and shell metacharacters reach pytest unchanged.
#[must_use]
pub fn build_pytest_invocation(request: &ProcessRequest, test: &TestConfig) -> PytestInvocation {
    let mut args: Vec<String> = PYTEST_BASE_ARGS.iter().map(ToString::to_string).collect();
    args.push(format!("-m={}", request.markers));
    if test.open_allure {
        args.push(format!("--alluredir={ALLURE_RESULTS_DIR}"));
    }
    args.extend(request.extra_args.iter().cloned());
    PytestInvocation {
        program: PYTEST_PROGRAM.to_string(),
        args,
    }
}

#[derive(Clone, Debug)]
pub struct ProcessPlan {
    pub request: ProcessRequest,
    pub config: ConfigProbe,
    pub invocation: PytestInvocation,
    pub envs: EnvPairs,
    pub working_dir: PathBuf,
}

/// Validates the request and resolves everything needed to run pytest.
///
/// # Errors
/// Returns a user-error outcome when a parameter is blank.
pub fn prepare_plan(
    ctx: &CommandContext,
    request: ProcessRequest,
) -> Result<ProcessPlan, ExecutionOutcome> {
    request.validate()?;

    let config = probe_config(ctx.working_dir(), &request.environment);
    match &config {
        ConfigProbe::Found(path) => debug!(path = %path.display(), "environment config present"),
        ConfigProbe::Missing(path) => {
            debug!(path = %path.display(), "environment config missing; using defaults");
        }
    }
    if request.markers.chars().any(char::is_whitespace) {
        debug!(markers = %request.markers, "markers contain whitespace; passed as one token");
    }

    let invocation = build_pytest_invocation(&request, ctx.config().test());
    let envs = request.child_envs();
    debug!(command = %invocation.command_line(), ?envs, "planned pytest invocation");

    Ok(ProcessPlan {
        request,
        config,
        invocation,
        envs,
        working_dir: ctx.working_dir().to_path_buf(),
    })
}

/// Runs the planned pytest command and maps its status to an outcome.
///
/// The returned outcome always carries the exit code to forward: pytest's own
/// code, `128 + signal` for killed children, or a reserved code when pytest
/// could not be started.
#[must_use]
pub fn execute_plan(runner: &dyn CommandRunner, plan: &ProcessPlan) -> ExecutionOutcome {
    let command = plan.invocation.command_line();
    if plan.request.dry_run {
        return ExecutionOutcome::success(
            format!("Would run: {command}"),
            json!({
                "dry_run": true,
                "runner": plan.invocation.program,
                "args": plan.invocation.args,
            }),
        )
        .with_code(0);
    }

    let result = runner.run_command_passthrough(
        &plan.invocation.program,
        &plan.invocation.args,
        &plan.envs,
        &plan.working_dir,
    );
    match result {
        Ok(output) => {
            debug!(code = output.code, signal = ?output.signal, "pytest exited");
            let details = json!({
                "runner": plan.invocation.program,
                "args": plan.invocation.args,
                "code": output.code,
                "signal": output.signal,
                "passthrough": true,
            });
            if output.code == 0 {
                ExecutionOutcome::success("pytest ok", details).with_code(0)
            } else {
                ExecutionOutcome::failure(format!("pytest failed (exit {})", output.code), details)
                    .with_code(output.code)
            }
        }
        Err(err) => {
            debug!(error = %err, "could not run pytest");
            let hint = match &err {
                SpawnError::ExecutableNotFound { program } => format!(
                    "Install pytest into the active environment or put `{program}` on PATH."
                ),
                other => format!("Check that `{}` is executable.", other.program()),
            };
            let source = std::error::Error::source(&err).map(ToString::to_string);
            ExecutionOutcome::failure(
                err.to_string(),
                json!({
                    "runner": plan.invocation.program,
                    "args": plan.invocation.args,
                    "reason": err.reason(),
                    "error": source,
                    "hint": hint,
                }),
            )
            .with_code(err.exit_code())
        }
    }
}
