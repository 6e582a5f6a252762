#![deny(clippy::all)]

mod core;

pub(crate) use crate::core::config;
pub(crate) use crate::core::runtime::{process, runners};
pub(crate) use crate::core::tooling::outcome;

pub use crate::core::config::context::CommandContext;
pub use crate::core::config::{Config, EnvSnapshot, GlobalOptions, TestConfig, OPEN_ALLURE_ENV};
pub use crate::core::runtime::preprocess::{
    build_pytest_invocation, config_path, execute_plan, prepare_plan, ConfigProbe, ProcessPlan,
    ProcessRequest, PytestInvocation, ALLURE_RESULTS_DIR, CONFIG_DIR, DEFAULT_MARKERS,
    ENVIRONMENT_ENV, MARKERS_ENV, PYTEST_PROGRAM, REGION_ENV,
};
pub use crate::core::runtime::process::{
    RunOutput, SpawnError, EXIT_EXECUTABLE_NOT_FOUND, EXIT_SPAWN_FAILED,
};
pub use crate::core::runtime::runners::{CommandRunner, HostCommandRunner};
pub use crate::core::runtime::EnvPairs;
pub use crate::core::tooling::outcome::{CommandStatus, ExecutionOutcome, USAGE_EXIT_CODE};
