use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::{Config, EnvSnapshot, GlobalOptions};

pub struct CommandContext<'a> {
    pub global: &'a GlobalOptions,
    config: Config,
    working_dir: PathBuf,
}

impl<'a> CommandContext<'a> {
    /// Creates a command context from the live process environment and cwd.
    ///
    /// # Errors
    /// Returns an error if the current working directory cannot be resolved.
    pub fn new(global: &'a GlobalOptions) -> Result<Self> {
        let working_dir =
            std::env::current_dir().context("failed to resolve the current working directory")?;
        Ok(Self::from_parts(global, EnvSnapshot::capture(), working_dir))
    }

    /// Creates a context from an explicit snapshot and working directory.
    #[must_use]
    pub fn from_parts(global: &'a GlobalOptions, env: EnvSnapshot, working_dir: PathBuf) -> Self {
        let config = Config::from_snapshot(&env);
        Self {
            global,
            config,
            working_dir,
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }
}
