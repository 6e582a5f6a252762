use std::collections::HashMap;
use std::env;

/// Caller-provided switch that asks pytest to write allure results.
pub const OPEN_ALLURE_ENV: &str = "TEST_OPEN_ALLURE";

#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub quiet: bool,
    pub verbose: u8,
    pub trace: bool,
    pub no_color: bool,
}

/// Read-only copy of the process environment taken once per invocation.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    #[must_use]
    pub fn capture() -> Self {
        // Non-UTF-8 entries can never match the keys we look up.
        let vars = env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect();
        Self { vars }
    }

    #[must_use]
    pub fn var(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Builds a snapshot from literal pairs without touching the real environment.
    #[must_use]
    pub fn testing(pairs: &[(&str, &str)]) -> Self {
        let vars = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Self { vars }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) test: TestConfig,
}

impl Config {
    #[must_use]
    pub fn from_snapshot(snapshot: &EnvSnapshot) -> Self {
        Self {
            test: TestConfig {
                // Only the exact literal counts; "1", "TRUE" and friends do not.
                open_allure: snapshot.var(OPEN_ALLURE_ENV) == Some("true"),
            },
        }
    }

    #[must_use]
    pub fn test(&self) -> &TestConfig {
        &self.test
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TestConfig {
    pub open_allure: bool,
}
