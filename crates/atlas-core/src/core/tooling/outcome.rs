use serde_json::Value;

/// Exit code for rejected invocations; matches clap's usage-error code.
pub const USAGE_EXIT_CODE: i32 = 2;

#[derive(Debug, Clone)]
pub struct ExecutionOutcome {
    pub status: CommandStatus,
    pub message: String,
    pub code: Option<i32>,
    pub details: Value,
}

impl ExecutionOutcome {
    pub fn success(message: impl Into<String>, details: Value) -> Self {
        Self {
            status: CommandStatus::Ok,
            message: message.into(),
            code: None,
            details,
        }
    }

    pub fn failure(message: impl Into<String>, details: Value) -> Self {
        Self {
            status: CommandStatus::Failure,
            message: message.into(),
            code: None,
            details,
        }
    }

    pub fn user_error(message: impl Into<String>, details: Value) -> Self {
        Self {
            status: CommandStatus::UserError,
            message: message.into(),
            code: None,
            details,
        }
    }

    #[must_use]
    pub fn with_code(mut self, code: i32) -> Self {
        self.code = Some(code);
        self
    }

    /// Process exit code for this outcome; an explicit code always wins.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.code.unwrap_or(match self.status {
            CommandStatus::Ok => 0,
            CommandStatus::UserError => USAGE_EXIT_CODE,
            CommandStatus::Failure => 1,
        })
    }

    #[must_use]
    pub fn detail_str(&self, key: &str) -> Option<&str> {
        self.details
            .as_object()
            .and_then(|map| map.get(key))
            .and_then(Value::as_str)
    }

    /// True when the child already wrote its own output to the terminal.
    #[must_use]
    pub fn is_passthrough(&self) -> bool {
        self.details
            .as_object()
            .and_then(|map| map.get("passthrough"))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Ok,
    UserError,
    Failure,
}
