use std::time::Duration;

/// Execution hints appended to a select or update statement.
///
/// These only become text in the statement; the compiler itself never
/// times out.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExecOptions {
    /// Rendered as `TIMEOUT <ms>ms`
    pub timeout: Option<Duration>,

    /// Rendered as `PARALLEL` when `Some(true)`
    pub parallel: Option<bool>,
}

impl ExecOptions {
    pub fn timeout(mut self, timeout: Duration) -> ExecOptions {
        self.timeout = Some(timeout);
        self
    }

    pub fn parallel(mut self, parallel: bool) -> ExecOptions {
        self.parallel = Some(parallel);
        self
    }

    /// Fills every unset option from `defaults`.
    pub fn or(self, defaults: ExecOptions) -> ExecOptions {
        ExecOptions {
            timeout: self.timeout.or(defaults.timeout),
            parallel: self.parallel.or(defaults.parallel),
        }
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel.unwrap_or(false)
    }
}
