use super::{Error, ErrorKind};
use crate::stmt::Bindings;

/// Error when the execution backend rejects a compiled statement.
///
/// The backend's own error is attached as the cause. The statement text and
/// its bindings are kept so callers can log or retry the exact statement.
#[derive(Debug)]
pub(super) struct ExecutionFailed {
    statement: Box<str>,
    bindings: Bindings,
}

impl std::error::Error for ExecutionFailed {}

impl core::fmt::Display for ExecutionFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "failed to execute `{}`", self.statement)
    }
}

impl Error {
    /// Creates an execution failure error for `statement`.
    ///
    /// Attach it to the backend error with [`Error::context`].
    pub fn execution_failed(statement: impl Into<String>, bindings: Bindings) -> Error {
        Error::from(ErrorKind::ExecutionFailed(ExecutionFailed {
            statement: statement.into().into(),
            bindings,
        }))
    }

    /// Returns `true` if this error is an execution failure.
    pub fn is_execution_failed(&self) -> bool {
        matches!(self.kind(), ErrorKind::ExecutionFailed(_))
    }

    /// The statement text of the first execution failure in the context chain.
    pub fn statement(&self) -> Option<&str> {
        self.execution_failure().map(|err| &*err.statement)
    }

    /// The bindings of the first execution failure in the context chain.
    pub fn bindings(&self) -> Option<&Bindings> {
        self.execution_failure().map(|err| &err.bindings)
    }

    fn execution_failure(&self) -> Option<&ExecutionFailed> {
        self.chain().find_map(|err| match err.kind() {
            ErrorKind::ExecutionFailed(err) => Some(err),
            _ => None,
        })
    }
}
