use super::Error;

/// Error when an expression is compiled before its raw text was set.
#[derive(Debug)]
pub(super) struct UnboundExpression;

impl std::error::Error for UnboundExpression {}

impl core::fmt::Display for UnboundExpression {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("expression compiled before its text was set")
    }
}

impl Error {
    /// Creates an unbound expression error.
    pub fn unbound_expression() -> Error {
        Error::from(super::ErrorKind::UnboundExpression(UnboundExpression))
    }

    /// Returns `true` if this error is an unbound expression error.
    pub fn is_unbound_expression(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnboundExpression(_))
    }
}
