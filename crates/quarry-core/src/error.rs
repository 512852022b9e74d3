mod adhoc;
mod driver_operation_failed;
mod duplicate_field;
mod execution_failed;
mod invalid;
mod partial_deployment;
mod unbound_expression;
mod unset_name;
mod unsupported_field_variant;
mod validation;

use adhoc::AdhocError;
use driver_operation_failed::DriverOperationFailed;
use duplicate_field::DuplicateField;
use execution_failed::ExecutionFailed;
use invalid::Invalid;
use partial_deployment::PartialDeployment;
use std::sync::Arc;
use unbound_expression::UnboundExpression;
use unset_name::UnsetName;
use unsupported_field_variant::UnsupportedFieldVariant;
use validation::ValidationError;

/// Returns early with an ad-hoc [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::err!($($arg)*))
    };
}

/// Builds an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur in Quarry.
///
/// Errors raised before anything reaches the database (unset names,
/// duplicate fields, unbound expressions, schema and statement validation)
/// are "local" and indicate a bug in how the schema or query was put
/// together. Errors raised by the execution backend are wrapped in an
/// execution-failure error that keeps the statement text and bindings.
///
/// An error may carry a cause. [`Error::context`] builds that chain and
/// `Display` renders it outermost first: `outer: inner: root`.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Wraps `self` as the cause of `consequent`.
    pub fn context(self, consequent: impl IntoError) -> Error {
        let mut outer = consequent.into_error();

        match Arc::get_mut(&mut outer.inner) {
            Some(inner) if inner.cause.is_none() => {
                inner.cause = Some(self);
                outer
            }
            // `outer` is shared or already has a cause; keep its message
            // and start a fresh link
            _ => Error {
                inner: Arc::new(ErrorInner {
                    kind: ErrorKind::Adhoc(AdhocError::new(outer.to_string())),
                    cause: Some(self),
                }),
            },
        }
    }

    /// Returns the error this one was raised in consequence of, if any.
    pub fn cause(&self) -> Option<&Error> {
        self.inner.cause.as_ref()
    }

    /// Returns the innermost error of the context chain.
    pub fn root(&self) -> &Error {
        self.chain().fold(self, |_, err| err)
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        std::iter::successors(Some(self), |err| err.cause())
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }

    /// Returns `true` if the error was raised before any statement reached
    /// the execution backend.
    pub fn is_local(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::UnsetName(_)
                | ErrorKind::DuplicateField(_)
                | ErrorKind::UnboundExpression(_)
                | ErrorKind::UnsupportedFieldVariant(_)
                | ErrorKind::InvalidSchema(_)
                | ErrorKind::InvalidStatement(_)
                | ErrorKind::Validation(_)
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::DriverOperationFailed(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => self.cause().map(|err| err as _),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut sep = "";
        for err in self.chain() {
            write!(f, "{sep}{}", err.kind())?;
            sep = ": ";
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    /// `{:?}` prints the same chain as `Display`; `{:#?}` prints the
    /// structure.
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if f.alternate() {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        } else {
            core::fmt::Display::fmt(self, f)
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    DriverOperationFailed(DriverOperationFailed),
    DuplicateField(DuplicateField),
    ExecutionFailed(ExecutionFailed),
    InvalidResult(Invalid),
    InvalidSchema(Invalid),
    InvalidStatement(Invalid),
    PartialDeployment(PartialDeployment),
    UnboundExpression(UnboundExpression),
    UnsetName(UnsetName),
    UnsupportedFieldVariant(UnsupportedFieldVariant),
    Validation(ValidationError),
}

impl ErrorKind {
    fn message(&self) -> &dyn core::fmt::Display {
        match self {
            ErrorKind::Anyhow(err) => err,
            ErrorKind::Adhoc(err) => err,
            ErrorKind::DriverOperationFailed(err) => err,
            ErrorKind::DuplicateField(err) => err,
            ErrorKind::ExecutionFailed(err) => err,
            ErrorKind::InvalidResult(err) => err,
            ErrorKind::InvalidSchema(err) => err,
            ErrorKind::InvalidStatement(err) => err,
            ErrorKind::PartialDeployment(err) => err,
            ErrorKind::UnboundExpression(err) => err,
            ErrorKind::UnsetName(err) => err,
            ErrorKind::UnsupportedFieldVariant(err) => err,
            ErrorKind::Validation(err) => err,
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self.message(), f)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(ErrorInner { kind, cause: None }),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Values that can stand as the outer error of [`Error::context`].
pub trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    fn into_error(self) -> Error {
        self
    }
}
