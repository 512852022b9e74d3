use super::Error;

/// Error when a value fails the field's declared type.
#[derive(Debug)]
pub(super) struct ValidationError {
    pub(super) kind: ValidationErrorKind,
}

#[derive(Debug)]
pub(super) enum ValidationErrorKind {
    /// Value does not fit the field's type clause
    TypeMismatch {
        table: Box<str>,
        field: Box<str>,
        expected: Box<str>,
        found: &'static str,
    },

    /// A required field is absent from a create
    MissingField { table: Box<str>, field: Box<str> },
}

impl std::error::Error for ValidationError {}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.kind {
            ValidationErrorKind::TypeMismatch {
                table,
                field,
                expected,
                found,
            } => write!(
                f,
                "value for `{table}.{field}` does not match type `{expected}` (found {found})"
            ),
            ValidationErrorKind::MissingField { table, field } => {
                write!(f, "missing required field `{table}.{field}`")
            }
        }
    }
}

impl Error {
    /// Creates a type mismatch validation error.
    pub fn validation_type_mismatch(
        table: impl Into<String>,
        field: impl Into<String>,
        expected: impl Into<String>,
        found: &'static str,
    ) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            kind: ValidationErrorKind::TypeMismatch {
                table: table.into().into(),
                field: field.into().into(),
                expected: expected.into().into(),
                found,
            },
        }))
    }

    /// Creates a missing field validation error.
    pub fn validation_missing_field(table: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            kind: ValidationErrorKind::MissingField {
                table: table.into().into(),
                field: field.into().into(),
            },
        }))
    }

    /// Returns `true` if this error is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Validation(_))
    }
}
