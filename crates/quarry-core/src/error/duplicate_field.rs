use super::Error;

/// Error when a field name is registered twice on the same table.
#[derive(Debug)]
pub(super) struct DuplicateField {
    table: Box<str>,
    field: Box<str>,
}

impl std::error::Error for DuplicateField {}

impl core::fmt::Display for DuplicateField {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "field `{}` is already defined on table `{}`",
            self.field, self.table
        )
    }
}

impl Error {
    /// Creates a duplicate field error.
    pub fn duplicate_field(table: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DuplicateField(DuplicateField {
            table: table.into().into(),
            field: field.into().into(),
        }))
    }

    /// Returns `true` if this error is a duplicate field error.
    pub fn is_duplicate_field(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DuplicateField(_))
    }
}
