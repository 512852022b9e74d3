use super::Error;

/// Error when a table or field is compiled without a name.
///
/// Field names are assigned by the table that owns the field. A field
/// registered on its own (outside of the table constructor) has to be
/// named explicitly first.
#[derive(Debug)]
pub(super) struct UnsetName {
    what: &'static str,
}

impl std::error::Error for UnsetName {}

impl core::fmt::Display for UnsetName {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{} name not set", self.what)
    }
}

impl Error {
    /// Creates an unset name error. `what` is either `"table"` or `"field"`.
    pub fn unset_name(what: &'static str) -> Error {
        Error::from(super::ErrorKind::UnsetName(UnsetName { what }))
    }

    /// Returns `true` if this error is an unset name error.
    pub fn is_unset_name(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsetName(_))
    }
}
