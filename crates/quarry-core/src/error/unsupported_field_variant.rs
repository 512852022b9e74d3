use super::Error;

/// Error when a field variant has no type keyword to compile to.
///
/// None of the built-in field kinds hit this in a well-formed schema; it
/// signals a broken invariant (for instance a record field whose target
/// list was emptied).
#[derive(Debug)]
pub(super) struct UnsupportedFieldVariant {
    variant: Box<str>,
}

impl std::error::Error for UnsupportedFieldVariant {}

impl core::fmt::Display for UnsupportedFieldVariant {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "field variant `{}` has no type keyword", self.variant)
    }
}

impl Error {
    /// Creates an unsupported field variant error.
    pub fn unsupported_field_variant(variant: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedFieldVariant(
            UnsupportedFieldVariant {
                variant: variant.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an unsupported field variant error.
    pub fn is_unsupported_field_variant(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedFieldVariant(_))
    }
}
