use crate::{Error, Result};

/// Opaque server-side expression text, such as `time::now()` or
/// `$value > 0`.
///
/// The text is emitted verbatim wherever the expression is used. An
/// expression without text cannot be compiled.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Expression {
    raw: Option<String>,
}

impl Expression {
    /// An expression whose text has not been set yet.
    pub fn new() -> Expression {
        Expression::default()
    }

    pub fn raw(text: impl Into<String>) -> Expression {
        Expression::new().with_raw(text)
    }

    pub fn with_raw(mut self, text: impl Into<String>) -> Expression {
        self.raw = Some(text.into());
        self
    }

    pub fn is_bound(&self) -> bool {
        matches!(&self.raw, Some(raw) if !raw.is_empty())
    }

    /// The expression text, or an unbound expression error.
    pub fn to_sql(&self) -> Result<&str> {
        match &self.raw {
            Some(raw) if !raw.is_empty() => Ok(raw),
            _ => Err(Error::unbound_expression()),
        }
    }
}

impl From<&str> for Expression {
    fn from(src: &str) -> Self {
        Expression::raw(src)
    }
}

impl From<String> for Expression {
    fn from(src: String) -> Self {
        Expression::raw(src)
    }
}
