use super::{Error, ErrorKind};

/// A rejected schema, statement or backend result, described by a message.
///
/// - schema: a field registered on a second table, two tables sharing a
///   name, or a record field naming a table that was never declared
/// - statement: a query object naming an undeclared field, or an update
///   with no assignments
/// - result: a backend answer without the result set a statement implies
#[derive(Debug)]
pub(super) struct Invalid {
    what: &'static str,
    message: Box<str>,
}

impl Invalid {
    fn new(what: &'static str, message: String) -> Invalid {
        Invalid {
            what,
            message: message.into(),
        }
    }
}

impl std::error::Error for Invalid {}

impl core::fmt::Display for Invalid {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid {}: {}", self.what, self.message)
    }
}

impl Error {
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(ErrorKind::InvalidSchema(Invalid::new("schema", message.into())))
    }

    pub fn invalid_statement(message: impl Into<String>) -> Error {
        Error::from(ErrorKind::InvalidStatement(Invalid::new(
            "statement",
            message.into(),
        )))
    }

    /// The backend answered with something other than what the statement
    /// implies, such as no result set at all.
    pub fn invalid_result(message: impl Into<String>) -> Error {
        Error::from(ErrorKind::InvalidResult(Invalid::new("result", message.into())))
    }

    pub fn is_invalid_schema(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidSchema(_))
    }

    pub fn is_invalid_statement(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidStatement(_))
    }

    pub fn is_invalid_result(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidResult(_))
    }
}
