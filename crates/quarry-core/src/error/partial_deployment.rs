use super::{Error, ErrorKind};

/// Error when a deploy stops after some of the table's statements were
/// already applied.
///
/// Deployment is not transactional. Statements before `statement_index`
/// remain in effect; the caller decides whether to retry the rest.
#[derive(Debug)]
pub(super) struct PartialDeployment {
    table: Box<str>,
    field: Option<Box<str>>,
    statement_index: usize,
}

impl std::error::Error for PartialDeployment {}

impl core::fmt::Display for PartialDeployment {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "deployment of table `{}` stopped at statement {}",
            self.table, self.statement_index
        )?;
        if let Some(field) = &self.field {
            write!(f, " (field `{field}`)")?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates a partial deployment error.
    ///
    /// `field` is `None` when the table definition itself failed.
    /// `statement_index` counts from zero over every statement the deploy
    /// submits, the table definition included.
    pub fn partial_deployment(
        table: impl Into<String>,
        field: Option<String>,
        statement_index: usize,
    ) -> Error {
        Error::from(ErrorKind::PartialDeployment(PartialDeployment {
            table: table.into().into(),
            field: field.map(Into::into),
            statement_index,
        }))
    }

    /// Returns `true` if this error is a partial deployment error.
    pub fn is_partial_deployment(&self) -> bool {
        matches!(self.kind(), ErrorKind::PartialDeployment(_))
    }

    /// The field whose statement failed during a partial deployment.
    pub fn failed_field(&self) -> Option<&str> {
        match self.kind() {
            ErrorKind::PartialDeployment(err) => err.field.as_deref(),
            _ => None,
        }
    }

    /// The index of the statement that failed during a partial deployment.
    pub fn statement_index(&self) -> Option<usize> {
        match self.kind() {
            ErrorKind::PartialDeployment(err) => Some(err.statement_index),
            _ => None,
        }
    }
}
