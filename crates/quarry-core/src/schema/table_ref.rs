use super::Table;

/// The target of a record field.
///
/// Both variants carry only the table name; the schema resolves it when
/// statements are compiled. `Deferred` marks a table that did not exist yet
/// when the reference was written, which is how two tables link to each
/// other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRef {
    /// Taken from a table value that already existed
    Table(String),

    /// Named ahead of the table's declaration
    Deferred(String),
}

impl TableRef {
    pub fn deferred(name: impl Into<String>) -> TableRef {
        TableRef::Deferred(name.into())
    }

    pub fn name(&self) -> &str {
        match self {
            TableRef::Table(name) | TableRef::Deferred(name) => name,
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, TableRef::Deferred(_))
    }
}

impl From<&Table> for TableRef {
    fn from(src: &Table) -> Self {
        TableRef::Table(src.name.clone())
    }
}
