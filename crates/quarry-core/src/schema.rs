mod builder;
pub use builder::Builder;

mod check;

mod expression;
pub use expression::Expression;

mod field;
pub use field::{DefaultValue, Field, FieldKind};

pub mod func;

mod permissions;
pub use permissions::{Permissions, Rule};

mod table;
pub use table::Table;

mod table_ref;
pub use table_ref::TableRef;

mod verify;

use crate::{Error, Result};

use indexmap::IndexMap;

/// Every table declared for one database, keyed by table name.
///
/// A schema is only produced by [`Builder::build`], which runs after every
/// table has been declared. That ordering is what lets record fields name
/// tables declared later in source.
#[derive(Debug, Default, Clone)]
pub struct Schema {
    tables: IndexMap<String, Table>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Tables in declaration order.
    pub fn tables(&self) -> impl ExactSizeIterator<Item = &Table> + '_ {
        self.tables.values()
    }

    /// Resolves a record field's target to the registered table.
    ///
    /// Deferred references are looked up here, at compile time, rather than
    /// when the reference was written.
    pub fn resolve(&self, target: &TableRef) -> Result<&Table> {
        self.tables.get(target.name()).ok_or_else(|| {
            Error::invalid_schema(format!(
                "record field references unknown table `{}`",
                target.name()
            ))
        })
    }
}
