use super::{Schema, Table};
use crate::{Error, Result};

use indexmap::IndexMap;

/// Collects table declarations, then resolves them into a [`Schema`].
///
/// Declaration and resolution are two separate phases: record fields may
/// name any table passed to [`Builder::table`], in any order, and the names
/// are only checked in [`Builder::build`].
#[derive(Debug, Default)]
pub struct Builder {
    tables: Vec<Table>,
}

impl Builder {
    pub fn table(&mut self, table: Table) -> &mut Self {
        self.tables.push(table);
        self
    }

    pub fn build(&mut self) -> Result<Schema> {
        let mut tables = IndexMap::with_capacity(self.tables.len());

        for table in self.tables.drain(..) {
            if table.name.is_empty() {
                return Err(Error::unset_name("table"));
            }

            if tables.contains_key(&table.name) {
                return Err(Error::invalid_schema(format!(
                    "table `{}` is declared twice",
                    table.name
                )));
            }

            tables.insert(table.name.clone(), table);
        }

        let schema = Schema { tables };
        schema.verify()?;
        Ok(schema)
    }
}
