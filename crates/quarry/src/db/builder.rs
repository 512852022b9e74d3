use super::{Db, Shared};
use crate::{ExecOptions, Result, Table};

use quarry_core::{driver::Driver, schema};

use std::sync::Arc;

/// Declares the tables of a [`Db`], then resolves them against a driver.
#[derive(Debug, Default)]
pub struct Builder {
    /// Schema builder
    core: schema::Builder,

    defaults: ExecOptions,
}

impl Builder {
    /// Declares a table. Record fields may reference tables declared before
    /// or after this one.
    pub fn table(&mut self, table: Table) -> &mut Self {
        self.core.table(table);
        self
    }

    /// Execution options applied to every select and update that does not
    /// set its own.
    pub fn default_options(&mut self, defaults: ExecOptions) -> &mut Self {
        self.defaults = defaults;
        self
    }

    /// Resolves every declared table and returns a handle backed by
    /// `driver`. Fails if a record field names a table that was never
    /// declared.
    pub fn build(&mut self, driver: impl Driver) -> Result<Db> {
        let schema = self.core.build()?;

        Ok(Db {
            shared: Arc::new(Shared {
                schema,
                driver: Arc::new(driver),
                defaults: self.defaults,
            }),
        })
    }
}
