mod builder;
pub use builder::Builder;

mod table;
pub use table::TableHandle;

use crate::{Bindings, Error, ExecOptions, Result, Schema, Statement};

use quarry_core::driver::{Driver, Response};
use quarry_sql::Serializer;

use std::sync::Arc;
use tracing::{debug, info};

/// A handle to one database: the resolved schema plus the driver that runs
/// statements against it.
///
/// Cloning is cheap; clones share the schema and driver.
#[derive(Debug, Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    schema: Schema,
    driver: Arc<dyn Driver>,

    /// Options applied to every select and update that leaves them unset
    defaults: ExecOptions,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn schema(&self) -> &Schema {
        &self.shared.schema
    }

    /// Returns a handle for querying and deploying the named table.
    pub fn table(&self, name: &str) -> Result<TableHandle<'_>> {
        let table = self
            .shared
            .schema
            .table(name)
            .ok_or_else(|| Error::invalid_statement(format!("unknown table `{name}`")))?;

        Ok(TableHandle::new(self, table))
    }

    /// Deploys every table, in declaration order. Stops at the first table
    /// that fails.
    pub async fn deploy(&self) -> Result<()> {
        info!(tables = self.shared.schema.tables().len(), "deploying schema");

        for table in self.shared.schema.tables() {
            TableHandle::new(self, table).deploy().await?;
        }

        info!("schema deployed");
        Ok(())
    }

    /// Compiles `stmt` to statement text and its bindings without running it.
    pub fn compile(&self, stmt: &Statement) -> Result<(String, Bindings)> {
        let mut bindings = Bindings::new();
        let sql = Serializer::new(&self.shared.schema).serialize(stmt, &mut bindings)?;
        Ok((sql, bindings))
    }

    /// Runs an already compiled statement.
    ///
    /// Driver failures are wrapped in an execution-failed error carrying the
    /// statement text and bindings.
    pub(crate) async fn exec_compiled(&self, sql: String, bindings: Bindings) -> Result<Response> {
        debug!(statement = %sql, bindings = bindings.len(), "executing statement");

        match self.shared.driver.exec(&sql, &bindings).await {
            Ok(response) => Ok(response),
            Err(err) => Err(err.context(Error::execution_failed(sql, bindings))),
        }
    }

    /// Compiles and runs `stmt`.
    pub async fn exec(&self, stmt: &Statement) -> Result<Response> {
        let (sql, bindings) = self.compile(stmt)?;
        self.exec_compiled(sql, bindings).await
    }

    fn defaults(&self) -> ExecOptions {
        self.shared.defaults
    }
}
