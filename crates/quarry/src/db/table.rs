use super::Db;
use crate::{Bindings, Create, Error, Result, Select, Statement, Table, Update, Value};

use tracing::{info, warn};

/// Queries and deploys one table of a [`Db`].
///
/// Every operation validates its input against the table's fields before
/// compiling, so a typo in a field name fails locally instead of reaching
/// the database.
#[derive(Debug, Clone, Copy)]
pub struct TableHandle<'a> {
    db: &'a Db,
    table: &'a Table,
}

impl<'a> TableHandle<'a> {
    pub(super) fn new(db: &'a Db, table: &'a Table) -> TableHandle<'a> {
        TableHandle { db, table }
    }

    pub fn name(&self) -> &'a str {
        &self.table.name
    }

    /// The schema definition of this table.
    pub fn schema(&self) -> &'a Table {
        self.table
    }

    /// Defines the table and each of its fields on the database.
    ///
    /// Every statement is compiled up front, so a local error leaves the
    /// database untouched. Statements are then submitted one at a time. The
    /// deploy is not transactional: if statement `n` fails, statements
    /// `0..n` stay in effect and the error is a partial-deployment error
    /// naming the failed field and statement index.
    pub async fn deploy(&self) -> Result<()> {
        let stmts = Statement::definitions(self.table);

        let compiled = stmts
            .iter()
            .map(|stmt| self.db.compile(stmt))
            .collect::<Result<Vec<_>>>()?;

        info!(table = %self.table.name, statements = compiled.len(), "deploying table");

        for (index, (stmt, (sql, bindings))) in stmts.iter().zip(compiled).enumerate() {
            if let Err(err) = self.db.exec_compiled(sql, bindings).await {
                warn!(
                    table = %self.table.name,
                    statement_index = index,
                    "deployment stopped"
                );
                return Err(err.context(Error::partial_deployment(
                    &self.table.name,
                    stmt.field().map(str::to_string),
                    index,
                )));
            }
        }

        info!(table = %self.table.name, "table deployed");
        Ok(())
    }

    /// Runs `query` and returns the matching records.
    pub async fn find_many(&self, query: Select) -> Result<Vec<Value>> {
        let (sql, bindings) = self.compile_select(query)?;
        self.db.exec_compiled(sql, bindings).await?.into_first()
    }

    /// Runs `query` limited to one record.
    pub async fn find_first(&self, query: Select) -> Result<Option<Value>> {
        let rows = self.find_many(query.limit(1)).await?;
        Ok(rows.into_iter().next())
    }

    /// Applies `update` and returns what its `RETURN` clause selects.
    pub async fn update(&self, update: Update) -> Result<Vec<Value>> {
        let (sql, bindings) = self.compile_update(update)?;
        self.db.exec_compiled(sql, bindings).await?.into_first()
    }

    /// Creates one record and returns it as stored.
    pub async fn create(&self, create: Create) -> Result<Value> {
        let (sql, bindings) = self.compile_create(create)?;
        let rows = self.db.exec_compiled(sql, bindings).await?.into_first()?;

        rows.into_iter()
            .next()
            .ok_or_else(|| Error::invalid_result("create returned no record"))
    }

    /// Creates each record with its own statement.
    ///
    /// The batch is not atomic and does not stop at a failure: every record
    /// is attempted and the result for each is returned in input order.
    pub async fn create_many(&self, creates: impl IntoIterator<Item = Create>) -> Vec<Result<Value>> {
        let mut results = vec![];

        for (index, create) in creates.into_iter().enumerate() {
            let result = self.create(create).await;

            if let Err(err) = &result {
                warn!(table = %self.table.name, index, error = %err, "batch create failed");
            }

            results.push(result);
        }

        results
    }

    /// Compiles `query` without running it. Unset execution options are
    /// filled from the database defaults.
    pub fn compile_select(&self, mut query: Select) -> Result<(String, Bindings)> {
        self.table.check_select(&query)?;
        query.options = query.options.or(self.db.defaults());
        self.db.compile(&Statement::select(&self.table.name, query))
    }

    pub fn compile_update(&self, mut update: Update) -> Result<(String, Bindings)> {
        self.table.check_update(&update)?;
        update.options = update.options.or(self.db.defaults());
        self.db.compile(&Statement::update(&self.table.name, update))
    }

    pub fn compile_create(&self, create: Create) -> Result<(String, Bindings)> {
        self.table.check_create(&create)?;
        self.db.compile(&Statement::create(&self.table.name, create))
    }
}
