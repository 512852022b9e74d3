pub mod db;
pub use db::{Db, TableHandle};

pub use quarry_core::{
    async_trait,
    driver::{self, Driver, Response},
    schema::{self, func, DefaultValue, Expression, Field, Permissions, Rule, Table, TableRef},
    stmt::{
        self, Bindings, Create, Direction, ExecOptions, Filter, Projection, RecordId, RecordKey,
        Returning, Select, Update, Value,
    },
    Error, Result, Schema,
};

pub use quarry_sql::Statement;
