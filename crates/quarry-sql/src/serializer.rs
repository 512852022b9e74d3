#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod params;
pub use params::{Params, Placeholder};

mod sql;
pub use sql::Sql;

// Fragment serializers
mod field_def;
mod filter;
mod literal;
mod statement;
mod ty;

use crate::stmt::Statement;

use quarry_core::{Result, Schema};

/// Serialize a statement to SurrealQL text.
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Schema against which the statement is serialized. Table lookups and
    /// record-target resolution go through it.
    schema: &'a Schema,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized statement
    dst: &'a mut Sql,

    /// Where to store bindings
    params: &'a mut T,

    /// Suffix counter for filter bindings. Shared by every filter in the
    /// statement so two constraints on the same field get distinct names.
    binding_seq: usize,
}

impl<'a> Serializer<'a> {
    pub fn new(schema: &'a Schema) -> Serializer<'a> {
        Serializer { schema }
    }

    /// Serializes `stmt`, terminated with `;`. Values are never inlined
    /// except for literal field defaults; everything else is bound through
    /// `params`.
    ///
    /// Nothing is written to `params` past the point of an error, but
    /// bindings pushed before it are left in place.
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> Result<String> {
        let mut ret = Sql::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
            binding_seq: 0,
        };

        stmt.to_sql(&mut fmt)?;

        ret.terminate();
        Ok(ret.into_string())
    }
}

impl<T: Params> Formatter<'_, T> {
    /// Binds `value` for a filter constraint on `field`, under the first
    /// free `<field>_<n>` name.
    fn bind_filter_value(&mut self, field: &str, value: &quarry_core::stmt::Value) -> Placeholder {
        let name = loop {
            self.binding_seq += 1;
            let name = format!("{field}_{}", self.binding_seq);
            if !self.params.is_bound(&name) {
                break name;
            }
        };

        self.params.bind(name, value)
    }
}
