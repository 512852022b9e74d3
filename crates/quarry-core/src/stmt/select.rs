use super::{Direction, ExecOptions, Filter, Projection};

use indexmap::IndexMap;
use std::time::Duration;

/// A structured select query against one table.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Select {
    pub filter: Option<Filter>,

    pub projection: Projection,

    /// `ORDER BY` entries, in the order they are emitted
    pub order_by: IndexMap<String, Direction>,

    pub limit: Option<u64>,

    /// Rendered as `START AT`
    pub offset: Option<u64>,

    pub options: ExecOptions,
}

impl Select {
    pub fn new() -> Select {
        Select::default()
    }

    pub fn filter(mut self, filter: Filter) -> Select {
        self.filter = Some(filter);
        self
    }

    pub fn projection(mut self, projection: Projection) -> Select {
        self.projection = projection;
        self
    }

    /// Return only the listed fields.
    pub fn include<S: Into<String>>(self, fields: impl IntoIterator<Item = S>) -> Select {
        self.projection(Projection::Include(
            fields.into_iter().map(Into::into).collect(),
        ))
    }

    /// Return every field except the listed ones.
    pub fn omit<S: Into<String>>(self, fields: impl IntoIterator<Item = S>) -> Select {
        self.projection(Projection::Omit(
            fields.into_iter().map(Into::into).collect(),
        ))
    }

    pub fn order_by(mut self, field: impl Into<String>, direction: Direction) -> Select {
        self.order_by.insert(field.into(), direction);
        self
    }

    pub fn limit(mut self, limit: u64) -> Select {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Select {
        self.offset = Some(offset);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Select {
        self.options.timeout = Some(timeout);
        self
    }

    pub fn parallel(mut self) -> Select {
        self.options.parallel = Some(true);
        self
    }
}
