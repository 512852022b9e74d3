use super::{ExecOptions, Filter, Returning, Value};

use indexmap::IndexMap;
use std::time::Duration;

/// A structured update: new values for some fields of every matching record.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Update {
    /// `field → new value`, emitted as `SET field = $field, ...`
    pub assignments: IndexMap<String, Value>,

    pub filter: Option<Filter>,

    pub returning: Option<Returning>,

    pub options: ExecOptions,
}

impl Update {
    pub fn new() -> Update {
        Update::default()
    }

    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Update {
        self.assignments.insert(field.into(), value.into());
        self
    }

    pub fn filter(mut self, filter: Filter) -> Update {
        self.filter = Some(filter);
        self
    }

    pub fn returning(mut self, returning: Returning) -> Update {
        self.returning = Some(returning);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Update {
        self.options.timeout = Some(timeout);
        self
    }

    pub fn parallel(mut self) -> Update {
        self.options.parallel = Some(true);
        self
    }
}
