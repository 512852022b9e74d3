use super::{Formatter, ToSql};

use quarry_core::{
    stmt::{Bindings, Value},
    Result,
};

/// Collects the values a statement binds by name.
pub trait Params {
    /// Binds `value` under `name` and returns the placeholder to emit.
    fn bind(&mut self, name: String, value: &Value) -> Placeholder;

    fn is_bound(&self, name: &str) -> bool;
}

/// A `$name` reference to a bound value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder(pub String);

impl Params for Bindings {
    fn bind(&mut self, name: String, value: &Value) -> Placeholder {
        self.insert(name.clone(), value.clone());
        Placeholder(name)
    }

    fn is_bound(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        f.dst.append("$").append(&self.0);
        Ok(())
    }
}
