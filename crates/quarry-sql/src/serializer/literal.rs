use super::{Comma, Formatter, Params, ToSql};

use quarry_core::{stmt::Value, Result};

/// A value written inline into the statement text. Only used for literal
/// field defaults; every other value is bound.
pub(super) struct Literal<'a>(pub(super) &'a Value);

/// A double-quoted string literal.
pub(super) struct Quoted<'a>(pub(super) &'a str);

/// One `"key": value` entry of an object literal.
struct Entry<'a>(&'a str, &'a Value);

impl ToSql for Literal<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self.0 {
            // Numbers and booleans stay bare: a quoted `"1"` is a string and
            // would fail the `int`, `float` or `bool` type of its field
            Value::Bool(true) => fmt!(f, "true"),
            Value::Bool(false) => fmt!(f, "false"),
            Value::I64(v) => fmt!(f, v.to_string()),
            // Debug keeps the fractional part so the literal stays a float
            Value::F64(v) if v.is_finite() => fmt!(f, format!("{v:?}")),
            Value::F64(_) | Value::Null => fmt!(f, "NONE"),
            Value::String(v) => fmt!(f, Quoted(v)),
            Value::Datetime(v) => fmt!(f, "d" Quoted(&v.to_rfc3339())),
            Value::Record(v) => fmt!(f, v.to_string()),
            Value::List(items) => fmt!(f, "[" Comma(items.iter().map(Literal)) "]"),
            Value::Object(entries) => {
                if entries.is_empty() {
                    fmt!(f, "{}");
                } else {
                    let entries = entries.iter().map(|(k, v)| Entry(k, v));
                    fmt!(f, "{ " Comma(entries) " }");
                }
            }
        }

        Ok(())
    }
}

impl ToSql for Quoted<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let mut quoted = String::with_capacity(self.0.len() + 2);
        quoted.push('"');
        for ch in self.0.chars() {
            match ch {
                '"' => quoted.push_str("\\\""),
                '\\' => quoted.push_str("\\\\"),
                '\n' => quoted.push_str("\\n"),
                '\r' => quoted.push_str("\\r"),
                '\t' => quoted.push_str("\\t"),
                ch => quoted.push(ch),
            }
        }
        quoted.push('"');

        fmt!(f, quoted);
        Ok(())
    }
}

impl ToSql for Entry<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        fmt!(f, Quoted(self.0) ": " Literal(self.1));
        Ok(())
    }
}
