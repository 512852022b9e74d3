//! Expressions for common database functions.

use super::Expression;

/// The current datetime. The usual default for `created` / `updated` fields.
pub fn time_now() -> Expression {
    Expression::raw("time::now()")
}

/// Seconds since the UNIX epoch.
pub fn time_unix() -> Expression {
    Expression::raw("time::unix()")
}

/// Lowercases `arg`, for example `string_lowercase("$value")`.
pub fn string_lowercase(arg: &str) -> Expression {
    Expression::raw(format!("string::lowercase({arg})"))
}
