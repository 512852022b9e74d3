use super::{Delimited, Formatter, Params, ToSql};

use quarry_core::{stmt, Result};

use indexmap::IndexMap;

/// The flat `field = value` constraints of one filter level.
struct Constraints<'a>(&'a IndexMap<String, stmt::Value>);

/// One `field = $field_n` constraint.
struct Constraint<'a>(&'a str, &'a stmt::Value);

/// An `AND` or `OR` branch: its non-empty filters joined by the operator.
struct Branch<'a>(&'a [stmt::Filter], &'static str);

/// One part of a filter level.
enum Part<'a> {
    Constraints(Constraints<'a>),
    Branch(Branch<'a>),
}

impl ToSql for &stmt::Filter {
    /// A level with a single part renders as that part. A level with several
    /// parts (flat constraints, an `AND` branch, an `OR` branch) joins them
    /// with `AND` inside one group.
    ///
    /// Callers skip empty filters; an empty level renders nothing.
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let mut parts = vec![];

        if !self.fields.is_empty() {
            parts.push(Part::Constraints(Constraints(&self.fields)));
        }

        if self.and.iter().any(|filter| !filter.is_empty()) {
            parts.push(Part::Branch(Branch(&self.and, " AND ")));
        }

        if self.or.iter().any(|filter| !filter.is_empty()) {
            parts.push(Part::Branch(Branch(&self.or, " OR ")));
        }

        if parts.len() == 1 {
            fmt!(f, parts.pop());
        } else if !parts.is_empty() {
            f.dst.open_group();
            fmt!(f, Delimited(parts, " AND "));
            f.dst.close_group();
        }

        Ok(())
    }
}

impl ToSql for Part<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self {
            Part::Constraints(constraints) => constraints.to_sql(f),
            Part::Branch(branch) => branch.to_sql(f),
        }
    }
}

impl ToSql for Constraints<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let constraints = self
            .0
            .iter()
            .map(|(field, value)| Constraint(field, value));

        f.dst.open_group();
        fmt!(f, Delimited(constraints, " AND "));
        f.dst.close_group();
        Ok(())
    }
}

impl ToSql for Constraint<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let placeholder = f.bind_filter_value(self.0, self.1);
        fmt!(f, self.0 " = " placeholder);
        Ok(())
    }
}

impl ToSql for Branch<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let filters = self.0.iter().filter(|filter| !filter.is_empty());

        f.dst.open_group();
        fmt!(f, Delimited(filters, self.1));
        f.dst.close_group();
        Ok(())
    }
}
