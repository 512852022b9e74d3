use super::{field_def::FieldDef, Comma, Formatter, Params, ToSql};

use crate::stmt::Statement;

use quarry_core::{
    schema::{Field, Table},
    stmt::{self, ExecOptions, Projection},
    Error, Result,
};

struct Timeout<'a>(&'a ExecOptions);

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if self.table().is_empty() {
            return Err(Error::unset_name("table"));
        }

        match self {
            Statement::DefineTable { table } => {
                let table = lookup(f, table)?;
                let overwrite = if table.overwrite { "OVERWRITE " } else { "" };
                fmt!(f, "DEFINE TABLE " overwrite table.name.as_str() " SCHEMAFULL PERMISSIONS NONE");
            }
            Statement::DefineField { table, field } => {
                let table = lookup(f, table)?;
                let field = lookup_field(table, field)?;
                FieldDef {
                    table: &table.name,
                    field,
                }
                .to_sql(f)?;
            }
            Statement::DefineIndex { table, field } => {
                let table = lookup(f, table)?;
                let field = lookup_field(table, field)?;
                let name = field.name().ok_or_else(|| Error::unset_name("field"))?;
                fmt!(f, "DEFINE INDEX " name "_UNIQUE ON " table.name.as_str() " FIELDS " name " UNIQUE");
            }
            Statement::Select { table, query } => select_to_sql(table, query, f)?,
            Statement::Update { table, update } => update_to_sql(table, update, f)?,
            Statement::Create { table, create } => create_to_sql(table, create, f)?,
        }

        Ok(())
    }
}

fn lookup<'a, P>(f: &Formatter<'a, P>, table: &str) -> Result<&'a Table> {
    f.serializer
        .schema
        .table(table)
        .ok_or_else(|| Error::invalid_statement(format!("unknown table `{table}`")))
}

fn lookup_field<'a>(table: &'a Table, field: &str) -> Result<&'a Field> {
    table.field(field).ok_or_else(|| {
        Error::invalid_statement(format!(
            "unknown field `{field}` on table `{}`",
            table.name
        ))
    })
}

fn select_to_sql<P: Params>(
    table: &str,
    query: &stmt::Select,
    f: &mut Formatter<'_, P>,
) -> Result<()> {
    fmt!(f, "SELECT ");

    match &query.projection {
        Projection::All => fmt!(f, "*"),
        Projection::Include(fields) if fields.is_empty() => {
            return Err(Error::invalid_statement(format!(
                "select from `{table}` includes no fields"
            )));
        }
        Projection::Include(fields) => fmt!(f, Comma(fields)),
        Projection::Omit(fields) if fields.is_empty() => fmt!(f, "*"),
        Projection::Omit(fields) => fmt!(f, "* OMIT " Comma(fields)),
    }

    fmt!(f, " FROM " table);

    where_to_sql(query.filter.as_ref(), f)?;

    if !query.order_by.is_empty() {
        let order_by = query
            .order_by
            .iter()
            .map(|(field, direction)| format!("{field} {}", direction.as_str()));
        fmt!(f, " ORDER BY " Comma(order_by));
    }

    if let Some(limit) = query.limit {
        fmt!(f, " LIMIT " limit);
    }

    if let Some(offset) = query.offset {
        fmt!(f, " START AT " offset);
    }

    if query.options.is_parallel() {
        fmt!(f, " PARALLEL");
    }

    fmt!(f, Timeout(&query.options));
    Ok(())
}

fn update_to_sql<P: Params>(
    table: &str,
    update: &stmt::Update,
    f: &mut Formatter<'_, P>,
) -> Result<()> {
    if update.assignments.is_empty() {
        return Err(Error::invalid_statement(format!(
            "update of `{table}` assigns no fields"
        )));
    }

    fmt!(f, "UPDATE " table " SET ");

    let mut s = "";
    for (field, value) in &update.assignments {
        let placeholder = f.params.bind(field.clone(), value);
        fmt!(f, s field " = " placeholder);
        s = ", ";
    }

    where_to_sql(update.filter.as_ref(), f)?;

    if let Some(returning) = update.returning {
        fmt!(f, " RETURN " returning.keyword());
    }

    fmt!(f, Timeout(&update.options));

    if update.options.is_parallel() {
        fmt!(f, " PARALLEL");
    }

    Ok(())
}

fn create_to_sql<P: Params>(
    table: &str,
    create: &stmt::Create,
    f: &mut Formatter<'_, P>,
) -> Result<()> {
    fmt!(f, "CREATE ONLY " table);

    if let Some(id) = &create.id {
        fmt!(f, ":" id.to_string());
    }

    if create.content.is_empty() {
        fmt!(f, " CONTENT {}");
        return Ok(());
    }

    fmt!(f, " CONTENT { ");

    let mut s = "";
    for (field, value) in &create.content {
        let placeholder = f.params.bind(field.clone(), value);
        fmt!(f, s field ": " placeholder);
        s = ", ";
    }

    fmt!(f, " }");
    Ok(())
}

/// Emits ` WHERE <filter>` unless the filter is absent or holds no
/// constraint.
fn where_to_sql<P: Params>(filter: Option<&stmt::Filter>, f: &mut Formatter<'_, P>) -> Result<()> {
    if let Some(filter) = filter.filter(|filter| !filter.is_empty()) {
        fmt!(f, " WHERE " filter);
    }
    Ok(())
}

impl ToSql for Timeout<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if let Some(timeout) = self.0.timeout {
            fmt!(f, " TIMEOUT " format!("{}ms", timeout.as_millis()));
        }
        Ok(())
    }
}
