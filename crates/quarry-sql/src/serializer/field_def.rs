use super::{literal::Literal, literal::Quoted, ty::TypeClause, Delimited, Formatter, Params, ToSql};

use quarry_core::{
    schema::{DefaultValue, Expression, Field, Permissions, Rule},
    Error, Result,
};

/// `DEFINE FIELD [OVERWRITE] <field> ON <table> <type clause> ...`
pub(super) struct FieldDef<'a> {
    pub(super) table: &'a str,
    pub(super) field: &'a Field,
}

struct Expr<'a>(&'a Expression);

struct PermissionsClause<'a>(&'a Permissions);

struct PermissionRule<'a>(&'static str, &'a Rule);

impl ToSql for FieldDef<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let field = self.field;
        let name = field.name().ok_or_else(|| Error::unset_name("field"))?;

        let overwrite = if field.overwrite { "OVERWRITE " } else { "" };
        fmt!(f, "DEFINE FIELD " overwrite name " ON " self.table " " TypeClause(field));

        match &field.default {
            Some(DefaultValue::Literal(value)) => fmt!(f, " DEFAULT " Literal(value)),
            Some(DefaultValue::Expr(expr)) => fmt!(f, " DEFAULT " Expr(expr)),
            None => {}
        }

        if let Some(expr) = &field.value {
            fmt!(f, " VALUE " Expr(expr));
        }

        if let Some(expr) = &field.assert {
            fmt!(f, " ASSERT " Expr(expr));
        }

        if let Some(permissions) = &field.permissions {
            if permissions.rules().next().is_some() {
                fmt!(f, " PERMISSIONS " PermissionsClause(permissions));
            }
        }

        if let Some(comment) = &field.comment {
            fmt!(f, " COMMENT " Quoted(comment));
        }

        Ok(())
    }
}

impl ToSql for Expr<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        fmt!(f, self.0.to_sql()?);
        Ok(())
    }
}

impl ToSql for PermissionsClause<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        match self.0.uniform() {
            Some(Rule::None) => fmt!(f, "NONE"),
            Some(Rule::Full) => fmt!(f, "FULL"),
            _ => {
                let rules = self.0.rules().map(|(op, rule)| PermissionRule(op, rule));
                fmt!(f, Delimited(rules, " "));
            }
        }
        Ok(())
    }
}

impl ToSql for PermissionRule<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        fmt!(f, "FOR " self.0 " ");
        match self.1 {
            Rule::None => fmt!(f, "NONE"),
            Rule::Full => fmt!(f, "FULL"),
            Rule::Where(expr) => fmt!(f, "WHERE " Expr(expr)),
        }
        Ok(())
    }
}
