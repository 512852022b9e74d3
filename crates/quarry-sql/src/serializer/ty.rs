use super::{Delimited, Formatter, Params, ToSql};

use quarry_core::{
    schema::{Field, FieldKind},
    Error, Result,
};

/// The type clause of a field definition: `TYPE <ty>` or `FLEXIBLE`.
pub(super) struct TypeClause<'a>(pub(super) &'a Field);

/// The type keyword of a field variant, without modifiers.
struct Keyword<'a>(&'a FieldKind);

impl ToSql for TypeClause<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let field = self.0;

        if field.flexible {
            fmt!(f, "FLEXIBLE");
            return Ok(());
        }

        let keyword = Keyword(&field.kind);

        match (field.is_array, field.optional) {
            (true, true) => fmt!(f, "TYPE array<option<" keyword ">>"),
            (false, true) => fmt!(f, "TYPE option<" keyword ">"),
            (true, false) => fmt!(f, "TYPE array<" keyword ">"),
            (false, false) => fmt!(f, "TYPE " keyword),
        }

        Ok(())
    }
}

impl ToSql for Keyword<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let keyword = match self.0 {
            FieldKind::String => "string",
            FieldKind::Float => "float",
            FieldKind::Int => "int",
            FieldKind::Bool => "bool",
            FieldKind::Datetime => "datetime",
            FieldKind::Object => "object",
            FieldKind::Record(targets) => {
                if targets.is_empty() {
                    return Err(Error::unsupported_field_variant("record"));
                }

                let schema = f.serializer.schema;
                let names = targets
                    .iter()
                    .map(|target| Ok(schema.resolve(target)?.name.as_str()))
                    .collect::<Result<Vec<_>>>()?;

                fmt!(f, "record<" Delimited(names, " | ") ">");
                return Ok(());
            }
        };

        fmt!(f, keyword);
        Ok(())
    }
}
