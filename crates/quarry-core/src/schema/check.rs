use super::Table;
use crate::{
    stmt::{Create, Filter, Projection, Select, Update, Value},
    Error, Result,
};

/// Every record carries an `id` even though no table declares it.
const ID: &str = "id";

impl Table {
    /// Checks that a select only mentions declared fields.
    pub fn check_select(&self, select: &Select) -> Result<()> {
        if let Some(filter) = &select.filter {
            self.check_filter(filter)?;
        }

        if let Projection::Include(fields) = &select.projection {
            if fields.is_empty() {
                return Err(Error::invalid_statement(format!(
                    "select from `{}` includes no fields",
                    self.name
                )));
            }
        }

        for field in select.projection.fields() {
            self.check_field_name(field, "projection")?;
        }

        for field in select.order_by.keys() {
            self.check_field_name(field, "ORDER BY")?;
        }

        Ok(())
    }

    /// Checks field names and value types of an update.
    pub fn check_update(&self, update: &Update) -> Result<()> {
        if update.assignments.is_empty() {
            return Err(Error::invalid_statement(format!(
                "update of `{}` assigns no fields",
                self.name
            )));
        }

        for (name, value) in &update.assignments {
            self.check_value(name, value)?;
        }

        if let Some(filter) = &update.filter {
            self.check_filter(filter)?;
        }

        Ok(())
    }

    /// Checks field names and value types of a create, and that every
    /// required field is present.
    pub fn check_create(&self, create: &Create) -> Result<()> {
        for (name, value) in &create.content {
            self.check_value(name, value)?;
        }

        for field in self.fields() {
            let name = field.name().unwrap_or_default();
            if field.is_required() && !create.content.contains_key(name) {
                return Err(Error::validation_missing_field(&self.name, name));
            }
        }

        Ok(())
    }

    pub fn check_filter(&self, filter: &Filter) -> Result<()> {
        for (name, value) in filter.constraints() {
            self.check_field_name(name, "filter")?;
            self.check_value(name, value)?;
        }

        Ok(())
    }

    fn check_value(&self, name: &str, value: &Value) -> Result<()> {
        if name == ID {
            return Ok(());
        }

        let Some(field) = self.field(name) else {
            return Err(self.unknown_field(name, "data"));
        };

        if !field.accepts(value) {
            return Err(Error::validation_type_mismatch(
                &self.name,
                name,
                field.kind.name(),
                value.type_name(),
            ));
        }

        Ok(())
    }

    fn check_field_name(&self, name: &str, clause: &str) -> Result<()> {
        if name == ID || self.field(name).is_some() {
            Ok(())
        } else {
            Err(self.unknown_field(name, clause))
        }
    }

    fn unknown_field(&self, name: &str, clause: &str) -> Error {
        Error::invalid_statement(format!(
            "{clause} references unknown field `{name}` on table `{}`",
            self.name
        ))
    }
}
