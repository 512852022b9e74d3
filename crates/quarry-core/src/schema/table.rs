use super::Field;
use crate::{Error, Result};

use indexmap::IndexMap;

/// A named collection of fields.
///
/// Field order is declaration order, and is the order in which field
/// definitions are emitted.
#[derive(Debug, Clone)]
pub struct Table {
    pub name: String,

    fields: IndexMap<String, Field>,

    /// Emit `DEFINE TABLE OVERWRITE`
    pub overwrite: bool,
}

impl Table {
    /// Creates a table, naming each field after its key.
    ///
    /// Fails if a key repeats or if a field already belongs to a table.
    pub fn new<K: Into<String>>(
        name: impl Into<String>,
        fields: impl IntoIterator<Item = (K, Field)>,
    ) -> Result<Table> {
        let mut table = Table {
            name: name.into(),
            fields: IndexMap::new(),
            overwrite: false,
        };

        for (key, field) in fields {
            let key = key.into();
            table.insert(key, field)?;
        }

        Ok(table)
    }

    /// Registers a field that was named with [`Field::named`].
    ///
    /// On failure the table is left unchanged.
    pub fn add_field(&mut self, field: Field) -> Result<&mut Table> {
        let Some(name) = field.name() else {
            return Err(Error::unset_name("field"));
        };
        let name = name.to_string();
        self.insert(name, field)?;
        Ok(self)
    }

    fn insert(&mut self, name: String, mut field: Field) -> Result<()> {
        if self.fields.contains_key(&name) {
            return Err(Error::duplicate_field(&self.name, name));
        }

        field.attach(&self.name, &name)?;
        self.fields.insert(name, field);
        Ok(())
    }

    pub fn overwrite(mut self) -> Table {
        self.overwrite = true;
        self
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl ExactSizeIterator<Item = &Field> + '_ {
        self.fields.values()
    }

    pub fn field_names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }
}
