use super::Schema;
use crate::{Error, Result};

struct Verify<'a> {
    schema: &'a Schema,
}

impl Schema {
    pub(super) fn verify(&self) -> Result<()> {
        Verify { schema: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        debug_assert!(self.verify_fields_named());

        self.verify_record_targets_resolve()?;
        Ok(())
    }

    fn verify_fields_named(&self) -> bool {
        for table in self.schema.tables() {
            for (name, field) in table.field_names().zip(table.fields()) {
                assert_eq!(field.name(), Some(name));
                assert_eq!(field.owner(), Some(&table.name[..]));
            }
        }

        true
    }

    fn verify_record_targets_resolve(&self) -> Result<()> {
        for table in self.schema.tables() {
            for field in table.fields() {
                let Some(targets) = field.kind.as_record() else {
                    continue;
                };

                for target in targets {
                    if self.schema.table(target.name()).is_none() {
                        return Err(Error::invalid_schema(format!(
                            "field `{}.{}` references unknown table `{}`",
                            table.name,
                            field.name().unwrap_or_default(),
                            target.name()
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}
