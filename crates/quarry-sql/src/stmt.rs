use quarry_core::{
    schema::Table,
    stmt::{Create, Select, Update},
};

/// A single top-level statement, ready to be serialized.
///
/// Tables and fields are referenced by name and looked up in the schema
/// the [`Serializer`](crate::Serializer) was created with.
#[derive(Debug, Clone)]
pub enum Statement {
    /// `DEFINE TABLE <table> SCHEMAFULL PERMISSIONS NONE`
    DefineTable { table: String },

    /// `DEFINE FIELD <field> ON <table> ...`
    DefineField { table: String, field: String },

    /// `DEFINE INDEX <field>_UNIQUE ON <table> FIELDS <field> UNIQUE`
    DefineIndex { table: String, field: String },

    Select { table: String, query: Select },

    Update { table: String, update: Update },

    Create { table: String, create: Create },
}

impl Statement {
    /// Every definition statement needed to materialize `table`: the table
    /// itself, then one field definition per field in declaration order,
    /// each followed by its unique index when the field is unique.
    pub fn definitions(table: &Table) -> Vec<Statement> {
        let mut stmts = vec![Statement::DefineTable {
            table: table.name.clone(),
        }];

        for field in table.fields() {
            let name = field.name().unwrap_or_default().to_string();

            stmts.push(Statement::DefineField {
                table: table.name.clone(),
                field: name.clone(),
            });

            if field.unique {
                stmts.push(Statement::DefineIndex {
                    table: table.name.clone(),
                    field: name,
                });
            }
        }

        stmts
    }

    pub fn select(table: impl Into<String>, query: Select) -> Statement {
        Statement::Select {
            table: table.into(),
            query,
        }
    }

    pub fn update(table: impl Into<String>, update: Update) -> Statement {
        Statement::Update {
            table: table.into(),
            update,
        }
    }

    pub fn create(table: impl Into<String>, create: Create) -> Statement {
        Statement::Create {
            table: table.into(),
            create,
        }
    }

    pub fn table(&self) -> &str {
        match self {
            Statement::DefineTable { table }
            | Statement::DefineField { table, .. }
            | Statement::DefineIndex { table, .. }
            | Statement::Select { table, .. }
            | Statement::Update { table, .. }
            | Statement::Create { table, .. } => table,
        }
    }

    /// The field a definition statement belongs to.
    pub fn field(&self) -> Option<&str> {
        match self {
            Statement::DefineField { field, .. } | Statement::DefineIndex { field, .. } => {
                Some(field)
            }
            _ => None,
        }
    }

    pub fn is_definition(&self) -> bool {
        matches!(
            self,
            Statement::DefineTable { .. }
                | Statement::DefineField { .. }
                | Statement::DefineIndex { .. }
        )
    }
}
