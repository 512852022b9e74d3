use super::{Expression, Permissions, TableRef};
use crate::{stmt::Value, Error, Result};

use chrono::DateTime;

/// One typed attribute of a table.
///
/// Fields are created standalone by a factory ([`Field::string`],
/// [`Field::record`], ...), configured with chained calls, then handed to
/// exactly one [`Table`](super::Table). The table assigns the field its
/// name.
#[derive(Debug, Clone)]
pub struct Field {
    /// Assigned by the owning table
    name: Option<String>,

    /// Name of the table the field was registered on
    owner: Option<String>,

    pub kind: FieldKind,

    /// Wraps the element type in `option<>`
    pub optional: bool,

    /// Wraps the type in `array<>`
    pub is_array: bool,

    /// Adds a `<field>_UNIQUE` index
    pub unique: bool,

    pub default: Option<DefaultValue>,

    /// Computed value (`VALUE` clause)
    pub value: Option<Expression>,

    /// Validation assertion (`ASSERT` clause)
    pub assert: Option<Expression>,

    pub permissions: Option<Permissions>,

    pub comment: Option<String>,

    pub overwrite: bool,

    /// Emits `FLEXIBLE` in place of a type clause
    pub flexible: bool,
}

/// The fixed set of field variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Float,
    Int,
    Bool,
    Datetime,
    Object,

    /// Link to a record in one of the listed tables
    Record(Vec<TableRef>),
}

/// A field default: either a literal value or a server-side expression.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    Literal(Value),
    Expr(Expression),
}

impl Field {
    pub fn new(kind: FieldKind) -> Field {
        Field {
            name: None,
            owner: None,
            kind,
            optional: false,
            is_array: false,
            unique: false,
            default: None,
            value: None,
            assert: None,
            permissions: None,
            comment: None,
            overwrite: false,
            flexible: false,
        }
    }

    pub fn string() -> Field {
        Field::new(FieldKind::String)
    }

    pub fn float() -> Field {
        Field::new(FieldKind::Float)
    }

    pub fn int() -> Field {
        Field::new(FieldKind::Int)
    }

    pub fn bool() -> Field {
        Field::new(FieldKind::Bool)
    }

    pub fn datetime() -> Field {
        Field::new(FieldKind::Datetime)
    }

    pub fn object() -> Field {
        Field::new(FieldKind::Object)
    }

    /// A link to a record in any of `targets`.
    ///
    /// Use [`TableRef::deferred`] for tables that are declared further down.
    pub fn record<T: Into<TableRef>>(targets: impl IntoIterator<Item = T>) -> Field {
        Field::new(FieldKind::Record(
            targets.into_iter().map(Into::into).collect(),
        ))
    }

    /// Names the field ahead of [`Table::add_field`](super::Table::add_field).
    pub fn named(mut self, name: impl Into<String>) -> Field {
        self.name = Some(name.into());
        self
    }

    pub fn optional(mut self) -> Field {
        self.optional = true;
        self
    }

    pub fn array(mut self) -> Field {
        self.is_array = true;
        self
    }

    pub fn unique(mut self) -> Field {
        self.unique = true;
        self
    }

    /// Sets the default. A defaulted field may be omitted on create, so this
    /// also marks the field optional.
    pub fn default(mut self, value: impl Into<DefaultValue>) -> Field {
        self.default = Some(value.into());
        self.optional = true;
        self
    }

    pub fn value(mut self, expr: Expression) -> Field {
        self.value = Some(expr);
        self
    }

    pub fn assert(mut self, expr: Expression) -> Field {
        self.assert = Some(expr);
        self
    }

    pub fn permissions(mut self, permissions: Permissions) -> Field {
        self.permissions = Some(permissions);
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Field {
        self.comment = Some(comment.into());
        self
    }

    pub fn overwrite(mut self) -> Field {
        self.overwrite = true;
        self
    }

    pub fn flexible(mut self) -> Field {
        self.flexible = true;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The table this field was registered on.
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Records `table` as the single owner of this field and fixes its name.
    pub(super) fn attach(&mut self, table: &str, name: &str) -> Result<()> {
        if let Some(owner) = &self.owner {
            return Err(Error::invalid_schema(format!(
                "field `{name}` already belongs to table `{owner}` and cannot be added to `{table}`"
            )));
        }

        match &self.name {
            Some(existing) if existing != name => {
                return Err(Error::invalid_schema(format!(
                    "field named `{existing}` registered as `{name}` on table `{table}`"
                )));
            }
            _ => {}
        }

        self.name = Some(name.to_string());
        self.owner = Some(table.to_string());
        Ok(())
    }

    /// Returns `true` if a create must supply this field.
    pub fn is_required(&self) -> bool {
        !self.optional && !self.is_array && !self.flexible && self.value.is_none()
    }

    /// Returns `true` if `value` fits the field's type clause.
    pub fn accepts(&self, value: &Value) -> bool {
        if self.flexible {
            return true;
        }

        if self.is_array {
            return match value {
                Value::List(items) => items.iter().all(|item| self.accepts_element(item)),
                _ => false,
            };
        }

        self.accepts_element(value)
    }

    fn accepts_element(&self, value: &Value) -> bool {
        match value {
            Value::Null => self.optional,
            value => self.kind.accepts(value),
        }
    }
}

impl FieldKind {
    /// Variant name, as used in messages.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Float => "float",
            FieldKind::Int => "int",
            FieldKind::Bool => "bool",
            FieldKind::Datetime => "datetime",
            FieldKind::Object => "object",
            FieldKind::Record(_) => "record",
        }
    }

    pub fn as_record(&self) -> Option<&[TableRef]> {
        match self {
            FieldKind::Record(targets) => Some(targets),
            _ => None,
        }
    }

    /// Runtime representation check for one non-null element.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (FieldKind::String, Value::String(_)) => true,
            (FieldKind::Float, Value::F64(_) | Value::I64(_)) => true,
            (FieldKind::Int, Value::I64(_)) => true,
            (FieldKind::Bool, Value::Bool(_)) => true,
            (FieldKind::Datetime, Value::Datetime(_)) => true,
            (FieldKind::Datetime, Value::String(s)) => DateTime::parse_from_rfc3339(s).is_ok(),
            (FieldKind::Object, Value::Object(_)) => true,
            (FieldKind::Record(targets), Value::Record(id)) => {
                targets.iter().any(|target| target.name() == id.table)
            }
            (FieldKind::Record(targets), Value::String(s)) => {
                match crate::stmt::RecordId::parse(s) {
                    Some(id) => targets.iter().any(|target| target.name() == id.table),
                    None => false,
                }
            }
            _ => false,
        }
    }
}

macro_rules! impl_default_literal {
    ( $($t:ty),+ ) => {
        $(
            impl From<$t> for DefaultValue {
                fn from(src: $t) -> Self {
                    DefaultValue::Literal(src.into())
                }
            }
        )+
    };
}

impl_default_literal!(Value, bool, i32, i64, f64, &str, String);

impl From<Expression> for DefaultValue {
    fn from(src: Expression) -> Self {
        DefaultValue::Expr(src)
    }
}
