use super::{RecordKey, Value};

use indexmap::IndexMap;

/// A structured create of a single record.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Create {
    /// Explicit record key; the database generates one when unset
    pub id: Option<RecordKey>,

    /// `field → value`, emitted as `CONTENT { field: $field, ... }`
    pub content: IndexMap<String, Value>,
}

impl Create {
    pub fn new() -> Create {
        Create::default()
    }

    pub fn id(mut self, id: impl Into<RecordKey>) -> Create {
        self.id = Some(id.into());
        self
    }

    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Create {
        self.content.insert(field.into(), value.into());
        self
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Create {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        Create {
            id: None,
            content: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
