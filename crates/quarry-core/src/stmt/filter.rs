use super::Value;
use crate::{bail, Result};

use indexmap::IndexMap;

/// A structured `WHERE` condition.
///
/// A filter is a flat set of `field = value` constraints combined with
/// logical AND, plus optional `AND` and `OR` branches holding nested
/// filters. Branches nest to any depth.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Filter {
    /// Equality constraints at this level, in declaration order
    pub fields: IndexMap<String, Value>,

    /// Nested filters that must all hold
    pub and: Vec<Filter>,

    /// Nested filters of which at least one must hold
    pub or: Vec<Filter>,
}

impl Filter {
    pub fn new() -> Filter {
        Filter::default()
    }

    /// A filter with a single equality constraint.
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Filter {
        Filter::new().and_eq(field, value)
    }

    /// A filter whose only content is an `AND` branch.
    pub fn all(filters: impl IntoIterator<Item = Filter>) -> Filter {
        Filter::new().with_and(filters)
    }

    /// A filter whose only content is an `OR` branch.
    pub fn any(filters: impl IntoIterator<Item = Filter>) -> Filter {
        Filter::new().with_or(filters)
    }

    /// Adds an equality constraint at this level.
    ///
    /// Constraining the same field twice at one level keeps the last value.
    pub fn and_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Filter {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn with_and(mut self, filters: impl IntoIterator<Item = Filter>) -> Filter {
        self.and.extend(filters);
        self
    }

    pub fn with_or(mut self, filters: impl IntoIterator<Item = Filter>) -> Filter {
        self.or.extend(filters);
        self
    }

    /// Returns `true` if the filter, including every nested branch, holds no
    /// constraint at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
            && self.and.iter().all(Filter::is_empty)
            && self.or.iter().all(Filter::is_empty)
    }

    /// Number of equality constraints across the whole tree.
    pub fn constraint_count(&self) -> usize {
        self.fields.len()
            + self
                .and
                .iter()
                .chain(&self.or)
                .map(Filter::constraint_count)
                .sum::<usize>()
    }

    /// Every `(field, value)` constraint in the tree, depth first.
    pub fn constraints(&self) -> Vec<(&str, &Value)> {
        let mut constraints: Vec<(&str, &Value)> =
            self.fields.iter().map(|(k, v)| (k.as_str(), v)).collect();
        for nested in self.and.iter().chain(&self.or) {
            constraints.extend(nested.constraints());
        }
        constraints
    }

    /// Parses the JSON form of a filter:
    ///
    /// ```json
    /// { "name": "Ann", "OR": [{ "age": 30 }, { "age": 31 }] }
    /// ```
    ///
    /// `AND` and `OR` keys must hold arrays of objects. Every other key is an
    /// equality constraint.
    pub fn from_json(src: &serde_json::Value) -> Result<Filter> {
        let serde_json::Value::Object(entries) = src else {
            bail!("filter must be a JSON object; found {src}");
        };

        let mut filter = Filter::new();

        for (key, value) in entries {
            match key.as_str() {
                "AND" => filter.and = Filter::branch_from_json(key, value)?,
                "OR" => filter.or = Filter::branch_from_json(key, value)?,
                _ => {
                    filter.fields.insert(key.clone(), Value::from(value.clone()));
                }
            }
        }

        Ok(filter)
    }

    fn branch_from_json(key: &str, src: &serde_json::Value) -> Result<Vec<Filter>> {
        let serde_json::Value::Array(items) = src else {
            bail!("`{key}` branch must be an array of filters");
        };

        items.iter().map(Filter::from_json).collect()
    }
}
