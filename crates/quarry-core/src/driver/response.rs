use crate::{stmt::Value, Error, Result};

/// Result sets returned by the backend, one per top-level statement.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Response {
    pub results: Vec<Vec<Value>>,
}

impl Response {
    pub fn new(results: Vec<Vec<Value>>) -> Response {
        Response { results }
    }

    /// A response carrying a single result set.
    pub fn rows(rows: Vec<Value>) -> Response {
        Response::new(vec![rows])
    }

    /// A response with one empty result set, as returned by definition
    /// statements.
    pub fn empty() -> Response {
        Response::rows(vec![])
    }

    /// Takes the first result set. Statements compiled by Quarry are always a
    /// single top-level statement, so the rest carry nothing.
    pub fn into_first(self) -> Result<Vec<Value>> {
        self.results
            .into_iter()
            .next()
            .ok_or_else(|| Error::invalid_result("backend returned no result sets"))
    }
}
