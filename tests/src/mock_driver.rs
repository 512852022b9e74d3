use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use quarry::{
    async_trait,
    driver::{Driver, Response},
    Bindings, Error, Result, Value,
};

/// An in-memory stand-in for a database.
///
/// Replies come from a [`Script`]: queued responses are handed out in order,
/// statements matching a failure pattern are rejected with a driver error, and anything else
/// gets a default reply. `CREATE` statements echo their bindings back as the
/// stored record.
#[derive(Debug, Clone, Default)]
pub struct MockDriver {
    script: Script,
}

/// Shared, mutable replies for a [`MockDriver`].
#[derive(Debug, Clone, Default)]
pub struct Script {
    inner: Arc<Mutex<ScriptInner>>,
}

#[derive(Debug, Default)]
struct ScriptInner {
    responses: VecDeque<Response>,

    /// `(pattern, message)`: reject statements containing `pattern`
    failures: Vec<(String, String)>,
}

impl MockDriver {
    pub fn new(script: Script) -> Self {
        Self { script }
    }
}

impl Script {
    /// Queue `rows` as the single result set of the next reply.
    pub fn respond(&self, rows: Vec<Value>) -> &Self {
        self.inner
            .lock()
            .unwrap()
            .responses
            .push_back(Response::rows(rows));
        self
    }

    /// Queue a raw reply.
    pub fn respond_with(&self, response: Response) -> &Self {
        self.inner.lock().unwrap().responses.push_back(response);
        self
    }

    /// Reject every statement containing `pattern` with `message`.
    pub fn fail_on(&self, pattern: &str, message: &str) -> &Self {
        self.inner
            .lock()
            .unwrap()
            .failures
            .push((pattern.to_string(), message.to_string()));
        self
    }

    fn reply(&self, statement: &str, bindings: &Bindings) -> Result<Response> {
        let mut inner = self.inner.lock().unwrap();

        if let Some((_, message)) = inner
            .failures
            .iter()
            .find(|(pattern, _)| statement.contains(pattern.as_str()))
        {
            return Err(Error::driver_operation_failed(std::io::Error::other(
                message.clone(),
            )));
        }

        if let Some(response) = inner.responses.pop_front() {
            return Ok(response);
        }

        if statement.starts_with("CREATE") {
            let record = Value::object_from_iter(
                bindings
                    .iter()
                    .map(|(name, value)| (name.to_string(), value.clone())),
            );
            return Ok(Response::rows(vec![record]));
        }

        Ok(Response::empty())
    }
}

#[async_trait]
impl Driver for MockDriver {
    async fn exec(&self, statement: &str, bindings: &Bindings) -> Result<Response> {
        self.script.reply(statement, bindings)
    }
}
