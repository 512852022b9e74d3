use std::sync::{Arc, Mutex};

use quarry::{
    async_trait,
    driver::{Driver, Response},
    Bindings, Result,
};

/// Forwards statements to another driver and records each one
#[derive(Debug)]
pub struct LoggingDriver {
    inner: Box<dyn Driver>,

    /// Shared with every `ExecLog` handed out by the test fixture
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

impl LoggingDriver {
    pub fn new(driver: Box<dyn Driver>) -> Self {
        Self {
            inner: driver,
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn ops_log_handle(&self) -> Arc<Mutex<Vec<DriverOp>>> {
        self.ops_log.clone()
    }
}

#[derive(Debug, Clone)]
pub struct DriverOp {
    pub statement: String,
    pub bindings: Bindings,

    /// `None` when the inner driver failed
    pub response: Option<Response>,
}

#[async_trait]
impl Driver for LoggingDriver {
    async fn exec(&self, statement: &str, bindings: &Bindings) -> Result<Response> {
        let res = self.inner.exec(statement, bindings).await;

        let driver_op = DriverOp {
            statement: statement.to_string(),
            bindings: bindings.clone(),
            response: res.as_ref().ok().cloned(),
        };

        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .push(driver_op);

        res
    }
}
