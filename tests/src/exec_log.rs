use crate::logging_driver::DriverOp;
use quarry::Bindings;
use std::sync::{Arc, Mutex};

/// Read access to the statements a [`LoggingDriver`](crate::logging_driver::LoggingDriver) saw
pub struct ExecLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<DriverOp>>>) -> Self {
        Self { ops }
    }

    /// Statements sent, failed ones included
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Every logged statement text, in execution order
    pub fn statements(&self) -> Vec<String> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .map(|op| op.statement.clone())
            .collect()
    }

    /// Count statements whose text starts with `prefix`
    pub fn count_prefix(&self, prefix: &str) -> usize {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| op.statement.starts_with(prefix))
            .count()
    }

    /// Number of logged statements the driver rejected
    pub fn failures(&self) -> usize {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| op.response.is_none())
            .count()
    }

    pub fn clear(&mut self) {
        self.ops.lock().unwrap().clear();
    }

    /// Takes the oldest statement off the log
    pub fn pop(&mut self) -> Option<(String, Bindings)> {
        let mut ops = self.ops.lock().unwrap();
        (!ops.is_empty()).then(|| {
            let op = ops.remove(0);
            (op.statement, op.bindings)
        })
    }
}
