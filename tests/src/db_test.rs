use crate::{
    logging_driver::{DriverOp, LoggingDriver},
    ExecLog, MockDriver, Script,
};
use quarry::{db::Builder, Db};
use std::sync::{Arc, Mutex};

/// Wires a `Db` to a scripted [`MockDriver`], logging every statement.
#[derive(Default)]
pub struct DbTest {
    script: Script,
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

impl DbTest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to build a database from the declared tables
    pub fn try_setup_db(&mut self, mut builder: Builder) -> quarry::Result<Db> {
        let driver = LoggingDriver::new(Box::new(MockDriver::new(self.script.clone())));
        self.ops_log = driver.ops_log_handle();

        builder.build(driver)
    }

    /// Build a database from the declared tables, always with logging enabled
    pub fn setup_db(&mut self, builder: Builder) -> Db {
        match self.try_setup_db(builder) {
            Ok(db) => db,
            Err(err) => panic!("failed to set up db: {err}"),
        }
    }

    /// Replies the driver will give
    pub fn script(&self) -> &Script {
        &self.script
    }

    /// Get the statement log for assertions
    pub fn log(&self) -> ExecLog {
        ExecLog::new(self.ops_log.clone())
    }
}
