#[macro_use]
mod macros;

mod db_test;
pub use db_test::DbTest;

mod exec_log;
pub use exec_log::ExecLog;

pub mod logging_driver;

pub mod mock_driver;
pub use mock_driver::{MockDriver, Script};

pub mod prelude;

pub use std_util::*;
