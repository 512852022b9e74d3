mod response;
pub use response::Response;

use crate::{async_trait, stmt::Bindings};

use std::fmt::Debug;

/// The execution backend: runs compiled statement text against the database.
///
/// Opening the connection, selecting a namespace and database, and
/// authenticating are the driver's own business. Quarry only hands it one
/// statement at a time.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Execute a statement with its named bindings.
    ///
    /// The response holds one result set per top-level statement in
    /// `statement`.
    async fn exec(&self, statement: &str, bindings: &Bindings) -> crate::Result<Response>;
}
