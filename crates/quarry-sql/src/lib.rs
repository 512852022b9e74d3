pub mod serializer;
pub use serializer::{Params, Placeholder, Serializer, Sql};

pub mod stmt;
pub use stmt::Statement;
