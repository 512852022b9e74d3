mod bindings;
pub use bindings::Bindings;

mod create;
pub use create::Create;

mod direction;
pub use direction::Direction;

mod exec_options;
pub use exec_options::ExecOptions;

mod filter;
pub use filter::Filter;

mod projection;
pub use projection::Projection;

mod record_id;
pub use record_id::{RecordId, RecordKey};

mod returning;
pub use returning::Returning;

mod select;
pub use select::Select;

mod update;
pub use update::Update;

mod value;
pub use value::Value;

mod value_json;
