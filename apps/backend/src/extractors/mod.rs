pub mod filter_query;
pub mod json_body;
pub mod path_id;
pub mod request_context;

pub use filter_query::FilterQuery;
pub use json_body::JsonBody;
pub use path_id::{CategoryId, LinkId, TaskId};
pub use request_context::RequestContext;
