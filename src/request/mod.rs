mod descriptor;
mod query;

pub use descriptor::AjaxRequest;
pub use query::{append_query, build_query_string};
