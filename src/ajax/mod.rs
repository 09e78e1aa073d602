mod method;
pub mod options;
mod source;

pub use method::{HttpMethod, UnsupportedMethod};
pub use options::{AJAX_OPTIONS, OptionSpec, ValueKind};
pub use source::{AjaxSourceConfig, RequestPayload};
