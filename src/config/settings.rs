use serde_json::Value;

use crate::ajax::HttpMethod;

/// Values a source holds before any option overrides them
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDefaults {
    pub url: Option<String>,
    pub method: HttpMethod,
    pub extra_data: Option<Value>,
    pub pipeline_pages: u64,
}

impl Default for SourceDefaults {
    fn default() -> Self {
        Self {
            url: None,
            method: HttpMethod::Get,
            extra_data: None,
            pipeline_pages: 0, // pipelining disabled
        }
    }
}
