use log::{debug, warn};
use serde_json::{Map, Value};

use crate::ajax::HttpMethod;
use crate::ajax::options::{AJAX_OPTIONS, ResolvedOptions, resolve};
use crate::config::SourceDefaults;
use crate::errors::ValidationError;

/// Fields sent with every row request
pub type RequestPayload = Map<String, Value>;

/// Where and how a table fetches its rows.
///
/// `configure` is the only validating entry point. The setters store what
/// they are given without re-checking it: once a source is configured the
/// owning table is trusted to keep the values within the same rules.
#[derive(Debug, Clone, PartialEq)]
pub struct AjaxSourceConfig {
    name: String,
    url: Option<String>,
    method: HttpMethod,
    extra_data: Option<Value>,
    pipeline_pages: u64,
}

impl AjaxSourceConfig {
    pub fn new(name: impl Into<String>) -> Self {
        let defaults = SourceDefaults::default();

        Self {
            name: name.into(),
            url: defaults.url,
            method: defaults.method,
            extra_data: defaults.extra_data,
            pipeline_pages: defaults.pipeline_pages,
        }
    }

    /// Reset every option to its default, then apply `options`.
    ///
    /// Nothing is changed when validation fails.
    pub fn configure(&mut self, options: &Map<String, Value>) -> Result<&mut Self, ValidationError> {
        let resolved = resolve(AJAX_OPTIONS, options, SourceDefaults::default())?;
        self.apply(resolved);

        debug!(
            "Configured ajax source {}: {} {} (pipeline pages: {})",
            self.name,
            self.method,
            self.url.as_deref().unwrap_or("<no url>"),
            self.pipeline_pages
        );

        Ok(self)
    }

    fn apply(&mut self, resolved: ResolvedOptions) {
        self.url = resolved.url;
        self.method = resolved.method;
        self.extra_data = resolved.extra_data;
        self.pipeline_pages = resolved.pipeline_pages;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Consumers may already hold the old name; rename before handing the source out.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn set_url(&mut self, url: Option<String>) -> &mut Self {
        self.url = url;
        self
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn set_method(&mut self, method: HttpMethod) -> &mut Self {
        self.method = method;
        self
    }

    /// Extra data exactly as stored, without the table name merged in
    pub fn extra_data(&self) -> Option<&Value> {
        self.extra_data.as_ref()
    }

    /// `Some(Value::Null)` is stored as `None`, the same as `configure` does.
    pub fn set_extra_data(&mut self, extra_data: Option<Value>) -> &mut Self {
        self.extra_data = extra_data.filter(|data| !data.is_null());
        self
    }

    pub fn pipeline_pages(&self) -> u64 {
        self.pipeline_pages
    }

    pub fn set_pipeline_pages(&mut self, pipeline_pages: u64) -> &mut Self {
        self.pipeline_pages = pipeline_pages;
        self
    }

    /// Fields to send to the remote endpoint: the table name plus the extra data.
    ///
    /// Extra data wins on key collisions, so an extra `name` field replaces
    /// the table name.
    pub fn request_payload(&self) -> RequestPayload {
        let mut payload = RequestPayload::new();
        payload.insert("name".to_string(), Value::String(self.name.clone()));

        if let Some(extra) = self.extra_data.as_ref().and_then(|data| self.extra_fields(data)) {
            payload.extend(extra);
        }

        payload
    }

    fn extra_fields(&self, data: &Value) -> Option<RequestPayload> {
        let fields = match data {
            Value::Object(map) => map.clone(),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(idx, item)| (idx.to_string(), item.clone()))
                .collect(),
            Value::String(encoded) => match serde_json::from_str::<Value>(encoded) {
                Ok(Value::Object(map)) => map,
                _ => {
                    warn!(
                        "Ignoring extra data of ajax source {}: string is not a JSON object",
                        self.name
                    );
                    return None;
                }
            },
            Value::Null => return None,
            scalar => {
                warn!(
                    "Ignoring extra data of ajax source {}: {} has no fields",
                    self.name, scalar
                );
                return None;
            }
        };

        (!fields.is_empty()).then_some(fields)
    }
}
