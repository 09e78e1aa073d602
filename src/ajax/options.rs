use serde_json::{Map, Value};

use crate::ajax::HttpMethod;
use crate::config::SourceDefaults;
use crate::errors::ValidationError;

/// JSON shape an option value may take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    String,
    NonNegativeInt,
    Map,
}

impl ValueKind {
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ValueKind::Null => value.is_null(),
            ValueKind::String => value.is_string(),
            ValueKind::NonNegativeInt => value.as_u64().is_some(),
            ValueKind::Map => value.is_object(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::String => "string",
            ValueKind::NonNegativeInt => "non-negative integer",
            ValueKind::Map => "mapping",
        }
    }
}

/// Field of `AjaxSourceConfig` an option writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionField {
    Url,
    Method,
    ExtraData,
    PipelinePages,
}

/// One row of the option schema
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    pub key: &'static str,
    /// Name the option carries in DataTables' own ajax settings
    pub alias: &'static str,
    pub field: OptionField,
    pub allowed: &'static [ValueKind],
    pub allowed_values: Option<&'static [&'static str]>,
}

impl OptionSpec {
    pub fn accepts_key(&self, key: &str) -> bool {
        key == self.key || key == self.alias
    }

    /// Type check followed by the allowed-value check
    pub fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        if !self.allowed.iter().any(|kind| kind.matches(value)) {
            return Err(ValidationError::InvalidType {
                key: self.key.to_string(),
                expected: self.expected(),
                found: describe(value).to_string(),
            });
        }

        if let (Some(allowed), Some(literal)) = (self.allowed_values, value.as_str()) {
            if !allowed.contains(&literal) {
                return Err(ValidationError::DisallowedValue {
                    key: self.key.to_string(),
                    value: value.to_string(),
                    allowed: allowed.join(", "),
                });
            }
        }

        Ok(())
    }

    fn expected(&self) -> String {
        self.allowed
            .iter()
            .map(ValueKind::name)
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

pub const AJAX_OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        key: "url",
        alias: "url",
        field: OptionField::Url,
        allowed: &[ValueKind::Null, ValueKind::String],
        allowed_values: None,
    },
    OptionSpec {
        key: "method",
        alias: "type",
        field: OptionField::Method,
        allowed: &[ValueKind::String],
        allowed_values: Some(HttpMethod::ALLOWED),
    },
    OptionSpec {
        key: "extraData",
        alias: "data",
        field: OptionField::ExtraData,
        allowed: &[ValueKind::Null, ValueKind::Map],
        allowed_values: None,
    },
    OptionSpec {
        key: "pipelinePages",
        alias: "pipeline",
        field: OptionField::PipelinePages,
        allowed: &[ValueKind::NonNegativeInt],
        allowed_values: None,
    },
];

/// Complete, validated set of source options
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
    pub url: Option<String>,
    pub method: HttpMethod,
    pub extra_data: Option<Value>,
    pub pipeline_pages: u64,
}

impl From<SourceDefaults> for ResolvedOptions {
    fn from(defaults: SourceDefaults) -> Self {
        Self {
            url: defaults.url,
            method: defaults.method,
            extra_data: defaults.extra_data,
            pipeline_pages: defaults.pipeline_pages,
        }
    }
}

/// Validate `options` against `schema` and fill in defaults for missing keys.
///
/// Every supplied key is checked before anything is returned, so a failure
/// never yields a partially resolved set.
pub fn resolve(
    schema: &[OptionSpec],
    options: &Map<String, Value>,
    defaults: SourceDefaults,
) -> Result<ResolvedOptions, ValidationError> {
    check_known_keys(schema, options)?;

    let mut resolved = ResolvedOptions::from(defaults);

    for spec in schema {
        if let Some(value) = lookup(spec, options)? {
            spec.validate(value)?;
            apply(spec, value, &mut resolved);
        }
    }

    Ok(resolved)
}

fn check_known_keys(
    schema: &[OptionSpec],
    options: &Map<String, Value>,
) -> Result<(), ValidationError> {
    match options
        .keys()
        .find(|key| !schema.iter().any(|spec| spec.accepts_key(key)))
    {
        Some(key) => Err(ValidationError::UnknownOption {
            key: key.clone(),
            known: known_keys(schema),
        }),
        None => Ok(()),
    }
}

fn lookup<'a>(
    spec: &OptionSpec,
    options: &'a Map<String, Value>,
) -> Result<Option<&'a Value>, ValidationError> {
    match (options.get(spec.key), options.get(spec.alias)) {
        (Some(_), Some(_)) if spec.key != spec.alias => Err(ValidationError::DuplicateOption {
            key: spec.key.to_string(),
            alias: spec.alias.to_string(),
        }),
        (Some(value), _) | (None, Some(value)) => Ok(Some(value)),
        (None, None) => Ok(None),
    }
}

// Runs after `OptionSpec::validate`, so every value already has an accepted shape.
fn apply(spec: &OptionSpec, value: &Value, resolved: &mut ResolvedOptions) {
    match spec.field {
        OptionField::Url => {
            resolved.url = value.as_str().map(str::to_string);
        }
        OptionField::Method => {
            if let Some(method) = value.as_str().and_then(|literal| literal.parse().ok()) {
                resolved.method = method;
            }
        }
        OptionField::ExtraData => {
            resolved.extra_data = match value {
                Value::Null => None,
                other => Some(other.clone()),
            };
        }
        OptionField::PipelinePages => {
            if let Some(pages) = value.as_u64() {
                resolved.pipeline_pages = pages;
            }
        }
    }
}

fn known_keys(schema: &[OptionSpec]) -> String {
    schema
        .iter()
        .map(|spec| spec.key)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Human readable kind of a JSON value, for error messages
pub fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_u64() => "integer",
        Value::Number(n) if n.is_i64() => "negative integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}
