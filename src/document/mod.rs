use anyhow::Result;
use log::info;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::ajax::AjaxSourceConfig;
use crate::ajax::options::describe;
use crate::errors::{ValidationError, with_parse_context, with_read_context};

/// Ajax source definition as written in a JSON file:
/// `{"name": "usersTable", "options": {"url": "/users", "method": "POST"}}`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceDocument {
    pub name: Value,
    #[serde(default)]
    pub options: Map<String, Value>,
}

impl SourceDocument {
    pub fn into_source(self) -> Result<AjaxSourceConfig, ValidationError> {
        let name = match self.name {
            Value::String(name) => name,
            other => {
                return Err(ValidationError::InvalidDocument {
                    reason: format!("name must be a string, got {}", describe(&other)),
                });
            }
        };

        let mut source = AjaxSourceConfig::new(name);
        source.configure(&self.options)?;
        Ok(source)
    }
}

/// Parse and configure a source from JSON text
pub fn parse_source(json: &str) -> Result<AjaxSourceConfig> {
    let document: SourceDocument = with_parse_context(serde_json::from_str(json), "source document")?;
    with_parse_context(document.into_source(), "ajax source options")
}

/// Read, parse and configure a source from a JSON file
pub fn load_source<P: AsRef<Path>>(path: P) -> Result<AjaxSourceConfig> {
    let path = path.as_ref();
    let json = with_read_context(fs::read_to_string(path), path)?;
    let source = parse_source(&json)?;

    info!("Loaded ajax source {} from {}", source.name(), path.display());
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ajax::HttpMethod;

    #[test]
    fn test_parse_full_document() {
        let source = parse_source(
            r#"{
                "name": "usersTable",
                "options": {"url": "/users", "type": "POST", "pipeline": 3}
            }"#,
        )
        .unwrap();

        assert_eq!(source.name(), "usersTable");
        assert_eq!(source.url(), Some("/users"));
        assert_eq!(source.method(), HttpMethod::Post);
        assert_eq!(source.pipeline_pages(), 3);
    }

    #[test]
    fn test_options_are_optional() {
        let source = parse_source(r#"{"name": "usersTable"}"#).unwrap();

        assert_eq!(source, AjaxSourceConfig::new("usersTable"));
    }

    #[test]
    fn test_non_string_name_rejected() {
        let document = SourceDocument {
            name: serde_json::json!(42),
            options: Map::new(),
        };

        assert_eq!(
            document.into_source().unwrap_err(),
            ValidationError::InvalidDocument {
                reason: "name must be a string, got integer".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_option_surfaces_validation_error() {
        let err = parse_source(r#"{"name": "t", "options": {"method": "PUT"}}"#).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ValidationError>(),
            Some(ValidationError::DisallowedValue { .. })
        ));
    }

    #[test]
    fn test_load_source_from_file() {
        let temp_dir = std::env::temp_dir().join("datatable_ajax_test_documents");
        fs::create_dir_all(&temp_dir).unwrap();
        let path = temp_dir.join("users.json");
        fs::write(&path, r#"{"name": "usersTable", "options": {"url": "/users"}}"#).unwrap();

        let source = load_source(&path).unwrap();

        assert_eq!(source.url(), Some("/users"));

        // Cleanup
        fs::remove_dir_all(&temp_dir).unwrap();
    }

    #[test]
    fn test_load_missing_file_has_context() {
        let err = load_source("/nonexistent/datatable_ajax/source.json").unwrap_err();

        assert!(err.to_string().starts_with("Failed to read source document"));
    }
}
