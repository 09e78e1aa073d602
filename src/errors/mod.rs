use anyhow::Context as _;
use std::path::Path;
use thiserror::Error;

/// Rejected ajax source configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown option \"{key}\", known options are: {known}")]
    UnknownOption { key: String, known: String },

    #[error("option \"{key}\" expects {expected}, got {found}")]
    InvalidType {
        key: String,
        expected: String,
        found: String,
    },

    #[error("option \"{key}\" has value {value}, allowed values are: {allowed}")]
    DisallowedValue {
        key: String,
        value: String,
        allowed: String,
    },

    #[error("option \"{key}\" given together with its alias \"{alias}\"")]
    DuplicateOption { key: String, alias: String },

    #[error("invalid source document: {reason}")]
    InvalidDocument { reason: String },
}

/// Add context to file read errors
pub fn read_context(path: &Path) -> String {
    format!("Failed to read source document: {}", path.display())
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Wrap result with file read context
pub fn with_read_context<T, E>(result: Result<T, E>, path: &Path) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| read_context(path))
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, data_type: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| parse_context(data_type))
}
