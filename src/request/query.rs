use serde_json::Value;

use crate::ajax::RequestPayload;

/// Render payload fields as `key=value&...`
pub fn build_query_string(payload: &RequestPayload) -> String {
    payload
        .iter()
        .map(|(key, value)| format_pair(key, value))
        .collect::<Vec<_>>()
        .join("&")
}

/// Append a query string with `&` or `?` based on existing params
pub fn append_query(base_url: &str, query: &str) -> String {
    if query.is_empty() {
        base_url.to_string()
    } else {
        let separator = determine_separator(base_url);
        format!("{}{}{}", base_url, separator, query)
    }
}

fn format_pair(key: &str, value: &Value) -> String {
    format!(
        "{}={}",
        urlencoding::encode(key),
        urlencoding::encode(&value_text(value))
    )
}

// Strings go out verbatim, everything else as compact JSON.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn determine_separator(url: &str) -> char {
    if url.contains('?') { '&' } else { '?' }
}
