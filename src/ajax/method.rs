use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// HTTP verb used to fetch table rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    #[default]
    #[serde(rename = "GET")]
    Get,
    #[serde(rename = "POST")]
    Post,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 2] = [HttpMethod::Get, HttpMethod::Post];

    /// Wire literals accepted by `configure`
    pub const ALLOWED: &'static [&'static str] =
        &[HttpMethod::Get.as_str(), HttpMethod::Post.as_str()];

    pub const fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }

    pub fn sends_body(&self) -> bool {
        matches!(self, HttpMethod::Post)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Literal is not one of `HttpMethod::ALLOWED`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedMethod(pub String);

impl FromStr for HttpMethod {
    type Err = UnsupportedMethod;

    // Matching is exact: "get" is not "GET".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpMethod::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| UnsupportedMethod(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_allowed_literals() {
        assert_eq!("GET".parse::<HttpMethod>(), Ok(HttpMethod::Get));
        assert_eq!("POST".parse::<HttpMethod>(), Ok(HttpMethod::Post));
    }

    #[test]
    fn test_parse_rejects_other_verbs() {
        assert_eq!(
            "PUT".parse::<HttpMethod>(),
            Err(UnsupportedMethod("PUT".to_string()))
        );
        assert!("get".parse::<HttpMethod>().is_err());
    }

    #[test]
    fn test_allowed_literals_round_trip() {
        for literal in HttpMethod::ALLOWED {
            let method: HttpMethod = literal.parse().unwrap();
            assert_eq!(method.as_str(), *literal);
        }
        assert_eq!(HttpMethod::ALLOWED.len(), HttpMethod::ALL.len());
    }

    #[test]
    fn test_display_matches_wire_literal() {
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::default(), HttpMethod::Get);
    }

    #[test]
    fn test_serde_uses_wire_literal() {
        let json = serde_json::to_string(&HttpMethod::Post).unwrap();
        assert_eq!(json, "\"POST\"");

        let parsed: HttpMethod = serde_json::from_str("\"GET\"").unwrap();
        assert_eq!(parsed, HttpMethod::Get);
    }
}
