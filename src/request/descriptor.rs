use serde::Serialize;
use serde_json::{Value, json};

use super::query::{append_query, build_query_string};
use crate::ajax::{AjaxSourceConfig, HttpMethod, RequestPayload};

/// Client-side request built from a configured ajax source
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AjaxRequest {
    pub method: HttpMethod,
    pub url: Option<String>,
    pub data: RequestPayload,
    pub pipeline_pages: u64,
}

impl AjaxRequest {
    pub fn from_source(source: &AjaxSourceConfig) -> Self {
        Self {
            method: source.method(),
            url: source.url().map(str::to_string),
            data: source.request_payload(),
            pipeline_pages: source.pipeline_pages(),
        }
    }

    pub fn is_pipelined(&self) -> bool {
        self.pipeline_pages > 0
    }

    pub fn query_string(&self) -> String {
        build_query_string(&self.data)
    }

    /// Url to call; GET requests carry the payload in the query string
    pub fn target(&self) -> Option<String> {
        let url = self.url.as_deref()?;

        if self.method.sends_body() {
            Some(url.to_string())
        } else {
            Some(append_query(url, &self.query_string()))
        }
    }

    /// JSON body for POST requests
    pub fn body(&self) -> Option<String> {
        self.method
            .sends_body()
            .then(|| Value::Object(self.data.clone()).to_string())
    }

    /// `ajax` option object for the DataTables client.
    ///
    /// Pipelined sources are wrapped for the pipeline helper, which takes
    /// the verb as `method` and the page count as `pages`.
    pub fn to_datatables_options(&self) -> Value {
        if self.is_pipelined() {
            json!({
                "pipeline": {
                    "url": self.url,
                    "pages": self.pipeline_pages,
                    "method": self.method,
                    "data": self.data,
                }
            })
        } else {
            json!({
                "url": self.url,
                "type": self.method,
                "data": self.data,
            })
        }
    }
}

impl From<&AjaxSourceConfig> for AjaxRequest {
    fn from(source: &AjaxSourceConfig) -> Self {
        Self::from_source(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users_source() -> AjaxSourceConfig {
        let mut source = AjaxSourceConfig::new("usersTable");
        source
            .set_url(Some("/users/data".to_string()))
            .set_extra_data(Some(json!({"status": "active"})));
        source
    }

    #[test]
    fn test_request_mirrors_source() {
        let request = AjaxRequest::from_source(&users_source());

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url.as_deref(), Some("/users/data"));
        assert_eq!(
            Value::Object(request.data.clone()),
            json!({"name": "usersTable", "status": "active"})
        );
        assert!(!request.is_pipelined());
    }

    #[test]
    fn test_get_request_targets_query_string() {
        let request = AjaxRequest::from_source(&users_source());

        assert_eq!(
            request.target().as_deref(),
            Some("/users/data?name=usersTable&status=active")
        );
        assert_eq!(request.body(), None);
    }

    #[test]
    fn test_post_request_carries_json_body() {
        let mut source = users_source();
        source.set_method(HttpMethod::Post);
        let request = AjaxRequest::from(&source);

        assert_eq!(request.target().as_deref(), Some("/users/data"));
        assert_eq!(
            request.body().as_deref(),
            Some(r#"{"name":"usersTable","status":"active"}"#)
        );
    }

    #[test]
    fn test_request_without_url_has_no_target() {
        let request = AjaxRequest::from_source(&AjaxSourceConfig::new("usersTable"));

        assert_eq!(request.target(), None);
    }

    #[test]
    fn test_datatables_options_plain() {
        let request = AjaxRequest::from_source(&users_source());

        assert_eq!(
            request.to_datatables_options(),
            json!({
                "url": "/users/data",
                "type": "GET",
                "data": {"name": "usersTable", "status": "active"}
            })
        );
    }

    #[test]
    fn test_datatables_options_pipelined() {
        let mut source = users_source();
        source.set_pipeline_pages(5).set_method(HttpMethod::Post);
        let request = AjaxRequest::from_source(&source);

        assert_eq!(
            request.to_datatables_options(),
            json!({
                "pipeline": {
                    "url": "/users/data",
                    "pages": 5,
                    "method": "POST",
                    "data": {"name": "usersTable", "status": "active"}
                }
            })
        );
    }
}
