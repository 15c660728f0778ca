//! Request descriptor passed to [`WikiHttp::request`](super::WikiHttp::request).

use reqwest::Method;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct RequestConfig {
    pub method: Method,
    /// Path relative to the base URL, or an absolute URL.
    pub url: String,
    pub body: Option<serde_json::Value>,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    /// Overrides the client timeout for this request only.
    pub timeout: Option<Duration>,
}

impl RequestConfig {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
            headers: Vec::new(),
            query: Vec::new(),
            timeout: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_has_no_body() {
        let req = RequestConfig::get("/agents/list");
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.url, "/agents/list");
        assert!(req.body.is_none());
        assert!(req.timeout.is_none());
    }

    #[test]
    fn test_builder_accumulates_in_order() {
        let req = RequestConfig::post("/agents/generate")
            .json(serde_json::json!({"owner": "acme"}))
            .header("X-Trace", "1")
            .query("page", "2")
            .query("page", "3")
            .timeout(Duration::from_secs(1));
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.body, Some(serde_json::json!({"owner": "acme"})));
        assert_eq!(req.headers, vec![("X-Trace".to_string(), "1".to_string())]);
        assert_eq!(
            req.query,
            vec![
                ("page".to_string(), "2".to_string()),
                ("page".to_string(), "3".to_string())
            ]
        );
        assert_eq!(req.timeout, Some(Duration::from_secs(1)));
    }
}
