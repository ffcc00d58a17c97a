//! HTTP request building with API-specific headers.

use std::collections::HashMap;
use serde::Serialize;

use crate::error::{Error, ErrorKind, Result};
use crate::query::QueryParams;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
}

impl RequestMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
        }
    }

    /// Upper-case verb as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
        }
    }
}

impl std::fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body content, already serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    Json(String),
}

impl RequestBody {
    /// The raw bytes sent on the wire.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            RequestBody::Json(text) => text.as_bytes(),
        }
    }
}

/// Builder for a single outbound request.
///
/// Constructed fresh per call and consumed by
/// [`RoyaleHttpClient::execute`](crate::RoyaleHttpClient::execute).
#[derive(Debug)]
pub struct RequestBuilder {
    pub(crate) method: RequestMethod,
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) query_params: Vec<(String, String)>,
    pub(crate) body: Option<RequestBody>,
    pub(crate) bearer_token: Option<String>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: RequestMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            query_params: Vec::new(),
            body: None,
            bearer_token: None,
        }
    }

    /// Set the bearer token for authentication.
    pub fn bearer_auth(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Add a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((name.into(), value.into()));
        self
    }

    /// Append every parameter that passed its guard.
    pub fn query_params(mut self, params: QueryParams) -> Self {
        self.query_params.extend(params.into_pairs());
        self
    }

    /// Serialize `body` as the JSON request body.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        let text = serde_json::to_string(body)
            .map_err(|e| Error::with_source(ErrorKind::Serialization(e.to_string()), e))?;
        self.body = Some(RequestBody::Json(text));
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        Ok(self)
    }

    /// The request method.
    pub fn method(&self) -> RequestMethod {
        self.method
    }

    /// The URL without its query string.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Look up a header set on this request.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Query pairs in insertion order.
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query_params
    }

    /// The serialized body, if any.
    pub fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }

    /// Bearer token attached to this request, if any.
    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }

    /// Full URL including the encoded query string.
    pub fn resolved_url(&self) -> Result<String> {
        if self.query_params.is_empty() {
            return Ok(self.url.clone());
        }
        let query = serde_urlencoded::to_string(&self.query_params)?;
        Ok(format!("{}?{}", self.url, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryField;

    #[test]
    fn test_request_builder() {
        let req = RequestBuilder::new(RequestMethod::Get, "https://example.com/v1/clans")
            .bearer_auth("token123")
            .header("X-Custom", "value")
            .query("name", "royal");

        assert_eq!(req.method(), RequestMethod::Get);
        assert_eq!(req.url(), "https://example.com/v1/clans");
        assert_eq!(req.bearer_token(), Some("token123"));
        assert_eq!(req.header_value("X-Custom"), Some("value"));
        assert_eq!(req.query_pairs().len(), 1);
        assert!(req.body().is_none());
    }

    #[test]
    fn test_json_body_sets_content_type() {
        let req = RequestBuilder::new(RequestMethod::Post, "https://example.com")
            .json(&serde_json::json!({"token": "abc"}))
            .unwrap();

        assert_eq!(
            req.body(),
            Some(&RequestBody::Json(r#"{"token":"abc"}"#.to_string()))
        );
        assert_eq!(req.header_value("Content-Type"), Some("application/json"));
    }

    #[test]
    fn test_json_body_failure_is_surfaced() {
        use std::collections::HashMap;

        // JSON object keys must be strings.
        let mut bad = HashMap::new();
        bad.insert(vec![1u8], "value");

        let err = RequestBuilder::new(RequestMethod::Post, "https://example.com")
            .json(&bad)
            .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Serialization(_)));
    }

    #[test]
    fn test_resolved_url_encodes_query() {
        let params = QueryParams::new()
            .text(QueryField::Name, Some("Royal Crew"))
            .number(QueryField::MinMembers, Some(10));

        let req = RequestBuilder::new(RequestMethod::Get, "https://example.com/v1/clans")
            .query_params(params);

        assert_eq!(
            req.resolved_url().unwrap(),
            "https://example.com/v1/clans?name=Royal+Crew&minMembers=10"
        );
    }

    #[test]
    fn test_resolved_url_without_query() {
        let req = RequestBuilder::new(RequestMethod::Get, "https://example.com/v1/locations");
        assert_eq!(
            req.resolved_url().unwrap(),
            "https://example.com/v1/locations"
        );
    }

    #[test]
    fn test_method_display() {
        assert_eq!(RequestMethod::Get.to_string(), "GET");
        assert_eq!(RequestMethod::Post.to_reqwest(), reqwest::Method::POST);
    }
}
