//! HTTP request types for the Shopify REST client.
//!
//! This module provides the [`HttpRequest`] type and its builder. A request
//! is immutable once built and is re-sent unchanged on every retry.

use std::fmt;

use serde_json::Value;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Admin REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and triggering actions.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    pub(crate) fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// A request to be sent to the Admin REST API.
///
/// The `path` is relative to the admin path prefix (for example
/// `customers/42.json`). Query pairs are sent in order.
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let get = HttpRequest::builder(HttpMethod::Get, "customers.json")
///     .query_param("limit", "50")
///     .build()
///     .unwrap();
/// assert_eq!(get.query, vec![("limit".to_string(), "50".to_string())]);
///
/// let post = HttpRequest::builder(HttpMethod::Post, "customers.json")
///     .body(json!({"customer": {"email": "bob@example.com"}}))
///     .build()
///     .unwrap();
/// assert!(post.body.is_some());
///
/// assert!(HttpRequest::builder(HttpMethod::Put, "customers/1.json").build().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path relative to the admin path prefix.
    pub path: String,
    /// JSON request body, if any.
    pub body: Option<Value>,
    /// Query parameters, in send order.
    pub query: Vec<(String, String)>,
    /// Additional headers to include in the request.
    pub extra_headers: Vec<(String, String)>,
    /// Per-request override of the retry policy's attempt limit.
    pub max_attempts: Option<u32>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingBody`] when a POST or PUT
    /// has no body or a `null` one, and [`InvalidHttpRequestError::InvalidPath`] when the
    /// path is empty.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.trim().is_empty() {
            return Err(InvalidHttpRequestError::InvalidPath {
                path: self.path.clone(),
            });
        }

        if matches!(self.http_method, HttpMethod::Post | HttpMethod::Put)
            && matches!(self.body, None | Some(Value::Null))
        {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<Value>,
    query: Vec<(String, String)>,
    extra_headers: Vec<(String, String)>,
    max_attempts: Option<u32>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: Vec::new(),
            extra_headers: Vec::new(),
            max_attempts: None,
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Replaces all query parameters.
    #[must_use]
    pub fn query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.push((key.into(), value.into()));
        self
    }

    /// Overrides the attempt limit for this request only.
    #[must_use]
    pub const fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
            extra_headers: self.extra_headers,
            max_attempts: self.max_attempts,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_post_and_put_require_body() {
        for method in [HttpMethod::Post, HttpMethod::Put] {
            let result = HttpRequest::builder(method, "orders.json").build();
            assert!(matches!(
                result,
                Err(InvalidHttpRequestError::MissingBody { .. })
            ));
        }
    }

    #[test]
    fn test_null_body_counts_as_missing() {
        let result = HttpRequest::builder(HttpMethod::Post, "orders/1/close.json")
            .body(Value::Null)
            .build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { .. })
        ));

        assert!(HttpRequest::builder(HttpMethod::Post, "orders/1/close.json")
            .body(json!({}))
            .build()
            .is_ok());
    }

    #[test]
    fn test_get_and_delete_do_not_require_body() {
        assert!(HttpRequest::builder(HttpMethod::Get, "orders.json")
            .build()
            .is_ok());
        assert!(HttpRequest::builder(HttpMethod::Delete, "orders/1.json")
            .build()
            .is_ok());
    }

    #[test]
    fn test_empty_path_rejected() {
        let result = HttpRequest::builder(HttpMethod::Get, " ").build();
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_builder_collects_query_headers_and_attempts() {
        let request = HttpRequest::builder(HttpMethod::Post, "orders/1/close.json")
            .body(json!({}))
            .query_param("a", "1")
            .query_param("b", "2")
            .header("X-Test", "yes")
            .max_attempts(1)
            .build()
            .unwrap();

        assert_eq!(request.query.len(), 2);
        assert_eq!(request.query[1], ("b".to_string(), "2".to_string()));
        assert_eq!(request.extra_headers[0].0, "X-Test");
        assert_eq!(request.max_attempts, Some(1));
    }
}
