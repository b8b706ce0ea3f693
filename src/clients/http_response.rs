//! HTTP response types for the Shopify REST client.
//!
//! This module provides the [`HttpResponse`] type and the Shopify-specific
//! header values parsed from it.

use std::collections::HashMap;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::clients::errors::DecodeError;
use crate::clients::pagination::Pagination;

/// Rate limit usage from the `X-Shopify-Shop-Api-Call-Limit` header.
///
/// The header format is "X/Y" where X is the current request count and Y is
/// the bucket size. Exposed read-only; the client does not throttle on it.
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::ApiCallLimit;
///
/// let limit = ApiCallLimit::parse("40/80").unwrap();
/// assert_eq!(limit.request_count, 40);
/// assert_eq!(limit.bucket_size, 80);
/// assert_eq!(limit.remaining(), 40);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiCallLimit {
    /// The current number of requests made in this bucket.
    pub request_count: u32,
    /// The maximum number of requests allowed in this bucket.
    pub bucket_size: u32,
}

impl ApiCallLimit {
    /// Parses the rate limit header value.
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let (count, size) = header_value.trim().split_once('/')?;
        Some(Self {
            request_count: count.trim().parse().ok()?,
            bucket_size: size.trim().parse().ok()?,
        })
    }

    /// Requests left in the bucket.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.bucket_size.saturating_sub(self.request_count)
    }
}

/// A response from the Admin REST API.
///
/// The body is kept as raw text; decoding into a typed value happens in
/// [`HttpResponse::json`] so that a non-JSON body can be reported as a
/// decode failure rather than a transport one.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
    /// Page links parsed from the `Link` header.
    pub pagination: Pagination,
    /// Rate limit usage.
    pub api_call_limit: Option<ApiCallLimit>,
    /// Wait requested through the `Retry-After` header.
    pub retry_after: Option<Duration>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing Shopify-specific headers.
    ///
    /// Header names are expected in lowercase.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        let first = |name: &str| headers.get(name).and_then(|values| values.first());

        let pagination = headers
            .get("link")
            .filter(|values| !values.is_empty())
            .map(|values| Pagination::parse_link_header(&values.join(", ")))
            .unwrap_or_default();

        let api_call_limit = first("x-shopify-shop-api-call-limit")
            .and_then(|value| ApiCallLimit::parse(value));

        let retry_after = first("retry-after")
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|secs| secs.is_finite() && *secs >= 0.0)
            .map(|secs| Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX));

        Self {
            code,
            headers,
            body,
            pagination,
            api_call_limit,
            retry_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the `X-Shopify-API-Deprecated-Reason` header value, if present.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.header("x-shopify-api-deprecated-reason")
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, DecodeError> {
        serde_json::from_str(&self.body).map_err(|e| DecodeError::new(self.code, &self.body, e))
    }

    /// Decodes the value under `key` of a JSON object body.
    ///
    /// This unwraps the resource envelope: `{"customer": {...}}` with key
    /// `customer` decodes the inner object.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the body is not an object, lacks `key`, or
    /// the value does not decode as `T`.
    pub fn json_field<T: DeserializeOwned>(&self, key: &'static str) -> Result<T, DecodeError> {
        let mut envelope: Map<String, Value> = self.json()?;
        let value = envelope
            .remove(key)
            .ok_or_else(|| DecodeError::missing_key(self.code, key))?;
        serde_json::from_value(value).map_err(|e| DecodeError::new(self.code, &self.body, e))
    }
}
