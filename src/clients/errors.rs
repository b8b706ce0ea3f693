//! HTTP-specific error types for the Shopify REST client.
//!
//! Every request ends in exactly one outcome: a decoded value or one
//! [`HttpError`]. The variants form the client's error taxonomy:
//!
//! - [`HttpError::Validation`]: a non-2xx response that is not retried
//!   (422 with field errors, 404, 401, ...)
//! - [`HttpError::RateLimited`]: a 429 response
//! - [`HttpError::Server`]: a 5xx response
//! - [`HttpError::Transport`]: no response was received
//! - [`HttpError::Decode`]: a 2xx response whose body did not have the expected shape
//! - [`HttpError::RetryExhausted`]: retries ran out; wraps the last error
//! - [`HttpError::Cancelled`]: the caller's cancellation token fired
//! - [`HttpError::InvalidRequest`]: the request was rejected before sending
//!
//! Rate-limited, server and transport errors are retried internally and
//! only surface directly when the client makes a single attempt.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::HttpError;
//!
//! match client.count("customers/count", &()).await {
//!     Ok(count) => println!("{count} customers"),
//!     Err(HttpError::Validation(e)) => {
//!         for (field, messages) in &e.errors {
//!             println!("{field}: {messages:?}");
//!         }
//!     }
//!     Err(HttpError::RetryExhausted(e)) => {
//!         println!("gave up after {} tries: {}", e.tries, e.last);
//!     }
//!     Err(other) => println!("request failed: {other}"),
//! }
//! ```

use std::collections::BTreeMap;
use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

/// Field key used for messages that are not tied to a specific field.
pub const BASE_ERROR_FIELD: &str = "base";

/// Maximum number of body bytes kept on a [`DecodeError`].
const DECODE_BODY_PREVIEW: usize = 512;

/// A non-successful HTTP response, with its decoded error body.
///
/// The `message` is derived from the body:
///
/// - `{"errors": "text"}` gives `text`
/// - `{"errors": ["a", "b"]}` gives `a, b`
/// - `{"errors": {"email": ["is invalid"]}}` gives `email: is invalid`
/// - `{"error": "text"}` gives `text`
/// - anything else gives the status's canonical reason
///
/// Field-level messages are kept in `errors`; messages without a field are
/// stored under [`BASE_ERROR_FIELD`].
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::HttpResponseError;
///
/// let error = HttpResponseError::from_body(
///     422,
///     r#"{"errors":{"email":["is invalid"],"phone":["is taken"]}}"#,
///     Some("req-1"),
/// );
///
/// assert_eq!(error.message, "email: is invalid, phone: is taken");
/// assert_eq!(error.errors["email"], vec!["is invalid".to_string()]);
/// assert_eq!(error.error_reference.as_deref(), Some("req-1"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Human-readable message derived from the body.
    pub message: String,
    /// Field name to messages.
    pub errors: BTreeMap<String, Vec<String>>,
    /// Reference ID for error reporting (from the `X-Request-Id` header).
    pub error_reference: Option<String>,
}

impl HttpResponseError {
    /// Creates an error with only a status and message.
    #[must_use]
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            errors: BTreeMap::new(),
            error_reference: None,
        }
    }

    /// Decodes an error body.
    ///
    /// Bodies that are not JSON, or JSON without `errors`/`error`, fall back
    /// to the status code's canonical reason.
    #[must_use]
    pub fn from_body(code: u16, body: &str, request_id: Option<&str>) -> Self {
        let parsed = serde_json::from_str::<Value>(body).ok();
        let mut errors = BTreeMap::new();

        let message = parsed
            .as_ref()
            .and_then(|value| Self::collect_errors(value, &mut errors))
            .unwrap_or_else(|| canonical_reason(code));

        Self {
            code,
            message,
            errors,
            error_reference: request_id.map(String::from),
        }
    }

    /// Returns the messages recorded for `field`.
    #[must_use]
    pub fn field_errors(&self, field: &str) -> &[String] {
        self.errors.get(field).map_or(&[], Vec::as_slice)
    }

    fn collect_errors(body: &Value, errors: &mut BTreeMap<String, Vec<String>>) -> Option<String> {
        match body.get("errors") {
            Some(Value::String(message)) => {
                errors.insert(BASE_ERROR_FIELD.to_string(), vec![message.clone()]);
                Some(message.clone())
            }
            Some(Value::Array(items)) => {
                let messages: Vec<String> = items.iter().map(value_to_message).collect();
                let joined = messages.join(", ");
                errors.insert(BASE_ERROR_FIELD.to_string(), messages);
                Some(joined)
            }
            Some(Value::Object(fields)) => {
                let mut parts = Vec::new();
                for (field, value) in fields {
                    let messages: Vec<String> = match value {
                        Value::Array(items) => items.iter().map(value_to_message).collect(),
                        other => vec![value_to_message(other)],
                    };
                    parts.extend(messages.iter().map(|m| format!("{field}: {m}")));
                    errors.insert(field.clone(), messages);
                }
                parts.sort();
                Some(parts.join(", "))
            }
            _ => {
                let error = body.get("error").and_then(Value::as_str)?;
                let message = match body.get("error_description").and_then(Value::as_str) {
                    Some(description) => format!("{error}: {description}"),
                    None => error.to_string(),
                };
                errors.insert(BASE_ERROR_FIELD.to_string(), vec![message.clone()]);
                Some(message)
            }
        }
    }
}

/// A 429 response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Rate limited: {response}")]
pub struct RateLimitedError {
    /// The decoded response.
    pub response: HttpResponseError,
    /// Wait requested by the server through `Retry-After`.
    pub retry_after: Option<Duration>,
}

/// A response in the server error range.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Server error ({}): {}", .response.code, .response.message)]
pub struct ServerError {
    /// The decoded response.
    pub response: HttpResponseError,
    /// Wait requested by the server through `Retry-After`.
    pub retry_after: Option<Duration>,
}

/// A 2xx response body that could not be decoded into the expected type.
///
/// Never retried: a shape mismatch does not heal on retry.
#[derive(Debug, Error)]
#[error("Failed to decode response body (status {code}): {source}")]
pub struct DecodeError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The start of the offending body.
    pub body: String,
    /// The underlying decode failure.
    #[source]
    pub source: serde_json::Error,
}

impl DecodeError {
    /// Creates a decode error, keeping a bounded preview of the body.
    #[must_use]
    pub fn new(code: u16, body: &str, source: serde_json::Error) -> Self {
        let mut end = body.len().min(DECODE_BODY_PREVIEW);
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        Self {
            code,
            body: body[..end].to_string(),
            source,
        }
    }

    /// Creates a decode error for an envelope that lacks `key`.
    #[must_use]
    pub fn missing_key(code: u16, key: &'static str) -> Self {
        Self {
            code,
            body: String::new(),
            source: <serde_json::Error as serde::de::Error>::missing_field(key),
        }
    }
}

/// Retries were exhausted.
///
/// Wraps the last classified error so callers can tell "the API rejected the
/// request" apart from "the API stayed unavailable for N attempts".
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::{
///     HttpError, HttpResponseError, MaxHttpRetriesExceededError, ServerError,
/// };
///
/// let error = MaxHttpRetriesExceededError {
///     tries: 3,
///     last: Box::new(HttpError::Server(ServerError {
///         response: HttpResponseError::new(503, "Service Unavailable"),
///         retry_after: None,
///     })),
/// };
///
/// assert!(error.to_string().contains("Exceeded maximum retry count of 3"));
/// ```
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last error: {last}")]
pub struct MaxHttpRetriesExceededError {
    /// The number of attempts that were made.
    pub tries: u32,
    /// The error of the final attempt.
    #[source]
    pub last: Box<HttpError>,
}

/// A request rejected before it was sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request path is empty after normalization.
    #[error("Invalid REST API path: '{path}'")]
    InvalidPath {
        /// The path that was provided.
        path: String,
    },

    /// Query options could not be encoded.
    #[error("Invalid query options: {reason}")]
    InvalidOptions {
        /// Why encoding failed.
        reason: String,
    },

    /// The request body could not be serialized.
    #[error("Failed to serialize request body: {reason}")]
    InvalidBody {
        /// Why serialization failed.
        reason: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Non-2xx response that is returned without retrying.
    #[error(transparent)]
    Validation(HttpResponseError),

    /// 429 response.
    #[error(transparent)]
    RateLimited(#[from] RateLimitedError),

    /// 5xx response.
    #[error(transparent)]
    Server(#[from] ServerError),

    /// Network or connection failure before a response was received.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A successful response whose body did not match the expected shape.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Maximum retry attempts exhausted.
    #[error(transparent)]
    RetryExhausted(#[from] MaxHttpRetriesExceededError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The caller cancelled the request.
    #[error("Request was cancelled")]
    Cancelled,
}

impl HttpError {
    /// Returns the HTTP status of the response behind this error, if any.
    ///
    /// For [`HttpError::RetryExhausted`] this is the status of the last attempt.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Validation(e) => Some(e.code),
            Self::RateLimited(e) => Some(e.response.code),
            Self::Server(e) => Some(e.response.code),
            Self::Decode(e) => Some(e.code),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::RetryExhausted(e) => e.last.status(),
            Self::InvalidRequest(_) | Self::Cancelled => None,
        }
    }

    /// Returns the decoded error response, if this error carries one.
    #[must_use]
    pub fn response(&self) -> Option<&HttpResponseError> {
        match self {
            Self::Validation(e) => Some(e),
            Self::RateLimited(e) => Some(&e.response),
            Self::Server(e) => Some(&e.response),
            Self::RetryExhausted(e) => e.last.response(),
            _ => None,
        }
    }

    /// Returns `true` for a 404 response.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Validation(e) if e.code == 404)
    }

    /// Server-requested wait before retrying, if any.
    #[must_use]
    pub const fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited(e) => e.retry_after,
            Self::Server(e) => e.retry_after,
            _ => None,
        }
    }
}

fn value_to_message(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn canonical_reason(code: u16) -> String {
    reqwest::StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .map_or_else(|| format!("HTTP {code}"), String::from)
}
