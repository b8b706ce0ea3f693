//! Encoding of typed option structs into query parameters.
//!
//! Options are plain `Serialize` structs. They are encoded through
//! `serde_json::Value` with these rules:
//!
//! - `None` fields (serialized as `null`) are omitted
//! - strings, numbers and booleans are emitted as-is
//! - arrays are joined with commas (`ids=1,2,3`)
//! - nested objects use bracket keys (`asset[key]=templates/index.liquid`)
//! - timestamps are whatever their `Serialize` impl emits; for
//!   `chrono::DateTime<Utc>` that is RFC 3339 (`2016-01-01T00:00:00Z`)
//!
//! Pairs come out sorted by key. A sequence of `(key, value)` pairs, which
//! is how [`PageOptions`](crate::clients::PageOptions) serializes, is
//! emitted verbatim and in order, repeated keys included.

use serde::Serialize;
use serde_json::Value;

use crate::clients::errors::InvalidHttpRequestError;

/// Encodes `options` as query pairs.
///
/// `()` and `None` encode to no parameters.
///
/// # Errors
///
/// Returns [`InvalidHttpRequestError::InvalidOptions`] if `options` does not
/// serialize to a JSON object or a sequence of string pairs.
///
/// # Example
///
/// ```rust
/// use serde::Serialize;
/// use shopify_rest::clients::serialize_to_query;
///
/// #[derive(Serialize)]
/// struct Options {
///     limit: Option<u32>,
///     ids: Vec<u64>,
///     page_info: Option<String>,
/// }
///
/// let query = serialize_to_query(&Options { limit: Some(50), ids: vec![1, 2], page_info: None }).unwrap();
/// assert_eq!(
///     query,
///     vec![("ids".to_string(), "1,2".to_string()), ("limit".to_string(), "50".to_string())]
/// );
/// ```
pub fn serialize_to_query<O: Serialize + ?Sized>(
    options: &O,
) -> Result<Vec<(String, String)>, InvalidHttpRequestError> {
    let value = serde_json::to_value(options).map_err(|e| InvalidHttpRequestError::InvalidOptions {
        reason: e.to_string(),
    })?;

    let mut query = Vec::new();
    match value {
        Value::Null => {}
        Value::Object(map) => {
            for (key, value) in map {
                push_value(&mut query, key, value);
            }
        }
        Value::Array(pairs) => {
            for pair in pairs {
                query.push(into_pair(pair)?);
            }
        }
        other => {
            return Err(InvalidHttpRequestError::InvalidOptions {
                reason: format!("expected a struct or map, got {other}"),
            });
        }
    }
    Ok(query)
}

fn into_pair(pair: Value) -> Result<(String, String), InvalidHttpRequestError> {
    if let Value::Array(items) = pair {
        if let Ok([Value::String(key), Value::String(value)]) = <[Value; 2]>::try_from(items) {
            return Ok((key, value));
        }
    }
    Err(InvalidHttpRequestError::InvalidOptions {
        reason: "expected a sequence of (key, value) string pairs".to_string(),
    })
}

fn push_value(query: &mut Vec<(String, String)>, key: String, value: Value) {
    match value {
        Value::Null => {}
        Value::Bool(b) => query.push((key, b.to_string())),
        Value::Number(n) => query.push((key, n.to_string())),
        Value::String(s) => query.push((key, s)),
        Value::Array(items) => {
            let joined: Vec<String> = items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    Value::Number(n) => Some(n.to_string()),
                    Value::Bool(b) => Some(b.to_string()),
                    _ => None,
                })
                .collect();
            if !joined.is_empty() {
                query.push((key, joined.join(",")));
            }
        }
        Value::Object(map) => {
            for (sub_key, sub_value) in map {
                push_value(query, format!("{key}[{sub_key}]"), sub_value);
            }
        }
    }
}
