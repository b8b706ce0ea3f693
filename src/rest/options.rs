//! Query options shared by most list and count endpoints.
//!
//! Every field is optional and omitted from the query string when unset, so
//! `ListOptions::default()` sends no parameters at all. Resources with extra
//! filters define their own option structs next to the model; any
//! `Serialize` value is accepted where options are expected, including `()`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Common options for list endpoints.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::ListOptions;
///
/// let options = ListOptions {
///     limit: Some(50),
///     fields: Some("id,title".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(options.limit, Some(50));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
    /// Sort order, e.g. `"updated_at desc"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    /// Comma-separated list of fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    /// Restricts results to these ids; sent comma-joined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,
}

/// Common options for count endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CountOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::serialize_to_query;

    #[test]
    fn test_default_options_produce_no_query() {
        assert!(serialize_to_query(&ListOptions::default()).unwrap().is_empty());
        assert!(serialize_to_query(&CountOptions::default()).unwrap().is_empty());
    }

    #[test]
    fn test_only_set_fields_are_emitted() {
        let options = ListOptions {
            limit: Some(10),
            ids: Some(vec![1, 2, 3]),
            ..Default::default()
        };
        let query = serialize_to_query(&options).unwrap();
        assert_eq!(
            query,
            vec![
                ("ids".to_string(), "1,2,3".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_count_options_serialize_rfc3339() {
        let min = DateTime::parse_from_rfc3339("2016-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let options = CountOptions {
            created_at_min: Some(min),
            ..Default::default()
        };
        let query = serialize_to_query(&options).unwrap();
        assert_eq!(
            query,
            vec![(
                "created_at_min".to_string(),
                "2016-01-01T00:00:00Z".to_string()
            )]
        );
    }
}
