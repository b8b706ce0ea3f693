//! Metafield resource.
//!
//! Metafields store custom data on a shop or on an owning resource. The path
//! depends on the owner:
//!
//! - Shop: `metafields/{id}` via [`RestClient::metafields`]
//! - Any [`HasMetafields`](crate::rest::HasMetafields) owner:
//!   `{owner}/{owner_id}/metafields/{id}` via `service.metafields(owner_id)`
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::Metafield;
//!
//! let created = client
//!     .products()
//!     .metafields(632910392)
//!     .create(&Metafield {
//!         namespace: Some("inventory".into()),
//!         key: Some("warehouse".into()),
//!         value: Some(25.into()),
//!         metafield_type: Some("number_integer".into()),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::RestClient;
use crate::rest::{ResourceService, RestResource};

/// A metafield attached to a shop or resource.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Metafield {
    #[serde(skip_serializing)]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// The stored value; strings, numbers and JSON documents all occur.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// The value's type, e.g. `single_line_text_field` (`type` on the wire).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metafield_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_resource: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for Metafield {
    type Id = u64;
    const SINGULAR: &'static str = "metafield";
    const PLURAL: &'static str = "metafields";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

impl RestClient {
    /// Shop-level metafields.
    #[must_use]
    pub const fn metafields(&self) -> ResourceService<'_, Metafield> {
        ResourceService::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metafield_type_renamed_and_read_only_skipped() {
        let metafield = Metafield {
            id: Some(721389482),
            namespace: Some("affiliates".into()),
            key: Some("app_key".into()),
            value: Some(json!("app_key")),
            metafield_type: Some("single_line_text_field".into()),
            ..Default::default()
        };

        let value = serde_json::to_value(&metafield).unwrap();
        assert_eq!(value["type"], "single_line_text_field");
        assert!(value.get("metafield_type").is_none());
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_metafield_value_keeps_json_type() {
        let metafield: Metafield = serde_json::from_value(json!({
            "id": 1,
            "namespace": "inventory",
            "key": "warehouse",
            "value": 25,
            "type": "number_integer",
            "owner_resource": "product"
        }))
        .unwrap();

        assert_eq!(metafield.value, Some(json!(25)));
        assert_eq!(metafield.metafield_type.as_deref(), Some("number_integer"));
        assert_eq!(metafield.id(), Some(1));
    }
}
