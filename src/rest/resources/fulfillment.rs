//! Fulfillment resource, nested under any [`HasFulfillments`] owner.
//!
//! [`HasFulfillments`]: crate::rest::HasFulfillments

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::rest::resources::common::{Address, LineItem};
use crate::rest::{ResourceError, ResourceService, RestResource};

/// A shipment of some or all of an order's line items.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Fulfillment {
    #[serde(skip_serializing)]
    pub id: Option<u64>,
    #[serde(skip_serializing)]
    pub order_id: Option<u64>,
    /// e.g. `#1001.1`.
    #[serde(skip_serializing)]
    pub name: Option<String>,
    /// `pending`, `open`, `success`, `cancelled`, `error` or `failure`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_numbers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_customer: Option<bool>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for Fulfillment {
    type Id = u64;
    const SINGULAR: &'static str = "fulfillment";
    const PLURAL: &'static str = "fulfillments";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

impl ResourceService<'_, Fulfillment> {
    /// Marks a pending fulfillment as complete.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request or decoding fails.
    pub async fn complete(&self, id: u64) -> Result<Fulfillment, ResourceError> {
        self.member_action(id, "complete", &json!({})).await
    }

    /// Transitions a fulfillment to `open`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request or decoding fails.
    pub async fn transition(&self, id: u64) -> Result<Fulfillment, ResourceError> {
        self.member_action(id, "open", &json!({})).await
    }

    /// Cancels a fulfillment.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request or decoding fails.
    pub async fn cancel(&self, id: u64) -> Result<Fulfillment, ResourceError> {
        self.member_action(id, "cancel", &json!({})).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fulfillment_serialization_skips_read_only_fields() {
        let fulfillment = Fulfillment {
            id: Some(1),
            order_id: Some(123),
            tracking_number: Some("1Z2345".into()),
            location_id: Some(905684977),
            notify_customer: Some(true),
            ..Default::default()
        };

        let value = serde_json::to_value(&fulfillment).unwrap();
        assert_eq!(value["tracking_number"], "1Z2345");
        assert_eq!(value["location_id"], 905684977);
        assert!(value.get("id").is_none());
        assert!(value.get("order_id").is_none());
    }

    #[test]
    fn test_fulfillment_deserializes_line_items() {
        let fulfillment: Fulfillment = serde_json::from_str(
            r#"{"id":255858046,"order_id":450789469,"status":"success",
                "line_items":[{"id":466157049,"quantity":1,"properties":[]}]}"#,
        )
        .unwrap();

        assert_eq!(fulfillment.status.as_deref(), Some("success"));
        let items = fulfillment.line_items.unwrap();
        assert_eq!(items[0].id, Some(466157049));
        assert_eq!(items[0].properties, Some(vec![]));
    }
}
