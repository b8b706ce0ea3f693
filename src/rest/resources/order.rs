//! Order resource.
//!
//! Orders support CRUD plus `cancel`, `close` and `open`, and own both
//! metafields and fulfillments.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::{OrderCancelOptions, OrderListOptions};
//!
//! let open_orders = client
//!     .orders()
//!     .list_with_pagination(&OrderListOptions { status: Some("open".into()), ..Default::default() })
//!     .await?;
//!
//! let cancelled = client
//!     .orders()
//!     .cancel(450789469, &OrderCancelOptions { reason: Some("customer".into()), ..Default::default() })
//!     .await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::clients::RestClient;
use crate::rest::resources::common::{Address, LineItem, NoteAttribute, ShippingLine, TaxLine};
use crate::rest::resources::{Customer, Fulfillment};
use crate::rest::{HasFulfillments, HasMetafields, ResourceError, ResourceService, RestResource};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DiscountCode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    /// `fixed_amount`, `percentage` or `shipping`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ClientDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Order {
    #[serde(skip_serializing)]
    pub id: Option<u64>,
    /// e.g. `#1001`.
    #[serde(skip_serializing)]
    pub name: Option<String>,
    #[serde(skip_serializing)]
    pub number: Option<u64>,
    #[serde(skip_serializing)]
    pub order_number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_attributes: Option<Vec<NoteAttribute>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presentment_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<String>,
    #[serde(skip_serializing)]
    pub fulfillment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_discounts: Option<String>,
    #[serde(skip_serializing)]
    pub total_line_items_price: Option<String>,
    #[serde(skip_serializing)]
    pub total_outstanding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxes_included: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_accepts_marketing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_lines: Option<Vec<ShippingLine>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_lines: Option<Vec<TaxLine>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_codes: Option<Vec<DiscountCode>>,
    #[serde(skip_serializing)]
    pub fulfillments: Option<Vec<Fulfillment>>,
    #[serde(skip_serializing)]
    pub client_details: Option<ClientDetails>,
    #[serde(skip_serializing)]
    pub cancel_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(skip_serializing)]
    pub location_id: Option<u64>,
    #[serde(skip_serializing)]
    pub order_status_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub cancelled_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for Order {
    type Id = u64;
    const SINGULAR: &'static str = "order";
    const PLURAL: &'static str = "orders";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

impl HasMetafields for Order {}
impl HasFulfillments for Order {}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
    /// `open`, `closed`, `cancelled` or `any`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution_app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderCountOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
}

/// Body of an order cancellation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderCancelOptions {
    /// Amount to refund, as decimal text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restock: Option<bool>,
    /// `customer`, `inventory`, `fraud`, `declined` or `other`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Whether to email the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<bool>,
}

impl ResourceService<'_, Order> {
    /// Cancels an order; `options` is sent as the request body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request or decoding fails.
    pub async fn cancel<B>(&self, id: u64, options: &B) -> Result<Order, ResourceError>
    where
        B: Serialize + ?Sized,
    {
        self.member_action(id, "cancel", options).await
    }

    /// Closes an order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request or decoding fails.
    pub async fn close(&self, id: u64) -> Result<Order, ResourceError> {
        self.member_action(id, "close", &json!({})).await
    }

    /// Re-opens a closed order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request or decoding fails.
    pub async fn open(&self, id: u64) -> Result<Order, ResourceError> {
        self.member_action(id, "open", &json!({})).await
    }
}

impl RestClient {
    #[must_use]
    pub const fn orders(&self) -> ResourceService<'_, Order> {
        ResourceService::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::serialize_to_query;

    #[test]
    fn test_order_deserialization_with_line_items_and_shipping() {
        let order: Order = serde_json::from_str(
            r##"{
                "id": 450789469,
                "name": "#1001",
                "total_price": "598.94",
                "financial_status": "paid",
                "line_items": [
                    {"id": 466157049, "quantity": 1, "price": "199.00",
                     "properties": {"name": "engraving", "value": "Hello"}}
                ],
                "shipping_lines": [
                    {"id": 369256396, "title": "Free Shipping",
                     "requested_fulfillment_service_id": 1234}
                ]
            }"##,
        )
        .unwrap();

        assert_eq!(order.id(), Some(450789469));
        let items = order.line_items.unwrap();
        assert_eq!(items[0].properties.as_ref().unwrap()[0].name, "engraving");
        let shipping = order.shipping_lines.unwrap();
        assert_eq!(
            shipping[0].requested_fulfillment_service_id.as_deref(),
            Some("1234")
        );
    }

    #[test]
    fn test_order_serialization_skips_read_only_fields() {
        let order = Order {
            id: Some(1),
            name: Some("#1001".into()),
            email: Some("buyer@example.com".into()),
            cancel_reason: Some("customer".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value, serde_json::json!({"email": "buyer@example.com"}));
    }

    #[test]
    fn test_order_list_options_query() {
        let options = OrderListOptions {
            status: Some("any".into()),
            ids: Some(vec![1, 2]),
            ..Default::default()
        };
        let query = serialize_to_query(&options).unwrap();
        assert_eq!(
            query,
            vec![
                ("ids".to_string(), "1,2".to_string()),
                ("status".to_string(), "any".to_string()),
            ]
        );
    }

    #[test]
    fn test_discount_code_type_renamed() {
        let code: DiscountCode =
            serde_json::from_str(r#"{"code":"TENOFF","amount":"10.00","type":"fixed_amount"}"#)
                .unwrap();
        assert_eq!(code.discount_type.as_deref(), Some("fixed_amount"));
    }
}
