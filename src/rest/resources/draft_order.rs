//! Draft order resource.
//!
//! Draft orders are created by merchants on behalf of customers. Besides
//! CRUD they can email an invoice and be completed into a real order:
//!
//! ```rust,ignore
//! client.draft_orders().send_invoice(994118539, &DraftOrderInvoice::default()).await?;
//! let completed = client.draft_orders().complete(994118539, true).await?;
//! assert!(completed.order_id.is_some());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::clients::{HttpMethod, RestClient};
use crate::rest::resources::common::{Address, LineItem, NoteAttribute, ShippingLine, TaxLine};
use crate::rest::resources::Customer;
use crate::rest::{
    envelope, unwrap_envelope, HasMetafields, ResourceError, ResourceService, RestResource,
};

/// A discount applied to a draft order or one of its line items.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppliedDiscount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// `fixed_amount` or `percentage`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DraftOrder {
    #[serde(skip_serializing)]
    pub id: Option<u64>,
    /// Id of the order created on completion.
    #[serde(skip_serializing)]
    pub order_id: Option<u64>,
    #[serde(skip_serializing)]
    pub name: Option<String>,
    /// `open`, `invoice_sent` or `completed`.
    #[serde(skip_serializing)]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_attributes: Option<Vec<NoteAttribute>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_customer_default_address: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_line: Option<ShippingLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_discount: Option<AppliedDiscount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_exempt: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_exemptions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_lines: Option<Vec<TaxLine>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxes_included: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(skip_serializing)]
    pub subtotal_price: Option<String>,
    #[serde(skip_serializing)]
    pub total_tax: Option<String>,
    #[serde(skip_serializing)]
    pub total_price: Option<String>,
    #[serde(skip_serializing)]
    pub invoice_url: Option<String>,
    #[serde(skip_serializing)]
    pub invoice_sent_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for DraftOrder {
    type Id = u64;
    const SINGULAR: &'static str = "draft_order";
    const PLURAL: &'static str = "draft_orders";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

impl HasMetafields for DraftOrder {}

/// An invoice email for a draft order. Unset fields use the shop defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DraftOrderInvoice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DraftOrderListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

#[derive(Serialize)]
struct CompleteOptions {
    payment_pending: bool,
}

const DRAFT_ORDER_INVOICE: &str = "draft_order_invoice";

impl ResourceService<'_, DraftOrder> {
    /// Emails an invoice for a draft order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request or decoding fails.
    pub async fn send_invoice(
        &self,
        id: u64,
        invoice: &DraftOrderInvoice,
    ) -> Result<DraftOrderInvoice, ResourceError> {
        let path = format!("{}/send_invoice", self.member_path(id));
        let body = envelope(DRAFT_ORDER_INVOICE, invoice)?;
        let response = self.send(HttpMethod::Post, &path, Some(body), &()).await?;
        unwrap_envelope(&response, DRAFT_ORDER_INVOICE)
    }

    /// Turns a draft order into an order.
    ///
    /// With `payment_pending` the order is created unpaid; otherwise it is
    /// marked as paid through the default gateway.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request or decoding fails.
    pub async fn complete(
        &self,
        id: u64,
        payment_pending: bool,
    ) -> Result<DraftOrder, ResourceError> {
        let path = format!("{}/complete", self.member_path(id));
        let options = CompleteOptions { payment_pending };
        let response = self
            .send(HttpMethod::Put, &path, Some(json!({})), &options)
            .await?;
        unwrap_envelope(&response, DraftOrder::SINGULAR)
    }
}

impl RestClient {
    #[must_use]
    pub const fn draft_orders(&self) -> ResourceService<'_, DraftOrder> {
        ResourceService::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_order_create_body() {
        let draft = DraftOrder {
            id: Some(1),
            status: Some("open".into()),
            line_items: Some(vec![LineItem {
                variant_id: Some(447654529),
                quantity: Some(1),
                ..Default::default()
            }]),
            applied_discount: Some(AppliedDiscount {
                value: Some("10.0".into()),
                value_type: Some("percentage".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({
                "line_items": [{"variant_id": 447654529, "quantity": 1}],
                "applied_discount": {"value": "10.0", "value_type": "percentage"}
            })
        );
    }

    #[test]
    fn test_invoice_envelope() {
        let invoice = DraftOrderInvoice {
            to: Some("first@example.com".into()),
            subject: Some("Apple Computer Invoice".into()),
            ..Default::default()
        };
        assert_eq!(
            envelope(DRAFT_ORDER_INVOICE, &invoice).unwrap(),
            json!({"draft_order_invoice": {"to": "first@example.com", "subject": "Apple Computer Invoice"}})
        );
    }
}
