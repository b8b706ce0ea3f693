//! Verification of incoming webhook deliveries.
//!
//! Webhook subscriptions themselves are managed through
//! [`RestClient::webhooks`](crate::RestClient::webhooks). This module covers
//! the receiving side: checking that a delivery was signed with the app's
//! API secret before trusting its payload.
//!
//! ```rust
//! use shopify_rest::webhooks::{compute_signature, verify_webhook_request, WebhookRequest, HEADER_HMAC};
//! use shopify_rest::ApiSecretKey;
//!
//! let secret = ApiSecretKey::new("hush").unwrap();
//! let body = br#"{"id":1}"#.to_vec();
//! let request = WebhookRequest::new(body.clone())
//!     .header(HEADER_HMAC, compute_signature(&body, &secret))
//!     .header("X-Shopify-Topic", "orders/create");
//!
//! verify_webhook_request(&request, &secret).unwrap();
//! assert_eq!(request.topic(), Some("orders/create"));
//! ```

mod errors;
mod verification;

pub use errors::WebhookError;
pub use verification::{
    compute_signature, verify_webhook, verify_webhook_request, WebhookRequest,
    HEADER_API_VERSION, HEADER_HMAC, HEADER_SHOP_DOMAIN, HEADER_TOPIC, HEADER_WEBHOOK_ID,
};
