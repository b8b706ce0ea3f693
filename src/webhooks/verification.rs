//! HMAC verification of incoming webhook deliveries.
//!
//! Shopify signs each delivery with HMAC-SHA256 over the raw request body,
//! keyed with the app's API secret, and sends the base64 digest in the
//! [`HEADER_HMAC`] header.
//!
//! ```rust
//! use shopify_rest::webhooks::{compute_signature, verify_webhook};
//! use shopify_rest::ApiSecretKey;
//!
//! let secret = ApiSecretKey::new("hush").unwrap();
//! let body = br#"{"id":820982911946154508}"#;
//! let signature = compute_signature(body, &secret);
//!
//! assert!(verify_webhook(body, &signature, &secret));
//! assert!(!verify_webhook(b"tampered", &signature, &secret));
//! ```

use std::collections::HashMap;

use base64::{engine::general_purpose::STANDARD, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::config::ApiSecretKey;
use crate::webhooks::WebhookError;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the base64 HMAC-SHA256 signature.
pub const HEADER_HMAC: &str = "X-Shopify-Hmac-Sha256";

/// Header carrying the event topic, e.g. `orders/create`.
pub const HEADER_TOPIC: &str = "X-Shopify-Topic";

/// Header carrying the originating `*.myshopify.com` domain.
pub const HEADER_SHOP_DOMAIN: &str = "X-Shopify-Shop-Domain";

/// Header carrying the API version of the payload.
pub const HEADER_API_VERSION: &str = "X-Shopify-API-Version";

/// Header carrying the unique delivery id.
pub const HEADER_WEBHOOK_ID: &str = "X-Shopify-Webhook-Id";

/// An incoming webhook delivery: the raw body and its headers.
///
/// Header lookups are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct WebhookRequest {
    body: Vec<u8>,
    headers: HashMap<String, String>,
}

impl WebhookRequest {
    #[must_use]
    pub fn new(body: impl Into<Vec<u8>>) -> Self {
        Self {
            body: body.into(),
            headers: HashMap::new(),
        }
    }

    /// Adds a header, replacing any previous value with the same name.
    #[must_use]
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    #[must_use]
    pub fn topic(&self) -> Option<&str> {
        self.header_value(HEADER_TOPIC)
    }

    #[must_use]
    pub fn shop_domain(&self) -> Option<&str> {
        self.header_value(HEADER_SHOP_DOMAIN)
    }

    #[must_use]
    pub fn api_version(&self) -> Option<&str> {
        self.header_value(HEADER_API_VERSION)
    }

    #[must_use]
    pub fn webhook_id(&self) -> Option<&str> {
        self.header_value(HEADER_WEBHOOK_ID)
    }
}

/// Computes the base64 HMAC-SHA256 signature Shopify would send for `body`.
#[must_use]
pub fn compute_signature(body: &[u8], secret: &ApiSecretKey) -> String {
    STANDARD.encode(digest(body, secret))
}

/// Returns `true` when `hmac_header` is the signature of `body` under `secret`.
///
/// The comparison runs in constant time. A header that is not valid base64
/// never verifies.
#[must_use]
pub fn verify_webhook(body: &[u8], hmac_header: &str, secret: &ApiSecretKey) -> bool {
    let Ok(provided) = STANDARD.decode(hmac_header.trim()) else {
        return false;
    };
    digest(body, secret).ct_eq(&provided).into()
}

/// Verifies a full delivery using its [`HEADER_HMAC`] header.
///
/// # Errors
///
/// Returns [`WebhookError::MissingHeader`] when the signature header is
/// absent and [`WebhookError::InvalidHmac`] when it does not match.
pub fn verify_webhook_request(
    request: &WebhookRequest,
    secret: &ApiSecretKey,
) -> Result<(), WebhookError> {
    let hmac_header = request
        .header_value(HEADER_HMAC)
        .ok_or(WebhookError::MissingHeader {
            header: HEADER_HMAC,
        })?;

    if verify_webhook(request.body(), hmac_header, secret) {
        Ok(())
    } else {
        tracing::warn!(
            topic = request.topic().unwrap_or_default(),
            shop = request.shop_domain().unwrap_or_default(),
            "rejected webhook with invalid signature"
        );
        Err(WebhookError::InvalidHmac)
    }
}

fn digest(body: &[u8], secret: &ApiSecretKey) -> Vec<u8> {
    // HMAC accepts keys of any length, so this arm is unreachable.
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_ref().as_bytes()) else {
        return Vec::new();
    };
    mac.update(body);
    mac.finalize().into_bytes().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret() -> ApiSecretKey {
        ApiSecretKey::new("my-secret").unwrap()
    }

    #[test]
    fn test_signature_is_base64_of_32_bytes() {
        let signature = compute_signature(b"payload", &secret());
        assert_eq!(signature.len(), 44);
        assert_eq!(STANDARD.decode(&signature).unwrap().len(), 32);
    }

    #[test]
    fn test_verify_accepts_matching_signature() {
        let body = br#"{"id":1,"email":"jon@example.com"}"#;
        let signature = compute_signature(body, &secret());
        assert!(verify_webhook(body, &signature, &secret()));
    }

    #[test]
    fn test_verify_rejects_other_secret() {
        let body = b"payload";
        let signature = compute_signature(body, &ApiSecretKey::new("other").unwrap());
        assert!(!verify_webhook(body, &signature, &secret()));
    }

    #[test]
    fn test_verify_rejects_garbage_header() {
        assert!(!verify_webhook(b"payload", "not base64!!", &secret()));
        assert!(!verify_webhook(b"payload", "", &secret()));
    }

    #[test]
    fn test_request_headers_are_case_insensitive() {
        let request = WebhookRequest::new(b"{}".to_vec())
            .header("x-shopify-topic", "orders/create")
            .header("X-SHOPIFY-SHOP-DOMAIN", "jsmith.myshopify.com");

        assert_eq!(request.topic(), Some("orders/create"));
        assert_eq!(request.shop_domain(), Some("jsmith.myshopify.com"));
        assert_eq!(request.webhook_id(), None);
    }

    #[test]
    fn test_verify_request_requires_hmac_header() {
        let request = WebhookRequest::new(b"{}".to_vec());
        assert_eq!(
            verify_webhook_request(&request, &secret()),
            Err(WebhookError::MissingHeader {
                header: HEADER_HMAC
            })
        );
    }

    #[test]
    fn test_verify_request_checks_signature() {
        let body = b"{\"id\":1}".to_vec();
        let good = compute_signature(&body, &secret());

        let request = WebhookRequest::new(body.clone()).header("x-shopify-hmac-sha256", good);
        assert_eq!(verify_webhook_request(&request, &secret()), Ok(()));

        let request = WebhookRequest::new(body).header(HEADER_HMAC, "AAAA");
        assert_eq!(
            verify_webhook_request(&request, &secret()),
            Err(WebhookError::InvalidHmac)
        );
    }
}
