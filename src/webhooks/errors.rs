//! Webhook verification errors.

use thiserror::Error;

/// Error returned when an incoming webhook cannot be trusted.
///
/// The messages are deliberately generic and never include the expected
/// signature.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WebhookError {
    /// The request carries no signature header.
    #[error("Webhook request is missing the {header} header")]
    MissingHeader {
        /// Name of the absent header.
        header: &'static str,
    },

    /// The signature does not match the request body.
    #[error("Webhook signature verification failed")]
    InvalidHmac,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_header_message_names_header() {
        let error = WebhookError::MissingHeader {
            header: "X-Shopify-Hmac-Sha256",
        };
        assert_eq!(
            error.to_string(),
            "Webhook request is missing the X-Shopify-Hmac-Sha256 header"
        );
    }

    #[test]
    fn test_invalid_hmac_message_is_generic() {
        let message = WebhookError::InvalidHmac.to_string();
        assert_eq!(message, "Webhook signature verification failed");
    }
}
