//! Error type for resource service operations.
//!
//! Most failures are HTTP failures and are passed through unchanged as
//! [`ResourceError::Http`]. The only resource-level failure is an update or
//! delete attempted on a model that has no id.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::{HttpError, ResourceError};
//!
//! match client.customers().update(&customer).await {
//!     Ok(saved) => println!("saved {:?}", saved.id),
//!     Err(ResourceError::MissingId { resource, .. }) => println!("{resource} was never created"),
//!     Err(e) if e.is_not_found() => println!("gone"),
//!     Err(e) => {
//!         for message in e.field_errors("email") {
//!             println!("email: {message}");
//!         }
//!     }
//! }
//! ```

use thiserror::Error;

use crate::clients::HttpError;

/// Error type for REST resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The operation needs an id the model does not carry.
    #[error("Cannot {operation} {resource} without an id")]
    MissingId {
        /// The singular resource name (e.g., "customer").
        resource: &'static str,
        /// The operation being attempted (e.g., "update").
        operation: &'static str,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Returns `true` for a 404 response.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_not_found())
    }

    /// Returns the messages the API reported for `field`.
    #[must_use]
    pub fn field_errors(&self, field: &str) -> &[String] {
        match self {
            Self::Http(e) => e.response().map_or(&[], |r| r.field_errors(field)),
            Self::MissingId { .. } => &[],
        }
    }

    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Http(e) => e.response().and_then(|r| r.error_reference.as_deref()),
            Self::MissingId { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_missing_id_message() {
        let error = ResourceError::MissingId {
            resource: "customer",
            operation: "update",
        };
        assert_eq!(error.to_string(), "Cannot update customer without an id");
        assert!(error.field_errors("email").is_empty());
    }

    #[test]
    fn test_http_errors_expose_field_messages() {
        let error: ResourceError = HttpError::Validation(HttpResponseError::from_body(
            422,
            r#"{"errors":{"email":["has already been taken"]}}"#,
            Some("req-1"),
        ))
        .into();

        assert_eq!(error.field_errors("email"), ["has already been taken".to_string()]);
        assert_eq!(error.request_id(), Some("req-1"));
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_not_found() {
        let error: ResourceError =
            HttpError::Validation(HttpResponseError::new(404, "Not Found")).into();
        assert!(error.is_not_found());
    }
}
