//! Webhook subscription resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{ResourceService, RestResource};

/// A subscription delivering events for one topic to an address.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Webhook {
    #[serde(skip_serializing)]
    pub id: Option<u64>,
    /// Event topic, e.g. `orders/create`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    /// Destination URI (HTTPS, Pub/Sub or EventBridge ARN).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// `json` or `xml`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metafield_namespaces: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_metafield_namespaces: Option<Vec<String>>,
    #[serde(skip_serializing)]
    pub api_version: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for Webhook {
    type Id = u64;
    const SINGULAR: &'static str = "webhook";
    const PLURAL: &'static str = "webhooks";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WebhookListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WebhookCountOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

impl RestClient {
    #[must_use]
    pub const fn webhooks(&self) -> ResourceService<'_, Webhook> {
        ResourceService::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_webhook_create_body() {
        let webhook = Webhook {
            topic: Some("orders/create".into()),
            address: Some("https://example.com/hooks".into()),
            format: Some("json".into()),
            api_version: Some("2024-01".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&webhook).unwrap(),
            json!({
                "topic": "orders/create",
                "address": "https://example.com/hooks",
                "format": "json"
            })
        );
    }

    #[test]
    fn test_webhook_deserialization() {
        let webhook: Webhook = serde_json::from_str(
            r#"{"id":4759306,"topic":"orders/create","address":"https://apple.com",
                "format":"json","fields":[],"api_version":"unstable",
                "created_at":"2024-01-02T09:28:43-05:00"}"#,
        )
        .unwrap();
        assert_eq!(webhook.id(), Some(4759306));
        assert_eq!(webhook.api_version.as_deref(), Some("unstable"));
        assert!(webhook.created_at.is_some());
    }
}
