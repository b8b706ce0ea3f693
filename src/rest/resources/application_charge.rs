//! One-time application charges.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient};
use crate::rest::{
    envelope, unwrap_envelope, ResourceError, ResourceService, RestResource,
};

/// A one-time charge billed to the merchant by an app.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ApplicationCharge {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Amount as decimal text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,
    /// `pending`, `accepted`, `active`, `declined` or `expired`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing)]
    pub api_client_id: Option<u64>,
    #[serde(skip_serializing)]
    pub charge_type: Option<String>,
    #[serde(skip_serializing)]
    pub confirmation_url: Option<String>,
    #[serde(skip_serializing)]
    pub decorated_return_url: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for ApplicationCharge {
    type Id = u64;
    const SINGULAR: &'static str = "application_charge";
    const PLURAL: &'static str = "application_charges";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

impl ResourceService<'_, ApplicationCharge> {
    /// Activates an accepted charge.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the charge has no id, and
    /// [`ResourceError::Http`] if the request or decoding fails.
    pub async fn activate(
        &self,
        charge: &ApplicationCharge,
    ) -> Result<ApplicationCharge, ResourceError> {
        let id = charge.id.ok_or(ResourceError::MissingId {
            resource: ApplicationCharge::SINGULAR,
            operation: "activate",
        })?;
        let path = format!("{}/activate", self.member_path(id));
        let body = envelope(ApplicationCharge::SINGULAR, charge)?;
        let response = self.send(HttpMethod::Post, &path, Some(body), &()).await?;
        unwrap_envelope(&response, ApplicationCharge::SINGULAR)
    }
}

impl RestClient {
    #[must_use]
    pub const fn application_charges(&self) -> ResourceService<'_, ApplicationCharge> {
        ResourceService::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_charge_create_body() {
        let charge = ApplicationCharge {
            name: Some("Super Duper Expensive action".into()),
            price: Some("100.0".into()),
            return_url: Some("http://super-duper.shopifyapps.com".into()),
            test: Some(true),
            confirmation_url: Some("https://example.com/confirm".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&charge).unwrap(),
            json!({
                "name": "Super Duper Expensive action",
                "price": "100.0",
                "return_url": "http://super-duper.shopifyapps.com",
                "test": true
            })
        );
    }
}
