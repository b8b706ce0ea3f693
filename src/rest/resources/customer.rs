//! Customer and customer address resources.
//!
//! Besides CRUD, customers support a query search, the list of a customer's
//! orders, the list of tags in use, and metafields. Addresses are nested
//! under their customer:
//!
//! ```rust,ignore
//! let found = client
//!     .customers()
//!     .search(&CustomerSearchOptions { query: Some("email:bob@example.com".into()), ..Default::default() })
//!     .await?;
//!
//! let addresses = client.customer_addresses(207119551).list(&()).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient};
use crate::rest::resources::Order;
use crate::rest::{unwrap_envelope, HasMetafields, ResourceError, ResourceService, RestResource};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct EmailMarketingConsent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opt_in_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SmsMarketingConsent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opt_in_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_collected_from: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Customer {
    #[serde(skip_serializing)]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// `disabled`, `invited`, `enabled` or `declined`.
    #[serde(skip_serializing)]
    pub state: Option<String>,
    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multipass_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_exempt: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_exemptions: Option<Vec<String>>,
    #[serde(skip_serializing)]
    pub orders_count: Option<u64>,
    #[serde(skip_serializing)]
    pub total_spent: Option<String>,
    #[serde(skip_serializing)]
    pub last_order_id: Option<u64>,
    #[serde(skip_serializing)]
    pub last_order_name: Option<String>,
    #[serde(skip_serializing)]
    pub currency: Option<String>,
    /// Write-only; set together with `password_confirmation`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_confirmation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<CustomerAddress>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_address: Option<CustomerAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_marketing_consent: Option<EmailMarketingConsent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_marketing_consent: Option<SmsMarketingConsent>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for Customer {
    type Id = u64;
    const SINGULAR: &'static str = "customer";
    const PLURAL: &'static str = "customers";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

impl HasMetafields for Customer {}

/// A mailing address stored on a customer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CustomerAddress {
    #[serde(skip_serializing)]
    pub id: Option<u64>,
    #[serde(skip_serializing)]
    pub customer_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing)]
    pub country_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
}

impl RestResource for CustomerAddress {
    type Id = u64;
    const SINGULAR: &'static str = "customer_address";
    const PLURAL: &'static str = "addresses";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CustomerSearchOptions {
    /// Search text, e.g. `country:Canada` or `email:bob@example.com`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct TagsBody {
    tags: Vec<String>,
}

impl ResourceService<'_, Customer> {
    /// Searches customers matching `options.query`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request or decoding fails.
    pub async fn search<O>(&self, options: &O) -> Result<Vec<Customer>, ResourceError>
    where
        O: Serialize + ?Sized,
    {
        let path = format!("{}/search", self.collection_path());
        let response = self.send(HttpMethod::Get, &path, None, options).await?;
        unwrap_envelope(&response, Customer::PLURAL)
    }

    /// Lists the orders placed by a customer.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request or decoding fails.
    pub async fn list_orders<O>(
        &self,
        customer_id: u64,
        options: &O,
    ) -> Result<Vec<Order>, ResourceError>
    where
        O: Serialize + ?Sized,
    {
        let path = format!("{}/{}", self.member_path(customer_id), Order::PLURAL);
        let response = self.send(HttpMethod::Get, &path, None, options).await?;
        unwrap_envelope(&response, Order::PLURAL)
    }

    /// Lists every tag used across customers.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request or decoding fails.
    pub async fn list_tags<O>(&self, options: &O) -> Result<Vec<String>, ResourceError>
    where
        O: Serialize + ?Sized,
    {
        let path = format!("{}/tags", self.collection_path());
        let response = self.send(HttpMethod::Get, &path, None, options).await?;
        let body: TagsBody = response
            .json()
            .map_err(|e| ResourceError::Http(e.into()))?;
        Ok(body.tags)
    }
}

impl RestClient {
    #[must_use]
    pub const fn customers(&self) -> ResourceService<'_, Customer> {
        ResourceService::new(self)
    }

    /// Addresses of one customer, under `customers/{customer_id}/addresses`.
    #[must_use]
    pub fn customer_addresses(&self, customer_id: u64) -> ResourceService<'_, CustomerAddress> {
        ResourceService::nested(self, Customer::BASE_PATH, customer_id)
    }
}
