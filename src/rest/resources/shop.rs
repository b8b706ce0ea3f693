//! The shop the client is authenticated against.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient};
use crate::rest::{unwrap_envelope, ResourceError};

const SHOP: &str = "shop";

/// Shop settings and contact details.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Shop {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub shop_owner: Option<String>,
    pub email: Option<String>,
    pub customer_email: Option<String>,
    pub domain: Option<String>,
    pub myshopify_domain: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub province_code: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub country_name: Option<String>,
    pub zip: Option<String>,
    pub phone: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub currency: Option<String>,
    pub enabled_presentment_currencies: Option<Vec<String>>,
    pub money_format: Option<String>,
    pub money_with_currency_format: Option<String>,
    pub money_in_emails_format: Option<String>,
    pub money_with_currency_in_emails_format: Option<String>,
    pub weight_unit: Option<String>,
    pub plan_name: Option<String>,
    pub plan_display_name: Option<String>,
    pub primary_locale: Option<String>,
    pub primary_location_id: Option<u64>,
    pub timezone: Option<String>,
    pub iana_timezone: Option<String>,
    pub password_enabled: Option<bool>,
    pub taxes_included: Option<bool>,
    pub tax_shipping: Option<bool>,
    pub county_taxes: Option<bool>,
    pub has_storefront: Option<bool>,
    pub has_discounts: Option<bool>,
    pub has_gift_cards: Option<bool>,
    pub setup_required: Option<bool>,
    pub checkout_api_supported: Option<bool>,
    pub eligible_for_payments: Option<bool>,
    pub pre_launch_enabled: Option<bool>,
    pub transactional_sms_disabled: Option<bool>,
    pub cookie_consent_level: Option<String>,
    pub source: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Read access to the current shop.
#[derive(Debug, Clone, Copy)]
pub struct ShopService<'a> {
    client: &'a RestClient,
}

impl ShopService<'_> {
    /// Fetches the shop's configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request or decoding fails.
    pub async fn get<O>(&self, options: &O) -> Result<Shop, ResourceError>
    where
        O: Serialize + ?Sized,
    {
        let response = self
            .client
            .execute(HttpMethod::Get, SHOP, None, options)
            .await?;
        unwrap_envelope(&response, SHOP)
    }
}

impl RestClient {
    #[must_use]
    pub const fn shop(&self) -> ShopService<'_> {
        ShopService { client: self }
    }
}
