//! Shipping zones (list only).

use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient};
use crate::rest::{unwrap_envelope, ResourceError};

const SHIPPING_ZONES: &str = "shipping_zones";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ShippingZone {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub profile_id: Option<String>,
    pub location_group_id: Option<String>,
    pub admin_graphql_api_id: Option<String>,
    #[serde(default)]
    pub countries: Vec<ShippingCountry>,
    #[serde(default)]
    pub weight_based_shipping_rates: Vec<WeightBasedShippingRate>,
    #[serde(default)]
    pub price_based_shipping_rates: Vec<PriceBasedShippingRate>,
    #[serde(default)]
    pub carrier_shipping_rate_providers: Vec<CarrierShippingRateProvider>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ShippingCountry {
    pub id: Option<u64>,
    pub shipping_zone_id: Option<u64>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub tax: Option<f64>,
    pub tax_name: Option<String>,
    #[serde(default)]
    pub provinces: Vec<ShippingProvince>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ShippingProvince {
    pub id: Option<u64>,
    pub country_id: Option<u64>,
    pub shipping_zone_id: Option<u64>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub tax: Option<f64>,
    pub tax_name: Option<String>,
    pub tax_type: Option<String>,
    pub tax_percentage: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct WeightBasedShippingRate {
    pub id: Option<u64>,
    pub shipping_zone_id: Option<u64>,
    pub name: Option<String>,
    pub price: Option<String>,
    pub weight_low: Option<f64>,
    pub weight_high: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PriceBasedShippingRate {
    pub id: Option<u64>,
    pub shipping_zone_id: Option<u64>,
    pub name: Option<String>,
    pub price: Option<String>,
    pub min_order_subtotal: Option<String>,
    pub max_order_subtotal: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CarrierShippingRateProvider {
    pub id: Option<u64>,
    pub carrier_service_id: Option<u64>,
    pub shipping_zone_id: Option<u64>,
    pub flat_modifier: Option<String>,
    pub percent_modifier: Option<f64>,
    pub service_filter: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy)]
pub struct ShippingZoneService<'a> {
    client: &'a RestClient,
}

impl ShippingZoneService<'_> {
    /// Lists the shop's shipping zones with their countries and rates.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request or decoding fails.
    pub async fn list(&self) -> Result<Vec<ShippingZone>, ResourceError> {
        let response = self
            .client
            .execute(HttpMethod::Get, SHIPPING_ZONES, None, &())
            .await?;
        unwrap_envelope(&response, SHIPPING_ZONES)
    }
}

impl RestClient {
    #[must_use]
    pub const fn shipping_zones(&self) -> ShippingZoneService<'_> {
        ShippingZoneService { client: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipping_zone_deserialization() {
        let zone: ShippingZone = serde_json::from_str(
            r#"{"id":1,"name":"Some Shipping Zone",
                "countries":[{"id":817138619,"name":"United States","code":"US","tax":0.0,
                  "provinces":[{"id":1013111685,"name":"New York","code":"NY","tax":0.04}]}],
                "weight_based_shipping_rates":[{"id":882078075,"name":"Canada Air Shipping",
                  "price":"25.00","weight_low":0.0,"weight_high":11.0231}]}"#,
        )
        .unwrap();
        assert_eq!(zone.countries[0].provinces[0].code.as_deref(), Some("NY"));
        assert_eq!(zone.weight_based_shipping_rates[0].price.as_deref(), Some("25.00"));
        assert!(zone.price_based_shipping_rates.is_empty());
    }
}
