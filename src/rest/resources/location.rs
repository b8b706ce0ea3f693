//! Location resource (read-only).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{ResourceService, RestResource};

/// A place where inventory is stocked and orders are fulfilled.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Location {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub active: Option<bool>,
    pub legacy: Option<bool>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
    pub province: Option<String>,
    pub province_code: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub country_name: Option<String>,
    pub localized_country_name: Option<String>,
    pub localized_province_name: Option<String>,
    pub phone: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for Location {
    type Id = u64;
    const SINGULAR: &'static str = "location";
    const PLURAL: &'static str = "locations";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

impl RestClient {
    #[must_use]
    pub const fn locations(&self) -> ResourceService<'_, Location> {
        ResourceService::new(self)
    }
}
