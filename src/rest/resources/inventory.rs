//! Inventory items and inventory levels.
//!
//! Inventory items follow the usual resource shape (list, get and update
//! only). Inventory levels have no id of their own: a level is addressed by
//! the pair of inventory item and location, so they get a dedicated
//! [`InventoryLevelService`] instead of a [`ResourceService`].
//!
//! ```rust,ignore
//! let level = client
//!     .inventory_levels()
//!     .adjust(&InventoryLevelAdjust { inventory_item_id: 808950810, location_id: 905684977, available_adjustment: -2 })
//!     .await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient};
use crate::rest::{to_body, unwrap_envelope, ResourceError, ResourceService, RestResource};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CountryHarmonizedSystemCode {
    pub harmonized_system_code: String,
    pub country_code: String,
}

/// A physical good tracked in inventory.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct InventoryItem {
    #[serde(skip_serializing)]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Unit cost as decimal text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracked: Option<bool>,
    #[serde(skip_serializing)]
    pub requires_shipping: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code_of_origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_code_of_origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harmonized_system_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_harmonized_system_codes: Option<Vec<CountryHarmonizedSystemCode>>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for InventoryItem {
    type Id = u64;
    const SINGULAR: &'static str = "inventory_item";
    const PLURAL: &'static str = "inventory_items";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// The quantity of an inventory item available at a location.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InventoryLevel {
    pub inventory_item_id: u64,
    pub location_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<i64>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

/// Body of [`InventoryLevelService::adjust`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InventoryLevelAdjust {
    pub inventory_item_id: u64,
    pub location_id: u64,
    /// Signed change applied to the available quantity.
    pub available_adjustment: i64,
}

/// Identifies an inventory level by item and location.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InventoryLevelConnect {
    pub inventory_item_id: u64,
    pub location_id: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InventoryLevelListOptions {
    /// Up to 50 inventory item ids; sent comma-joined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_item_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
}

const INVENTORY_LEVELS: &str = "inventory_levels";
const INVENTORY_LEVEL: &str = "inventory_level";

/// Operations on inventory levels.
#[derive(Debug, Clone, Copy)]
pub struct InventoryLevelService<'a> {
    client: &'a RestClient,
}

impl InventoryLevelService<'_> {
    /// Lists inventory levels. At least one of `inventory_item_ids` or
    /// `location_ids` is required by the API.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request or decoding fails.
    pub async fn list<O>(&self, options: &O) -> Result<Vec<InventoryLevel>, ResourceError>
    where
        O: Serialize + ?Sized,
    {
        let response = self
            .client
            .execute(HttpMethod::Get, INVENTORY_LEVELS, None, options)
            .await?;
        unwrap_envelope(&response, INVENTORY_LEVELS)
    }

    /// Adjusts the available quantity at a location by a signed delta.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request or decoding fails.
    pub async fn adjust(
        &self,
        adjust: &InventoryLevelAdjust,
    ) -> Result<InventoryLevel, ResourceError> {
        self.post_action("adjust", adjust).await
    }

    /// Connects an inventory item to a location.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request or decoding fails.
    pub async fn connect(
        &self,
        connect: &InventoryLevelConnect,
    ) -> Result<InventoryLevel, ResourceError> {
        self.post_action("connect", connect).await
    }

    /// Sets the available quantity at a location.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request or decoding fails.
    pub async fn set(&self, level: &InventoryLevel) -> Result<InventoryLevel, ResourceError> {
        self.post_action("set", level).await
    }

    /// Removes an inventory item from a location.
    ///
    /// Sent as `DELETE inventory_levels.json?inventory_item_id=..&location_id=..`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request fails.
    pub async fn delete(&self, connect: &InventoryLevelConnect) -> Result<(), ResourceError> {
        Ok(self
            .client
            .delete_with_options(INVENTORY_LEVELS, connect)
            .await?)
    }

    async fn post_action<B>(&self, action: &str, body: &B) -> Result<InventoryLevel, ResourceError>
    where
        B: Serialize + ?Sized,
    {
        let path = format!("{INVENTORY_LEVELS}/{action}");
        let body = to_body(body)?;
        let response = self
            .client
            .execute(HttpMethod::Post, &path, Some(body), &())
            .await?;
        unwrap_envelope(&response, INVENTORY_LEVEL)
    }
}

impl RestClient {
    #[must_use]
    pub const fn inventory_items(&self) -> ResourceService<'_, InventoryItem> {
        ResourceService::new(self)
    }

    #[must_use]
    pub const fn inventory_levels(&self) -> InventoryLevelService<'_> {
        InventoryLevelService { client: self }
    }
}
