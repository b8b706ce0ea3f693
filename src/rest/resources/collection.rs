//! Collections, custom and smart collections, and collects.
//!
//! `collections/{id}` reads either kind of collection and lists its
//! products. Custom collections hold products added by hand through
//! [`Collect`] records; smart collections select products with [`Rule`]s.
//! Both kinds keep their metafields under the shared `collections` owner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient};
use crate::rest::resources::common::Image;
use crate::rest::resources::Product;
use crate::rest::{
    unwrap_envelope, HasMetafields, ResourceError, ResourceResponse, ResourceService, RestResource,
};

const COLLECTIONS: &str = "collections";

/// A collection of either kind, as returned by `collections/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Collection {
    #[serde(skip_serializing)]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_scope: Option<String>,
    /// `custom` or `smart`.
    #[serde(skip_serializing)]
    pub collection_type: Option<String>,
    #[serde(skip_serializing)]
    pub products_count: Option<u64>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for Collection {
    type Id = u64;
    const SINGULAR: &'static str = "collection";
    const PLURAL: &'static str = "collections";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Read access to collections of either kind.
#[derive(Debug, Clone, Copy)]
pub struct CollectionService<'a> {
    client: &'a RestClient,
}

impl CollectionService<'_> {
    /// Fetches a collection.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request or decoding fails.
    pub async fn get<O>(&self, id: u64, options: &O) -> Result<Collection, ResourceError>
    where
        O: Serialize + ?Sized,
    {
        ResourceService::<Collection>::new(self.client)
            .get(id, options)
            .await
    }

    /// Lists the products in a collection.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request or decoding fails.
    pub async fn list_products<O>(
        &self,
        id: u64,
        options: &O,
    ) -> Result<Vec<Product>, ResourceError>
    where
        O: Serialize + ?Sized,
    {
        Ok(self.list_products_with_pagination(id, options).await?.into_inner())
    }

    /// Lists the products in a collection and keeps the page links.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request or decoding fails.
    pub async fn list_products_with_pagination<O>(
        &self,
        id: u64,
        options: &O,
    ) -> Result<ResourceResponse<Vec<Product>>, ResourceError>
    where
        O: Serialize + ?Sized,
    {
        let path = format!("{COLLECTIONS}/{id}/{}", Product::PLURAL);
        let response = self
            .client
            .execute(HttpMethod::Get, &path, None, options)
            .await?;
        let products = unwrap_envelope(&response, Product::PLURAL)?;
        Ok(ResourceResponse::from_http_response(response, products))
    }
}

/// A collection whose products are chosen by hand.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CustomCollection {
    #[serde(skip_serializing)]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_scope: Option<String>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for CustomCollection {
    type Id = u64;
    const SINGULAR: &'static str = "custom_collection";
    const PLURAL: &'static str = "custom_collections";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

impl HasMetafields for CustomCollection {
    const METAFIELD_OWNER: &'static str = COLLECTIONS;
}

/// A condition selecting products into a smart collection.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Rule {
    /// Product property, e.g. `tag`, `title` or `vendor`.
    pub column: String,
    /// e.g. `equals`, `contains`, `greater_than`.
    pub relation: String,
    pub condition: String,
}

/// A collection whose products are selected by rules.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SmartCollection {
    #[serde(skip_serializing)]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<Rule>>,
    /// Match any rule instead of all of them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disjunctive: Option<bool>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for SmartCollection {
    type Id = u64;
    const SINGULAR: &'static str = "smart_collection";
    const PLURAL: &'static str = "smart_collections";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

impl HasMetafields for SmartCollection {
    const METAFIELD_OWNER: &'static str = COLLECTIONS;
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CollectionListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    /// `published`, `unpublished` or `any`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Links a product to a custom collection.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Collect {
    #[serde(skip_serializing)]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    #[serde(skip_serializing)]
    pub position: Option<i64>,
    #[serde(skip_serializing)]
    pub sort_value: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for Collect {
    type Id = u64;
    const SINGULAR: &'static str = "collect";
    const PLURAL: &'static str = "collects";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CollectListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

impl RestClient {
    #[must_use]
    pub const fn collections(&self) -> CollectionService<'_> {
        CollectionService { client: self }
    }

    #[must_use]
    pub const fn custom_collections(&self) -> ResourceService<'_, CustomCollection> {
        ResourceService::new(self)
    }

    #[must_use]
    pub const fn smart_collections(&self) -> ResourceService<'_, SmartCollection> {
        ResourceService::new(self)
    }

    #[must_use]
    pub const fn collects(&self) -> ResourceService<'_, Collect> {
        ResourceService::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_smart_collection_rules_serialize() {
        let collection = SmartCollection {
            title: Some("Macbooks".into()),
            rules: Some(vec![Rule {
                column: "vendor".into(),
                relation: "equals".into(),
                condition: "Apple".into(),
            }]),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&collection).unwrap(),
            json!({
                "title": "Macbooks",
                "rules": [{"column": "vendor", "relation": "equals", "condition": "Apple"}]
            })
        );
    }

    #[test]
    fn test_collect_create_body_only_has_ids() {
        let collect = Collect {
            id: Some(1),
            collection_id: Some(841564295),
            product_id: Some(921728736),
            position: Some(2),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&collect).unwrap(),
            json!({"collection_id": 841564295, "product_id": 921728736})
        );
    }

    #[test]
    fn test_collection_type_is_read_only() {
        let collection: Collection = serde_json::from_str(
            r#"{"id":841564295,"title":"IPods","collection_type":"custom",
                "image":{"src":"https://cdn.shopify.com/ipods.png","width":123,"height":456}}"#,
        )
        .unwrap();
        assert_eq!(collection.collection_type.as_deref(), Some("custom"));
        assert_eq!(collection.image.as_ref().unwrap().width, Some(123));
        assert!(serde_json::to_value(&collection)
            .unwrap()
            .get("collection_type")
            .is_none());
    }
}
