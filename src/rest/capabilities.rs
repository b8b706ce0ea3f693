//! Sub-resource capabilities.
//!
//! Metafields and fulfillments are reachable from several parent resources.
//! Rather than each parent carrying its own metafield methods, a parent
//! opts in with a marker trait and gets a nested [`ResourceService`] rooted
//! at `{owner}/{owner_id}`:
//!
//! ```rust,ignore
//! let metafields = client.products().metafields(632910392).list(&()).await?;
//! let fulfillments = client.orders().fulfillments(450789469).count(&()).await?;
//! ```

use crate::rest::resources::{Fulfillment, Metafield};
use crate::rest::{ResourceService, RestResource};

/// A resource that owns metafields.
pub trait HasMetafields: RestResource {
    /// Path segment of the owner in metafield URLs.
    ///
    /// Defaults to the resource's base path. Collections override this
    /// because both collection kinds share the `collections` owner.
    const METAFIELD_OWNER: &'static str = Self::BASE_PATH;
}

/// A resource that owns fulfillments.
pub trait HasFulfillments: RestResource {}

impl<'a, R: HasMetafields> ResourceService<'a, R> {
    /// Metafields of the resource identified by `owner_id`.
    #[must_use]
    pub fn metafields(&self, owner_id: R::Id) -> ResourceService<'a, Metafield> {
        ResourceService::nested(self.client(), R::METAFIELD_OWNER, owner_id)
    }
}

impl<'a, R: HasFulfillments> ResourceService<'a, R> {
    /// Fulfillments of the resource identified by `owner_id`.
    #[must_use]
    pub fn fulfillments(&self, owner_id: R::Id) -> ResourceService<'a, Fulfillment> {
        ResourceService::nested(self.client(), R::BASE_PATH, owner_id)
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::Credentials;
    use crate::clients::RestClient;
    use crate::config::{ShopDomain, ShopifyConfig};

    fn client() -> RestClient {
        let config = ShopifyConfig::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .credentials(Credentials::access_token("token").unwrap())
            .build()
            .unwrap();
        RestClient::new(&config).unwrap()
    }

    #[test]
    fn test_metafields_nest_under_owner() {
        let client = client();
        assert_eq!(
            client.customers().metafields(207).collection_path(),
            "customers/207/metafields"
        );
        assert_eq!(
            client.draft_orders().metafields(3).member_path(9),
            "draft_orders/3/metafields/9"
        );
    }

    #[test]
    fn test_collection_kinds_share_metafield_owner() {
        let client = client();
        assert_eq!(
            client.custom_collections().metafields(1).collection_path(),
            "collections/1/metafields"
        );
        assert_eq!(
            client.smart_collections().metafields(1).collection_path(),
            "collections/1/metafields"
        );
    }

    #[test]
    fn test_fulfillments_nest_under_order() {
        let client = client();
        assert_eq!(
            client.orders().fulfillments(123).member_path(1),
            "orders/123/fulfillments/1"
        );
    }

    #[test]
    fn test_shop_level_metafields() {
        let client = client();
        assert_eq!(client.metafields().collection_path(), "metafields");
    }
}
