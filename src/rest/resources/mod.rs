//! Admin REST resource models and their service accessors.
//!
//! Each model implements [`RestResource`](crate::rest::RestResource) and
//! adds an accessor on [`RestClient`](crate::clients::RestClient) that
//! returns its service. Most resources use the generic
//! [`ResourceService`](crate::rest::ResourceService); the few whose
//! endpoints do not follow the collection/member shape (inventory levels,
//! theme assets, the shop, collections, shipping zones) get a small
//! dedicated service.
//!
//! | Accessor | Path | Extra operations |
//! |---|---|---|
//! | `customers()` | `customers` | `search`, `list_orders`, `list_tags`, metafields |
//! | `customer_addresses(id)` | `customers/{id}/addresses` | |
//! | `orders()` | `orders` | `cancel`, `close`, `open`, metafields, fulfillments |
//! | `metafields()` | `metafields` | |
//! | `webhooks()` | `webhooks` | |
//! | `inventory_items()` | `inventory_items` | |
//! | `inventory_levels()` | `inventory_levels` | `adjust`, `connect`, `set`, `delete` |
//! | `locations()` | `locations` | |
//! | `products()` | `products` | metafields |
//! | `collections()` | `collections` | `list_products` |
//! | `custom_collections()` | `custom_collections` | metafields |
//! | `smart_collections()` | `smart_collections` | metafields |
//! | `collects()` | `collects` | |
//! | `pages()` | `pages` | metafields |
//! | `blogs()` | `blogs` | metafields |
//! | `draft_orders()` | `draft_orders` | `send_invoice`, `complete`, metafields |
//! | `shop()` | `shop` | |
//! | `application_charges()` | `application_charges` | `activate` |
//! | `assets(theme_id)` | `themes/{id}/assets` | |
//! | `shipping_zones()` | `shipping_zones` | |
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::{CountOptions, ListOptions};
//!
//! let total = client.products().count(&CountOptions::default()).await?;
//! let first_page = client
//!     .products()
//!     .list_with_pagination(&ListOptions { limit: Some(50), ..Default::default() })
//!     .await?;
//! if let Some(next) = first_page.next_page() {
//!     let second_page = client.products().list_with_pagination(next).await?;
//! }
//! ```

pub mod common;

mod application_charge;
mod asset;
mod collection;
mod customer;
mod draft_order;
mod fulfillment;
mod inventory;
mod location;
mod metafield;
mod order;
mod page;
mod product;
mod shipping_zone;
mod shop;
mod webhook;

pub use application_charge::ApplicationCharge;
pub use asset::{Asset, AssetService};
pub use collection::{
    Collect, CollectListOptions, Collection, CollectionListOptions, CollectionService,
    CustomCollection, Rule, SmartCollection,
};
pub use common::{Address, Image, LineItem, NoteAttribute, ShippingLine, TaxLine};
pub use customer::{
    Customer, CustomerAddress, CustomerSearchOptions, EmailMarketingConsent, SmsMarketingConsent,
};
pub use draft_order::{AppliedDiscount, DraftOrder, DraftOrderInvoice, DraftOrderListOptions};
pub use fulfillment::Fulfillment;
pub use inventory::{
    CountryHarmonizedSystemCode, InventoryItem, InventoryLevel, InventoryLevelAdjust,
    InventoryLevelConnect, InventoryLevelListOptions, InventoryLevelService,
};
pub use location::Location;
pub use metafield::Metafield;
pub use order::{
    ClientDetails, DiscountCode, Order, OrderCancelOptions, OrderCountOptions, OrderListOptions,
};
pub use page::{Blog, Page};
pub use product::{Product, ProductListOptions, ProductOption, ProductVariant};
pub use shipping_zone::{
    CarrierShippingRateProvider, PriceBasedShippingRate, ShippingCountry, ShippingProvince,
    ShippingZone, ShippingZoneService, WeightBasedShippingRate,
};
pub use shop::{Shop, ShopService};
pub use webhook::{Webhook, WebhookCountOptions, WebhookListOptions};
