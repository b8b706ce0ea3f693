//! # Shopify Admin REST client
//!
//! A typed Rust client for the Shopify Admin REST API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ShopifyConfig`] and [`ShopifyConfigBuilder`]
//! - Access-token and Basic (API key and password) authentication via [`Credentials`]
//! - A shared invoker with retry, jittered backoff and `Retry-After` handling
//! - Cursor pagination read from the `Link` header
//! - Generic CRUD over every resource through [`ResourceService`]
//! - Metafield and fulfillment sub-resources through [`rest::HasMetafields`]
//!   and [`rest::HasFulfillments`]
//! - HMAC verification of incoming webhooks in [`webhooks`]
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_rest::{ApiVersion, Credentials, RestClient, ShopDomain, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .credentials(Credentials::access_token("shpat_abc").unwrap())
//!     .api_version(ApiVersion::V2024_10)
//!     .build()
//!     .unwrap();
//!
//! let client = RestClient::new(&config).unwrap();
//! assert_eq!(client.admin_path_prefix(), "admin/api/2024-10");
//! ```
//!
//! ## Working with resources
//!
//! ```rust,ignore
//! use shopify_rest::rest::HasMetafields;
//! use shopify_rest::{CountOptions, ListOptions};
//!
//! let customers = client.customers();
//!
//! let total = customers.count(&CountOptions::default()).await?;
//! let mut page = customers
//!     .list_with_pagination(&ListOptions { limit: Some(50), ..Default::default() })
//!     .await?;
//!
//! while let Some(next) = page.next_page().cloned() {
//!     page = customers.list_with_pagination(&next).await?;
//! }
//!
//! let metafields = customers.metafields(207119551).list(&()).await?;
//! ```
//!
//! ## Cancellation
//!
//! ```rust,ignore
//! use tokio_util::sync::CancellationToken;
//!
//! let token = CancellationToken::new();
//! let cancellable = client.with_cancellation(token.clone());
//! // token.cancel() aborts in-flight sends and backoff waits with HttpError::Cancelled.
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
pub mod webhooks;

// Re-export public types at crate root for convenience
pub use auth::Credentials;
pub use config::{
    AccessToken, ApiKey, ApiSecretKey, ApiVersion, HostUrl, ShopDomain, ShopifyConfig,
    ShopifyConfigBuilder,
};
pub use error::ConfigError;

// Re-export the invoker and its error taxonomy
pub use clients::{
    ApiCallLimit, HttpError, HttpResponse, HttpResponseError, PageOptions, Pagination,
    RestClient, RetryPolicy,
};

// Re-export resource plumbing
pub use rest::{CountOptions, ListOptions, ResourceError, ResourceResponse, ResourceService, RestResource};
