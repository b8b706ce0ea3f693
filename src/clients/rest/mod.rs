//! REST API client for the Shopify Admin API.
//!
//! This module provides [`RestClient`], a higher-level client built on top of
//! the [`HttpClient`](crate::clients::HttpClient).
//!
//! # Path Normalization
//!
//! Paths are normalized before sending:
//!
//! - Leading slashes are stripped: `/products` -> `products.json`
//! - Trailing `.json` is stripped and re-added: `products.json` -> `products.json`
//! - The admin prefix (`admin` or `admin/api/{version}`) is always prepended
//!
//! # Options
//!
//! Every method that sends a query takes any `Serialize` value as options.
//! Only set fields are sent; pass `&()` for none. See
//! [`serialize_to_query`](crate::clients::serialize_to_query).

mod client;

pub use client::RestClient;
