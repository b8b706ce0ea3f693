//! Resource layer on top of [`RestClient`](crate::clients::RestClient).
//!
//! - [`RestResource`]: describes a model's envelope keys and path
//! - [`ResourceService`]: list / count / get / create / update / delete for
//!   any [`RestResource`], optionally nested under a parent
//! - [`HasMetafields`] and [`HasFulfillments`]: sub-resource capabilities
//! - [`ResourceResponse`]: data plus page links, rate limit and request id
//! - [`ResourceError`]: resource-level errors wrapping [`HttpError`](crate::clients::HttpError)
//! - [`resources`]: the concrete models
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::Customer;
//!
//! let customer = client.customers().get(207119551, &()).await?;
//! let addresses = client.customer_addresses(207119551).list(&()).await?;
//! let metafields = client.customers().metafields(207119551).list(&()).await?;
//!
//! match client.customers().get(1, &()).await {
//!     Err(e) if e.is_not_found() => println!("no such customer"),
//!     other => println!("{other:?}"),
//! }
//! ```

mod capabilities;
mod errors;
mod options;
mod resource;
mod response;
pub mod resources;

pub use capabilities::{HasFulfillments, HasMetafields};
pub use errors::ResourceError;
pub use options::{CountOptions, ListOptions};
pub use resource::{ResourceService, RestResource};
pub use response::ResourceResponse;

pub(crate) use resource::{envelope, to_body, unwrap_envelope};
