//! HTTP layer for the Admin REST API.
//!
//! Every request goes through one invoker, [`HttpClient::request`], which
//! builds the URL, injects the authentication header, retries rate-limited,
//! server and transport failures with backoff, and turns every other
//! non-2xx response into a structured error.
//!
//! # Overview
//!
//! - [`HttpClient`]: the invoker and its retry loop
//! - [`HttpRequest`] / [`HttpRequestBuilder`]: method, path, query and body
//! - [`HttpResponse`]: status, headers, body, [`Pagination`] and [`ApiCallLimit`]
//! - [`HttpError`]: Validation, RateLimited, Server, Transport, Decode,
//!   RetryExhausted and Cancelled
//! - [`RetryPolicy`]: attempts and capped exponential backoff with jitter
//! - [`RestClient`]: typed `get` / `post` / `put` / `delete` / `count`
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::clients::{HttpMethod, HttpRequest, RestClient};
//!
//! let client = RestClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "shop.json").build()?;
//! let response = client.send(request).await?;
//! println!("{:?}", response.api_call_limit);
//! ```
//!
//! # Retry Behavior
//!
//! | Outcome | Retried | Surfaced as |
//! |---|---|---|
//! | 2xx | - | `Ok` |
//! | 429 | yes, honoring `Retry-After` | `RetryExhausted { last: RateLimited }` |
//! | 5xx | yes | `RetryExhausted { last: Server }` |
//! | connection failure | yes | `RetryExhausted { last: Transport }` |
//! | other 4xx | no | `Validation` |
//! | undecodable 2xx body | no | `Decode` |

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod pagination;
mod query;
mod retry;
pub mod rest;

pub use errors::{
    DecodeError, HttpError, HttpResponseError, InvalidHttpRequestError,
    MaxHttpRetriesExceededError, RateLimitedError, ServerError, BASE_ERROR_FIELD,
};
pub use http_client::{HttpClient, LIBRARY_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{ApiCallLimit, HttpResponse};
pub use pagination::{PageOptions, Pagination};
pub use query::serialize_to_query;
pub use retry::{
    RetryPolicy, DEFAULT_BASE_DELAY, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_DELAY, RATE_LIMITED_STATUS,
};
pub use rest::RestClient;
