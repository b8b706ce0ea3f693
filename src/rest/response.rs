//! Response wrapper for paginated resource operations.
//!
//! [`ResourceResponse<T>`] combines decoded data with the metadata of the
//! HTTP response: pagination links, rate limit usage and request id. It
//! implements `Deref<Target = T>`, so a `ResourceResponse<Vec<Order>>` can be
//! iterated and indexed like the vector itself.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut page = client.orders().list_with_pagination(&OrderListOptions::default()).await?;
//! loop {
//!     for order in page.iter() {
//!         println!("{:?}", order.name);
//!     }
//!     let Some(next) = page.next_page().cloned() else { break };
//!     page = client.orders().list_with_pagination(&next).await?;
//! }
//! ```

use std::ops::{Deref, DerefMut};

use crate::clients::{ApiCallLimit, HttpResponse, PageOptions, Pagination};

/// A decoded value plus the metadata of the response it came from.
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::{ApiCallLimit, PageOptions, Pagination};
/// use shopify_rest::rest::ResourceResponse;
///
/// let response = ResourceResponse::new(
///     vec!["item1", "item2", "item3"],
///     Pagination {
///         previous: None,
///         next: Some(PageOptions::new(vec![("page_info".to_string(), "abc".to_string())])),
///     },
///     Some(ApiCallLimit { request_count: 1, bucket_size: 40 }),
///     Some("req-123".to_string()),
/// );
///
/// assert_eq!(response.len(), 3);
/// assert_eq!(response[0], "item1");
/// assert!(response.has_next_page());
/// assert!(!response.has_prev_page());
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    pagination: Pagination,
    rate_limit: Option<ApiCallLimit>,
    request_id: Option<String>,
}

impl<T> ResourceResponse<T> {
    /// Creates a new `ResourceResponse` with the given data and metadata.
    #[must_use]
    pub const fn new(
        data: T,
        pagination: Pagination,
        rate_limit: Option<ApiCallLimit>,
        request_id: Option<String>,
    ) -> Self {
        Self {
            data,
            pagination,
            rate_limit,
            request_id,
        }
    }

    /// Wraps already-decoded data with the metadata of `response`.
    #[must_use]
    pub fn from_http_response(response: HttpResponse, data: T) -> Self {
        let request_id = response.request_id().map(ToString::to_string);
        Self {
            data,
            pagination: response.pagination,
            rate_limit: response.api_call_limit,
            request_id,
        }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns a reference to the inner data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns `true` if there is a next page of results.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.pagination.has_next()
    }

    /// Returns `true` if there is a previous page of results.
    #[must_use]
    pub const fn has_prev_page(&self) -> bool {
        self.pagination.has_previous()
    }

    /// Options that fetch the next page, if there is one.
    #[must_use]
    pub const fn next_page(&self) -> Option<&PageOptions> {
        self.pagination.next.as_ref()
    }

    /// Options that fetch the previous page, if there is one.
    #[must_use]
    pub const fn prev_page(&self) -> Option<&PageOptions> {
        self.pagination.previous.as_ref()
    }

    /// Returns the parsed pagination links.
    #[must_use]
    pub const fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Returns the rate limit information, if available.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&ApiCallLimit> {
        self.rate_limit.as_ref()
    }

    /// Returns the request ID from the response headers.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Maps the inner data to a new type, keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            pagination: self.pagination,
            rate_limit: self.rate_limit,
            request_id: self.request_id,
        }
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

// Verify ResourceResponse is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<Vec<String>>>();
};
