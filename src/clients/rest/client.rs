//! REST client implementation for the Shopify Admin API.
//!
//! This module provides the [`RestClient`] type, the single entry point every
//! resource service goes through. It normalizes paths, encodes options into
//! the query string and decodes JSON bodies.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::clients::errors::{DecodeError, HttpError, InvalidHttpRequestError};
use crate::clients::http_client::HttpClient;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::query::serialize_to_query;
use crate::config::{ApiVersion, ShopifyConfig};
use crate::error::ConfigError;
use crate::rest::ResourceResponse;

/// REST API client for the Shopify Admin API.
///
/// Provides typed `get`, `post`, `put`, `delete` and `count` methods. Cloning
/// is cheap: clones share the underlying connection pool.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_rest::{Credentials, RestClient, ShopDomain, ShopifyConfig};
///
/// let config = ShopifyConfig::builder()
///     .shop(ShopDomain::new("my-store")?)
///     .credentials(Credentials::access_token("shpat_abc")?)
///     .api_version_str("2024-10")
///     .build()?;
///
/// let client = RestClient::new(&config)?;
///
/// let total = client.count("customers/count", &()).await?;
/// let shop: serde_json::Value = client.get("shop", &()).await?;
/// ```
#[derive(Clone, Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: Arc<HttpClient>,
    /// The API version being used, if any.
    api_version: Option<ApiVersion>,
    /// Token that aborts in-flight requests and backoff waits.
    cancel: Option<CancellationToken>,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

#[derive(Deserialize)]
struct CountBody {
    count: u64,
}

impl RestClient {
    /// Creates a new REST client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the HTTP client cannot be
    /// created.
    pub fn new(config: &ShopifyConfig) -> Result<Self, ConfigError> {
        let http_client = HttpClient::new(config)?;

        tracing::debug!(
            "REST client for {} using prefix {}",
            config.shop(),
            http_client.base_path()
        );

        Ok(Self {
            http_client: Arc::new(http_client),
            api_version: config.api_version().cloned(),
            cancel: None,
        })
    }

    /// Returns a client whose requests abort when `token` is cancelled.
    ///
    /// Cancellation interrupts both in-flight sends and backoff waits; the
    /// call then fails with [`HttpError::Cancelled`].
    #[must_use]
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            http_client: Arc::clone(&self.http_client),
            api_version: self.api_version.clone(),
            cancel: Some(token),
        }
    }

    /// Returns the API version being used by this client.
    #[must_use]
    pub const fn api_version(&self) -> Option<&ApiVersion> {
        self.api_version.as_ref()
    }

    /// Returns the admin path prefix (`admin` or `admin/api/{version}`).
    #[must_use]
    pub fn admin_path_prefix(&self) -> &str {
        self.http_client.base_path()
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a prepared request through the retry loop.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.http_client.request(request, self.cancel.as_ref()).await
    }

    /// Sends a GET request and decodes the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body does not decode.
    pub async fn get<T, O>(&self, path: &str, options: &O) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        O: Serialize + ?Sized,
    {
        let response = self.execute(HttpMethod::Get, path, None, options).await?;
        Ok(response.json()?)
    }

    /// Sends a GET request and keeps the pagination links of the response.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let page: ResourceResponse<serde_json::Value> =
    ///     client.get_with_pagination("orders", &ListOptions { limit: Some(50), ..Default::default() }).await?;
    ///
    /// if let Some(next) = page.next_page() {
    ///     let following: ResourceResponse<serde_json::Value> =
    ///         client.get_with_pagination("orders", next).await?;
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body does not decode.
    pub async fn get_with_pagination<T, O>(
        &self,
        path: &str,
        options: &O,
    ) -> Result<ResourceResponse<T>, HttpError>
    where
        T: DeserializeOwned,
        O: Serialize + ?Sized,
    {
        let response = self.execute(HttpMethod::Get, path, None, options).await?;
        let data = response.json()?;
        Ok(ResourceResponse::from_http_response(response, data))
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body does not decode.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = to_body(body)?;
        let response = self
            .execute(HttpMethod::Post, path, Some(body), &())
            .await?;
        decode_optional_body(&response)
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body does not decode.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.put_with_options(path, body, &()).await
    }

    /// Sends a PUT request with a JSON body and query options.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body does not decode.
    pub async fn put_with_options<T, B, O>(
        &self,
        path: &str,
        body: &B,
        options: &O,
    ) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
        O: Serialize + ?Sized,
    {
        let body = to_body(body)?;
        let response = self
            .execute(HttpMethod::Put, path, Some(body), options)
            .await?;
        decode_optional_body(&response)
    }

    /// Sends a DELETE request. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete(&self, path: &str) -> Result<(), HttpError> {
        self.delete_with_options(path, &()).await
    }

    /// Sends a DELETE request with query options.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete_with_options<O>(&self, path: &str, options: &O) -> Result<(), HttpError>
    where
        O: Serialize + ?Sized,
    {
        self.execute(HttpMethod::Delete, path, None, options)
            .await
            .map(|_| ())
    }

    /// Fetches a `{"count": N}` endpoint and returns `N`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let all = client.count("customers/count", &()).await?;
    /// let recent = client
    ///     .count("customers/count", &CountOptions { created_at_min: Some(since), ..Default::default() })
    ///     .await?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Decode`] if the body has no integer `count`.
    pub async fn count<O>(&self, path: &str, options: &O) -> Result<u64, HttpError>
    where
        O: Serialize + ?Sized,
    {
        let body: CountBody = self.get(path, options).await?;
        Ok(body.count)
    }

    /// Normalizes `path`, encodes `options` and sends the request, returning
    /// the raw response for callers that decode envelopes themselves.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request is invalid or fails.
    pub async fn execute<O>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
        options: &O,
    ) -> Result<HttpResponse, HttpError>
    where
        O: Serialize + ?Sized,
    {
        let normalized_path = normalize_path(path)?;
        let query = serialize_to_query(options)?;

        let mut builder = HttpRequest::builder(method, normalized_path).query(query);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        self.send(builder.build()?).await
    }
}

fn to_body<B: Serialize + ?Sized>(body: &B) -> Result<Value, InvalidHttpRequestError> {
    serde_json::to_value(body).map_err(|e| InvalidHttpRequestError::InvalidBody {
        reason: e.to_string(),
    })
}

/// Decodes a body that may legitimately be empty (for example a 201 with no
/// content); an empty body decodes as `null`.
fn decode_optional_body<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, HttpError> {
    if response.body.trim().is_empty() {
        return serde_json::from_value(Value::Null)
            .map_err(|e| HttpError::Decode(DecodeError::new(response.code, "", e)));
    }
    Ok(response.json()?)
}

/// Normalizes a REST API path.
///
/// Strips leading `/` and a trailing `.json`, then appends `.json`.
fn normalize_path(path: &str) -> Result<String, InvalidHttpRequestError> {
    let trimmed = path.trim().trim_start_matches('/');
    let trimmed = trimmed.strip_suffix(".json").unwrap_or(trimmed);

    if trimmed.is_empty() {
        return Err(InvalidHttpRequestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(format!("{trimmed}.json"))
}
