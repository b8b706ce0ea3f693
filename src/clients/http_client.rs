//! HTTP client for Shopify Admin REST API communication.
//!
//! This module provides the [`HttpClient`] type, the shared invoker behind
//! every resource operation. It owns URL construction, authentication
//! headers, the retry loop and cancellation.

use std::collections::HashMap;
use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::clients::errors::{
    HttpError, HttpResponseError, MaxHttpRetriesExceededError, RateLimitedError, ServerError,
};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::clients::retry::{RetryPolicy, RATE_LIMITED_STATUS};
use crate::config::ShopifyConfig;
use crate::error::ConfigError;

/// Library version from Cargo.toml.
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Admin REST API.
///
/// The client handles:
/// - Base URI construction from the shop domain or `api_host`
/// - Default headers including User-Agent and credentials
/// - Automatic retry of 429, 5xx and transport failures with backoff
/// - Cancellation through a [`CancellationToken`]
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_rest::{Credentials, ShopDomain, ShopifyConfig};
/// use shopify_rest::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let config = ShopifyConfig::builder()
///     .shop(ShopDomain::new("my-store")?)
///     .credentials(Credentials::access_token("shpat_abc")?)
///     .build()?;
///
/// let client = HttpClient::new(&config)?;
/// let request = HttpRequest::builder(HttpMethod::Get, "shop.json").build()?;
/// let response = client.request(request, None).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://my-store.myshopify.com`).
    base_uri: String,
    /// Admin path prefix (e.g., `admin/api/2024-10`).
    base_path: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Retry policy applied to every request.
    retry: RetryPolicy,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the built-in reqwest
    /// client cannot be created (for example on TLS initialization failure).
    pub fn new(config: &ShopifyConfig) -> Result<Self, ConfigError> {
        let client = match config.http_client() {
            Some(client) => client.clone(),
            None => {
                let mut builder = reqwest::Client::builder().use_rustls_tls();
                if let Some(timeout) = config.timeout() {
                    builder = builder.timeout(timeout);
                }
                builder.build().map_err(|e| ConfigError::HttpClientBuild {
                    reason: e.to_string(),
                })?
            }
        };

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Shopify REST Library v{LIBRARY_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let (auth_name, auth_value) = config.credentials().header();
        default_headers.insert(auth_name.to_string(), auth_value);

        Ok(Self {
            client,
            base_uri: config.base_uri(),
            base_path: config.admin_path_prefix(),
            default_headers,
            retry: config.retry_policy().clone(),
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the admin path prefix for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the retry policy.
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Returns the full URL for a request path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_uri,
            self.base_path,
            path.trim_start_matches('/')
        )
    }

    /// Sends a request, retrying transient failures.
    ///
    /// Each attempt re-sends the same method, URL, query and body. The loop
    /// ends on the first 2xx response, on an error the retry policy does not
    /// retry, when attempts run out, or when `cancel` fires.
    ///
    /// # Errors
    ///
    /// - [`HttpError::InvalidRequest`] if the request fails validation
    /// - [`HttpError::Validation`] for a non-retried non-2xx response
    /// - [`HttpError::RateLimited`], [`HttpError::Server`] or
    ///   [`HttpError::Transport`] when only one attempt is allowed
    /// - [`HttpError::RetryExhausted`] when retries run out, wrapping the last error
    /// - [`HttpError::Cancelled`] if `cancel` fires during a send or a backoff wait
    pub async fn request(
        &self,
        request: HttpRequest,
        cancel: Option<&CancellationToken>,
    ) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request.path);
        let max_attempts = request
            .max_attempts
            .unwrap_or_else(|| self.retry.max_attempts())
            .max(1);

        let mut attempt: u32 = 0;
        loop {
            attempt += 1;

            let error = match with_cancel(cancel, self.send_once(&url, &request)).await? {
                Ok(response) if response.is_ok() => {
                    if let Some(reason) = response.deprecation_reason() {
                        tracing::warn!(
                            "Deprecated request to Shopify API at {}, received reason: {}",
                            request.path,
                            reason
                        );
                    }
                    return Ok(response);
                }
                Ok(response) => Self::classify(&response),
                Err(error) => HttpError::Transport(error),
            };

            if !self.retry.should_retry(&error) {
                return Err(error);
            }

            if attempt >= max_attempts {
                if max_attempts == 1 {
                    return Err(error);
                }
                return Err(HttpError::RetryExhausted(MaxHttpRetriesExceededError {
                    tries: attempt,
                    last: Box::new(error),
                }));
            }

            let delay = self.retry.delay_for(attempt, error.retry_after());
            tracing::warn!(
                attempt,
                max_attempts,
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                "Retrying {} {} after error: {}",
                request.http_method,
                request.path,
                error
            );
            with_cancel(cancel, tokio::time::sleep(delay)).await?;
        }
    }

    async fn send_once(
        &self,
        url: &str,
        request: &HttpRequest,
    ) -> Result<HttpResponse, reqwest::Error> {
        let mut builder = self.client.request(request.http_method.as_reqwest(), url);

        for (key, value) in &self.default_headers {
            builder = builder.header(key, value);
        }
        for (key, value) in &request.extra_headers {
            builder = builder.header(key, value);
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let res = builder.send().await?;
        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        tracing::debug!(status = code, "{} {}", request.http_method, url);

        Ok(HttpResponse::new(code, headers, body))
    }

    /// Maps a non-2xx response onto the error taxonomy.
    fn classify(response: &HttpResponse) -> HttpError {
        let error = HttpResponseError::from_body(response.code, &response.body, response.request_id());
        match response.code {
            RATE_LIMITED_STATUS => HttpError::RateLimited(RateLimitedError {
                response: error,
                retry_after: response.retry_after,
            }),
            500..=599 => HttpError::Server(ServerError {
                response: error,
                retry_after: response.retry_after,
            }),
            _ => HttpError::Validation(error),
        }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

/// Runs `future` unless `cancel` fires first.
async fn with_cancel<F: Future>(
    cancel: Option<&CancellationToken>,
    future: F,
) -> Result<F::Output, HttpError> {
    match cancel {
        Some(token) => tokio::select! {
            biased;
            () = token.cancelled() => Err(HttpError::Cancelled),
            output = future => Ok(output),
        },
        None => Ok(future.await),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;
    use crate::config::{ApiVersion, HostUrl, ShopDomain};

    fn config() -> ShopifyConfig {
        ShopifyConfig::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .credentials(Credentials::access_token("test-access-token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_base_uri_and_unversioned_path() {
        let client = HttpClient::new(&config()).unwrap();
        assert_eq!(client.base_uri(), "https://test-shop.myshopify.com");
        assert_eq!(client.base_path(), "admin");
        assert_eq!(
            client.url_for("customers/count.json"),
            "https://test-shop.myshopify.com/admin/customers/count.json"
        );
    }

    #[test]
    fn test_versioned_path_and_api_host() {
        let config = ShopifyConfig::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .credentials(Credentials::access_token("t").unwrap())
            .api_version(ApiVersion::V2024_10)
            .api_host(HostUrl::new("http://127.0.0.1:3000").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();
        assert_eq!(
            client.url_for("/orders.json"),
            "http://127.0.0.1:3000/admin/api/2024-10/orders.json"
        );
    }

    #[test]
    fn test_default_headers_include_token_and_user_agent() {
        let client = HttpClient::new(&config()).unwrap();
        let headers = client.default_headers();

        assert_eq!(
            headers.get("X-Shopify-Access-Token"),
            Some(&"test-access-token".to_string())
        );
        assert_eq!(headers.get("Accept"), Some(&"application/json".to_string()));
        assert!(headers
            .get("User-Agent")
            .is_some_and(|ua| ua.contains("Shopify REST Library v")));
    }

    #[test]
    fn test_user_agent_prefix() {
        let config = ShopifyConfig::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .credentials(Credentials::access_token("t").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();
        assert!(client.default_headers()["User-Agent"].starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_classify_by_status() {
        let response = |code| HttpResponse::new(code, HashMap::new(), "{}".to_string());

        assert!(matches!(
            HttpClient::classify(&response(429)),
            HttpError::RateLimited(_)
        ));
        assert!(matches!(
            HttpClient::classify(&response(502)),
            HttpError::Server(_)
        ));
        assert!(matches!(
            HttpClient::classify(&response(422)),
            HttpError::Validation(_)
        ));
        assert!(matches!(
            HttpClient::classify(&response(404)),
            HttpError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn test_cancelled_token_short_circuits() {
        let token = CancellationToken::new();
        token.cancel();
        let result = with_cancel(Some(&token), std::future::pending::<()>()).await;
        assert!(matches!(result, Err(HttpError::Cancelled)));
    }
}
