//! Configuration types for the Shopify REST client.
//!
//! A [`ShopifyConfig`] is built once per shop and treated as immutable
//! afterwards. It is read by every request the client sends, so it holds only
//! plain values: the shop, its credentials, the API version, the retry policy
//! and transport overrides.
//!
//! # Overview
//!
//! - [`ShopifyConfig`]: The immutable configuration
//! - [`ShopifyConfigBuilder`]: A builder for constructing [`ShopifyConfig`] instances
//! - [`AccessToken`], [`ApiKey`], [`ApiSecretKey`]: Validated credential newtypes
//! - [`ShopDomain`]: A validated Shopify shop domain
//! - [`HostUrl`]: A validated API host override
//! - [`ApiVersion`]: The Admin API version
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::{ApiVersion, Credentials, ShopDomain, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .credentials(Credentials::access_token("shpat_abc").unwrap())
//!     .api_version(ApiVersion::V2024_10)
//!     .max_attempts(5)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.admin_path_prefix(), "admin/api/2024-10");
//! ```

mod newtypes;
mod version;

use std::time::Duration;

pub use newtypes::{AccessToken, ApiKey, ApiSecretKey, HostUrl, ShopDomain};
pub use version::{ApiVersion, UNVERSIONED_PREFIX};

use crate::auth::Credentials;
use crate::clients::RetryPolicy;
use crate::error::ConfigError;

/// Configuration for a Shopify REST client.
///
/// # Thread Safety
///
/// `ShopifyConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ShopifyConfig {
    shop: ShopDomain,
    credentials: Credentials,
    api_version: Option<ApiVersion>,
    retry_policy: RetryPolicy,
    timeout: Option<Duration>,
    http_client: Option<reqwest::Client>,
    user_agent_prefix: Option<String>,
    api_host: Option<HostUrl>,
}

impl ShopifyConfig {
    /// Creates a new builder for constructing a `ShopifyConfig`.
    #[must_use]
    pub fn builder() -> ShopifyConfigBuilder {
        ShopifyConfigBuilder::new()
    }

    /// Returns the shop domain.
    #[must_use]
    pub const fn shop(&self) -> &ShopDomain {
        &self.shop
    }

    /// Returns the credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the pinned API version, or `None` for unversioned requests.
    #[must_use]
    pub const fn api_version(&self) -> Option<&ApiVersion> {
        self.api_version.as_ref()
    }

    /// Returns the admin path prefix: `admin` or `admin/api/{version}`.
    #[must_use]
    pub fn admin_path_prefix(&self) -> String {
        self.api_version
            .as_ref()
            .map_or_else(|| UNVERSIONED_PREFIX.to_string(), ApiVersion::path_prefix)
    }

    /// Returns the retry policy.
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    /// Returns the request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the caller-supplied HTTP client, if any.
    #[must_use]
    pub const fn http_client(&self) -> Option<&reqwest::Client> {
        self.http_client.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the API host override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the origin requests are sent to.
    ///
    /// This is the `api_host` override when set, otherwise `https://{shop}`.
    #[must_use]
    pub fn base_uri(&self) -> String {
        self.api_host.as_ref().map_or_else(
            || format!("https://{}", self.shop),
            |host| host.origin().to_string(),
        )
    }
}

// Verify ShopifyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopifyConfig>();
};

/// Builder for constructing [`ShopifyConfig`] instances.
///
/// Required fields are `shop` and `credentials`.
///
/// # Defaults
///
/// - `api_version`: `None` (unversioned `admin` prefix)
/// - `retry_policy`: [`RetryPolicy::default`] (3 attempts, 500ms base, 10s cap)
/// - `timeout`: `None`
/// - `http_client`: `None` (a rustls client is built)
/// - `user_agent_prefix`: `None`
/// - `api_host`: `None`
#[derive(Debug, Default)]
pub struct ShopifyConfigBuilder {
    shop: Option<ShopDomain>,
    credentials: Option<Credentials>,
    api_version: Option<ApiVersion>,
    retry_policy: Option<RetryPolicy>,
    max_attempts: Option<u32>,
    timeout: Option<Duration>,
    http_client: Option<reqwest::Client>,
    user_agent_prefix: Option<String>,
    api_host: Option<HostUrl>,
}

impl ShopifyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shop domain (required).
    #[must_use]
    pub fn shop(mut self, shop: ShopDomain) -> Self {
        self.shop = Some(shop);
        self
    }

    /// Sets the credentials (required).
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Pins the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the API version from a string.
    ///
    /// An empty or unrecognized string selects the unversioned `admin`
    /// prefix instead of failing; see [`ApiVersion::parse_lenient`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_rest::{Credentials, ShopDomain, ShopifyConfig};
    ///
    /// let config = ShopifyConfig::builder()
    ///     .shop(ShopDomain::new("my-store").unwrap())
    ///     .credentials(Credentials::access_token("token").unwrap())
    ///     .api_version_str("9999-99b")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(config.admin_path_prefix(), "admin");
    /// ```
    #[must_use]
    pub fn api_version_str(mut self, version: &str) -> Self {
        self.api_version = ApiVersion::parse_lenient(version);
        self
    }

    /// Sets the full retry policy.
    #[must_use]
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = Some(policy);
        self
    }

    /// Overrides only the maximum number of attempts of the retry policy.
    ///
    /// `1` disables retries. `0` is rejected by [`build`](Self::build).
    #[must_use]
    pub const fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    /// Sets a per-request timeout for the built-in HTTP client.
    ///
    /// Ignored when a custom client is supplied via [`http_client`](Self::http_client).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Supplies a preconfigured `reqwest::Client`.
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Routes requests to another origin instead of `https://{shop}`.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Builds the [`ShopifyConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shop` or
    /// `credentials` are not set, and [`ConfigError::InvalidRetryPolicy`]
    /// if `max_attempts` is zero.
    pub fn build(self) -> Result<ShopifyConfig, ConfigError> {
        let shop = self
            .shop
            .ok_or(ConfigError::MissingRequiredField { field: "shop" })?;
        let credentials = self
            .credentials
            .ok_or(ConfigError::MissingRequiredField {
                field: "credentials",
            })?;

        let mut retry_policy = self.retry_policy.unwrap_or_default();
        if let Some(attempts) = self.max_attempts {
            retry_policy = retry_policy.with_max_attempts(attempts)?;
        }

        Ok(ShopifyConfig {
            shop,
            credentials,
            api_version: self.api_version,
            retry_policy,
            timeout: self.timeout,
            http_client: self.http_client,
            user_agent_prefix: self.user_agent_prefix,
            api_host: self.api_host,
        })
    }
}
