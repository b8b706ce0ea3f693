//! Credentials used to authenticate Admin REST API requests.
//!
//! Shopify accepts two authentication schemes on the Admin REST API:
//!
//! - an access token sent in the `X-Shopify-Access-Token` header
//!   (custom apps and OAuth-installed apps)
//! - an API key and password pair sent as HTTP Basic authentication
//!   (legacy private apps)
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::Credentials;
//!
//! let token = Credentials::access_token("shpat_abc").unwrap();
//! let (name, value) = token.header();
//! assert_eq!(name, "X-Shopify-Access-Token");
//! assert_eq!(value, "shpat_abc");
//!
//! let basic = Credentials::basic("key", "password").unwrap();
//! let (name, value) = basic.header();
//! assert_eq!(name, "Authorization");
//! assert_eq!(value, "Basic a2V5OnBhc3N3b3Jk");
//! ```

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::config::{AccessToken, ApiKey, ApiSecretKey};
use crate::error::ConfigError;

/// Header carrying an Admin API access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Standard HTTP authorization header.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Authentication material for a shop.
///
/// Secret values are masked in `Debug` output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    /// Static Admin API access token.
    AccessToken(AccessToken),
    /// Private-app API key and password pair.
    Basic {
        /// The app's API key.
        api_key: ApiKey,
        /// The app's password.
        password: ApiSecretKey,
    },
}

impl Credentials {
    /// Creates token credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is blank.
    pub fn access_token(token: impl Into<String>) -> Result<Self, ConfigError> {
        AccessToken::new(token).map(Self::AccessToken)
    }

    /// Creates Basic credentials from an API key and password.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] or [`ConfigError::EmptyApiSecretKey`]
    /// if either half is empty.
    pub fn basic(
        api_key: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::Basic {
            api_key: ApiKey::new(api_key)?,
            password: ApiSecretKey::new(password)?,
        })
    }

    /// Returns the header name and value that authenticate a request.
    #[must_use]
    pub fn header(&self) -> (&'static str, String) {
        match self {
            Self::AccessToken(token) => (ACCESS_TOKEN_HEADER, token.as_ref().to_string()),
            Self::Basic { api_key, password } => {
                let raw = format!("{}:{}", api_key.as_ref(), password.as_ref());
                (
                    AUTHORIZATION_HEADER,
                    format!("Basic {}", STANDARD.encode(raw)),
                )
            }
        }
    }
}

impl From<AccessToken> for Credentials {
    fn from(token: AccessToken) -> Self {
        Self::AccessToken(token)
    }
}
