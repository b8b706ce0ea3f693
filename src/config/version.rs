//! Admin API version selection.
//!
//! The version decides the admin path prefix of every request: a pinned
//! version produces `admin/api/{version}`, while no version produces the
//! unversioned `admin` prefix.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Unversioned admin path prefix.
pub const UNVERSIONED_PREFIX: &str = "admin";

/// Shopify Admin API version.
///
/// Shopify releases stable versions quarterly (January, April, July,
/// October). Known releases have named variants; any other well-formed
/// quarterly version parses as [`ApiVersion::Custom`].
///
/// # Example
///
/// ```rust
/// use shopify_rest::ApiVersion;
///
/// let version: ApiVersion = "2024-10".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2024_10);
/// assert_eq!(version.path_prefix(), "admin/api/2024-10");
///
/// let unstable: ApiVersion = "unstable".parse().unwrap();
/// assert_eq!(unstable.path_prefix(), "admin/api/unstable");
///
/// assert!("9999-99b".parse::<ApiVersion>().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2024-01
    V2024_01,
    /// API version 2024-04
    V2024_04,
    /// API version 2024-07
    V2024_07,
    /// API version 2024-10
    V2024_10,
    /// API version 2025-01
    V2025_01,
    /// API version 2025-04
    V2025_04,
    /// API version 2025-07
    V2025_07,
    /// API version 2025-10
    V2025_10,
    /// Unstable API version for development and testing.
    Unstable,
    /// Well-formed version not known to this release of the crate.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest stable API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2025_10
    }

    /// Returns `true` if this is a known stable API version.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        !matches!(self, Self::Unstable | Self::Custom(_))
    }

    /// Returns the versioned admin path prefix, `admin/api/{version}`.
    #[must_use]
    pub fn path_prefix(&self) -> String {
        format!("{UNVERSIONED_PREFIX}/api/{self}")
    }

    /// Parses a version string, falling back to `None` (unversioned) when the
    /// string is empty or not a recognizable version.
    ///
    /// A fallback is logged at `warn` level so that a misspelled version does
    /// not go unnoticed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_rest::ApiVersion;
    ///
    /// assert_eq!(ApiVersion::parse_lenient("2024-07"), Some(ApiVersion::V2024_07));
    /// assert_eq!(ApiVersion::parse_lenient(""), None);
    /// assert_eq!(ApiVersion::parse_lenient("9999-99b"), None);
    /// ```
    #[must_use]
    pub fn parse_lenient(version: &str) -> Option<Self> {
        if version.trim().is_empty() {
            return None;
        }
        match version.parse() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                tracing::warn!(
                    "Unrecognized API version '{}', falling back to unversioned '{}' prefix",
                    version,
                    UNVERSIONED_PREFIX
                );
                None
            }
        }
    }

    fn is_valid_version_format(s: &str) -> bool {
        let Some((year, month)) = s.split_once('-') else {
            return false;
        };

        year.len() == 4
            && year.chars().all(|c| c.is_ascii_digit())
            && matches!(month, "01" | "04" | "07" | "10")
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version_str = match self {
            Self::V2024_01 => "2024-01",
            Self::V2024_04 => "2024-04",
            Self::V2024_07 => "2024-07",
            Self::V2024_10 => "2024-10",
            Self::V2025_01 => "2025-01",
            Self::V2025_04 => "2025-04",
            Self::V2025_07 => "2025-07",
            Self::V2025_10 => "2025-10",
            Self::Unstable => "unstable",
            Self::Custom(s) => s,
        };
        f.write_str(version_str)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "2024-01" => Ok(Self::V2024_01),
            "2024-04" => Ok(Self::V2024_04),
            "2024-07" => Ok(Self::V2024_07),
            "2024-10" => Ok(Self::V2024_10),
            "2025-01" => Ok(Self::V2025_01),
            "2025-04" => Ok(Self::V2025_04),
            "2025-07" => Ok(Self::V2025_07),
            "2025-10" => Ok(Self::V2025_10),
            "unstable" => Ok(Self::Unstable),
            _ if Self::is_valid_version_format(&s) => Ok(Self::Custom(s)),
            _ => Err(ConfigError::InvalidApiVersion { version: s }),
        }
    }
}
