//! Theme assets.
//!
//! Assets are addressed by key within a theme rather than by id, and the
//! key travels in the query string as `asset[key]`:
//!
//! ```rust,ignore
//! let layout = client.assets(828155753).get("layout/theme.liquid").await?;
//! client.assets(828155753).delete("assets/bg-body.gif").await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient};
use crate::rest::{envelope, unwrap_envelope, ResourceError};

const ASSET: &str = "asset";
const ASSETS: &str = "assets";

/// A file that makes up a theme.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Asset {
    /// Path within the theme, e.g. `templates/index.liquid`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Text content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Base64 content for binary assets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
    /// URL to copy the asset from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Key of an existing asset to duplicate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_key: Option<String>,
    #[serde(skip_serializing)]
    pub content_type: Option<String>,
    #[serde(skip_serializing)]
    pub public_url: Option<String>,
    #[serde(skip_serializing)]
    pub size: Option<u64>,
    #[serde(skip_serializing)]
    pub checksum: Option<String>,
    #[serde(skip_serializing)]
    pub theme_id: Option<u64>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
struct AssetKey<'k> {
    key: &'k str,
}

#[derive(Serialize)]
struct AssetQuery<'k> {
    asset: AssetKey<'k>,
}

/// Assets of one theme, under `themes/{theme_id}/assets`.
#[derive(Debug, Clone, Copy)]
pub struct AssetService<'a> {
    client: &'a RestClient,
    theme_id: u64,
}

impl AssetService<'_> {
    /// Returns the theme these assets belong to.
    #[must_use]
    pub const fn theme_id(&self) -> u64 {
        self.theme_id
    }

    fn path(&self) -> String {
        format!("themes/{}/{ASSETS}", self.theme_id)
    }

    /// Lists the theme's assets (metadata only, without values).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request or decoding fails.
    pub async fn list<O>(&self, options: &O) -> Result<Vec<Asset>, ResourceError>
    where
        O: Serialize + ?Sized,
    {
        let response = self
            .client
            .execute(HttpMethod::Get, &self.path(), None, options)
            .await?;
        unwrap_envelope(&response, ASSETS)
    }

    /// Fetches one asset, including its value.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request or decoding fails.
    pub async fn get(&self, key: &str) -> Result<Asset, ResourceError> {
        let query = AssetQuery {
            asset: AssetKey { key },
        };
        let response = self
            .client
            .execute(HttpMethod::Get, &self.path(), None, &query)
            .await?;
        unwrap_envelope(&response, ASSET)
    }

    /// Creates or replaces an asset.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request or decoding fails.
    pub async fn update(&self, asset: &Asset) -> Result<Asset, ResourceError> {
        let body = envelope(ASSET, asset)?;
        let response = self
            .client
            .execute(HttpMethod::Put, &self.path(), Some(body), &())
            .await?;
        unwrap_envelope(&response, ASSET)
    }

    /// Deletes an asset.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request fails.
    pub async fn delete(&self, key: &str) -> Result<(), ResourceError> {
        let query = AssetQuery {
            asset: AssetKey { key },
        };
        Ok(self.client.delete_with_options(&self.path(), &query).await?)
    }
}

impl RestClient {
    #[must_use]
    pub const fn assets(&self, theme_id: u64) -> AssetService<'_> {
        AssetService {
            client: self,
            theme_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::serialize_to_query;

    #[test]
    fn test_asset_key_query() {
        let query = AssetQuery {
            asset: AssetKey {
                key: "templates/index.liquid",
            },
        };
        assert_eq!(
            serialize_to_query(&query).unwrap(),
            vec![(
                "asset[key]".to_string(),
                "templates/index.liquid".to_string()
            )]
        );
    }

    #[test]
    fn test_asset_update_body_skips_read_only() {
        let asset = Asset {
            key: Some("templates/index.liquid".into()),
            value: Some("content".into()),
            theme_id: Some(1),
            size: Some(7),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&asset).unwrap(),
            serde_json::json!({"key": "templates/index.liquid", "value": "content"})
        );
    }
}
