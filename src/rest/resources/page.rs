//! Online store pages and blogs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{HasMetafields, ResourceService, RestResource};

/// A static page of the online store.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Page {
    #[serde(skip_serializing)]
    pub id: Option<u64>,
    #[serde(skip_serializing)]
    pub shop_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for Page {
    type Id = u64;
    const SINGULAR: &'static str = "page";
    const PLURAL: &'static str = "pages";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

impl HasMetafields for Page {}

/// A blog of the online store.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Blog {
    #[serde(skip_serializing)]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// `no`, `moderate` or `yes`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentable: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedburner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedburner_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for Blog {
    type Id = u64;
    const SINGULAR: &'static str = "blog";
    const PLURAL: &'static str = "blogs";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

impl HasMetafields for Blog {}

impl RestClient {
    #[must_use]
    pub const fn pages(&self) -> ResourceService<'_, Page> {
        ResourceService::new(self)
    }

    #[must_use]
    pub const fn blogs(&self) -> ResourceService<'_, Blog> {
        ResourceService::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_update_body() {
        let page = Page {
            id: Some(131092082),
            shop_id: Some(548380009),
            body_html: Some("<p>Returns accepted within 30 days.</p>".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            json!({"body_html": "<p>Returns accepted within 30 days.</p>"})
        );
    }

    #[test]
    fn test_blog_deserialization() {
        let blog: Blog = serde_json::from_str(
            r#"{"id":241253187,"handle":"apple-blog","title":"Mah Blog",
                "commentable":"no","tags":"Announcing, Mystery"}"#,
        )
        .unwrap();
        assert_eq!(blog.id(), Some(241253187));
        assert_eq!(blog.commentable.as_deref(), Some("no"));
    }
}
