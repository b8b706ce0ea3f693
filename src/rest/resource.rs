//! Generic resource service.
//!
//! Every Admin REST resource follows the same shape: a collection path, a
//! member path, a singular envelope key for one object and a plural key for
//! a list. [`RestResource`] describes that shape for a model type and
//! [`ResourceService`] implements the operations once for all of them.
//!
//! # Implementing a Resource
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use shopify_rest::rest::RestResource;
//!
//! #[derive(Debug, Clone, Default, Serialize, Deserialize)]
//! pub struct Redirect {
//!     #[serde(skip_serializing)]
//!     pub id: Option<u64>,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub path: Option<String>,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub target: Option<String>,
//! }
//!
//! impl RestResource for Redirect {
//!     type Id = u64;
//!     const SINGULAR: &'static str = "redirect";
//!     const PLURAL: &'static str = "redirects";
//!
//!     fn id(&self) -> Option<u64> {
//!         self.id
//!     }
//! }
//!
//! assert_eq!(Redirect::BASE_PATH, "redirects");
//! ```
//!
//! # Using a Service
//!
//! ```rust,ignore
//! let service = ResourceService::<Redirect>::new(&client);
//!
//! let redirects = service.list(&()).await?;
//! let total = service.count(&()).await?;
//! let created = service.create(&Redirect { path: Some("/a".into()), target: Some("/b".into()), ..Default::default() }).await?;
//! service.delete(created.id.unwrap()).await?;
//! ```

use std::fmt::Display;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::clients::{HttpError, HttpMethod, HttpResponse, InvalidHttpRequestError, RestClient};
use crate::rest::{ResourceError, ResourceResponse};

/// A model exposed by the Admin REST API.
pub trait RestResource: Serialize + DeserializeOwned + Send + Sync {
    /// The type of the resource's identifier.
    type Id: Display + Send + Sync;

    /// Envelope key for a single object (e.g., `customer`).
    const SINGULAR: &'static str;

    /// Envelope key for a list (e.g., `customers`).
    const PLURAL: &'static str;

    /// Path segment of the collection, relative to the parent.
    const BASE_PATH: &'static str = Self::PLURAL;

    /// Returns the resource's ID, or `None` for a model not yet created.
    fn id(&self) -> Option<Self::Id>;
}

/// CRUD operations for one resource type, optionally nested under a parent.
///
/// The service borrows the client, so it is cheap to create per call:
/// `client.customers().get(42, &()).await?`.
#[derive(Debug)]
pub struct ResourceService<'a, R> {
    client: &'a RestClient,
    prefix: Option<String>,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceService<'_, R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client,
            prefix: self.prefix.clone(),
            _resource: PhantomData,
        }
    }
}

impl<'a, R: RestResource> ResourceService<'a, R> {
    /// Creates a service for a top-level resource.
    #[must_use]
    pub const fn new(client: &'a RestClient) -> Self {
        Self {
            client,
            prefix: None,
            _resource: PhantomData,
        }
    }

    /// Creates a service nested under `{parent}/{parent_id}`.
    #[must_use]
    pub fn nested(client: &'a RestClient, parent: &str, parent_id: impl Display) -> Self {
        Self {
            client,
            prefix: Some(format!("{parent}/{parent_id}")),
            _resource: PhantomData,
        }
    }

    /// Returns the client this service sends through.
    #[must_use]
    pub const fn client(&self) -> &'a RestClient {
        self.client
    }

    /// Path of the collection, e.g. `customers/42/addresses`.
    #[must_use]
    pub fn collection_path(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}/{}", R::BASE_PATH),
            None => R::BASE_PATH.to_string(),
        }
    }

    /// Path of one member, e.g. `customers/42/addresses/7`.
    #[must_use]
    pub fn member_path(&self, id: impl Display) -> String {
        format!("{}/{id}", self.collection_path())
    }

    /// Lists resources.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request or decoding fails.
    pub async fn list<O>(&self, options: &O) -> Result<Vec<R>, ResourceError>
    where
        O: Serialize + ?Sized,
    {
        let response = self.send(HttpMethod::Get, &self.collection_path(), None, options).await?;
        unwrap_envelope(&response, R::PLURAL)
    }

    /// Lists resources and keeps the page links of the response.
    ///
    /// Pass [`ResourceResponse::next_page`] as the options of the next call
    /// to fetch the following page.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request or decoding fails.
    pub async fn list_with_pagination<O>(
        &self,
        options: &O,
    ) -> Result<ResourceResponse<Vec<R>>, ResourceError>
    where
        O: Serialize + ?Sized,
    {
        let response = self.send(HttpMethod::Get, &self.collection_path(), None, options).await?;
        let data = unwrap_envelope(&response, R::PLURAL)?;
        Ok(ResourceResponse::from_http_response(response, data))
    }

    /// Counts resources.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request fails or the body has
    /// no integer `count`.
    pub async fn count<O>(&self, options: &O) -> Result<u64, ResourceError>
    where
        O: Serialize + ?Sized,
    {
        let path = format!("{}/count", self.collection_path());
        Ok(self.client.count(&path, options).await?)
    }

    /// Fetches a single resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`]; a missing resource is a 404
    /// [`HttpError::Validation`] (see [`ResourceError::is_not_found`]).
    pub async fn get<O>(&self, id: R::Id, options: &O) -> Result<R, ResourceError>
    where
        O: Serialize + ?Sized,
    {
        let response = self.send(HttpMethod::Get, &self.member_path(id), None, options).await?;
        unwrap_envelope(&response, R::SINGULAR)
    }

    /// Creates a resource and returns the stored version.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request or decoding fails.
    pub async fn create(&self, resource: &R) -> Result<R, ResourceError> {
        let body = envelope(R::SINGULAR, resource)?;
        let response = self
            .send(HttpMethod::Post, &self.collection_path(), Some(body), &())
            .await?;
        unwrap_envelope(&response, R::SINGULAR)
    }

    /// Updates a resource and returns the stored version.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the model has no id, and
    /// [`ResourceError::Http`] if the request or decoding fails.
    pub async fn update(&self, resource: &R) -> Result<R, ResourceError> {
        let id = resource.id().ok_or(ResourceError::MissingId {
            resource: R::SINGULAR,
            operation: "update",
        })?;
        let body = envelope(R::SINGULAR, resource)?;
        let response = self
            .send(HttpMethod::Put, &self.member_path(id), Some(body), &())
            .await?;
        unwrap_envelope(&response, R::SINGULAR)
    }

    /// Deletes a resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the request fails.
    pub async fn delete(&self, id: R::Id) -> Result<(), ResourceError> {
        Ok(self.client.delete(&self.member_path(id)).await?)
    }

    /// POSTs to `{member}/{action}` and decodes the singular envelope.
    pub(crate) async fn member_action<B>(
        &self,
        id: R::Id,
        action: &str,
        body: &B,
    ) -> Result<R, ResourceError>
    where
        B: Serialize + ?Sized,
    {
        let path = format!("{}/{action}", self.member_path(id));
        let body = match to_body(body)? {
            Value::Null => Value::Object(Map::new()),
            body => body,
        };
        let response = self.send(HttpMethod::Post, &path, Some(body), &()).await?;
        unwrap_envelope(&response, R::SINGULAR)
    }

    pub(crate) async fn send<O>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
        options: &O,
    ) -> Result<HttpResponse, HttpError>
    where
        O: Serialize + ?Sized,
    {
        self.client.execute(method, path, body, options).await
    }
}

/// Decodes the value under `key` of a response body.
pub(crate) fn unwrap_envelope<T: DeserializeOwned>(
    response: &HttpResponse,
    key: &'static str,
) -> Result<T, ResourceError> {
    response
        .json_field(key)
        .map_err(|e| ResourceError::Http(e.into()))
}

/// Wraps `value` as `{key: value}`.
pub(crate) fn envelope<T: Serialize + ?Sized>(key: &str, value: &T) -> Result<Value, HttpError> {
    let mut map = Map::new();
    map.insert(key.to_string(), to_body(value)?);
    Ok(Value::Object(map))
}

/// Serializes a request body.
pub(crate) fn to_body<T: Serialize + ?Sized>(value: &T) -> Result<Value, HttpError> {
    serde_json::to_value(value).map_err(|e| {
        InvalidHttpRequestError::InvalidBody {
            reason: e.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;
    use crate::config::{ShopDomain, ShopifyConfig};
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    struct Widget {
        #[serde(skip_serializing)]
        id: Option<u64>,
        name: Option<String>,
    }

    impl RestResource for Widget {
        type Id = u64;
        const SINGULAR: &'static str = "widget";
        const PLURAL: &'static str = "widgets";

        fn id(&self) -> Option<u64> {
            self.id
        }
    }

    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    struct Gear {
        id: Option<u64>,
    }

    impl RestResource for Gear {
        type Id = u64;
        const SINGULAR: &'static str = "gear_item";
        const PLURAL: &'static str = "gears";
        const BASE_PATH: &'static str = "machine_gears";

        fn id(&self) -> Option<u64> {
            self.id
        }
    }

    fn client() -> RestClient {
        let config = ShopifyConfig::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .credentials(Credentials::access_token("token").unwrap())
            .build()
            .unwrap();
        RestClient::new(&config).unwrap()
    }

    #[test]
    fn test_top_level_paths() {
        let client = client();
        let service = ResourceService::<Widget>::new(&client);
        assert_eq!(service.collection_path(), "widgets");
        assert_eq!(service.member_path(5), "widgets/5");
    }

    #[test]
    fn test_nested_paths_use_base_path() {
        let client = client();
        let service = ResourceService::<Gear>::nested(&client, "machines", 9);
        assert_eq!(service.collection_path(), "machines/9/machine_gears");
        assert_eq!(service.member_path(3), "machines/9/machine_gears/3");
    }

    #[test]
    fn test_envelope_wraps_body() {
        let widget = Widget {
            id: Some(1),
            name: Some("Sprocket".to_string()),
        };
        assert_eq!(
            envelope(Widget::SINGULAR, &widget).unwrap(),
            json!({"widget": {"name": "Sprocket"}})
        );
    }

    #[tokio::test]
    async fn test_update_without_id_fails_before_sending() {
        let client = client();
        let service = ResourceService::<Widget>::new(&client);
        let result = service.update(&Widget::default()).await;
        assert!(matches!(
            result,
            Err(ResourceError::MissingId {
                resource: "widget",
                operation: "update"
            })
        ));
    }
}
