//! The resource client.
//!
//! [`ResourceApi`] is the contract the store layer is generic over;
//! [`ResourceClient`] implements it with one HTTP request per operation:
//!
//! - `list_all`  → `GET    /{collection}`
//! - `get_by_id` → `GET    /{collection}/{id}`
//! - `create`    → `POST   /{collection}` with the form body
//! - `update`    → `PUT    /{collection}/{id}` with `{id, ...form}`
//! - `delete`    → `DELETE /{collection}/{id}`

use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use url::Url;

use replica_core::{Resource, ResourceId};

use crate::config::ClientConfig;
use crate::error::Error;

/// The five CRUD operations of one resource collection.
#[async_trait]
pub trait ResourceApi<R: Resource>: Send + Sync {
    async fn list_all(&self) -> Result<Vec<R>, Error>;

    async fn get_by_id(&self, id: ResourceId) -> Result<R, Error>;

    async fn create(&self, form: &R::Form) -> Result<R, Error>;

    async fn update(&self, id: ResourceId, form: &R::Form) -> Result<(), Error>;

    async fn delete(&self, id: ResourceId) -> Result<(), Error>;
}

// Blanket implementation for shared handles.
#[async_trait]
impl<R: Resource, T: ResourceApi<R> + ?Sized> ResourceApi<R> for std::sync::Arc<T> {
    async fn list_all(&self) -> Result<Vec<R>, Error> {
        (**self).list_all().await
    }

    async fn get_by_id(&self, id: ResourceId) -> Result<R, Error> {
        (**self).get_by_id(id).await
    }

    async fn create(&self, form: &R::Form) -> Result<R, Error> {
        (**self).create(form).await
    }

    async fn update(&self, id: ResourceId, form: &R::Form) -> Result<(), Error> {
        (**self).update(id, form).await
    }

    async fn delete(&self, id: ResourceId) -> Result<(), Error> {
        (**self).delete(id).await
    }
}

/// HTTP implementation of [`ResourceApi`] for one resource type.
pub struct ResourceClient<R: Resource> {
    client: Client,
    base_url: Url,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> ResourceClient<R> {
    /// Create a client for the collection at `config`'s base URL.
    ///
    /// Every request carries `Content-Type: application/json`.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            _resource: PhantomData,
        })
    }

    fn collection_url(&self) -> Result<Url, Error> {
        Ok(self.base_url.join(R::COLLECTION)?)
    }

    fn item_url(&self, id: ResourceId) -> Result<Url, Error> {
        Ok(self.base_url.join(&format!("{}/{}", R::COLLECTION, id))?)
    }
}

/// Turn a non-2xx response into an error, keeping the body for the log.
async fn expect_success(response: reqwest::Response) -> Result<reqwest::Response, Error> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().clone();
    let body = response.text().await.unwrap_or_default();

    Err(Error::Status { status, url, body })
}

#[async_trait]
impl<R: Resource> ResourceApi<R> for ResourceClient<R> {
    async fn list_all(&self) -> Result<Vec<R>, Error> {
        let response = self.client.get(self.collection_url()?).send().await?;
        let items = expect_success(response).await?.json().await?;
        Ok(items)
    }

    async fn get_by_id(&self, id: ResourceId) -> Result<R, Error> {
        let response = self.client.get(self.item_url(id)?).send().await?;
        let item = expect_success(response).await?.json().await?;
        Ok(item)
    }

    async fn create(&self, form: &R::Form) -> Result<R, Error> {
        let response = self
            .client
            .post(self.collection_url()?)
            .json(form)
            .send()
            .await?;
        let created = expect_success(response).await?.json().await?;
        Ok(created)
    }

    async fn update(&self, id: ResourceId, form: &R::Form) -> Result<(), Error> {
        // The backend expects the id merged into the body: {id, ...form}.
        let mut body = serde_json::to_value(form)?;
        let map = body.as_object_mut().ok_or_else(|| Error::InvalidBody {
            message: "form payload must serialize to a JSON object".to_string(),
        })?;
        map.insert("id".to_string(), serde_json::Value::from(id));

        let response = self
            .client
            .put(self.item_url(id)?)
            .json(&body)
            .send()
            .await?;
        expect_success(response).await?;
        Ok(())
    }

    async fn delete(&self, id: ResourceId) -> Result<(), Error> {
        let response = self.client.delete(self.item_url(id)?).send().await?;
        expect_success(response).await?;
        Ok(())
    }
}
