//! HTTP implementation of [`StoreApi`] using `reqwest`.

use std::sync::Arc;

use async_trait::async_trait;
use hollixton_core::{Bag, Email, Item};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use super::types::BagPatch;
use super::{RemoteError, StoreApi, UserRecord};

/// Client for the record store.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpStoreClient {
    inner: Arc<HttpStoreClientInner>,
}

#[derive(Debug)]
struct HttpStoreClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpStoreClient {
    /// Create a client for the store at `base_url`.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            inner: Arc::new(HttpStoreClientInner {
                client: reqwest::Client::new(),
                base_url,
            }),
        }
    }

    /// `{base}/{path}`, keeping any path prefix on the base URL.
    fn endpoint(&self, path: &str) -> Result<Url, RemoteError> {
        let base = self.inner.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    fn user_endpoint(&self, id: &Email) -> Result<Url, RemoteError> {
        self.endpoint(&format!("users/{}", urlencoding::encode(id.as_str())))
    }

    /// Send `request` and read the body, mapping 404 and other failures.
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<String, RemoteError> {
        let response = request.send().await?;
        let status = response.status();
        let url = response.url().clone();

        // Body as text first for better error diagnostics
        let body = response.text().await?;

        if status == StatusCode::NOT_FOUND {
            return Err(RemoteError::NotFound(url.path().to_string()));
        }
        if !status.is_success() {
            tracing::warn!(
                status = %status,
                url = %url,
                body = %body.chars().take(500).collect::<String>(),
                "Record store returned non-success status"
            );
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        Ok(body)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, RemoteError> {
        let body = self.execute(self.inner.client.get(url)).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl StoreApi for HttpStoreClient {
    #[instrument(skip(self))]
    async fn fetch_catalog(&self) -> Result<Vec<Item>, RemoteError> {
        let items: Vec<Item> = self.get_json(self.endpoint("store")?).await?;
        debug!(count = items.len(), "Fetched catalog");
        Ok(items)
    }

    #[instrument(skip(self, id), fields(user = %id))]
    async fn fetch_user(&self, id: &Email) -> Result<UserRecord, RemoteError> {
        self.get_json(self.user_endpoint(id)?).await
    }

    #[instrument(skip(self, id, bag), fields(user = %id, entries = bag.len()))]
    async fn update_bag(&self, id: &Email, bag: &Bag) -> Result<(), RemoteError> {
        let request = self
            .inner
            .client
            .patch(self.user_endpoint(id)?)
            .json(&BagPatch { bag });
        self.execute(request).await?;
        debug!("Bag synced");
        Ok(())
    }
}
