//! Record store access.
//!
//! The store is a plain JSON CRUD service:
//!
//! - `GET {store}/store` returns the catalog
//! - `GET {store}/users/{id}` returns a user record
//! - `PATCH {store}/users/{id}` with `{"bag": [...]}` replaces a user's bag
//!
//! No retries, no caching, no timeouts beyond the HTTP client defaults.

mod client;
pub mod types;

pub use client::HttpStoreClient;
pub use types::UserRecord;

use async_trait::async_trait;
use hollixton_core::{Account, Bag, Email, Item};
use secrecy::SecretString;
use thiserror::Error;

/// Errors talking to the record store.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("record store returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not the expected JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// An endpoint URL could not be built.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The store has no such record.
    #[error("not found: {0}")]
    NotFound(String),
}

/// Errors from [`StoreApi::authenticate`].
#[derive(Debug, Error)]
pub enum SignInError {
    /// Unknown user or wrong password. Deliberately indistinguishable.
    #[error("Username/password invalid")]
    InvalidCredentials,

    #[error(transparent)]
    Remote(#[from] RemoteError),
}

/// Operations the storefront needs from the record store.
#[async_trait]
pub trait StoreApi: Send + Sync {
    /// The full catalog, in store order.
    async fn fetch_catalog(&self) -> Result<Vec<Item>, RemoteError>;

    /// The user record with id `id`.
    async fn fetch_user(&self, id: &Email) -> Result<UserRecord, RemoteError>;

    /// Replace the bag stored on `id`'s record.
    async fn update_bag(&self, id: &Email, bag: &Bag) -> Result<(), RemoteError>;

    /// The user's account with the password stripped.
    async fn fetch_account(&self, id: &Email) -> Result<Account, RemoteError> {
        Ok(self.fetch_user(id).await?.into_account())
    }

    /// Fetch the user and compare the password.
    async fn authenticate(
        &self,
        email: &Email,
        password: &SecretString,
    ) -> Result<Account, SignInError> {
        let record = match self.fetch_user(email).await {
            Ok(record) => record,
            Err(RemoteError::NotFound(_)) => return Err(SignInError::InvalidCredentials),
            Err(e) => return Err(e.into()),
        };

        if record.password_matches(password) {
            Ok(record.into_account())
        } else {
            Err(SignInError::InvalidCredentials)
        }
    }
}
