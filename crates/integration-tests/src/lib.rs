//! Integration test support for the Hollixton storefront.
//!
//! # Running Tests
//!
//! ```bash
//! # In-process tests (no network)
//! cargo test -p hollixton-integration-tests
//!
//! # Against a running record store
//! HOLLIXTON_STORE_URL=http://localhost:3000 cargo test -p hollixton-integration-tests -- --ignored
//! ```
//!
//! [`MemoryStore`] stands in for the record store so the shop runtime and
//! the router can be exercised without a server.

#![allow(clippy::missing_panics_doc, clippy::unwrap_used)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use hollixton_core::{Bag, Email, Item, ItemId};
use hollixton_storefront::remote::{RemoteError, StoreApi, UserRecord};
use hollixton_storefront::session::SessionMarker;
use hollixton_storefront::shop::{Shop, ShopState};
use rust_decimal::Decimal;
use secrecy::SecretString;

/// Email of the fixture customer.
pub const NICOLAS: &str = "nicolas@email.com";
/// Password of the fixture customer.
pub const PASSWORD: &str = "hunter2";

struct StoredUser {
    first_name: String,
    last_name: String,
    password: String,
    bag: Option<Bag>,
}

/// In-memory record store.
#[derive(Default)]
pub struct MemoryStore {
    catalog: Vec<Item>,
    fail_catalog: bool,
    users: Mutex<HashMap<String, StoredUser>>,
    bag_updates: Mutex<Vec<(Email, Bag)>>,
}

impl MemoryStore {
    /// The two-item catalog (item 1: Girls £20; item 2: Guys £30, on sale
    /// for £15) and one customer with an empty record bag.
    #[must_use]
    pub fn sample() -> Self {
        let store = Self {
            catalog: sample_catalog(),
            ..Self::default()
        };
        store.add_user(NICOLAS, "Nicolas", "Marcora", PASSWORD, None);
        store
    }

    /// A store whose catalog endpoint always fails.
    #[must_use]
    pub fn failing_catalog() -> Self {
        Self {
            fail_catalog: true,
            ..Self::sample()
        }
    }

    pub fn add_user(&self, email: &str, first: &str, last: &str, password: &str, bag: Option<Bag>) {
        self.users.lock().unwrap().insert(
            email.to_string(),
            StoredUser {
                first_name: first.to_string(),
                last_name: last.to_string(),
                password: password.to_string(),
                bag,
            },
        );
    }

    /// The bag currently stored on `email`'s record.
    #[must_use]
    pub fn stored_bag(&self, email: &str) -> Option<Bag> {
        self.users
            .lock()
            .unwrap()
            .get(email)
            .and_then(|user| user.bag.clone())
    }

    /// Every bag sync received, in arrival order.
    #[must_use]
    pub fn bag_updates(&self) -> Vec<(Email, Bag)> {
        self.bag_updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl StoreApi for MemoryStore {
    async fn fetch_catalog(&self) -> Result<Vec<Item>, RemoteError> {
        if self.fail_catalog {
            return Err(RemoteError::Status {
                status: 503,
                body: "unavailable".to_string(),
            });
        }
        Ok(self.catalog.clone())
    }

    async fn fetch_user(&self, id: &Email) -> Result<UserRecord, RemoteError> {
        let users = self.users.lock().unwrap();
        let user = users
            .get(id.as_str())
            .ok_or_else(|| RemoteError::NotFound(format!("/users/{id}")))?;
        Ok(UserRecord {
            id: id.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            password: SecretString::from(user.password.clone()),
            bag: user.bag.clone(),
        })
    }

    async fn update_bag(&self, id: &Email, bag: &Bag) -> Result<(), RemoteError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(id.as_str())
            .ok_or_else(|| RemoteError::NotFound(format!("/users/{id}")))?;
        user.bag = Some(bag.clone());
        self.bag_updates
            .lock()
            .unwrap()
            .push((id.clone(), bag.clone()));
        Ok(())
    }
}

/// Item 1: Girls £20. Item 2: Guys £30, discounted to £15.
#[must_use]
pub fn sample_catalog() -> Vec<Item> {
    serde_json::from_value(serde_json::json!([
        {
            "id": 1,
            "type": "Girls",
            "name": "Floral Summer Dress",
            "image": "https://img.hollixton.test/1.jpg",
            "price": 20,
            "discountedPrice": null,
            "dateEntered": "2021/01/01",
            "stock": 5
        },
        {
            "id": 2,
            "type": "Guys",
            "name": "Denim Jacket",
            "image": "https://img.hollixton.test/2.jpg",
            "price": 30,
            "discountedPrice": 15,
            "dateEntered": "2021-01-02",
            "stock": 3
        }
    ]))
    .unwrap()
}

/// A bag holding `quantity` of `id`.
#[must_use]
pub fn bag_of(id: i64, quantity: u32) -> Bag {
    (0..quantity).fold(Bag::new(), |bag, _| bag.with_added(ItemId::new(id)))
}

/// Price helper for assertions.
#[must_use]
pub fn pounds(amount: i64) -> Decimal {
    Decimal::new(amount, 0)
}

/// A marker file path unique to this process and `name`, removed first.
pub async fn fresh_marker(name: &str) -> SessionMarker {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let path: PathBuf = std::env::temp_dir().join(format!(
        "hollixton-it-{}-{n}-{name}.json",
        std::process::id()
    ));
    let marker = SessionMarker::new(path);
    marker.clear().await.unwrap();
    marker
}

/// Poll the shop until `predicate` holds, panicking after two seconds.
pub async fn wait_for(shop: &Shop, predicate: impl Fn(&ShopState) -> bool) -> ShopState {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    loop {
        let state = shop.state().await.unwrap();
        if predicate(&state) {
            return state;
        }
        assert!(
            tokio::time::Instant::now() < deadline,
            "timed out waiting for shop state: {state:?}"
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

/// Poll `condition` until it holds, panicking after two seconds.
pub async fn eventually(condition: impl Fn() -> bool) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    while !condition() {
        assert!(
            tokio::time::Instant::now() < deadline,
            "timed out waiting for condition"
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
