//! Application state shared across handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::DEFAULT_ASSETS_DIR;
use crate::shop::Shop;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// running shop.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    shop: Shop,
    assets_dir: PathBuf,
}

impl AppState {
    /// Create a new application state around an already started shop,
    /// serving the icons shipped with the crate.
    #[must_use]
    pub fn new(shop: Shop) -> Self {
        Self::with_assets_dir(shop, DEFAULT_ASSETS_DIR)
    }

    /// Like [`AppState::new`], serving `/assets` from `assets_dir`.
    #[must_use]
    pub fn with_assets_dir(shop: Shop, assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                shop,
                assets_dir: assets_dir.into(),
            }),
        }
    }

    /// Get a reference to the shop handle.
    #[must_use]
    pub fn shop(&self) -> &Shop {
        &self.inner.shop
    }

    /// Directory served under `/assets`.
    #[must_use]
    pub fn assets_dir(&self) -> &Path {
        &self.inner.assets_dir
    }
}
