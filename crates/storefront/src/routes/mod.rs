//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                   - Full page of the current tree
//! GET  /snapshot           - Current tree as JSON
//! GET  /health             - Health check
//! GET  /assets/*           - Header icons
//!
//! POST /actions/{action}   - Apply a named action, returns the app fragment
//! POST /search             - Search form (303 to /)
//! POST /sign-in            - Sign-in form (303 to /, or the page with a notice)
//! ```

pub mod actions;
pub mod auth;
pub mod page;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::state::AppState;

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(page::index))
        .route("/snapshot", get(page::snapshot))
        .route("/actions/{action}", post(actions::dispatch))
        .route("/search", post(actions::search))
        .route("/sign-in", post(auth::sign_in))
}

/// The complete application: routes, health check, assets, tracing and
/// Sentry layers.
pub fn app(state: AppState) -> Router {
    let assets = ServeDir::new(state.assets_dir());
    Router::new()
        .route("/health", get(health))
        .nest_service("/assets", assets)
        .merge(routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
