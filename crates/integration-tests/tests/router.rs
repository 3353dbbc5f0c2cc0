//! HTTP surface, driven in-process with `tower::ServiceExt::oneshot`.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use hollixton_integration_tests::{MemoryStore, NICOLAS, PASSWORD, bag_of, fresh_marker, wait_for};
use hollixton_storefront::routes;
use hollixton_storefront::shop::Shop;
use hollixton_storefront::state::AppState;
use serde_json::Value;
use tower::ServiceExt;

async fn app(name: &str, store: MemoryStore) -> (Router, Shop) {
    let shop = Shop::start(Arc::new(store), fresh_marker(name).await);
    wait_for(&shop, |state| !state.catalog().is_empty()).await;
    (routes::app(AppState::new(shop.clone())), shop)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Option<String>, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|value| value.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, location, String::from_utf8(bytes.to_vec()).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str) -> Request<Body> {
    Request::post(uri).body(Body::empty()).unwrap()
}

fn form(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let (app, _) = app("health", MemoryStore::sample()).await;
    let (status, _, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_header_icons_are_served() {
    let (app, _) = app("assets", MemoryStore::sample()).await;
    for icon in ["search", "user", "bag"] {
        let response = app
            .clone()
            .oneshot(get(&format!("/assets/icons/{icon}.svg")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{icon}");
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/svg+xml"
        );
    }

    let (status, _, _) = send(&app, get("/assets/icons/missing.svg")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_index_serves_full_page() {
    let (app, _) = app("index", MemoryStore::sample()).await;
    let (status, _, body) = send(&app, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("<div id=\"app\">"));
    assert!(body.contains("Floral Summer Dress"));
    assert!(body.contains("data-a_click=\"tab:sale\""));
}

#[tokio::test]
async fn test_action_returns_fragment() {
    let (app, _) = app("action", MemoryStore::sample()).await;
    let (status, _, body) = send(&app, post("/actions/tab:sale")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("<div class=\"app\">"));
    assert!(body.contains("data-key=\"item-2\""));
    assert!(!body.contains("data-key=\"item-1\""));
}

#[tokio::test]
async fn test_percent_encoded_search_action() {
    let (app, shop) = app("encoded", MemoryStore::sample()).await;
    let (status, _, _) = send(&app, post("/actions/search%3Adenim%20jacket")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(shop.state().await.unwrap().search(), "denim jacket");
}

#[tokio::test]
async fn test_unknown_action_is_bad_request() {
    let (app, _) = app("unknown-action", MemoryStore::sample()).await;
    let (status, _, body) = send(&app, post("/actions/dance")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("unknown action"));
}

#[tokio::test]
async fn test_search_form_redirects_and_filters() {
    let (app, _) = app("search", MemoryStore::sample()).await;
    send(&app, post("/actions/tab:girls")).await;

    let (status, location, _) = send(&app, form("/search", "search=zz")).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/"));

    let (_, _, body) = send(&app, get("/")).await;
    assert!(body.contains("No products matched your search."));
    assert!(body.contains("Current search: zz"));
}

#[tokio::test]
async fn test_sign_in_mismatch_shows_notice() {
    let (app, shop) = app("sign-in-bad", MemoryStore::sample()).await;
    let (status, _, body) = send(
        &app,
        form("/sign-in", "email=nicolas%40email.com&password=nope"),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.contains("Username/password invalid"));
    assert!(!shop.state().await.unwrap().is_signed_in());
}

#[tokio::test]
async fn test_sign_in_success_redirects() {
    let store = MemoryStore::sample();
    store.add_user(NICOLAS, "Nicolas", "Marcora", PASSWORD, Some(bag_of(2, 2)));
    let (app, shop) = app("sign-in-ok", store).await;

    let (status, location, _) = send(
        &app,
        form("/sign-in", &format!("email=nicolas%40email.com&password={PASSWORD}")),
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/"));
    assert!(shop.state().await.unwrap().is_signed_in());

    let (_, _, body) = send(&app, post("/actions/modal:bag")).await;
    assert!(body.contains("Pay now: £30.00"));
    assert!(body.contains("(x2)"));

    send(&app, post("/actions/sign-out")).await;
}

#[tokio::test]
async fn test_snapshot_is_json_tree() {
    let (app, _) = app("snapshot", MemoryStore::sample()).await;
    send(&app, post("/actions/modal:search")).await;

    let (status, _, body) = send(&app, get("/snapshot")).await;
    assert_eq!(status, StatusCode::OK);

    let snapshot: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(snapshot["root"]["tag"], "div");
    let children = snapshot["root"]["children"].as_array().unwrap();
    assert_eq!(children.len(), 4);
    assert_eq!(children[3]["events"]["click"], "close");
}
