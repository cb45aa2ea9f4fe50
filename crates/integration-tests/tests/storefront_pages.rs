//! Full HTTP round trips through the storefront app, with the upstream
//! catalog API stubbed in-process.

#![allow(clippy::unwrap_used)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::{Json, Router, extract::Path, http::StatusCode, routing::get};
use serde_json::json;

use greengrove_integration_tests::{categories_json, config_for, plant_json, spawn};
use greengrove_storefront::state::AppState;

/// Spin up the storefront app backed by the given catalog stub.
async fn spawn_app(stub: Router) -> SocketAddr {
    let stub_addr = spawn(stub).await;
    let state = AppState::new(config_for(stub_addr));
    spawn(greengrove_storefront::app(state)).await
}

/// A stub serving two categories and one oak under the `plants` field.
fn happy_stub() -> Router {
    Router::new()
        .route("/categories", get(|| async { Json(categories_json()) }))
        .route(
            "/plants",
            get(|| async { Json(json!({ "plants": [plant_json(7, "Oak", "Shade Trees", 150)] })) }),
        )
        .route(
            "/category/{id}",
            get(|| async {
                Json(json!({ "data": [plant_json(12, "Magnolia", "Flowering Trees", 95)] }))
            }),
        )
        .route(
            "/plant/{id}",
            get(|| async { Json(json!({ "plant": plant_json(7, "Oak", "Shade Trees", 150) })) }),
        )
}

#[tokio::test]
async fn home_page_renders_rail_grid_and_cart() {
    let app = spawn_app(happy_stub()).await;

    let body = reqwest::get(format!("http://{app}/"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    // Synthetic sentinel first, highlighted by default
    assert!(body.contains("All Trees"));
    assert!(body.contains("category-btn-active"));
    // The one listed plant, with the fixed currency prefix
    assert!(body.contains("Oak"));
    assert!(body.contains("৳150"));
    // Empty cart panel
    assert!(body.contains("৳0"));
}

#[tokio::test]
async fn empty_listing_renders_exactly_one_no_trees_message() {
    let stub = Router::new()
        .route("/categories", get(|| async { Json(categories_json()) }))
        .route("/plants", get(|| async { Json(json!({ "plants": [] })) }));
    let app = spawn_app(stub).await;

    let body = reqwest::get(format!("http://{app}/"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert_eq!(body.matches("No trees found.").count(), 1);
    assert_eq!(body.matches("card-title").count(), 0);
}

#[tokio::test]
async fn failed_listing_renders_cleared_grid_without_no_trees_message() {
    let stub = Router::new()
        .route("/categories", get(|| async { Json(categories_json()) }))
        .route(
            "/plants",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
    let app = spawn_app(stub).await;

    let response = reqwest::get(format!("http://{app}/")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body = response.text().await.unwrap();
    // Failure is not the zero-results state
    assert_eq!(body.matches("No trees found.").count(), 0);
    assert_eq!(body.matches("card-title").count(), 0);
}

#[tokio::test]
async fn category_selection_refilters_and_moves_highlight() {
    let app = spawn_app(happy_stub()).await;

    let body = reqwest::get(format!("http://{app}/plants?category=2"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    // Filtered grid (the `data` field spelling)
    assert!(body.contains("Magnolia"));
    assert!(!body.contains("Oak"));
    // Out-of-band rail re-render with the selected button highlighted
    assert!(body.contains("hx-swap-oob"));
    let highlighted = body
        .split("category-btn-active")
        .next()
        .unwrap();
    assert!(highlighted.contains("category=all"));
    assert_eq!(body.matches("category-btn-active").count(), 1);
}

#[tokio::test]
async fn superseded_listing_response_is_discarded_not_swapped() {
    // Category 1 answers slowly; a switch to category 2 lands first
    let stub = Router::new()
        .route("/categories", get(|| async { Json(categories_json()) }))
        .route(
            "/category/{id}",
            get(|Path(id): Path<i32>| async move {
                if id == 1 {
                    tokio::time::sleep(Duration::from_millis(400)).await;
                    Json(json!({ "plants": [plant_json(7, "Oak", "Shade Trees", 150)] }))
                } else {
                    Json(json!({ "data": [plant_json(12, "Magnolia", "Flowering Trees", 95)] }))
                }
            }),
        );
    let app = spawn_app(stub).await;
    let client = reqwest::Client::new();

    let slow = tokio::spawn({
        let client = client.clone();
        async move {
            client
                .get(format!("http://{app}/plants?category=1"))
                .send()
                .await
        }
    });
    // Let the slow fetch take its ticket before superseding it
    tokio::time::sleep(Duration::from_millis(100)).await;

    let fast = client
        .get(format!("http://{app}/plants?category=2"))
        .send()
        .await
        .unwrap();
    assert_eq!(fast.status(), reqwest::StatusCode::OK);
    assert!(fast.text().await.unwrap().contains("Magnolia"));

    // The superseded response must be a no-swap 204, never a late redraw
    let slow = slow.await.unwrap().unwrap();
    assert_eq!(slow.status(), reqwest::StatusCode::NO_CONTENT);
    let stale_body = slow.text().await.unwrap();
    assert!(stale_body.is_empty());
}

#[tokio::test]
async fn loader_gauge_is_idle_once_the_page_settles() {
    let stub_addr = spawn(happy_stub()).await;
    let state = AppState::new(config_for(stub_addr));
    let app = spawn(greengrove_storefront::app(state.clone())).await;

    let response = reqwest::get(format!("http://{app}/")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert!(!state.loader().is_visible());
}

#[tokio::test]
async fn invalid_category_param_is_a_bad_request() {
    let app = spawn_app(happy_stub()).await;

    let response = reqwest::get(format!("http://{app}/plants?category=flowers"))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn modal_fragment_carries_detail_labels() {
    let app = spawn_app(happy_stub()).await;

    let body = reqwest::get(format!("http://{app}/plants/7/modal"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains("Category: Shade Trees"));
    assert!(body.contains("Price: ৳150"));
}

#[tokio::test]
async fn failed_detail_fetch_does_not_open_modal() {
    let stub = Router::new().route(
        "/plant/{id}",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let app = spawn_app(stub).await;

    let response = reqwest::get(format!("http://{app}/plants/7/modal"))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn adding_twice_merges_lines_and_sums_total() {
    let app = spawn_app(happy_stub()).await;
    let client = reqwest::Client::new();

    let add = [("id", "7"), ("name", "Oak"), ("price", "150")];
    client
        .post(format!("http://{app}/cart/add"))
        .form(&add)
        .send()
        .await
        .unwrap();
    let body = client
        .post(format!("http://{app}/cart/add"))
        .form(&add)
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    // One merged line at quantity 2, total 300, badge at 2 units
    assert_eq!(body.matches("class=\"cart-row\"").count(), 1);
    assert!(body.contains("&times; 2"));
    assert!(body.contains("৳300"));
    assert!(body.contains(r#"<span id="cart-count" class="cart-count">2</span>"#));
}

#[tokio::test]
async fn removing_a_line_restores_the_prior_total() {
    let app = spawn_app(happy_stub()).await;
    let client = reqwest::Client::new();

    client
        .post(format!("http://{app}/cart/add"))
        .form(&[("id", "1"), ("name", "Maple"), ("price", "100")])
        .send()
        .await
        .unwrap();
    client
        .post(format!("http://{app}/cart/add"))
        .form(&[("id", "2"), ("name", "Fern"), ("price", "50")])
        .send()
        .await
        .unwrap();

    let body = client
        .post(format!("http://{app}/cart/remove"))
        .form(&[("id", "1")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains("৳50"));
    assert!(!body.contains("Maple"));
}

#[tokio::test]
async fn removing_an_unknown_id_is_a_noop() {
    let app = spawn_app(happy_stub()).await;
    let client = reqwest::Client::new();

    client
        .post(format!("http://{app}/cart/add"))
        .form(&[("id", "7"), ("name", "Oak"), ("price", "150")])
        .send()
        .await
        .unwrap();

    let response = client
        .post(format!("http://{app}/cart/remove"))
        .form(&[("id", "404")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body = response.text().await.unwrap();
    assert!(body.contains("Oak"));
    assert!(body.contains("৳150"));
}

#[tokio::test]
async fn cart_panel_fragment_reflects_current_lines() {
    let app = spawn_app(happy_stub()).await;
    let client = reqwest::Client::new();

    client
        .post(format!("http://{app}/cart/add"))
        .form(&[("id", "7"), ("name", "Oak"), ("price", "150")])
        .send()
        .await
        .unwrap();

    let body = client
        .get(format!("http://{app}/cart"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains("Oak"));
    assert!(body.contains("৳150"));
}

#[tokio::test]
async fn health_endpoint_is_alive() {
    let app = spawn_app(happy_stub()).await;

    let body = reqwest::get(format!("http://{app}/health"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "ok");
}
