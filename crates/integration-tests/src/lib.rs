//! Integration tests for Greengrove.
//!
//! The upstream catalog API is stubbed in-process: each test builds an axum
//! router serving fixture JSON, binds it to an ephemeral port, and points
//! the storefront's catalog client at it. No network access and no running
//! external services are required.
//!
//! # Test Categories
//!
//! - `catalog_client` - Catalog client behavior against the stub API
//! - `storefront_pages` - Full HTTP round trips through the storefront app

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use serde_json::{Value, json};

use greengrove_storefront::config::{CatalogConfig, StorefrontConfig};

/// Bind a router to an ephemeral local port and serve it in the background.
///
/// # Panics
///
/// Panics if the listener cannot bind; test-only code.
#[allow(clippy::unwrap_used)]
pub async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Storefront configuration pointed at a stub catalog API.
#[must_use]
#[allow(clippy::missing_panics_doc, clippy::unwrap_used)]
pub fn config_for(stub: SocketAddr) -> StorefrontConfig {
    StorefrontConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        catalog: CatalogConfig {
            base_url: format!("http://{stub}"),
            timeout: Duration::from_secs(5),
        },
    }
}

/// Fixture: one plant record in the upstream wire shape.
#[must_use]
pub fn plant_json(id: i32, name: &str, category: &str, price: i64) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("{name} is a hardy, fast-growing specimen suited to most gardens."),
        "image": format!("https://img.example/{id}.png"),
        "category": category,
        "price": price,
    })
}

/// Fixture: the categories endpoint body.
#[must_use]
pub fn categories_json() -> Value {
    json!({
        "categories": [
            { "id": 1, "category": "Shade Trees" },
            { "id": 2, "category": "Flowering Trees" },
        ]
    })
}
