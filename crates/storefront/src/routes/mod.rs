//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Listing (HTMX fragments)
//! GET  /plants?category=...    - Listing grid for a category (+ OOB rail)
//! GET  /plants/{id}/modal      - Plant detail modal fragment
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart panel fragment
//! POST /cart/add               - Add item (returns cart panel)
//! POST /cart/remove            - Remove item (returns cart panel)
//! ```

pub mod cart;
pub mod home;
pub mod plants;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Create the plant listing routes router.
pub fn plant_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(plants::listing))
        .route("/{id}/modal", get(plants::modal))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/health", get(health))
        .nest("/plants", plant_routes())
        .nest("/cart", cart_routes())
}
