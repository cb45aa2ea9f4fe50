//! Greengrove Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod listing;
pub mod loading;
pub mod routes;
pub mod state;

use axum::Router;

use crate::state::AppState;

/// Build the storefront router on top of an already constructed state.
///
/// Used by `main` and by the integration tests, which point the state's
/// catalog client at an in-process stub API.
#[must_use]
pub fn app(state: AppState) -> Router {
    routes::routes().with_state(state)
}
