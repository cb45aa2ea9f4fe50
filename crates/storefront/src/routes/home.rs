//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::state::AppState;

use super::cart::CartView;
use super::plants::{CategoryView, PlantView, category_views};

/// Home page template: category rail, listing grid, cart panel, loader,
/// and the (initially closed) detail dialog.
#[derive(Template, WebTemplate)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub categories: Vec<CategoryView>,
    pub plants: Vec<PlantView>,
    pub fetch_failed: bool,
    pub cart: CartView,
}

/// Display the home page.
///
/// Either fetch may fail independently: a failed category fetch leaves the
/// rail empty, a failed listing fetch leaves the grid cleared. Neither
/// aborts the page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let active = state.listing().active();

    let categories = match state.catalog().list_categories().await {
        Ok(categories) => category_views(&categories, active),
        Err(e) => {
            tracing::error!("Category loading error: {e}");
            Vec::new()
        }
    };

    let (plants, fetch_failed) = match state.catalog().list_plants(active).await {
        Ok(plants) => (plants.iter().map(PlantView::from).collect(), false),
        Err(e) => {
            tracing::error!("Tree loading error: {e}");
            (Vec::new(), true)
        }
    };

    HomeTemplate {
        categories,
        plants,
        fetch_failed,
        cart: CartView::from(state.cart()),
    }
}
