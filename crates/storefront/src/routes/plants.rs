//! Plant listing and detail route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use greengrove_core::PlantId;
use serde::Deserialize;
use tracing::instrument;

use crate::catalog::{Category, CategoryFilter, Plant};
use crate::error::AppError;
use crate::filters;
use crate::state::AppState;

/// Plant display data for templates.
#[derive(Clone)]
pub struct PlantView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub category: String,
    /// Price with the currency prefix, for display.
    pub price_label: String,
    /// Bare numeric price, forwarded through the add-to-cart control.
    pub price_value: String,
}

/// Category button display data for templates.
#[derive(Clone)]
pub struct CategoryView {
    /// URL form of the filter (`all` or the numeric id).
    pub value: String,
    pub name: String,
    pub active: bool,
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&Plant> for PlantView {
    fn from(plant: &Plant) -> Self {
        Self {
            id: plant.id.to_string(),
            name: plant.name.clone(),
            description: plant.description.clone(),
            image: plant.image.clone(),
            category: plant.category.clone(),
            price_label: plant.price.to_string(),
            price_value: plant.price.amount().to_string(),
        }
    }
}

/// Project categories into buttons, highlighting the active filter.
pub fn category_views(categories: &[Category], active: CategoryFilter) -> Vec<CategoryView> {
    categories
        .iter()
        .map(|category| CategoryView {
            value: category.filter.to_string(),
            name: category.name.clone(),
            active: category.filter == active,
        })
        .collect()
}

/// Listing query parameters.
#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    pub category: Option<String>,
}

/// Listing fragment template: the grid plus an out-of-band category rail
/// re-render so the active highlight moves.
#[derive(Template, WebTemplate)]
#[template(path = "partials/listing.html")]
pub struct ListingTemplate {
    pub plants: Vec<PlantView>,
    pub fetch_failed: bool,
    pub categories: Vec<CategoryView>,
    /// When the category refetch failed, the rail is left untouched.
    pub show_rail: bool,
}

/// Plant detail modal fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/plant_modal.html")]
pub struct PlantModalTemplate {
    pub plant: PlantView,
}

/// Serve the listing grid for the selected category (HTMX).
///
/// Takes a fetch ticket before the request goes out; if a newer category
/// selection supersedes this one while it is in flight, the response is
/// discarded (204, no swap) so last-write-wins is explicit.
#[instrument(skip(state))]
pub async fn listing(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Response, AppError> {
    let filter = query
        .category
        .as_deref()
        .map(str::parse::<CategoryFilter>)
        .transpose()
        .map_err(|e| AppError::BadRequest(e.to_string()))?
        .unwrap_or_default();

    let ticket = state.listing().begin(filter);

    let plants_result = state.catalog().list_plants(filter).await;
    let categories_result = state.catalog().list_categories().await;

    if !state.listing().is_current(ticket) {
        tracing::debug!("discarding stale listing response");
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let (plants, fetch_failed) = match plants_result {
        Ok(plants) => (plants.iter().map(PlantView::from).collect(), false),
        Err(e) => {
            tracing::error!("Tree loading error: {e}");
            (Vec::new(), true)
        }
    };

    // A failed category refetch leaves the prior rail untouched
    let (categories, show_rail) = match categories_result {
        Ok(categories) => (category_views(&categories, filter), true),
        Err(e) => {
            tracing::error!("Category loading error: {e}");
            (Vec::new(), false)
        }
    };

    Ok(ListingTemplate {
        plants,
        fetch_failed,
        categories,
        show_rail,
    }
    .into_response())
}

/// Serve the plant detail modal fragment (HTMX).
///
/// On fetch failure the modal is simply not opened: log and return 204 so
/// nothing is swapped.
#[instrument(skip(state))]
pub async fn modal(State(state): State<AppState>, Path(id): Path<PlantId>) -> Response {
    match state.catalog().get_plant(id).await {
        Ok(plant) => PlantModalTemplate {
            plant: PlantView::from(&plant),
        }
        .into_response(),
        Err(e) => {
            tracing::error!("Modal loading error for plant {id}: {e}");
            StatusCode::NO_CONTENT.into_response()
        }
    }
}
