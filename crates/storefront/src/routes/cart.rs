//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! Every mutation responds with the freshly rendered cart panel, a full
//! replacement of the panel element, so re-rendering is idempotent and the
//! displayed total is always recomputed from the current lines.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::IntoResponse};
use greengrove_core::{PlantId, Price};
use serde::Deserialize;
use tracing::instrument;

use crate::cart::{CartItemInput, CartLine, CartStore};
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    /// Unit price with the currency prefix.
    pub price: String,
    pub quantity: u32,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    /// Aggregate total with the currency prefix.
    pub total: String,
    /// Total units across all lines, for the count badge.
    pub count: u32,
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id.to_string(),
            name: line.name.clone(),
            price: line.price.to_string(),
            quantity: line.quantity,
        }
    }
}

impl From<&CartStore> for CartView {
    fn from(store: &CartStore) -> Self {
        Self {
            items: store.lines().iter().map(CartItemView::from).collect(),
            total: store.total().to_string(),
            count: store.unit_count(),
        }
    }
}

/// Add to cart form data, forwarded from the listing's add control.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub id: PlantId,
    pub name: String,
    pub price: Price,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub id: PlantId,
}

/// Cart panel fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_panel.html")]
pub struct CartPanelTemplate {
    pub cart: CartView,
}

/// Display the cart panel fragment.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    CartPanelTemplate {
        cart: CartView::from(state.cart()),
    }
}

/// Add one unit of an item to the cart (HTMX).
///
/// A repeated id bumps the existing line's quantity instead of adding a
/// second line.
#[instrument(skip(state))]
pub async fn add(State(state): State<AppState>, Form(form): Form<AddToCartForm>) -> impl IntoResponse {
    state.cart().add(CartItemInput {
        id: form.id,
        name: form.name,
        price: form.price,
    });

    CartPanelTemplate {
        cart: CartView::from(state.cart()),
    }
}

/// Remove a line from the cart (HTMX). Unknown ids are a no-op.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromCartForm>,
) -> impl IntoResponse {
    state.cart().remove(form.id);

    CartPanelTemplate {
        cart: CartView::from(state.cart()),
    }
}
