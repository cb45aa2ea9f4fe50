//! Application state shared across handlers.

use std::sync::Arc;

use crate::cart::CartStore;
use crate::catalog::CatalogClient;
use crate::config::StorefrontConfig;
use crate::listing::ListingTracker;
use crate::loading::Loader;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. It is the sole owner of the
/// page-session state: the cart, the active category, and the loading
/// gauge. Nothing else may mutate those directly.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogClient,
    cart: CartStore,
    listing: ListingTracker,
    loader: Arc<Loader>,
}

impl AppState {
    /// Create a new application state from configuration.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let loader = Arc::new(Loader::new());
        let catalog = CatalogClient::new(&config.catalog, Arc::clone(&loader));

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                cart: CartStore::new(),
                listing: ListingTracker::new(),
                loader,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog API client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }

    /// Get a reference to the listing tracker.
    #[must_use]
    pub fn listing(&self) -> &ListingTracker {
        &self.inner.listing
    }

    /// Get a reference to the shared loading indicator gauge.
    #[must_use]
    pub fn loader(&self) -> &Loader {
        &self.inner.loader
    }
}
