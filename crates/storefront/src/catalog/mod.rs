//! Catalog API client.
//!
//! # Architecture
//!
//! - Plain REST over `reqwest`; the upstream is source of truth, no local
//!   sync
//! - Response shapes are normalized at this boundary (see [`types`])
//! - In-memory caching via `moka` for API responses (5 minute TTL)
//! - Every request holds a scoped loader guard, so the shared loading
//!   indicator is released on success and failure alike
//!
//! # Example
//!
//! ```rust,ignore
//! use greengrove_storefront::catalog::{CatalogClient, CategoryFilter};
//!
//! let client = CatalogClient::new(&config.catalog, loader);
//!
//! let categories = client.list_categories().await?;
//! let plants = client.list_plants(CategoryFilter::All).await?;
//! let plant = client.get_plant(plants[0].id).await?;
//! ```

mod cache;
pub mod types;

pub use types::{ALL_TREES_LABEL, Category, CategoryFilter, ParseCategoryFilterError, Plant};

use std::sync::Arc;
use std::time::Duration;

use greengrove_core::PlantId;
use moka::future::Cache;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::CatalogConfig;
use crate::loading::Loader;

use cache::CacheValue;
use types::{CategoriesEnvelope, ListingEnvelope, PlantEnvelope};

/// Time-to-live for cached catalog responses.
const CACHE_TTL: Duration = Duration::from_secs(300);

/// Errors that can occur when talking to the catalog API.
///
/// Policy-wise these are all one kind of failure: callers log them and fall
/// back to the prior (or empty) UI state, with no retry.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP transport failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream returned a non-success status.
    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),

    /// Response body did not match the expected shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

// =============================================================================
// CatalogClient
// =============================================================================

/// Client for the upstream plant catalog API.
///
/// Read-only access to categories, listings, and item detail. Responses are
/// cached for 5 minutes.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
    cache: Cache<String, CacheValue>,
    loader: Arc<Loader>,
}

impl CatalogClient {
    /// Create a new catalog API client.
    #[must_use]
    pub fn new(config: &CatalogConfig, loader: Arc<Loader>) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(CACHE_TTL)
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.trim_end_matches('/').to_string(),
                timeout: config.timeout,
                cache,
                loader,
            }),
        }
    }

    /// The loading indicator gauge driven by this client's requests.
    #[must_use]
    pub fn loader(&self) -> &Loader {
        &self.inner.loader
    }

    /// Execute a GET request and decode the JSON body.
    ///
    /// The loader guard spans the whole request, so the indicator is
    /// released whichever way the call settles.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = format!("{}{path}", self.inner.base_url);
        let _loading = self.inner.loader.acquire();

        let response = self
            .inner
            .client
            .get(&url)
            .timeout(self.inner.timeout)
            .send()
            .await?;

        let status = response.status();

        // Read the body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "catalog API returned non-success status"
            );
            return Err(CatalogError::Status(status));
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "failed to parse catalog API response"
            );
            CatalogError::Parse(e)
        })
    }

    /// List all categories, with the synthetic "All Trees" entry prepended
    /// at the head.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the body is malformed.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        let cache_key = "categories".to_string();

        if let Some(CacheValue::Categories(categories)) = self.inner.cache.get(&cache_key).await {
            debug!("cache hit for categories");
            return Ok(categories);
        }

        let envelope: CategoriesEnvelope = self.get_json("/categories").await?;

        let mut categories = vec![Category::all_trees()];
        categories.extend(envelope.categories.into_iter().map(Category::from));

        self.inner
            .cache
            .insert(cache_key, CacheValue::Categories(categories.clone()))
            .await;

        Ok(categories)
    }

    /// List plants, unfiltered for [`CategoryFilter::All`] or filtered by
    /// category id otherwise.
    ///
    /// A zero-item response is `Ok(vec![])`, distinct from a fetch failure;
    /// the caller renders an explicit "no trees found" state for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the body is malformed.
    #[instrument(skip(self), fields(filter = %filter))]
    pub async fn list_plants(&self, filter: CategoryFilter) -> Result<Vec<Plant>, CatalogError> {
        let cache_key = format!("plants:{filter}");

        if let Some(CacheValue::Plants(plants)) = self.inner.cache.get(&cache_key).await {
            debug!("cache hit for plants");
            return Ok(plants);
        }

        let path = match filter {
            CategoryFilter::All => "/plants".to_string(),
            CategoryFilter::Id(id) => format!("/category/{id}"),
        };

        let envelope: ListingEnvelope = self.get_json(&path).await?;
        let plants = envelope.into_plants();

        self.inner
            .cache
            .insert(cache_key, CacheValue::Plants(plants.clone()))
            .await;

        Ok(plants)
    }

    /// Fetch full detail for a single plant by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the plant is missing or the API request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_plant(&self, id: PlantId) -> Result<Plant, CatalogError> {
        let cache_key = format!("plant:{id}");

        if let Some(CacheValue::Plant(plant)) = self.inner.cache.get(&cache_key).await {
            debug!("cache hit for plant");
            return Ok(*plant);
        }

        let envelope: PlantEnvelope = self.get_json(&format!("/plant/{id}")).await?;

        let plant = envelope
            .plant
            .ok_or_else(|| CatalogError::NotFound(format!("plant {id}")))?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Plant(Box::new(plant.clone())))
            .await;

        Ok(plant)
    }
}
