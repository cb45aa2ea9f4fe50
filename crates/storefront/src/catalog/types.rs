//! Catalog domain types and upstream wire shapes.
//!
//! The upstream API is loosely shaped: the listing array arrives under
//! either `plants` or `data`, ids and prices may be numbers or strings, and
//! optional fields go missing. Everything is normalized into one canonical
//! shape here, immediately after deserialization, so the rest of the crate
//! never sees the raw envelopes.

use greengrove_core::{CategoryId, PlantId, Price};
use serde::Deserialize;
use thiserror::Error;

/// Display label for the synthetic "all categories" entry.
pub const ALL_TREES_LABEL: &str = "All Trees";

// =============================================================================
// Category Filter
// =============================================================================

/// The category selected for filtering the listing.
///
/// `All` is the synthetic sentinel meaning "no filter"; it round-trips
/// through the string `"all"` in URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Id(CategoryId),
}

/// Error parsing a category filter from its URL form.
#[derive(Debug, Error)]
#[error("invalid category filter: {0:?}")]
pub struct ParseCategoryFilterError(String);

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Id(id) => write!(f, "{id}"),
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = ParseCategoryFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        s.parse::<CategoryId>()
            .map(Self::Id)
            .map_err(|_| ParseCategoryFilterError(s.to_string()))
    }
}

// =============================================================================
// Domain Types
// =============================================================================

/// A catalog category, including the synthetic "all" entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub filter: CategoryFilter,
    pub name: String,
}

impl Category {
    /// The synthetic head entry meaning "no filter".
    #[must_use]
    pub fn all_trees() -> Self {
        Self {
            filter: CategoryFilter::All,
            name: ALL_TREES_LABEL.to_string(),
        }
    }
}

/// A purchasable catalog item. Immutable once fetched; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Plant {
    pub id: PlantId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: Price,
}

// =============================================================================
// Wire Envelopes
// =============================================================================

/// `GET /categories` response body.
#[derive(Debug, Deserialize)]
pub(crate) struct CategoriesEnvelope {
    #[serde(default)]
    pub categories: Vec<CategoryRecord>,
}

/// One raw category record from the upstream API.
#[derive(Debug, Deserialize)]
pub(crate) struct CategoryRecord {
    pub id: CategoryId,
    #[serde(rename = "category")]
    pub name: String,
}

impl From<CategoryRecord> for Category {
    fn from(record: CategoryRecord) -> Self {
        Self {
            filter: CategoryFilter::Id(record.id),
            name: record.name,
        }
    }
}

/// Listing response body. The item array arrives under one of two
/// differently-named fields depending on the endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct ListingEnvelope {
    plants: Option<Vec<Plant>>,
    data: Option<Vec<Plant>>,
}

impl ListingEnvelope {
    /// Normalize into one canonical sequence: `plants` if present, else
    /// `data`, else empty. An empty sequence is a valid zero-results
    /// response, not an error.
    pub fn into_plants(self) -> Vec<Plant> {
        self.plants.or(self.data).unwrap_or_default()
    }
}

/// `GET /plant/{id}` response body.
#[derive(Debug, Deserialize)]
pub(crate) struct PlantEnvelope {
    pub plant: Option<Plant>,
}
