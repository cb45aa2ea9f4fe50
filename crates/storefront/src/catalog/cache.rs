//! Cache types for catalog API responses.

use crate::catalog::types::{Category, Plant};

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Categories(Vec<Category>),
    Plants(Vec<Plant>),
    Plant(Box<Plant>),
}
