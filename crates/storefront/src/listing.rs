//! Active-category state and the stale-response guard.
//!
//! The original page fired a fresh listing fetch on every category click and
//! let whichever response landed last overwrite the container. Here
//! last-write-wins is explicit: every listing fetch takes a ticket from
//! [`ListingTracker`], and a response whose ticket is no longer current is
//! discarded instead of swapped.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::catalog::CategoryFilter;

/// Ticket identifying one listing fetch. Only the most recently issued
/// ticket is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Tracks the active category and the generation of the newest listing
/// fetch.
#[derive(Debug)]
pub struct ListingTracker {
    active: Mutex<CategoryFilter>,
    generation: AtomicU64,
}

impl Default for ListingTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingTracker {
    /// Start with the "all categories" sentinel active.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: Mutex::new(CategoryFilter::All),
            generation: AtomicU64::new(0),
        }
    }

    /// Record a new listing fetch: the given filter becomes active and the
    /// returned ticket supersedes all earlier ones.
    pub fn begin(&self, filter: CategoryFilter) -> FetchTicket {
        *self
            .active
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = filter;
        FetchTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether this ticket still identifies the newest fetch.
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// The category currently selected for filtering the listing.
    pub fn active(&self) -> CategoryFilter {
        *self
            .active
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
