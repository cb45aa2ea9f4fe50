//! Shared loading indicator state.
//!
//! Every catalog request runs inside a scoped [`LoaderGuard`]: the in-flight
//! gauge rises before the request is sent and falls when the guard drops, on
//! success and failure paths alike. The spinner element in the page mirrors
//! this server-side gauge through the `htmx-indicator` mechanism; the gauge
//! itself is what tests assert against.

use std::sync::atomic::{AtomicUsize, Ordering};

/// In-flight request gauge backing the shared loading indicator.
#[derive(Debug, Default)]
pub struct Loader {
    in_flight: AtomicUsize,
}

impl Loader {
    /// Create an idle loader.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Mark a request as in flight. The indicator stays visible until the
    /// returned guard drops.
    pub fn acquire(&self) -> LoaderGuard<'_> {
        self.in_flight.fetch_add(1, Ordering::Relaxed);
        LoaderGuard { loader: self }
    }

    /// Whether the indicator should currently be visible.
    pub fn is_visible(&self) -> bool {
        self.in_flight.load(Ordering::Relaxed) > 0
    }
}

/// RAII guard pairing one `show` with exactly one `hide`.
#[derive(Debug)]
pub struct LoaderGuard<'a> {
    loader: &'a Loader,
}

impl Drop for LoaderGuard<'_> {
    fn drop(&mut self) {
        self.loader.in_flight.fetch_sub(1, Ordering::Relaxed);
    }
}
