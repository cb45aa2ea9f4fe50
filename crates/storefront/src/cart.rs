//! In-memory cart store.
//!
//! The cart lives for the lifetime of the server process and is never
//! persisted or submitted anywhere. `CartStore` is the only way to mutate
//! it; handlers re-render the cart panel from a fresh snapshot after every
//! mutation, so the displayed total can never drift from the lines.

use std::sync::Mutex;

use greengrove_core::{PlantId, Price};

/// One entry in the cart: a catalog item and its requested quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub id: PlantId,
    pub name: String,
    pub price: Price,
    pub quantity: u32,
}

impl CartLine {
    /// `unit price x quantity` for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// Item data forwarded from an add-to-cart control.
///
/// The id, name, and price are trusted as provided, matching the listing
/// that rendered the control.
#[derive(Debug, Clone)]
pub struct CartItemInput {
    pub id: PlantId,
    pub name: String,
    pub price: Price,
}

/// Owner of the cart lines.
///
/// Invariants upheld here:
/// - at most one line per `PlantId`
/// - `quantity >= 1` on every line; removing a line is all-or-nothing
/// - insertion order is preserved, new lines append at the tail
#[derive(Debug, Default)]
pub struct CartStore {
    lines: Mutex<Vec<CartLine>>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    /// Add one unit of an item: bump the quantity of an existing line, or
    /// append a new line with quantity 1.
    pub fn add(&self, item: CartItemInput) {
        let mut lines = self.lines.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(line) = lines.iter_mut().find(|line| line.id == item.id) {
            line.quantity += 1;
        } else {
            lines.push(CartLine {
                id: item.id,
                name: item.name,
                price: item.price,
                quantity: 1,
            });
        }
    }

    /// Remove the line matching `id`, if any. Absent ids are a no-op, not
    /// an error.
    pub fn remove(&self, id: PlantId) {
        let mut lines = self.lines.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        lines.retain(|line| line.id != id);
    }

    /// Snapshot of the current lines, in insertion order.
    pub fn lines(&self) -> Vec<CartLine> {
        self.lines
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Sum of `price x quantity` over all lines, computed fresh on every
    /// call. There is no cached total to drift.
    pub fn total(&self) -> Price {
        self.lines
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .iter()
            .map(CartLine::line_total)
            .sum()
    }

    /// Total number of units across all lines.
    pub fn unit_count(&self) -> u32 {
        self.lines
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .iter()
            .map(|line| line.quantity)
            .sum()
    }
}
