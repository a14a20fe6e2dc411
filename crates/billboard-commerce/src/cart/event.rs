//! Change notifications emitted by the cart state manager.

use crate::cart::{Cart, CartEntry};
use crate::ids::{CatalogId, EntryId};
use crate::money::Money;
use serde::Serialize;

/// Result of restoring durable state during `initialize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Restoration {
    /// Whether a stored cart replaced the in-memory one.
    pub cart_restored: bool,
    /// Entries in the cart after restoration.
    pub entries: usize,
    /// Counter after restoration.
    pub next_free_id: EntryId,
    /// Effective selection after restoration.
    pub selected_id: CatalogId,
}

/// What was paid at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    /// Entries that were in the cart, in cart order.
    pub entries: Cart,
    /// Their total.
    pub total: Money,
}

impl Receipt {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A state change the presentation layer may react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    Restored(Restoration),
    Selected(CatalogId),
    Added(CartEntry),
    Removed(CartEntry),
    CheckedOut(Receipt),
    /// A durable write failed; in-memory state already moved on.
    PersistenceFailed { key: String, reason: String },
}
