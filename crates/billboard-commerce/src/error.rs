//! Commerce error types.

use thiserror::Error;

use crate::ids::{CatalogId, EntryId};

/// Errors raised by the cart state manager.
///
/// Only `NotFound`, `EntryIdsExhausted` and `AlreadyInitialized` are ever
/// returned to callers.
/// `MalformedStoredState` and `PersistenceWriteFailure` are recovered inside
/// the manager and surface as log events and [`CartEvent`]s.
///
/// [`CartEvent`]: crate::cart::CartEvent
#[derive(Error, Debug)]
pub enum CartError {
    /// The selected id does not resolve to a catalog item.
    #[error("Catalog item not found: {0}")]
    NotFound(CatalogId),

    /// The entry id counter cannot advance past its current value.
    #[error("No entry ids left after {0}")]
    EntryIdsExhausted(EntryId),

    /// A durable value is present but cannot be parsed.
    #[error("Malformed stored value for {key}: {reason}")]
    MalformedStoredState { key: String, reason: String },

    /// Writing to the durable store failed.
    #[error("Failed to persist {key}: {source}")]
    PersistenceWriteFailure {
        key: String,
        #[source]
        source: billboard_kv::StoreError,
    },

    /// `initialize` was called a second time.
    #[error("Cart state manager is already initialized")]
    AlreadyInitialized,
}

/// Errors that can occur while obtaining the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Two catalog items share an id.
    #[error("Duplicate catalog id: {0}")]
    DuplicateId(CatalogId),

    /// Catalog data could not be parsed.
    #[error("Invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The catalog source could not be reached.
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}
