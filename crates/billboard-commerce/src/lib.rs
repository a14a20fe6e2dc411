//! Catalog and cart state management for Coffee Billboard.
//!
//! - **Catalog**: the fixed, ordered menu and the providers that load it
//! - **Cart**: cart entries, the cart, and the [`CartStateManager`] that owns
//!   selection, entry id allocation, persistence and the running total
//!
//! # Example
//!
//! ```rust
//! use billboard_commerce::prelude::*;
//! use billboard_kv::MemoryStore;
//!
//! let mut manager = CartStateManager::new(MemoryStore::new());
//! manager.initialize(coffee_menu()).unwrap();
//!
//! manager.select_item(CatalogId::new(3));
//! let entry = manager.add_selected_to_cart().unwrap();
//! assert_eq!(entry.id, EntryId::new(0));
//! assert_eq!(manager.derived_total().to_string(), "3.00");
//!
//! let receipt = manager.checkout();
//! assert_eq!(receipt.entries.len(), 1);
//! assert!(manager.cart().is_empty());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;

pub use cart::CartStateManager;
pub use error::{CartError, CatalogError};
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CartError, CatalogError};
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{coffee_menu, Catalog, CatalogItem, CatalogProvider, StaticCatalog};

    // Cart
    pub use crate::cart::{Cart, CartEntry, CartEvent, CartStateManager, Receipt, Restoration};
}
