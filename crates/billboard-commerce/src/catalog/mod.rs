//! Product catalog module.
//!
//! The catalog is read-only from the cart's perspective: it is loaded once
//! and only consulted to resolve a selection at add-time.

mod item;
mod list;
mod provider;

pub use item::CatalogItem;
pub use list::Catalog;
pub use provider::{coffee_menu, CatalogProvider, StaticCatalog};
