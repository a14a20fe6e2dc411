//! Shopping cart module.
//!
//! Contains the cart and entry types, the state manager that owns them, and
//! the events it emits.

mod cart;
mod event;
mod manager;

pub use cart::{Cart, CartEntry, DuplicateEntryId};
pub use event::{CartEvent, Receipt, Restoration};
pub use manager::CartStateManager;
