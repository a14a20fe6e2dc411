//! Durable key-value store for Coffee Billboard state.
//!
//! Values are plain strings keyed by namespaced string keys, the same shape a
//! browser's local storage offers. Cart logic only ever talks to the
//! [`KeyValueStore`] trait, so backends can be swapped freely.
//!
//! # Example
//!
//! ```rust,ignore
//! use billboard_kv::{FileStore, KeyValueStore, StoreKeys};
//!
//! let mut store = FileStore::open(".billboard/state.json")?;
//! let keys = StoreKeys::default();
//!
//! store.save(&keys.next_free_id(), "3")?;
//! let raw: Option<String> = store.load(&keys.next_free_id())?;
//! ```

mod error;
mod file;
mod keys;
mod kv;

pub use error::StoreError;
pub use file::FileStore;
pub use keys::{StoreKeys, DEFAULT_NAMESPACE};
pub use kv::{KeyValueStore, MemoryStore};
