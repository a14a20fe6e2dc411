//! The cart state manager.
//!
//! Owns selection, cart contents and the entry id counter, and mirrors every
//! change to a durable key-value store. Persistence is best-effort: a failed
//! write is logged and published as an event, never rolled back.

use std::fmt;

use billboard_kv::{KeyValueStore, StoreError, StoreKeys};

use crate::cart::{Cart, CartEntry, CartEvent, Receipt, Restoration};
use crate::catalog::Catalog;
use crate::error::CartError;
use crate::ids::{CatalogId, EntryId};
use crate::money::Money;

/// Stored values this short ("", "[]") do not count as a cart.
const TRIVIAL_CART_LEN: usize = 2;

type Listener = Box<dyn FnMut(&CartEvent)>;

/// Single owner of cart state.
///
/// All mutation goes through `select_item`, `add_selected_to_cart`,
/// `remove_from_cart` and `checkout`. Each of them writes the keys it touched
/// before returning and then notifies subscribers.
pub struct CartStateManager<S> {
    store: S,
    keys: StoreKeys,
    catalog: Catalog,
    cart: Cart,
    next_free_id: EntryId,
    selected_id: Option<CatalogId>,
    initialized: bool,
    listeners: Vec<Listener>,
}

impl<S: KeyValueStore> CartStateManager<S> {
    /// Create a manager persisting under the default key namespace.
    pub fn new(store: S) -> Self {
        Self::with_keys(store, StoreKeys::default())
    }

    /// Create a manager persisting under custom keys.
    pub fn with_keys(store: S, keys: StoreKeys) -> Self {
        Self {
            store,
            keys,
            catalog: Catalog::empty(),
            cart: Cart::new(),
            next_free_id: EntryId::default(),
            selected_id: None,
            initialized: false,
            listeners: Vec::new(),
        }
    }

    /// Register a listener called after every state change.
    pub fn subscribe(&mut self, listener: impl FnMut(&CartEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Install the catalog and restore durable state.
    ///
    /// The stored cart and counter are restored together, and only when the
    /// stored cart is non-trivial, parses, and the in-memory cart is still
    /// empty. The counter is raised above every restored entry id if needed.
    /// A stored selection is restored unless one was made this session.
    /// Nothing is written back.
    pub fn initialize(&mut self, catalog: Catalog) -> Result<Restoration, CartError> {
        if self.initialized {
            return Err(CartError::AlreadyInitialized);
        }
        self.initialized = true;
        self.catalog = catalog;

        let cart_restored = self.restore_cart();

        if self.selected_id.is_none() {
            let key = self.keys.selected_id();
            self.selected_id = self.load_counter(&key).map(CatalogId::new);
        }

        let restoration = Restoration {
            cart_restored,
            entries: self.cart.len(),
            next_free_id: self.next_free_id,
            selected_id: self.selected_id(),
        };
        tracing::info!(
            cart_restored,
            entries = restoration.entries,
            next_free_id = %restoration.next_free_id,
            selected_id = %restoration.selected_id,
            catalog_items = self.catalog.len(),
            "cart state initialized"
        );

        self.emit(CartEvent::Restored(restoration.clone()));
        Ok(restoration)
    }

    /// Choose a catalog item in the picker.
    ///
    /// The id is not checked against the catalog here; an unknown id only
    /// fails later, at add-time.
    pub fn select_item(&mut self, id: CatalogId) {
        self.selected_id = Some(id);

        let key = self.keys.selected_id();
        let result = self.store.save(&key, &id.to_string());
        self.report_write(key, result);

        self.emit(CartEvent::Selected(id));
    }

    /// Append a copy of the selected catalog item to the cart.
    ///
    /// The new entry takes the next free entry id, never the catalog id. If
    /// the selection does not resolve, or the counter is at `u64::MAX`,
    /// nothing changes and no id is consumed.
    pub fn add_selected_to_cart(&mut self) -> Result<CartEntry, CartError> {
        let selected = self.selected_id();
        let Some(item) = self.catalog.get(selected) else {
            let error = CartError::NotFound(selected);
            tracing::warn!(%error, "selected item not in catalog, nothing added");
            return Err(error);
        };

        let Some(following) = self.next_free_id.next() else {
            let error = CartError::EntryIdsExhausted(self.next_free_id);
            tracing::warn!(%error, "counter exhausted, nothing added");
            return Err(error);
        };

        let entry = CartEntry::from_item(self.next_free_id, item);
        self.cart.push(entry.clone());
        self.persist_cart();

        self.next_free_id = following;
        self.persist_next_free_id();

        tracing::debug!(entry_id = %entry.id, catalog_id = %selected, "added to cart");
        self.emit(CartEvent::Added(entry.clone()));
        Ok(entry)
    }

    /// Remove a cart entry by its entry id.
    ///
    /// An unknown id leaves the cart as it was. The cart is written either
    /// way; the counter is never touched, so removed ids are not reused.
    pub fn remove_from_cart(&mut self, id: EntryId) -> Option<CartEntry> {
        let removed = self.cart.remove(id);
        self.persist_cart();

        match &removed {
            Some(entry) => {
                tracing::debug!(entry_id = %id, "removed from cart");
                self.emit(CartEvent::Removed(entry.clone()));
            }
            None => tracing::debug!(entry_id = %id, "no such cart entry"),
        }
        removed
    }

    /// Pay: empty the cart and reset the counter to zero.
    ///
    /// The selection is kept.
    pub fn checkout(&mut self) -> Receipt {
        let entries = self.cart.take();
        let total = entries.total();
        self.persist_cart();

        self.next_free_id = EntryId::default();
        self.persist_next_free_id();

        let receipt = Receipt { entries, total };
        tracing::info!(entries = receipt.entries.len(), total = %receipt.total, "checked out");
        self.emit(CartEvent::CheckedOut(receipt.clone()));
        receipt
    }

    /// Sum of the cart's prices; displays with two decimals.
    pub fn derived_total(&self) -> Money {
        self.cart.total()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The picker's current value.
    ///
    /// Falls back to the first catalog id, or 0 before the catalog is loaded.
    pub fn selected_id(&self) -> CatalogId {
        self.selected_id
            .or_else(|| self.catalog.first_id())
            .unwrap_or_default()
    }

    pub fn next_free_id(&self) -> EntryId {
        self.next_free_id
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Restore cart and counter as one unit. Returns whether anything was restored.
    fn restore_cart(&mut self) -> bool {
        if !self.cart.is_empty() {
            tracing::debug!("in-memory cart already populated, skipping restore");
            return false;
        }

        let key = self.keys.cart();
        let Some(raw) = self.load_raw(&key) else {
            return false;
        };
        if raw.len() <= TRIVIAL_CART_LEN {
            return false;
        }

        let cart: Cart = match serde_json::from_str(&raw) {
            Ok(cart) => cart,
            Err(e) => {
                let error = CartError::MalformedStoredState {
                    key,
                    reason: e.to_string(),
                };
                tracing::warn!(%error, "ignoring stored cart");
                return false;
            }
        };

        let floor = match cart.max_id() {
            None => EntryId::default(),
            Some(max) => match max.next() {
                Some(floor) => floor,
                None => {
                    let error = CartError::MalformedStoredState {
                        key,
                        reason: format!("entry id {max} leaves no room for new entries"),
                    };
                    tracing::warn!(%error, "ignoring stored cart");
                    return false;
                }
            },
        };

        let counter_key = self.keys.next_free_id();
        let stored_counter = self
            .load_counter(&counter_key)
            .map(EntryId::new)
            .filter(|stored| {
                let usable = stored.next().is_some();
                if !usable {
                    let error = CartError::MalformedStoredState {
                        key: counter_key.clone(),
                        reason: format!("counter {stored} cannot advance"),
                    };
                    tracing::warn!(%error, "using default");
                }
                usable
            });
        let next_free_id = stored_counter
            .unwrap_or_default()
            .max(floor)
            .max(self.next_free_id);
        if stored_counter.is_some_and(|stored| stored < next_free_id) {
            tracing::warn!(
                stored = %stored_counter.unwrap_or_default(),
                repaired = %next_free_id,
                "stored counter not above restored entry ids"
            );
        }

        self.cart = cart;
        self.next_free_id = next_free_id;
        true
    }

    /// Read a key, treating read failures as absence.
    fn load_raw(&self, key: &str) -> Option<String> {
        match self.store.load(key) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(key, %error, "failed to read stored state");
                None
            }
        }
    }

    /// Read a non-negative integer. Absent or malformed values yield `None`.
    fn load_counter(&self, key: &str) -> Option<u64> {
        let raw = self.load_raw(key)?;
        match raw.trim().parse::<u64>() {
            Ok(value) => Some(value),
            Err(e) => {
                let error = CartError::MalformedStoredState {
                    key: key.to_string(),
                    reason: e.to_string(),
                };
                tracing::warn!(%error, "using default");
                None
            }
        }
    }

    fn persist_cart(&mut self) {
        let key = self.keys.cart();
        let result = self.store.save_json(&key, &self.cart);
        self.report_write(key, result);
    }

    fn persist_next_free_id(&mut self) {
        let key = self.keys.next_free_id();
        let result = self.store.save(&key, &self.next_free_id.to_string());
        self.report_write(key, result);
    }

    fn report_write(&mut self, key: String, result: Result<(), StoreError>) {
        match result {
            Ok(()) => tracing::trace!(key = %key, "persisted"),
            Err(source) => {
                let error = CartError::PersistenceWriteFailure {
                    key: key.clone(),
                    source,
                };
                tracing::warn!(%error, "continuing with unsaved state");
                self.emit(CartEvent::PersistenceFailed {
                    key,
                    reason: error.to_string(),
                });
            }
        }
    }

    fn emit(&mut self, event: CartEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}

impl<S> fmt::Debug for CartStateManager<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStateManager")
            .field("keys", &self.keys)
            .field("catalog_items", &self.catalog.len())
            .field("cart", &self.cart)
            .field("next_free_id", &self.next_free_id)
            .field("selected_id", &self.selected_id)
            .field("initialized", &self.initialized)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
