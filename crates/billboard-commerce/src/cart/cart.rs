//! Cart and cart entry types.

use std::collections::HashSet;
use std::fmt;

use crate::catalog::CatalogItem;
use crate::ids::EntryId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A cart entry: a copy of a catalog item taken when it was added.
///
/// Entries carry their own id so that two entries wrapping the same catalog
/// item can be removed independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    /// Unique within the cart.
    pub id: EntryId,
    /// Name copied from the catalog item.
    pub name: String,
    /// Price copied from the catalog item.
    pub price: Money,
    /// Image copied from the catalog item.
    #[serde(alias = "url")]
    pub image_ref: String,
}

impl CartEntry {
    /// Copy a catalog item into a new entry with the given id.
    pub fn from_item(id: EntryId, item: &CatalogItem) -> Self {
        Self {
            id,
            name: item.name.clone(),
            price: item.price,
            image_ref: item.image_ref.clone(),
        }
    }
}

/// Two entries in a stored cart share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateEntryId(pub EntryId);

impl fmt::Display for DuplicateEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "duplicate cart entry id {}", self.0)
    }
}

impl std::error::Error for DuplicateEntryId {}

/// Ordered cart contents. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartEntry>", into = "Vec<CartEntry>")]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. The caller guarantees the id is fresh.
    pub(crate) fn push(&mut self, entry: CartEntry) {
        debug_assert!(self.get(entry.id).is_none(), "entry id {} reused", entry.id);
        self.entries.push(entry);
    }

    /// Remove the entry with `id`, keeping the order of the rest.
    pub(crate) fn remove(&mut self, id: EntryId) -> Option<CartEntry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Empty the cart, returning what it held.
    pub(crate) fn take(&mut self) -> Cart {
        std::mem::take(self)
    }

    /// Sum of entry prices, recomputed on every call.
    pub fn total(&self) -> Money {
        self.entries.iter().map(|e| &e.price).sum()
    }

    /// Get an entry by id.
    pub fn get(&self, id: EntryId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Highest entry id present.
    pub fn max_id(&self) -> Option<EntryId> {
        self.entries.iter().map(|e| e.id).max()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CartEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<CartEntry>> for Cart {
    type Error = DuplicateEntryId;

    fn try_from(entries: Vec<CartEntry>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id) {
                return Err(DuplicateEntryId(entry.id));
            }
        }
        Ok(Self { entries })
    }
}

impl From<Cart> for Vec<CartEntry> {
    fn from(cart: Cart) -> Self {
        cart.entries
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartEntry;
    type IntoIter = std::slice::Iter<'a, CartEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64, cents: u64) -> CartEntry {
        CartEntry {
            id: EntryId::new(id),
            name: format!("Coffee {id}"),
            price: Money::from_cents(cents),
            image_ref: String::new(),
        }
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total().to_string(), "0.00");
        assert_eq!(cart.max_id(), None);
    }

    #[test]
    fn test_total() {
        let mut cart = Cart::new();
        cart.push(entry(0, 250));
        cart.push(entry(1, 325));
        assert_eq!(cart.total().to_string(), "5.75");
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut cart = Cart::new();
        for id in 0..4 {
            cart.push(entry(id, 100));
        }

        let removed = cart.remove(EntryId::new(1)).unwrap();
        assert_eq!(removed.id, EntryId::new(1));

        let ids: Vec<u64> = cart.iter().map(|e| e.id.get()).collect();
        assert_eq!(ids, [0, 2, 3]);
    }

    #[test]
    fn test_remove_missing() {
        let mut cart = Cart::new();
        cart.push(entry(0, 100));
        let before = cart.clone();

        assert!(cart.remove(EntryId::new(7)).is_none());
        assert_eq!(cart, before);
    }

    #[test]
    fn test_take_empties() {
        let mut cart = Cart::new();
        cart.push(entry(0, 100));
        let taken = cart.take();
        assert_eq!(taken.len(), 1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_json_shape() {
        let mut cart = Cart::new();
        cart.push(CartEntry {
            id: EntryId::new(0),
            name: "Latte".to_string(),
            price: Money::from_cents(300),
            image_ref: "latte.jpg".to_string(),
        });
        assert_eq!(
            serde_json::to_string(&cart).unwrap(),
            r#"[{"id":0,"name":"Latte","price":3.0,"imageRef":"latte.jpg"}]"#
        );
    }

    #[test]
    fn test_json_rejects_duplicate_ids() {
        let json = r#"[{"id":0,"name":"A","price":1,"imageRef":""},
                       {"id":0,"name":"B","price":1,"imageRef":""}]"#;
        let err = serde_json::from_str::<Cart>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate cart entry id 0"));
    }
}
