//! The ordered, validated catalog.

use std::collections::HashSet;

use crate::catalog::CatalogItem;
use crate::error::CatalogError;
use crate::ids::CatalogId;
use serde::Serialize;

/// Fixed, ordered list of catalog items with unique ids.
///
/// Order is the order the provider supplied, which is also picker order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }
        Ok(Self { items })
    }

    /// Parse a JSON array of catalog items.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<CatalogItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// An empty catalog, as seen before loading completes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up an item by id.
    pub fn get(&self, id: CatalogId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Id of the first item, the picker's default selection.
    pub fn first_id(&self) -> Option<CatalogId> {
        self.items.first().map(|item| item.id)
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogItem;
    type IntoIter = std::slice::Iter<'a, CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn item(id: u64, name: &str) -> CatalogItem {
        CatalogItem::new(id, name, Money::from_cents(100), "")
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog::new(vec![item(4, "Latte"), item(2, "Mocha")]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.first_id(), Some(CatalogId::new(4)));
        assert_eq!(catalog.get(CatalogId::new(2)).unwrap().name, "Mocha");
        assert!(catalog.get(CatalogId::new(9)).is_none());
    }

    #[test]
    fn test_catalog_rejects_duplicates() {
        let result = Catalog::new(vec![item(1, "Latte"), item(1, "Mocha")]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == CatalogId::new(1)));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::empty();
        assert!(catalog.is_empty());
        assert_eq!(catalog.first_id(), None);
    }

    #[test]
    fn test_catalog_from_json() {
        let catalog = Catalog::from_json(
            r#"[{"id":0,"name":"Latte","price":3,"imageRef":"l.png"},
                {"id":1,"name":"Flat White","price":3.4,"imageRef":"f.png"}]"#,
        )
        .unwrap();
        let names: Vec<&str> = catalog.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Latte", "Flat White"]);
    }

    #[test]
    fn test_catalog_from_json_rejects_negative_price() {
        let result = Catalog::from_json(r#"[{"id":0,"name":"Latte","price":-3,"imageRef":""}]"#);
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }
}
