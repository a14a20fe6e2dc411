//! End-to-end cart flows across simulated page reloads.

use billboard_commerce::prelude::*;
use billboard_kv::{FileStore, KeyValueStore, MemoryStore};

fn latte_only() -> Catalog {
    Catalog::from_json(r#"[{"id":0,"name":"Latte","price":3.00,"imageRef":"latte.jpg"}]"#).unwrap()
}

#[test]
fn test_add_twice_remove_first() {
    let mut manager = CartStateManager::new(MemoryStore::new());
    manager.initialize(latte_only()).unwrap();

    manager.select_item(CatalogId::new(0));
    manager.add_selected_to_cart().unwrap();
    manager.add_selected_to_cart().unwrap();
    manager.remove_from_cart(EntryId::new(0)).unwrap();

    let entries = manager.cart().entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, EntryId::new(1));
    assert_eq!(entries[0].name, "Latte");
    assert_eq!(entries[0].price, Money::from_cents(300));
    assert_eq!(manager.derived_total().to_string(), "3.00");
}

#[test]
fn test_cart_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    {
        let mut manager = CartStateManager::new(FileStore::open(&path).unwrap());
        manager.initialize(coffee_menu()).unwrap();
        manager.select_item(CatalogId::new(5));
        manager.add_selected_to_cart().unwrap();
        manager.select_item(CatalogId::new(2));
        manager.add_selected_to_cart().unwrap();
        manager.remove_from_cart(EntryId::new(0));
    }

    let mut manager = CartStateManager::new(FileStore::open(&path).unwrap());
    let restoration = manager.initialize(coffee_menu()).unwrap();

    assert!(restoration.cart_restored);
    assert_eq!(restoration.selected_id, CatalogId::new(2));
    assert_eq!(manager.next_free_id(), EntryId::new(2));
    assert_eq!(manager.cart().len(), 1);
    assert_eq!(manager.cart().entries()[0].name, "Cappuccino");

    let entry = manager.add_selected_to_cart().unwrap();
    assert_eq!(entry.id, EntryId::new(2));
}

#[test]
fn test_checkout_then_reload_starts_fresh() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    {
        let mut manager = CartStateManager::new(FileStore::open(&path).unwrap());
        manager.initialize(coffee_menu()).unwrap();
        manager.add_selected_to_cart().unwrap();
        manager.add_selected_to_cart().unwrap();
        let receipt = manager.checkout();
        assert_eq!(receipt.total.to_string(), "3.60");
    }

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.load("coffeeBillboard_cart").unwrap().as_deref(), Some("[]"));
    assert_eq!(store.load("coffeeBillboard_nextFreeId").unwrap().as_deref(), Some("0"));

    let mut manager = CartStateManager::new(store);
    let restoration = manager.initialize(coffee_menu()).unwrap();
    assert!(!restoration.cart_restored);
    assert!(manager.cart().is_empty());
    assert_eq!(manager.add_selected_to_cart().unwrap().id, EntryId::new(0));
}

#[tokio::test]
async fn test_initialize_from_provider() {
    let provider = StaticCatalog::new(latte_only());
    let catalog = provider.get_catalog().await.unwrap();

    let mut manager = CartStateManager::new(MemoryStore::new());
    manager.initialize(catalog).unwrap();
    assert_eq!(manager.catalog().len(), 1);
    assert_eq!(manager.selected_id(), CatalogId::new(0));
}
