//! Cart and menu rendering shared by the commands.

use billboard_commerce::cart::{Cart, CartStateManager};
use billboard_commerce::catalog::CatalogItem;
use billboard_commerce::ids::{CatalogId, EntryId};
use billboard_kv::KeyValueStore;
use serde::Serialize;

use crate::output::{format_price, Output};

/// Machine-readable snapshot of the page.
#[derive(Debug, Serialize)]
pub struct CartView<'a> {
    pub selected_id: CatalogId,
    pub next_free_id: EntryId,
    pub total: String,
    pub entries: &'a Cart,
}

impl<'a> CartView<'a> {
    pub fn of<S: KeyValueStore>(manager: &'a CartStateManager<S>) -> Self {
        Self {
            selected_id: manager.selected_id(),
            next_free_id: manager.next_free_id(),
            total: manager.derived_total().to_string(),
            entries: manager.cart(),
        }
    }
}

/// Header with the running total, then one row per cart entry.
pub fn cart<S: KeyValueStore>(output: &Output, manager: &CartStateManager<S>, symbol: &str) {
    if output.is_json() {
        output.json(&CartView::of(manager));
        return;
    }

    output.header("Coffee Billboard");
    output.kv("Price", &format_price(manager.derived_total(), symbol));

    if manager.cart().is_empty() {
        output.info("Your cart is empty. Add something with `billboard add`.");
        return;
    }

    println!();
    for entry in manager.cart() {
        let id = format!("#{}", entry.id);
        let price = format_price(entry.price, symbol);
        output.table_row(
            &[id.as_str(), entry.name.as_str(), price.as_str(), entry.image_ref.as_str()],
            &[5, 16, 8, 0],
        );
    }
}

/// The picker's options, marking the current selection.
pub fn menu<S: KeyValueStore>(output: &Output, manager: &CartStateManager<S>, symbol: &str) {
    let selected = manager.selected_id();

    if output.is_json() {
        #[derive(Serialize)]
        struct MenuView<'a> {
            selected_id: CatalogId,
            items: &'a [CatalogItem],
        }
        output.json(&MenuView {
            selected_id: selected,
            items: manager.catalog().items(),
        });
        return;
    }

    output.header("Menu");
    for item in manager.catalog() {
        let marker = if item.id == selected { "›" } else { " " };
        let id = item.id.to_string();
        let price = format_price(item.price, symbol);
        output.table_row(
            &[marker, id.as_str(), item.name.as_str(), price.as_str()],
            &[1, 3, 16, 0],
        );
    }
}
