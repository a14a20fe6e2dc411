//! One-shot cart commands.

use anyhow::Result;
use billboard_commerce::cart::{CartStateManager, Receipt};
use billboard_commerce::ids::{CatalogId, EntryId};
use billboard_commerce::CartError;
use billboard_kv::KeyValueStore;

use super::{render, AddArgs, RemoveArgs, SelectArgs};
use crate::context::Context;
use crate::output::{format_price, Output};

/// Render the cart with its running total.
pub async fn show(ctx: &Context) -> Result<()> {
    let manager = ctx.open_manager().await?;
    render::cart(&ctx.output, &manager, &ctx.config.display.currency_symbol);
    Ok(())
}

/// List the menu.
pub async fn menu(ctx: &Context) -> Result<()> {
    let manager = ctx.open_manager().await?;
    render::menu(&ctx.output, &manager, &ctx.config.display.currency_symbol);
    Ok(())
}

/// Select a menu item.
pub async fn select(args: SelectArgs, ctx: &Context) -> Result<()> {
    let mut manager = ctx.open_manager().await?;
    let id = CatalogId::new(args.id);
    manager.select_item(id);

    match manager.catalog().get(id) {
        Some(item) => ctx.output.success(&format!("Selected {}", item.name)),
        None => ctx.output.warn(&format!("Selected id {} is not on the menu", id)),
    }
    render::menu(&ctx.output, &manager, &ctx.config.display.currency_symbol);
    Ok(())
}

/// Add the selected item to the cart.
pub async fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    let mut manager = ctx.open_manager().await?;
    if let Some(id) = args.id {
        manager.select_item(CatalogId::new(id));
    }

    for _ in 0..args.count {
        if !add_selected(&ctx.output, &mut manager, &ctx.config.display.currency_symbol) {
            break;
        }
    }
    render::cart(&ctx.output, &manager, &ctx.config.display.currency_symbol);
    Ok(())
}

/// Remove a cart entry.
pub async fn remove(args: RemoveArgs, ctx: &Context) -> Result<()> {
    let mut manager = ctx.open_manager().await?;
    remove_entry(&ctx.output, &mut manager, EntryId::new(args.entry_id));
    render::cart(&ctx.output, &manager, &ctx.config.display.currency_symbol);
    Ok(())
}

/// Pay for the cart.
pub async fn pay(ctx: &Context) -> Result<()> {
    let mut manager = ctx.open_manager().await?;
    let receipt = manager.checkout();

    if ctx.output.is_json() {
        ctx.output.json(&receipt);
        return Ok(());
    }
    report_receipt(&ctx.output, &receipt, &ctx.config.display.currency_symbol);
    Ok(())
}

/// Add once, reporting the outcome. Returns `false` when nothing was added.
pub(crate) fn add_selected<S: KeyValueStore>(
    output: &Output,
    manager: &mut CartStateManager<S>,
    symbol: &str,
) -> bool {
    match manager.add_selected_to_cart() {
        Ok(entry) => {
            output.success(&format!(
                "Added {} ({}) as #{}",
                entry.name,
                format_price(entry.price, symbol),
                entry.id
            ));
            true
        }
        Err(CartError::NotFound(id)) => {
            output.warn(&format!("Nothing added: id {} is not on the menu", id));
            false
        }
        Err(e) => {
            output.warn(&format!("Nothing added: {}", e));
            false
        }
    }
}

pub(crate) fn remove_entry<S: KeyValueStore>(
    output: &Output,
    manager: &mut CartStateManager<S>,
    id: EntryId,
) {
    match manager.remove_from_cart(id) {
        Some(entry) => output.success(&format!("Removed {} (#{})", entry.name, entry.id)),
        None => output.warn(&format!("No cart entry #{}", id)),
    }
}

pub(crate) fn report_receipt(output: &Output, receipt: &Receipt, symbol: &str) {
    if receipt.is_empty() {
        output.info("Cart is empty, nothing to pay.");
        return;
    }
    output.success(&format!(
        "Paid {} for {} item(s). Enjoy your coffee!",
        format_price(receipt.total, symbol),
        receipt.entries.len()
    ));
}
