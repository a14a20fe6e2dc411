//! Interactive shopping session.

use anyhow::{bail, Result};
use billboard_commerce::cart::CartStateManager;
use billboard_kv::KeyValueStore;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

use super::cart::{add_selected, remove_entry, report_receipt};
use super::render;
use crate::context::Context;
use crate::output::format_price;

/// Menu actions, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Pick,
    Add,
    Remove,
    Pay,
    Quit,
}

impl Action {
    const ALL: [Action; 5] = [
        Action::Pick,
        Action::Add,
        Action::Remove,
        Action::Pay,
        Action::Quit,
    ];

    fn label<S: KeyValueStore>(self, manager: &CartStateManager<S>, symbol: &str) -> String {
        match self {
            Action::Pick => {
                let current = manager
                    .catalog()
                    .get(manager.selected_id())
                    .map(|item| item.name.as_str())
                    .unwrap_or("nothing");
                format!("Pick coffee (now: {})", current)
            }
            Action::Add => "Add to cart".to_string(),
            Action::Remove => "Remove an entry".to_string(),
            Action::Pay => format!("Pay {}", format_price(manager.derived_total(), symbol)),
            Action::Quit => "Quit".to_string(),
        }
    }
}

/// Run the interactive loop until the user quits.
pub async fn run(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("`shop` is interactive and cannot be used with --json");
    }

    let mut manager = ctx.open_manager().await?;
    let symbol = ctx.config.display.currency_symbol.as_str();
    let theme = ColorfulTheme::default();
    let mut default_action = 1;

    loop {
        render::cart(&ctx.output, &manager, symbol);
        println!();

        let labels: Vec<String> = Action::ALL
            .iter()
            .map(|a| a.label(&manager, symbol))
            .collect();
        let Some(index) = Select::with_theme(&theme)
            .with_prompt("What next?")
            .items(&labels)
            .default(default_action)
            .interact_opt()?
        else {
            break;
        };
        default_action = index;

        match Action::ALL[index] {
            Action::Pick => {
                let items = manager.catalog().items();
                if items.is_empty() {
                    ctx.output.warn("The menu is empty.");
                    continue;
                }
                let labels: Vec<String> = items
                    .iter()
                    .map(|item| format!("{} - {}", item.name, format_price(item.price, symbol)))
                    .collect();
                let current = items
                    .iter()
                    .position(|item| item.id == manager.selected_id())
                    .unwrap_or(0);

                if let Some(pick) = Select::with_theme(&theme)
                    .with_prompt("Coffee")
                    .items(&labels)
                    .default(current)
                    .interact_opt()?
                {
                    let id = items[pick].id;
                    manager.select_item(id);
                    default_action = 1;
                }
            }
            Action::Add => {
                add_selected(&ctx.output, &mut manager, symbol);
            }
            Action::Remove => {
                let entries = manager.cart().entries();
                if entries.is_empty() {
                    ctx.output.info("Nothing to remove.");
                    continue;
                }
                let labels: Vec<String> = entries
                    .iter()
                    .map(|e| format!("#{} {} - {}", e.id, e.name, format_price(e.price, symbol)))
                    .collect();

                if let Some(pick) = Select::with_theme(&theme)
                    .with_prompt("Remove which?")
                    .items(&labels)
                    .interact_opt()?
                {
                    let id = entries[pick].id;
                    remove_entry(&ctx.output, &mut manager, id);
                }
            }
            Action::Pay => {
                let receipt = manager.checkout();
                report_receipt(&ctx.output, &receipt, symbol);
            }
            Action::Quit => break,
        }
    }

    Ok(())
}
