//! Configuration commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Init { force, path } => init(force, path.as_deref(), ctx),
    }
}

fn show(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("File", &path.display().to_string()),
        None => ctx.output.kv("File", "(defaults)"),
    }
    ctx.output.kv("State file", &ctx.store_path().display().to_string());
    ctx.output.kv("Key namespace", &ctx.config.store.namespace);
    ctx.output.kv(
        "Catalog",
        ctx.config.catalog.path.as_deref().unwrap_or("(built-in menu)"),
    );
    ctx.output.kv(
        "Load delay",
        &format!("{}ms", ctx.config.catalog.load_delay_ms),
    );
    ctx.output.kv("Currency symbol", &ctx.config.display.currency_symbol);
    Ok(())
}

fn init(force: bool, path: Option<&str>, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(path.unwrap_or(CONFIG_NAMES[0]));
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    if path.extension().is_some_and(|ext| ext == "json") {
        CliConfig::default().save(&path.to_string_lossy())?;
    } else {
        std::fs::write(&path, generate_default_config())?;
    }
    ctx.output.success(&format!("Wrote {}", path.display()));
    Ok(())
}
