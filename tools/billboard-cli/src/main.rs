//! Coffee Billboard CLI - a terminal storefront for the coffee cart.
//!
//! Every invocation behaves like a page load: the cart is restored from the
//! state file, one command runs, and the result is rendered.
//!
//! Commands:
//! - `billboard show` - Show the cart and running total (default)
//! - `billboard menu` - List the menu
//! - `billboard select` - Pick a menu item
//! - `billboard add` - Add the picked item to the cart
//! - `billboard remove` - Remove a cart entry
//! - `billboard pay` - Pay and empty the cart
//! - `billboard shop` - Interactive session
//! - `billboard config` - Manage configuration

mod catalog;
mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{AddArgs, ConfigArgs, RemoveArgs, SelectArgs};
use logging::LogFormat;

/// Coffee Billboard - pick a coffee, fill the cart, pay
#[derive(Parser)]
#[command(name = "billboard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the cart and running total
    Show,

    /// List the menu
    Menu,

    /// Pick a menu item
    Select(SelectArgs),

    /// Add the picked item to the cart
    Add(AddArgs),

    /// Remove a cart entry
    Remove(RemoveArgs),

    /// Pay and empty the cart
    Pay,

    /// Interactive shopping session
    Shop,

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let format = if cli.json {
        LogFormat::Json
    } else {
        LogFormat::Human
    };
    logging::init(format, cli.verbose)?;

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command.unwrap_or(Commands::Show) {
        Commands::Show => commands::cart::show(&ctx).await,
        Commands::Menu => commands::cart::menu(&ctx).await,
        Commands::Select(args) => commands::cart::select(args, &ctx).await,
        Commands::Add(args) => commands::cart::add(args, &ctx).await,
        Commands::Remove(args) => commands::cart::remove(args, &ctx).await,
        Commands::Pay => commands::cart::pay(&ctx).await,
        Commands::Shop => commands::shop::run(&ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
