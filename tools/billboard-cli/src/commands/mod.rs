//! CLI command implementations.

pub mod cart;
pub mod config;
pub mod render;
pub mod shop;

use clap::{Args, Subcommand};

/// Arguments for the select command.
#[derive(Args)]
pub struct SelectArgs {
    /// Catalog id to select.
    pub id: u64,
}

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Select this catalog id before adding.
    #[arg(short, long)]
    pub id: Option<u64>,

    /// Number of copies to add.
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,
}

/// Arguments for the remove command.
#[derive(Args)]
pub struct RemoveArgs {
    /// Cart entry id (as shown by `billboard show`).
    pub entry_id: u64,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,

        /// File to write (default: billboard.toml). A `.json` path writes JSON.
        #[arg(long)]
        path: Option<String>,
    },
}
