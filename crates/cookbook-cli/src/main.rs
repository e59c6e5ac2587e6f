//! Cookbook CLI - recipe keeping and lookup
//!
//! A command-line interface for managing a personal recipe collection and
//! browsing TheMealDB.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cookbook")]
#[command(author, version, about = "Recipe keeping and lookup CLI", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format: table (default) or json
    #[arg(long, global = true, default_value = "table")]
    format: output::OutputFormat,

    /// Suppress progress messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Override database path (or set COOKBOOK_DB_PATH env var)
    #[arg(long, env = "COOKBOOK_DB_PATH", global = true)]
    db: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage your local recipe collection
    Recipe {
        #[command(subcommand)]
        action: commands::recipe::RecipeAction,
    },

    /// Browse TheMealDB's public recipe catalog
    Browse {
        #[command(subcommand)]
        action: commands::browse::BrowseAction,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Set up database path if provided
    if let Some(db_path) = &cli.db {
        log::debug!("Overriding database path: {}", db_path);
        std::env::set_var("COOKBOOK_DB_PATH", db_path);
    }

    // Initialize the shared database handle (opened once per process)
    let db = cookbook_core::Database::global().await?.clone();

    // Create context for commands
    let ctx = commands::Context {
        db,
        format: cli.format,
        quiet: cli.quiet,
    };

    // Execute command
    match cli.command {
        Commands::Recipe { action } => commands::recipe::execute(&ctx, action).await,
        Commands::Browse { action } => commands::browse::execute(&ctx, action).await,
    }
}
