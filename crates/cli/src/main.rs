//! Address Book CLI - Command-line interface for the address book
//!
//! Usage:
//!   addressbook                         - Start interactive mode
//!   addressbook init [dir]              - Write a default config.json
//!   addressbook check <field> <value>   - Validate a single field
//!   addressbook card --name .. ...      - Parse a contact and print its card

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use cli::commands::{CardCommand, CheckCommand, Context, InitCommand};
use cli::interactive::InteractiveCli;
use shared::AddressBookConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "addressbook")]
#[command(about = "Address book for financial advisors")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to config.json
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init(InitCommand),
    /// Validate one field value
    Check(CheckCommand),
    /// Parse a full contact and print its card
    Card(CardCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AddressBookConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => AddressBookConfig::default(),
    };

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid logLevel in configuration")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    debug!(?config, "Loaded configuration");

    let ctx = Context {
        config,
        json: cli.json,
    };

    match cli.command {
        Some(Commands::Init(cmd)) => cmd.run(),
        Some(Commands::Check(cmd)) => cmd.run(&ctx),
        Some(Commands::Card(cmd)) => cmd.run(&ctx),
        None => {
            // No subcommand - start interactive mode
            let mut interactive = InteractiveCli::new(ctx)?;
            interactive.run()
        }
    }
}
