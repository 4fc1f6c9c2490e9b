//! Lapki CLI - terminal storefront for the LapkiLakomki treat shop.
//!
//! Commands:
//! - `lapki catalog` - List products
//! - `lapki cart` - Run cart actions and show the result
//! - `lapki delivery` - Estimate delivery for a city
//! - `lapki gallery` - Walk the lightbox
//! - `lapki contacts` - Show the shop's contact details
//! - `lapki shop` - Interactive session
//! - `lapki config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CartArgs, CatalogArgs, ConfigArgs, DeliveryArgs, GalleryArgs, ShopArgs};

/// Lapki CLI - browse treats, fill a cart, estimate delivery
#[derive(Parser)]
#[command(name = "lapki")]
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
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    Catalog(CatalogArgs),

    /// Apply cart actions and print the cart
    Cart(CartArgs),

    /// Estimate delivery cost
    Delivery(DeliveryArgs),

    /// Navigate the photo lightbox
    Gallery(GalleryArgs),

    /// Show the shop's contact details
    Contacts,

    /// Start an interactive shopping session
    Shop(ShopArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    logging::init(&ctx.config.logging, cli.verbose);
    if let Some(path) = &ctx.config_path {
        ctx.output
            .debug(&format!("Loaded config from {}", path.display()));
    }

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Delivery(args) => commands::delivery::run(args, &ctx),
        Commands::Gallery(args) => commands::gallery::run(args, &ctx),
        Commands::Contacts => commands::contacts::run(&ctx),
        Commands::Shop(args) => commands::shop::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "command failed");
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
