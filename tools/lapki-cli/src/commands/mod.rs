//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod contacts;
pub mod delivery;
pub mod gallery;
pub mod shop;

use clap::{Args, Subcommand};

use cart::CartAction;
use gallery::GalleryAction;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Only list products in this category.
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// List categories instead of products.
    #[arg(long)]
    pub categories: bool,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Actions to apply in order: add:<id>, remove:<id>, inc:<id>, dec:<id>,
    /// qty:<id>:<delta>.
    #[arg(required = true)]
    pub actions: Vec<CartAction>,
}

/// Arguments for the delivery command.
#[derive(Args)]
pub struct DeliveryArgs {
    /// City to deliver to.
    #[arg(required_unless_present = "methods")]
    pub city: Option<String>,

    /// List delivery methods.
    #[arg(long)]
    pub methods: bool,
}

/// Arguments for the gallery command.
#[derive(Args)]
pub struct GalleryArgs {
    /// Actions to apply in order: open:<index>, next, prev, close.
    #[arg(required = true)]
    pub actions: Vec<GalleryAction>,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Run without the delivery estimator and the lightbox.
    #[arg(long)]
    pub basic: bool,
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
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
