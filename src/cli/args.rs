//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// cartstore - Shopping cart with a durable local mirror
///
/// Adds, increments and decrements cart lines and keeps the cart
/// persisted in local storage between runs.
#[derive(Parser, Debug)]
#[command(name = "cartstore")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "CARTSTORE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory the cart is persisted in (overrides storage.data_dir)
    #[arg(long, global = true, env = "CARTSTORE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the cart contents
    List(ListArgs),

    /// Add one unit of a product to the cart
    Add(AddArgs),

    /// Add one unit to a product already in the cart
    Increment(QuantityArgs),

    /// Remove one unit of a product, dropping it at zero
    Decrement(QuantityArgs),

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the add command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Product ID
    #[arg(long)]
    pub id: String,

    /// Product title
    #[arg(short, long)]
    pub title: String,

    /// Product image URL
    #[arg(short, long, default_value = "")]
    pub image_url: String,

    /// Unit price
    #[arg(short, long, value_parser = parse_price)]
    pub price: f64,
}

/// Parse a price, rejecting NaN and infinities, which JSON cannot store
fn parse_price(value: &str) -> Result<f64, String> {
    let price: f64 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if price.is_finite() {
        Ok(price)
    } else {
        Err(format!("`{value}` is not a finite price"))
    }
}

/// Arguments for the increment and decrement commands
#[derive(Parser, Debug)]
pub struct QuantityArgs {
    /// Product ID
    pub id: String,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., storage.backend)
        key: String,

        /// Value to set
        value: String,
    },
}

/// Output format for list commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
    /// Simple text (one line per product)
    Plain,
}
