//! cartstore - Shopping cart CLI
//!
//! CLI entry point that dispatches to subcommands.

use cartstore::cli::{Cli, Commands};
use cartstore::config::ConfigManager;
use cartstore::error::CartResult;
use clap::Parser;
use console::style;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> CartResult<()> {
    let cli = Cli::parse();

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let config = config_manager.load().await?;

    // 0 = warn, 1 = info, 2+ = debug; [general] verbose counts as -v
    let level = cli.verbose.max(u8::from(config.general.verbose));
    let filter = match level {
        0 => EnvFilter::new("cartstore=warn"),
        1 => EnvFilter::new("cartstore=info"),
        _ => EnvFilter::new("cartstore=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    debug!("Using config {}", config_manager.path().display());

    // Config edits apply to the file as written, so overrides only reach cart commands
    let mut cart_config = config.clone();
    if let Some(dir) = cli.data_dir {
        debug!("Data directory overridden: {}", dir.display());
        cart_config.storage.data_dir = Some(dir);
    }

    match cli.command {
        Commands::List(args) => cartstore::cli::commands::list(args, &cart_config).await,
        Commands::Add(args) => cartstore::cli::commands::add(args, &cart_config).await,
        Commands::Increment(args) => {
            cartstore::cli::commands::increment(args, &cart_config).await
        }
        Commands::Decrement(args) => {
            cartstore::cli::commands::decrement(args, &cart_config).await
        }
        Commands::Config(args) => {
            cartstore::cli::commands::config(args, &config_manager, &config).await
        }
    }
}
