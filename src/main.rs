//! db-commands - Application entry point
//!
//! CLI-based entry point that dispatches to the migrate, seed and version
//! commands using the demo migrator and seeds.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use db_commands::{
    cli::{Cli, Commands},
    commands,
    config::{Config, LogConfig, LogFormat, DEFAULT_LOG_LEVEL, VERBOSE_LOG_LEVEL},
    fixtures,
    infra::Migrator,
};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    let config = match cli.config {
        Some(path) => config.with_seeds_path(path),
        None => config,
    };

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose, &config.log);
    tracing::debug!(?config, "Configuration loaded");

    // Execute command
    let result = match cli.command {
        Commands::Migrate(args) => commands::migrate::execute::<Migrator>(args, &config).await,
        Commands::Seed(args) => {
            commands::seed::execute(args, &config, &fixtures::factories()).await
        }
        Commands::Version => commands::version::execute(&config),
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!(operations = ?e.operations(), "Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool, log: &LogConfig) {
    let filter = if verbose {
        VERBOSE_LOG_LEVEL.to_string()
    } else {
        std::env::var("RUST_LOG")
            .ok()
            .or_else(|| log.level.clone())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
    };

    let fmt_layer = match log.format {
        LogFormat::Full => tracing_subscriber::fmt::layer().boxed(),
        LogFormat::Compact => tracing_subscriber::fmt::layer().compact().boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().pretty().boxed(),
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
