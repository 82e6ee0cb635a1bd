//! Seed command - Database seeding.
//!
//! ## Usage
//!
//! ```bash
//! # Run specific seeds in the given order
//! cargo run -- seed run users orders
//!
//! # Run every enabled seed
//! cargo run -- seed run-all
//!
//! # Show declared seeds
//! cargo run -- seed list
//! ```

use std::io::Write;

use sea_orm::DatabaseConnection;

use crate::cli::args::{SeedAction, SeedArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult, ResultExt};
use crate::infra::{Database, Migrator};
use crate::seeds::{SeedFactories, SeedRegistry, SeedRunner, SeedingConfig};

/// Execute the seed command with the application's seed table
pub async fn execute(
    args: SeedArgs,
    config: &Config,
    factories: &SeedFactories<DatabaseConnection>,
) -> AppResult<()> {
    let seeding = config.seeding().context("seed config")?;

    let db = Database::<Migrator>::connect(config).await.context("seed connect")?;

    let result = prepare_and_run(&db, args.action, &seeding, factories).await;

    if let Err(e) = db.close().await {
        tracing::error!(error = %e, "Failed to close database connection");
        if result.is_ok() {
            return Err(e).context("seed close");
        }
    }

    result
}

async fn prepare_and_run(
    db: &Database,
    action: SeedAction,
    seeding: &SeedingConfig,
    factories: &SeedFactories<DatabaseConnection>,
) -> AppResult<()> {
    db.ping().await.context("seed ping")?;

    let registry =
        SeedRegistry::new(seeding, factories, db.get_connection()).context("seed registry")?;

    run_action(action, &registry, &mut std::io::stdout()).await
}

/// Dispatch a seed action to an already built registry.
pub async fn run_action<R, W>(
    action: SeedAction,
    registry: &SeedRegistry<R>,
    out: &mut W,
) -> AppResult<()>
where
    W: Write + Send,
{
    let runner = SeedRunner::new(registry);

    match action {
        SeedAction::Run { names } => {
            tracing::debug!(seeds = ?names, "Running seeder...");
            let executed = runner.run_named(&names).await.context("seed run")?;
            tracing::info!(executed, "Seeding completed");
        }
        SeedAction::RunAll => {
            tracing::debug!("Running all seeders...");
            let executed = runner.run_all().await.context("seed run-all")?;
            tracing::info!(executed, "Seeding completed");
        }
        SeedAction::List => {
            writeln!(
                out,
                "Available seed list:\n    {}",
                registry.seeds_list().join("\n    ")
            )
            .map_err(|e| AppError::internal(format!("failed to write seed list: {}", e)))?;
        }
    }

    Ok(())
}
