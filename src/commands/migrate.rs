//! Migrate command - Database migration management.

use sea_orm_migration::MigratorTrait;

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult, ResultExt};
use crate::infra::Database;
use crate::utils::templates;

/// Execute the migrate command against migrator `M`
pub async fn execute<M: MigratorTrait>(args: MigrateArgs, config: &Config) -> AppResult<()> {
    let action = match args.action {
        // Generating a module does not need a connection
        MigrateAction::Create { name } => return create(config, &name),
        action => action,
    };

    tracing::info!(action = ?action, "Running migration command...");

    let db = Database::<M>::connect(config)
        .await
        .context("migrate connect")?;

    let result = match db.ping().await.context("migrate ping") {
        Ok(()) => run_action(&db, action).await,
        Err(e) => Err(e),
    };

    if let Err(e) = db.close().await {
        tracing::error!(error = %e, "Failed to close database connection");
        if result.is_ok() {
            return Err(e).context("migrate close");
        }
    }

    result
}

async fn run_action<M: MigratorTrait>(db: &Database<M>, action: MigrateAction) -> AppResult<()> {
    match action {
        MigrateAction::Up => {
            tracing::info!("Running pending migrations...");
            db.run_migrations().await.context("migrate up")?;
            tracing::info!("Migrations completed successfully");
        }
        MigrateAction::UpByOne => {
            tracing::info!("Applying next pending migration...");
            db.up_by_one().await.context("migrate up-by-one")?;
            tracing::info!("Migration applied successfully");
        }
        MigrateAction::UpTo { name } => {
            tracing::info!(migration = %name, "Migrating up to target...");
            let applied = db.up_to(&name).await.context("migrate up-to")?;
            tracing::info!(applied, "Migrations completed successfully");
        }
        MigrateAction::Down => {
            tracing::info!("Rolling back last migration...");
            db.rollback_migration().await.context("migrate down")?;
            tracing::info!("Rollback completed successfully");
        }
        MigrateAction::DownTo { name } => {
            tracing::info!(migration = %name, "Rolling back to target...");
            let rolled_back = db.down_to(&name).await.context("migrate down-to")?;
            tracing::info!(rolled_back, "Rollback completed successfully");
        }
        MigrateAction::Redo => {
            tracing::info!("Re-applying latest migration...");
            db.redo().await.context("migrate redo")?;
            tracing::info!("Redo completed successfully");
        }
        MigrateAction::Reset => {
            tracing::warn!("Rolling back all migrations...");
            db.reset().await.context("migrate reset")?;
            tracing::info!("Reset completed successfully");
        }
        MigrateAction::Fresh => {
            tracing::warn!("Resetting database and running all migrations...");
            db.fresh_migrations().await.context("migrate fresh")?;
            tracing::info!("Fresh migrations completed successfully");
        }
        MigrateAction::Status => {
            tracing::info!("Checking migration status...");
            let status = db.migration_status().await.context("migrate status")?;
            for (name, applied) in status {
                let status_str = if applied { "applied" } else { "pending" };
                println!("{}: {}", name, status_str);
            }
        }
        MigrateAction::Version => {
            let version = db.current_version().await.context("migrate version")?;
            println!("{}", version.as_deref().unwrap_or("0"));
        }
        MigrateAction::Create { .. } => {
            return Err(AppError::internal("migrate create runs without a connection"));
        }
    }

    Ok(())
}

fn create(config: &Config, name: &str) -> AppResult<()> {
    tracing::info!(migration = %name, "Generating migration...");
    let path = templates::generate_migration(&config.migrations_dir, name).context("migrate create")?;
    println!("Created migration: {}", path.display());
    println!("Don't forget to register it in your Migrator!");
    Ok(())
}
