//! Database connection and migration control.

use std::marker::PhantomData;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Statement,
};
use sea_orm_migration::MigratorTrait;

use crate::config::Config;
use crate::errors::{AppError, AppResult};

pub mod migrations;

pub use migrations::Migrator;

/// Database wrapper for connection management.
///
/// `M` is the application's migrator; every migration action is a
/// pass-through to `sea-orm-migration`.
pub struct Database<M = Migrator> {
    connection: DatabaseConnection,
    _migrator: PhantomData<M>,
}

impl<M: MigratorTrait> Database<M> {
    /// Connect without running migrations (for CLI commands).
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.database_url.clone());
        options
            .set_schema_search_path(config.database_schema.clone())
            .sqlx_logging(false);

        let connection = SeaDatabase::connect(options).await?;
        tracing::debug!(schema = %config.database_schema, "Database connected");

        Ok(Self {
            connection,
            _migrator: PhantomData,
        })
    }

    /// Get a reference to the database connection.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }

    /// Close the connection pool.
    pub async fn close(self) -> Result<(), DbErr> {
        self.connection.close().await
    }

    /// Run pending migrations.
    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        M::up(&self.connection, None).await
    }

    /// Apply only the next pending migration.
    pub async fn up_by_one(&self) -> Result<(), DbErr> {
        M::up(&self.connection, Some(1)).await
    }

    /// Apply pending migrations up to and including `name`. Returns how many were applied.
    pub async fn up_to(&self, name: &str) -> AppResult<u32> {
        let pending = self.pending_names().await?;

        if let Some(steps) = steps_up_to(&pending, name) {
            M::up(&self.connection, Some(steps)).await?;
            return Ok(steps);
        }

        if self.applied_names().await?.iter().any(|m| m == name) {
            tracing::info!(migration = %name, "Migration already applied");
            return Ok(0);
        }

        Err(AppError::MigrationNotFound(name.to_string()))
    }

    /// Rollback the last migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        M::down(&self.connection, Some(1)).await
    }

    /// Roll back until `name` is the latest applied migration. Returns how many were rolled back.
    pub async fn down_to(&self, name: &str) -> AppResult<u32> {
        let applied = self.applied_names().await?;

        if let Some(steps) = steps_down_to(&applied, name) {
            if steps > 0 {
                M::down(&self.connection, Some(steps)).await?;
            }
            return Ok(steps);
        }

        if self.pending_names().await?.iter().any(|m| m == name) {
            tracing::info!(migration = %name, "Migration not applied, nothing to roll back");
            return Ok(0);
        }

        Err(AppError::MigrationNotFound(name.to_string()))
    }

    /// Roll back and re-apply the latest migration.
    pub async fn redo(&self) -> Result<(), DbErr> {
        M::down(&self.connection, Some(1)).await?;
        M::up(&self.connection, Some(1)).await
    }

    /// Roll back every applied migration.
    pub async fn reset(&self) -> Result<(), DbErr> {
        M::reset(&self.connection).await
    }

    /// Reset database and run all migrations fresh.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        M::fresh(&self.connection).await
    }

    /// Get migration status (list all migrations with applied status).
    pub async fn migration_status(&self) -> Result<Vec<(String, bool)>, DbErr> {
        let applied = self.applied_names().await?.into_iter().map(|name| (name, true));
        let pending = self.pending_names().await?.into_iter().map(|name| (name, false));

        Ok(applied.chain(pending).collect())
    }

    /// Name of the latest applied migration, if any.
    pub async fn current_version(&self) -> Result<Option<String>, DbErr> {
        Ok(self.applied_names().await?.pop())
    }

    async fn applied_names(&self) -> Result<Vec<String>, DbErr> {
        Ok(M::get_applied_migrations(&self.connection)
            .await?
            .iter()
            .map(|m| m.name().to_string())
            .collect())
    }

    async fn pending_names(&self) -> Result<Vec<String>, DbErr> {
        Ok(M::get_pending_migrations(&self.connection)
            .await?
            .iter()
            .map(|m| m.name().to_string())
            .collect())
    }
}

/// Migrations to apply so that `name`, counted from the head of `pending`, ends up applied.
fn steps_up_to(pending: &[String], name: &str) -> Option<u32> {
    pending
        .iter()
        .position(|m| m == name)
        .map(|position| (position + 1) as u32)
}

/// Migrations to roll back so that `name` becomes the last entry of `applied`.
fn steps_down_to(applied: &[String], name: &str) -> Option<u32> {
    applied
        .iter()
        .position(|m| m == name)
        .map(|position| (applied.len() - position - 1) as u32)
}
