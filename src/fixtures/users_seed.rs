//! Demo user accounts.

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, Statement, TransactionTrait};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::seeds::{Seed, SeedRecord, SeedState};

const INSERT_USER: &str =
    "INSERT INTO users (id, email, name) VALUES ($1, $2, $3) ON CONFLICT (email) DO NOTHING";

/// (email, name)
const DEMO_USERS: &[(&str, &str)] = &[
    ("admin@example.com", "Admin"),
    ("jane@example.com", "Jane Doe"),
    ("john@example.com", "John Smith"),
];

#[derive(Default)]
pub struct UsersSeed {
    state: SeedState<DatabaseConnection>,
}

#[async_trait]
impl Seed<DatabaseConnection> for UsersSeed {
    fn name(&self) -> &str {
        self.state.name()
    }

    fn enabled(&self) -> bool {
        self.state.enabled()
    }

    async fn seed(&self) -> AppResult<()> {
        let db = self.state.repo()?;
        let fail = |e: sea_orm::DbErr| AppError::seed_failed(self.name(), e);

        let txn = db.begin().await.map_err(fail)?;
        let mut inserted = 0;

        for (email, name) in DEMO_USERS {
            let result = txn
                .execute(Statement::from_sql_and_values(
                    DbBackend::Postgres,
                    INSERT_USER,
                    [Uuid::new_v4().into(), (*email).into(), (*name).into()],
                ))
                .await
                .map_err(fail)?;
            inserted += result.rows_affected();
        }

        txn.commit().await.map_err(fail)?;

        tracing::info!(seed = %self.name(), inserted, "Users seeded");
        Ok(())
    }

    fn set_repository(&mut self, repo: DatabaseConnection) {
        self.state.set_repository(repo);
    }

    fn set_config(&mut self, record: SeedRecord) {
        self.state.set_config(record);
    }
}
