//! Demo orders for the demo users.

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, Statement, TransactionTrait};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::seeds::{Seed, SeedRecord, SeedState};

const INSERT_ORDER: &str = "INSERT INTO orders (id, reference, user_email, total_cents) \
     VALUES ($1, $2, $3, $4) ON CONFLICT (reference) DO NOTHING";

/// (reference, user email, total in cents)
const DEMO_ORDERS: &[(&str, &str, i64)] = &[
    ("ORD-0001", "jane@example.com", 4_999),
    ("ORD-0002", "jane@example.com", 12_550),
    ("ORD-0003", "john@example.com", 899),
];

/// Requires the users seed to have run first.
#[derive(Default)]
pub struct OrdersSeed {
    state: SeedState<DatabaseConnection>,
}

#[async_trait]
impl Seed<DatabaseConnection> for OrdersSeed {
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

        for (reference, email, total_cents) in DEMO_ORDERS {
            let result = txn
                .execute(Statement::from_sql_and_values(
                    DbBackend::Postgres,
                    INSERT_ORDER,
                    [
                        Uuid::new_v4().into(),
                        (*reference).into(),
                        (*email).into(),
                        (*total_cents).into(),
                    ],
                ))
                .await
                .map_err(fail)?;
            inserted += result.rows_affected();
        }

        txn.commit().await.map_err(fail)?;

        tracing::info!(seed = %self.name(), inserted, "Orders seeded");
        Ok(())
    }

    fn set_repository(&mut self, repo: DatabaseConnection) {
        self.state.set_repository(repo);
    }

    fn set_config(&mut self, record: SeedRecord) {
        self.state.set_config(record);
    }
}
