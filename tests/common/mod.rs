//! Test seeds sharing an in-memory journal as their repository.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use db_commands::errors::{AppError, AppResult};
use db_commands::seeds::{Seed, SeedFactories, SeedRecord, SeedState, SeedingConfig};

/// Repository stand-in recording which seeds ran, in order.
#[derive(Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    pub fn record(&self, entry: &str) {
        self.0.lock().unwrap().push(entry.to_string());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

/// Writes its name to the journal.
#[derive(Default)]
pub struct RecordingSeed {
    state: SeedState<Journal>,
}

#[async_trait]
impl Seed<Journal> for RecordingSeed {
    fn name(&self) -> &str {
        self.state.name()
    }

    fn enabled(&self) -> bool {
        self.state.enabled()
    }

    async fn seed(&self) -> AppResult<()> {
        self.state.repo()?.record(self.name());
        Ok(())
    }

    fn set_repository(&mut self, repo: Journal) {
        self.state.set_repository(repo);
    }

    fn set_config(&mut self, record: SeedRecord) {
        self.state.set_config(record);
    }
}

/// Writes its name to the journal, then fails.
#[derive(Default)]
pub struct FailingSeed {
    state: SeedState<Journal>,
}

#[async_trait]
impl Seed<Journal> for FailingSeed {
    fn name(&self) -> &str {
        self.state.name()
    }

    fn enabled(&self) -> bool {
        self.state.enabled()
    }

    async fn seed(&self) -> AppResult<()> {
        self.state.repo()?.record(self.name());
        Err(AppError::seed_failed(self.name(), "boom"))
    }

    fn set_repository(&mut self, repo: Journal) {
        self.state.set_repository(repo);
    }

    fn set_config(&mut self, record: SeedRecord) {
        self.state.set_config(record);
    }
}

/// Reports itself disabled regardless of configuration.
#[derive(Default)]
pub struct SwitchedOffSeed {
    state: SeedState<Journal>,
}

#[async_trait]
impl Seed<Journal> for SwitchedOffSeed {
    fn name(&self) -> &str {
        self.state.name()
    }

    fn enabled(&self) -> bool {
        false
    }

    async fn seed(&self) -> AppResult<()> {
        self.state.repo()?.record(self.name());
        Ok(())
    }

    fn set_repository(&mut self, repo: Journal) {
        self.state.set_repository(repo);
    }

    fn set_config(&mut self, record: SeedRecord) {
        self.state.set_config(record);
    }
}

pub fn factories() -> SeedFactories<Journal> {
    SeedFactories::new()
        .register::<RecordingSeed>("Recording")
        .register::<FailingSeed>("Failing")
        .register::<SwitchedOffSeed>("SwitchedOff")
}

pub fn record(name: &str, class: &str, enabled: bool) -> SeedRecord {
    SeedRecord::new(name, class, enabled, format!("{} seed", name))
}

pub fn config(records: Vec<SeedRecord>) -> SeedingConfig {
    SeedingConfig::new(records)
}
