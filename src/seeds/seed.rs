//! Seed capability trait.

use async_trait::async_trait;

use super::record::SeedRecord;
use crate::errors::{AppError, AppResult};

/// A unit of data-population logic run by the `seed` command.
///
/// `R` is the repository handle injected by [`super::SeedRegistry`],
/// usually a `sea_orm::DatabaseConnection`.
#[async_trait]
pub trait Seed<R>: Send + Sync {
    /// Configured seed name
    fn name(&self) -> &str;

    /// Runtime enablement, checked on every named lookup
    fn enabled(&self) -> bool;

    /// Populate the data
    async fn seed(&self) -> AppResult<()>;

    /// Inject the repository handle
    fn set_repository(&mut self, repo: R);

    /// Inject the seed's own configuration record
    fn set_config(&mut self, record: SeedRecord);
}

/// Injected state shared by most seed implementations.
///
/// Seeds embed this and forward the bookkeeping half of [`Seed`] to it.
#[derive(Debug, Clone)]
pub struct SeedState<R> {
    record: Option<SeedRecord>,
    repo: Option<R>,
}

impl<R> Default for SeedState<R> {
    fn default() -> Self {
        Self {
            record: None,
            repo: None,
        }
    }
}

impl<R> SeedState<R> {
    pub fn name(&self) -> &str {
        self.record.as_ref().map_or("", |r| r.name.as_str())
    }

    /// Enabled only once a record saying so has been injected
    pub fn enabled(&self) -> bool {
        self.record.as_ref().is_some_and(|r| r.enabled)
    }

    pub fn record(&self) -> Option<&SeedRecord> {
        self.record.as_ref()
    }

    /// Injected repository, or an error if the seed was never registered.
    pub fn repo(&self) -> AppResult<&R> {
        self.repo.as_ref().ok_or_else(|| {
            AppError::internal(format!("seed `{}` has no repository injected", self.name()))
        })
    }

    pub fn set_repository(&mut self, repo: R) {
        self.repo = Some(repo);
    }

    pub fn set_config(&mut self, record: SeedRecord) {
        self.record = Some(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uninjected_state() {
        let state: SeedState<u8> = SeedState::default();

        assert_eq!(state.name(), "");
        assert!(!state.enabled());
        assert!(matches!(state.repo(), Err(AppError::Internal(_))));
    }

    #[test]
    fn test_injected_state() {
        let mut state = SeedState::default();
        state.set_config(SeedRecord::new("users", "UserSeed", true, ""));
        state.set_repository(7u8);

        assert_eq!(state.name(), "users");
        assert!(state.enabled());
        assert_eq!(*state.repo().unwrap(), 7);
    }
}
