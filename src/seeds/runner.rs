//! Seed runner - executes seeds from a registry.
//!
//! Seeds run one after another and the first failure stops the run.
//! Seeds that already ran are not undone.

use super::registry::SeedRegistry;
use crate::errors::AppResult;

/// Executes seeds held by a [`SeedRegistry`].
pub struct SeedRunner<'a, R> {
    registry: &'a SeedRegistry<R>,
}

impl<'a, R> SeedRunner<'a, R> {
    pub fn new(registry: &'a SeedRegistry<R>) -> Self {
        Self { registry }
    }

    /// Run the given seeds in order. Returns how many ran.
    pub async fn run_named<S>(&self, names: &[S]) -> AppResult<usize>
    where
        S: AsRef<str>,
    {
        let mut executed = 0;

        for name in names {
            let name = name.as_ref();
            let seed = self.registry.method(name)?;

            tracing::info!(seed = %name, "Running seed");
            seed.seed().await?;
            executed += 1;
        }

        Ok(executed)
    }

    /// Run every constructed seed in declared order. Returns how many ran.
    pub async fn run_all(&self) -> AppResult<usize> {
        let mut executed = 0;

        for (name, seed) in self.registry.methods() {
            tracing::info!(seed = %name, "Running seed");
            seed.seed().await?;
            executed += 1;
        }

        Ok(executed)
    }
}
