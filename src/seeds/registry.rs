//! Seed registry - resolves declared seeds into runnable instances.

use std::collections::HashMap;

use super::factory::SeedFactories;
use super::record::{SeedRecord, SeedingConfig};
use super::seed::Seed;
use crate::errors::{AppError, AppResult, ResultExt};

/// Runnable seeds for one command invocation.
///
/// Holds an instance for every record enabled in configuration, in
/// declared order, plus the full declared list for [`Self::seeds_list`].
pub struct SeedRegistry<R> {
    records: Vec<SeedRecord>,
    seeds: Vec<(String, Box<dyn Seed<R>>)>,
    index: HashMap<String, usize>,
}

impl<R> std::fmt::Debug for SeedRegistry<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedRegistry")
            .field("records", &self.records)
            .field("seeds", &self.seeds.iter().map(|(n, _)| n).collect::<Vec<_>>())
            .finish()
    }
}

impl<R> SeedRegistry<R>
where
    R: Clone + Send + Sync + 'static,
{
    /// Construct every enabled seed and inject its record and `repo`.
    ///
    /// Fails on the first record whose class cannot be built; no partial
    /// registry is returned.
    pub fn new(config: &SeedingConfig, factories: &SeedFactories<R>, repo: R) -> AppResult<Self> {
        let mut seeds: Vec<(String, Box<dyn Seed<R>>)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for record in &config.seeds {
            if !record.enabled {
                tracing::debug!(seed = %record.name, "Seed disabled in config, skipping");
                continue;
            }

            let mut seed = factories.create(&record.class_name).context("Seeder.new")?;
            seed.set_config(record.clone());
            seed.set_repository(repo.clone());

            // Last declaration wins, keeping the slot of the first one
            match index.get(&record.name) {
                Some(&slot) => {
                    tracing::warn!(seed = %record.name, class = %record.class_name, "Duplicate seed name, replacing earlier declaration");
                    seeds[slot] = (record.name.clone(), seed);
                }
                None => {
                    index.insert(record.name.clone(), seeds.len());
                    seeds.push((record.name.clone(), seed));
                }
            }
        }

        tracing::debug!(
            declared = config.seeds.len(),
            constructed = seeds.len(),
            "Seed registry built"
        );

        Ok(Self {
            records: config.seeds.clone(),
            seeds,
            index,
        })
    }
}

impl<R> SeedRegistry<R> {
    /// All constructed seeds in declared order
    pub fn methods(&self) -> impl Iterator<Item = (&str, &dyn Seed<R>)> + '_ {
        self.seeds
            .iter()
            .map(|(name, seed)| (name.as_str(), seed.as_ref()))
    }

    /// Look up a seed that may run right now.
    pub fn method(&self, name: &str) -> AppResult<&dyn Seed<R>> {
        let seed = self
            .index
            .get(name)
            .map(|&slot| self.seeds[slot].1.as_ref())
            .ok_or_else(|| AppError::NoMethodFound(name.to_string()))
            .context("Seeder.method")?;

        if !seed.enabled() {
            return Err(AppError::SeedDisabled(name.to_string())).context("Seeder.method");
        }

        Ok(seed)
    }

    /// One status line per declared seed, enabled or not.
    pub fn seeds_list(&self) -> Vec<String> {
        self.records.iter().map(SeedRecord::list_line).collect()
    }

    /// Names of the constructed seeds in declared order
    pub fn names(&self) -> Vec<&str> {
        self.seeds.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Every declared record, including disabled ones
    pub fn records(&self) -> &[SeedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }
}
