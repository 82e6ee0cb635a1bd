//! Class-name to constructor table for seeds.

use std::collections::HashMap;

use super::seed::Seed;
use crate::errors::{AppError, AppResult};

/// Zero-argument constructor producing a fresh seed instance.
///
/// Returning `None` marks the class as unusable.
pub type SeedFactory<R> = Box<dyn Fn() -> Option<Box<dyn Seed<R>>> + Send + Sync>;

/// Seed constructors keyed by the `class` of a seed record.
///
/// Populated once by the embedding application at startup.
pub struct SeedFactories<R> {
    factories: HashMap<String, SeedFactory<R>>,
}

impl<R> Default for SeedFactories<R> {
    fn default() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }
}

impl<R: 'static> std::fmt::Debug for SeedFactories<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedFactories")
            .field("classes", &self.class_names())
            .finish()
    }
}

impl<R: 'static> SeedFactories<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a seed type constructed through `Default`.
    pub fn register<T>(self, class_name: impl Into<String>) -> Self
    where
        T: Seed<R> + Default + 'static,
    {
        self.register_fn(class_name, || Some(Box::new(T::default()) as Box<dyn Seed<R>>))
    }

    /// Register a custom constructor. A later registration for the same class replaces it.
    pub fn register_fn<F>(mut self, class_name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Option<Box<dyn Seed<R>>> + Send + Sync + 'static,
    {
        self.factories.insert(class_name.into(), Box::new(factory));
        self
    }

    pub fn contains(&self, class_name: &str) -> bool {
        self.factories.contains_key(class_name)
    }

    /// Registered class names, sorted
    pub fn class_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Build a new instance of `class_name`.
    pub(crate) fn create(&self, class_name: &str) -> AppResult<Box<dyn Seed<R>>> {
        let factory = self
            .factories
            .get(class_name)
            .ok_or_else(|| AppError::SeedClassNotRegistered(class_name.to_string()))?;

        factory().ok_or_else(|| AppError::SeedClassInvalid(class_name.to_string()))
    }
}
