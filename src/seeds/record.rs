//! Seed declarations read from the seeds file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{SEED_STATUS_DISABLED, SEED_STATUS_ENABLED};
use crate::errors::{AppError, AppResult};

/// One configured seed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedRecord {
    /// Lookup key used on the command line
    pub name: String,
    /// Key into [`super::SeedFactories`]
    #[serde(rename = "class")]
    pub class_name: String,
    /// Off unless the seeds file turns it on
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub description: String,
}

impl SeedRecord {
    pub fn new(
        name: impl Into<String>,
        class_name: impl Into<String>,
        enabled: bool,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            class_name: class_name.into(),
            enabled,
            description: description.into(),
        }
    }

    /// Listing line: `+ users - Demo users` or `- orders - Demo orders`
    pub fn list_line(&self) -> String {
        let status = if self.enabled {
            SEED_STATUS_ENABLED
        } else {
            SEED_STATUS_DISABLED
        };
        format!("{} {} - {}", status, self.name, self.description)
    }
}

/// Seeding section of the configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedingConfig {
    #[serde(default)]
    pub seeds: Vec<SeedRecord>,
}

impl SeedingConfig {
    pub fn new(seeds: Vec<SeedRecord>) -> Self {
        Self { seeds }
    }

    /// Parse a YAML document of the form `seeds: [{name, class, enabled, description}]`.
    pub fn from_yaml(source: &str) -> AppResult<Self> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(source)
            .map_err(|e| AppError::config(format!("invalid seeds file: {}", e)))
    }

    /// Load the seeds file. A missing file is a configuration error.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        match Self::read_file(path)? {
            Some(config) => Ok(config),
            None => Err(AppError::config(format!(
                "seeds file {} not found",
                path.display()
            ))),
        }
    }

    /// Load the seeds file, treating a missing file as no seeds declared.
    ///
    /// Only meant for the built-in default location.
    pub fn from_file_or_default(path: &Path) -> AppResult<Self> {
        match Self::read_file(path)? {
            Some(config) => Ok(config),
            None => {
                tracing::warn!(path = %path.display(), "Seeds file not found, no seeds declared");
                Ok(Self::default())
            }
        }
    }

    fn read_file(path: &Path) -> AppResult<Option<Self>> {
        match fs::read_to_string(path) {
            Ok(source) => {
                let config = Self::from_yaml(&source)?;
                tracing::debug!(path = %path.display(), seeds = config.seeds.len(), "Seeds file loaded");
                Ok(Some(config))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::config(format!(
                "failed to read seeds file {}: {}",
                path.display(),
                e
            ))),
        }
    }
}
