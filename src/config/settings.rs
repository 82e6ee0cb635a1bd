//! Application settings loaded from environment variables.

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::constants::{
    DEFAULT_APP_NAME, DEFAULT_APP_STAGE, DEFAULT_APP_VERSION, DEFAULT_DATABASE_SCHEMA,
    DEFAULT_DATABASE_URL, DEFAULT_MIGRATIONS_DIR, DEFAULT_SEEDS_CONFIG,
};
use crate::errors::{AppError, AppResult};
use crate::seeds::SeedingConfig;

/// Output style of the fmt layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(LogFormat::Full),
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            other => Err(AppError::config(format!("unknown LOG_FORMAT `{}`", other))),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Filter directive from `LOG_LEVEL`; `RUST_LOG` still takes precedence
    pub level: Option<String>,
    pub format: LogFormat,
}

/// Application identity, printed by the `version` command
#[derive(Debug, Clone)]
pub struct AppInfo {
    pub alias: String,
    pub version: String,
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub database_schema: String,
    pub migrations_dir: PathBuf,
    pub seeds_path: PathBuf,
    /// Set when the seeds file location came from `SEEDS_CONFIG` or `--config`
    pub seeds_path_explicit: bool,
    pub stage: String,
    pub app: AppInfo,
    pub log: LogConfig,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("database_schema", &self.database_schema)
            .field("migrations_dir", &self.migrations_dir)
            .field("seeds_path", &self.seeds_path)
            .field("seeds_path_explicit", &self.seeds_path_explicit)
            .field("stage", &self.stage)
            .field("app", &self.app)
            .field("log", &self.log)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment (and `.env`, if present).
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        let database_schema = var("DATABASE_SCHEMA", DEFAULT_DATABASE_SCHEMA);
        if database_schema.trim().is_empty() {
            return Err(AppError::config("DATABASE_SCHEMA must not be empty"));
        }

        let seeds_path = lookup("SEEDS_CONFIG").filter(|p| !p.trim().is_empty());
        let seeds_path_explicit = seeds_path.is_some();

        Ok(Self {
            database_url: var("DATABASE_URL", DEFAULT_DATABASE_URL),
            database_schema,
            migrations_dir: PathBuf::from(var("MIGRATIONS_DIR", DEFAULT_MIGRATIONS_DIR)),
            seeds_path: PathBuf::from(seeds_path.as_deref().unwrap_or(DEFAULT_SEEDS_CONFIG)),
            seeds_path_explicit,
            stage: var("APP_ENV", DEFAULT_APP_STAGE),
            app: AppInfo {
                alias: var("APP_NAME", DEFAULT_APP_NAME),
                version: var("APP_VERSION", DEFAULT_APP_VERSION),
            },
            log: LogConfig {
                level: lookup("LOG_LEVEL").filter(|l| !l.trim().is_empty()),
                format,
            },
        })
    }

    /// Override the seeds file location (`--config` flag).
    pub fn with_seeds_path(mut self, path: impl AsRef<Path>) -> Self {
        self.seeds_path = path.as_ref().to_path_buf();
        self.seeds_path_explicit = true;
        self
    }

    /// Load the seeds file.
    ///
    /// A missing file is only tolerated at the built-in default location.
    pub fn seeding(&self) -> AppResult<SeedingConfig> {
        if self.seeds_path_explicit {
            SeedingConfig::from_file(&self.seeds_path)
        } else {
            SeedingConfig::from_file_or_default(&self.seeds_path)
        }
    }
}
