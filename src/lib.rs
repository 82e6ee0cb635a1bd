//! db-commands - Database migrate and seed subcommands
//!
//! Thin command-line wrappers around `sea-orm-migration` plus a seed
//! registry that turns the seeds file into runnable seeds.
//!
//! # Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **seeds**: Seed trait, factory table, registry and runner
//! - **fixtures**: Demo seeds used by the binary
//! - **infra**: Database connection and migrations
//! - **utils**: Code generation helpers
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Run the users seed, then the orders seed
//! cargo run -- seed run users orders
//!
//! # List declared seeds
//! cargo run -- seed list
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod fixtures;
pub mod infra;
pub mod seeds;
pub mod utils;

// Re-export commonly used types at crate root
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use seeds::{Seed, SeedFactories, SeedRecord, SeedRegistry, SeedRunner, SeedingConfig};
