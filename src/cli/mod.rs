//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `migrate` - Database migrations
//! - `seed` - Database seeding
//! - `version` - Application version

pub mod args;

pub use args::{Cli, Commands, MigrateAction, MigrateArgs, SeedAction, SeedArgs};
