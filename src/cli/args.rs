//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Database migration and seeding commands
#[derive(Parser, Debug)]
#[command(name = "db-commands")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Seeds file path (overrides `SEEDS_CONFIG`)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run database migrations
    Migrate(MigrateArgs),

    /// Seed the database
    Seed(SeedArgs),

    /// Print the application version
    Version,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum MigrateAction {
    /// Run all pending migrations
    Up,
    /// Apply the next pending migration
    UpByOne,
    /// Apply pending migrations up to and including the given one
    UpTo {
        /// Migration name (e.g., "m20240102_000001_create_orders_table")
        name: String,
    },
    /// Rollback last migration
    Down,
    /// Rollback until the given migration is the latest applied
    DownTo {
        /// Migration name
        name: String,
    },
    /// Rollback and re-apply the latest migration
    Redo,
    /// Rollback all migrations
    Reset,
    /// Drop all tables and re-run all migrations
    Fresh,
    /// Show migration status
    Status,
    /// Print the latest applied migration
    Version,
    /// Generate a new migration module
    Create {
        /// Migration name (e.g., "create_products_table")
        name: String,
    },
}

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    #[command(subcommand)]
    pub action: SeedAction,
}

/// Seeding actions
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SeedAction {
    /// Run the named seeds in order
    Run {
        /// Seed names from the seeds file
        #[arg(required = true, num_args = 1..)]
        names: Vec<String>,
    },
    /// Run every enabled seed
    RunAll,
    /// Show declared seeds
    List,
}
