//! Infrastructure layer - External systems integration
//!
//! Database connection lifecycle and the demo migrations.

pub mod db;

pub use db::{Database, Migrator};
