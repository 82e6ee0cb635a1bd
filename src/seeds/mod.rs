//! Database seeding.
//!
//! Seeds are declared in the seeds file ([`SeedingConfig`]) and resolved
//! against a [`SeedFactories`] table supplied by the application:
//!
//! ```no_run
//! # use db_commands::seeds::*;
//! # use db_commands::errors::AppResult;
//! # async fn demo(factories: SeedFactories<()>) -> AppResult<()> {
//! let config = SeedingConfig::from_yaml("seeds:\n  - name: users\n    class: UserSeed\n")?;
//! let registry = SeedRegistry::new(&config, &factories, ())?;
//! SeedRunner::new(&registry).run_named(&["users"]).await?;
//! # Ok(())
//! # }
//! ```

mod factory;
mod record;
mod registry;
mod runner;
mod seed;

pub use factory::{SeedFactories, SeedFactory};
pub use record::{SeedRecord, SeedingConfig};
pub use registry::SeedRegistry;
pub use runner::SeedRunner;
pub use seed::{Seed, SeedState};
