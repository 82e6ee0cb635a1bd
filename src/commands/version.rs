//! Version command - Prints the configured application version.

use crate::config::Config;
use crate::errors::AppResult;

/// Execute the version command
pub fn execute(config: &Config) -> AppResult<()> {
    tracing::debug!(app = %config.app.alias, stage = %config.stage, "Printing version");
    println!("{}", config.app.version);
    Ok(())
}
