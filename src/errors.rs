//! Centralized error handling.
//!
//! Provides a unified error type for the seed registry, the migrate
//! wrapper and the command layer.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Seed registry construction
    #[error("seed class name not registered: {0}")]
    SeedClassNotRegistered(String),

    #[error("seed class name not valid: {0}")]
    SeedClassInvalid(String),

    // Seed lookup
    #[error("seed method `{0}` does not exist")]
    NoMethodFound(String),

    #[error("seed method `{0}` is disabled")]
    SeedDisabled(String),

    #[error("seed `{name}` failed: {message}")]
    SeedFailed { name: String, message: String },

    // Migrations
    #[error("migration `{0}` not found")]
    MigrationNotFound(String),

    // Configuration
    #[error("configuration error: {0}")]
    Config(String),

    // External service errors
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Any error annotated with the operation that produced it
    #[error("{op} error: {source}")]
    Operation {
        op: &'static str,
        #[source]
        source: Box<AppError>,
    },

    // Internal
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Innermost error, skipping any `Operation` wrappers.
    pub fn root(&self) -> &AppError {
        let mut current = self;
        while let AppError::Operation { source, .. } = current {
            current = source;
        }
        current
    }

    /// Chain of operation names from outermost to innermost.
    pub fn operations(&self) -> Vec<&'static str> {
        let mut ops = Vec::new();
        let mut current = self;
        while let AppError::Operation { op, source } = current {
            ops.push(*op);
            current = source;
        }
        ops
    }
}

/// Convenience constructors
impl AppError {
    pub fn seed_failed(name: impl Into<String>, message: impl std::fmt::Display) -> Self {
        AppError::SeedFailed {
            name: name.into(),
            message: message.to_string(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

/// Extension trait for annotating errors with the failing operation
pub trait ResultExt<T> {
    fn context(self, op: &'static str) -> AppResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<AppError>,
{
    fn context(self, op: &'static str) -> AppResult<T> {
        self.map_err(|e| AppError::Operation {
            op,
            source: Box::new(e.into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_unwraps_operations() {
        let result: AppResult<()> = Err(AppError::NoMethodFound("users".to_string()));
        let err = result
            .context("Seeder.method")
            .context("seed run")
            .unwrap_err();

        assert!(matches!(err.root(), AppError::NoMethodFound(name) if name == "users"));
        assert_eq!(err.operations(), vec!["seed run", "Seeder.method"]);
    }

    #[test]
    fn test_operation_display_includes_op_and_cause() {
        let result: AppResult<()> = Err(AppError::SeedDisabled("orders".to_string()));
        let err = result.context("seed run").unwrap_err();

        assert_eq!(
            err.to_string(),
            "seed run error: seed method `orders` is disabled"
        );
    }

    #[test]
    fn test_root_of_plain_error_is_itself() {
        let err = AppError::config("bad file");
        assert!(matches!(err.root(), AppError::Config(_)));
        assert!(err.operations().is_empty());
    }

    #[test]
    fn test_db_err_converts_through_context() {
        let result: Result<(), sea_orm::DbErr> =
            Err(sea_orm::DbErr::Custom("boom".to_string()));
        let err = result.context("migrate up").unwrap_err();

        assert!(matches!(err.root(), AppError::Database(_)));
    }
}
