//! Demo seeds wired into the `db-commands` binary.
//!
//! Applications embedding the library build their own table the same way.

mod orders_seed;
mod users_seed;

use sea_orm::DatabaseConnection;

use crate::seeds::SeedFactories;

pub use orders_seed::OrdersSeed;
pub use users_seed::UsersSeed;

/// Class name for [`UsersSeed`] in the seeds file
pub const USER_SEED_CLASS: &str = "UserSeed";

/// Class name for [`OrdersSeed`] in the seeds file
pub const ORDER_SEED_CLASS: &str = "OrderSeed";

/// Factory table for the demo seeds
pub fn factories() -> SeedFactories<DatabaseConnection> {
    SeedFactories::new()
        .register::<UsersSeed>(USER_SEED_CLASS)
        .register::<OrdersSeed>(ORDER_SEED_CLASS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_classes_registered() {
        let factories = factories();
        assert_eq!(factories.class_names(), vec![ORDER_SEED_CLASS, USER_SEED_CLASS]);
    }
}
