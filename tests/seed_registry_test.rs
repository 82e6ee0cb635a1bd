//! Seed registry construction and lookup tests.

mod common;

use tokio_test::{assert_err, assert_ok};

use common::{config, factories, record, Journal, RecordingSeed};
use db_commands::errors::AppError;
use db_commands::seeds::{Seed, SeedFactories, SeedRegistry};

#[test]
fn test_all_enabled_records_are_constructed() {
    let cfg = config(vec![
        record("a", "Recording", true),
        record("b", "Recording", true),
        record("c", "Failing", true),
    ]);

    let registry = assert_ok!(SeedRegistry::new(&cfg, &factories(), Journal::default()));

    assert_eq!(registry.len(), 3);
    assert_eq!(registry.methods().count(), 3);
    assert_eq!(registry.names(), vec!["a", "b", "c"]);
}

#[test]
fn test_disabled_record_is_listed_but_not_constructed() {
    let cfg = config(vec![
        record("a", "Recording", true),
        record("b", "Recording", false),
    ]);

    let registry = assert_ok!(SeedRegistry::new(&cfg, &factories(), Journal::default()));

    assert_eq!(registry.names(), vec!["a"]);
    assert_eq!(registry.records().len(), 2);
    assert_eq!(
        registry.seeds_list(),
        vec!["+ a - a seed".to_string(), "- b - b seed".to_string()]
    );
}

#[test]
fn test_disabled_record_needs_no_registered_class() {
    let cfg = config(vec![record("legacy", "RemovedClass", false)]);

    let registry = assert_ok!(SeedRegistry::new(&cfg, &factories(), Journal::default()));

    assert!(registry.is_empty());
    assert_eq!(registry.seeds_list(), vec!["- legacy - legacy seed".to_string()]);
}

#[test]
fn test_unknown_method_is_not_found() {
    let cfg = config(vec![record("a", "Recording", true)]);
    let registry = assert_ok!(SeedRegistry::new(&cfg, &factories(), Journal::default()));

    let err = registry.method("missing").err().expect("lookup should fail");

    assert!(matches!(err.root(), AppError::NoMethodFound(name) if name == "missing"));
    assert_eq!(err.operations(), vec!["Seeder.method"]);
}

#[test]
fn test_config_disabled_seed_is_not_found() {
    let cfg = config(vec![record("a", "Recording", false)]);
    let registry = assert_ok!(SeedRegistry::new(&cfg, &factories(), Journal::default()));

    let err = registry.method("a").err().expect("lookup should fail");
    assert!(matches!(err.root(), AppError::NoMethodFound(_)));
}

#[test]
fn test_runtime_disabled_seed_is_rejected() {
    let cfg = config(vec![record("off", "SwitchedOff", true)]);
    let registry = assert_ok!(SeedRegistry::new(&cfg, &factories(), Journal::default()));

    let err = registry.method("off").err().expect("lookup should fail");
    assert!(matches!(err.root(), AppError::SeedDisabled(name) if name == "off"));
}

#[test]
fn test_found_seed_has_config_injected() {
    let cfg = config(vec![record("users", "Recording", true)]);
    let registry = assert_ok!(SeedRegistry::new(&cfg, &factories(), Journal::default()));

    let seed = registry.method("users").ok().expect("lookup should succeed");
    assert_eq!(seed.name(), "users");
    assert!(seed.enabled());
}

#[tokio::test]
async fn test_repository_is_injected_into_every_seed() {
    let journal = Journal::default();
    let cfg = config(vec![
        record("a", "Recording", true),
        record("b", "Recording", true),
    ]);
    let registry = assert_ok!(SeedRegistry::new(&cfg, &factories(), journal.clone()));

    for (_, seed) in registry.methods() {
        assert_ok!(seed.seed().await);
    }

    assert_eq!(journal.entries(), vec!["a", "b"]);
}

#[test]
fn test_unregistered_class_fails_construction() {
    let cfg = config(vec![
        record("a", "Recording", true),
        record("b", "Unknown", true),
    ]);

    let err = assert_err!(SeedRegistry::new(&cfg, &factories(), Journal::default()));

    assert!(matches!(err.root(), AppError::SeedClassNotRegistered(class) if class == "Unknown"));
}

#[test]
fn test_factory_without_instance_is_invalid() {
    let factories = SeedFactories::<Journal>::new().register_fn("Broken", || None);
    let cfg = config(vec![record("a", "Broken", true)]);

    let err = assert_err!(SeedRegistry::new(&cfg, &factories, Journal::default()));

    assert!(matches!(err.root(), AppError::SeedClassInvalid(class) if class == "Broken"));
}

#[test]
fn test_custom_factory_closure() {
    let factories = SeedFactories::<Journal>::new().register_fn("Custom", || {
        Some(Box::new(RecordingSeed::default()) as Box<dyn Seed<Journal>>)
    });
    let cfg = config(vec![record("a", "Custom", true)]);

    let registry = assert_ok!(SeedRegistry::new(&cfg, &factories, Journal::default()));
    assert_eq!(registry.names(), vec!["a"]);
}

#[test]
fn test_building_twice_yields_same_names() {
    let cfg = config(vec![
        record("z", "Recording", true),
        record("m", "Recording", false),
        record("a", "Failing", true),
    ]);
    let factories = factories();

    let first = assert_ok!(SeedRegistry::new(&cfg, &factories, Journal::default()));
    let second = assert_ok!(SeedRegistry::new(&cfg, &factories, Journal::default()));

    assert_eq!(first.names(), second.names());
    assert_eq!(first.seeds_list(), second.seeds_list());
}

#[tokio::test]
async fn test_duplicate_name_last_declaration_wins() {
    let journal = Journal::default();
    let mut later = record("dup", "Failing", true);
    later.description = "second".to_string();
    let cfg = config(vec![
        record("dup", "Recording", true),
        record("other", "Recording", true),
        later,
    ]);

    let registry = assert_ok!(SeedRegistry::new(&cfg, &factories(), journal.clone()));

    // Replaced in place, so declared order of first appearance is kept
    assert_eq!(registry.names(), vec!["dup", "other"]);

    let seed = registry.method("dup").ok().expect("lookup should succeed");
    let err = assert_err!(seed.seed().await);
    assert!(matches!(err, AppError::SeedFailed { .. }));
    assert_eq!(registry.seeds_list().len(), 3);
}

#[test]
fn test_users_and_orders_scenario() {
    let factories = SeedFactories::<Journal>::new().register::<RecordingSeed>("UserSeed");
    let cfg = config(vec![
        record("users", "UserSeed", true),
        record("orders", "OrderSeed", false),
    ]);

    let registry = assert_ok!(SeedRegistry::new(&cfg, &factories, Journal::default()));

    assert_eq!(registry.names(), vec!["users"]);
    let list = registry.seeds_list();
    assert_eq!(list.len(), 2);
    assert!(list[0].starts_with("+ users - "));
    assert!(list[1].starts_with("- orders - "));
}
