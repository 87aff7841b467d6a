//! Core preference store behavior across every shipped host

mod common;

use common::*;
use prefstore::PrefValue;
use pretty_assertions::assert_eq;

/// Test that every typed getter returns its fixed default for unwritten keys
async fn test_defaults_on_miss(fixture: StoreTestFixture) {
    let store = &fixture.store;

    assert_eq!(store.get_string("k").await.unwrap(), "defValue");
    assert_eq!(store.get_int("k").await.unwrap(), 0);
    assert_eq!(store.get_float("k").await.unwrap(), 0.0);
    assert_eq!(store.get_long("k").await.unwrap(), 0);
    assert_eq!(store.get_boolean("k").await.unwrap(), false);
    assert_eq!(store.get_double("k").await.unwrap(), 0.0);
}

test_all_hosts!(defaults_on_miss, test_defaults_on_miss);

/// Test exact round-trips for every natively stored type
async fn test_typed_round_trips(fixture: StoreTestFixture) {
    let store = &fixture.store;

    store.put_string("s", "hello").await.unwrap();
    assert_eq!(store.get_string("s").await.unwrap(), "hello");

    store.put_int("i", -42).await.unwrap();
    assert_eq!(store.get_int("i").await.unwrap(), -42);

    store.put_float("f", 1.25).await.unwrap();
    assert_eq!(store.get_float("f").await.unwrap(), 1.25);

    store.put_long("l", i64::MIN).await.unwrap();
    assert_eq!(store.get_long("l").await.unwrap(), i64::MIN);

    store.put_boolean("b", true).await.unwrap();
    assert_eq!(store.get_boolean("b").await.unwrap(), true);
}

test_all_hosts!(typed_round_trips, test_typed_round_trips);

/// Test the decimal-string double round-trip
async fn test_double_round_trip(fixture: StoreTestFixture) {
    let store = &fixture.store;

    store.put_double("pi", 3.14).await.unwrap();

    // Exact decimal-string fidelity, not a floating tolerance
    assert_eq!(store.get_double("pi").await.unwrap(), 3.14);

    // The encoded form is observable through the string path
    assert_eq!(store.get_string("pi").await.unwrap(), "3.14");
}

test_all_hosts!(double_round_trip, test_double_round_trip);

/// Test that an absent key and a non-numeric string are indistinguishable
/// through the double accessor
async fn test_double_ambiguity(fixture: StoreTestFixture) {
    let store = &fixture.store;

    store.put_string("junk", "not-a-number").await.unwrap();

    assert_eq!(store.get_double("never-written").await.unwrap(), 0.0);
    assert_eq!(store.get_double("junk").await.unwrap(), 0.0);
}

test_all_hosts!(double_ambiguity, test_double_ambiguity);

/// Test that writes overwrite the prior value regardless of its type
async fn test_overwrite_across_types(fixture: StoreTestFixture) {
    let store = &fixture.store;

    store.put_int("k", 7).await.unwrap();
    store.put_string("k", "x").await.unwrap();

    let all = store.get_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all.get("k"), Some(&PrefValue::from("x")));
    assert_eq!(store.get_string("k").await.unwrap(), "x");
    assert_eq!(store.get_int("k").await.unwrap(), 0);
}

test_all_hosts!(overwrite_across_types, test_overwrite_across_types);

/// Test that remove restores defaults and drops the key from the snapshot
async fn test_remove(fixture: StoreTestFixture) {
    let store = &fixture.store;

    store.put_string("k", "value").await.unwrap();
    store.put_int("other", 1).await.unwrap();

    store.remove("k").await.unwrap();

    assert_eq!(store.get_string("k").await.unwrap(), "defValue");
    let all = store.get_all().await.unwrap();
    assert!(!all.contains_key("k"));
    assert!(all.contains_key("other"));

    // Removing an absent key is a no-op
    store.remove("k").await.unwrap();
}

test_all_hosts!(remove, test_remove);

/// Test that clear empties the namespace and is idempotent
async fn test_clear_is_idempotent(fixture: StoreTestFixture) {
    let store = &fixture.store;

    store.put_string("a", "1").await.unwrap();
    store.put_boolean("b", true).await.unwrap();

    store.clear().await.unwrap();
    assert!(store.get_all().await.unwrap().is_empty());
    assert_eq!(store.get_string("a").await.unwrap(), "defValue");
    assert_eq!(store.get_boolean("b").await.unwrap(), false);

    // Second clear is a no-op, not an error
    store.clear().await.unwrap();
    assert!(store.get_all().await.unwrap().is_empty());
}

test_all_hosts!(clear_is_idempotent, test_clear_is_idempotent);

/// Test that get_all returns exactly the written entries
async fn test_get_all_exact_entries(fixture: StoreTestFixture) {
    let store = &fixture.store;

    store.put_int("a", 1).await.unwrap();
    store.put_string("b", "x").await.unwrap();

    let all = store.get_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all.get("a"), Some(&PrefValue::Int(1)));
    assert_eq!(all.get("b"), Some(&PrefValue::String("x".to_string())));
}

test_all_hosts!(get_all_exact_entries, test_get_all_exact_entries);

/// Test concurrent writers against the same namespace
async fn test_concurrent_access(fixture: StoreTestFixture) {
    use futures::future::join_all;
    use std::sync::Arc;

    let store = Arc::new(fixture.store);
    let num_tasks = 16;

    let tasks: Vec<_> = (0..num_tasks)
        .map(|task_id| {
            let store = store.clone();
            tokio::spawn(async move {
                let key = format!("task-{task_id}");
                store.put_long(&key, task_id).await.expect("Put should succeed");
                let value = store.get_long(&key).await.expect("Get should succeed");
                assert_eq!(value, task_id, "Value should match");
            })
        })
        .collect();

    for result in join_all(tasks).await {
        result.expect("Task should complete successfully");
    }

    assert_eq!(store.get_all().await.unwrap().len(), num_tasks as usize);
}

test_all_hosts!(concurrent_access, test_concurrent_access);

/// Writes through the file host survive a simulated process restart
#[tokio::test]
async fn file_host_durability_across_reopen() {
    use prefstore::{FileConfig, PreferenceStoreBuilder, StoreConfig};

    let temp_dir = tempfile::TempDir::new().unwrap();
    let config = FileConfig::new(temp_dir.path().join("prefs"));

    {
        let store = PreferenceStoreBuilder::new(StoreConfig::File(config.clone()))
            .build()
            .await
            .unwrap();
        store.put_string("user", "aymen").await.unwrap();
        store.put_double("balance", 12.5).await.unwrap();
        store.put_boolean("onboarded", true).await.unwrap();
    }

    // A fresh builder over the same directory sees the prior writes
    let store = PreferenceStoreBuilder::new(StoreConfig::File(config))
        .build()
        .await
        .unwrap();

    assert_eq!(store.get_string("user").await.unwrap(), "aymen");
    assert_eq!(store.get_double("balance").await.unwrap(), 12.5);
    assert_eq!(store.get_boolean("onboarded").await.unwrap(), true);
}

/// A custom namespace is isolated from the default one
#[tokio::test]
async fn builder_namespace_override() {
    use prefstore::{FileConfig, PreferenceStoreBuilder, StoreConfig};

    let temp_dir = tempfile::TempDir::new().unwrap();
    let config = FileConfig::new(temp_dir.path().join("prefs"));

    let shared = PreferenceStoreBuilder::new(StoreConfig::File(config.clone()))
        .build()
        .await
        .unwrap();
    shared.put_int("k", 1).await.unwrap();

    let other = PreferenceStoreBuilder::new(StoreConfig::File(config))
        .namespace("otherData")
        .build()
        .await
        .unwrap();

    assert_eq!(other.get_int("k").await.unwrap(), 0);
    assert!(other.get_all().await.unwrap().is_empty());
}
