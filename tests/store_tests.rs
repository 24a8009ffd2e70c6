//! Store Tests
//!
//! Tests verify:
//! - Insert-or-update semantics
//! - Absent keys are distinct from empty values
//! - Removal reports prior presence exactly once
//! - Entry counting and clear

use linekv::Store;

// =============================================================================
// Basic Operations Tests
// =============================================================================

#[test]
fn test_new_store_is_empty() {
    let store = Store::new();
    assert_eq!(store.len(), 0);
    assert!(store.is_empty());
}

#[test]
fn test_set_and_get() {
    let mut store = Store::new();

    store.set(b"name".to_vec(), b"Alice".to_vec());

    assert_eq!(store.get(b"name"), Some(&b"Alice"[..]));
}

#[test]
fn test_get_nonexistent_key() {
    let store = Store::new();
    assert_eq!(store.get(b"notfound"), None);
}

#[test]
fn test_set_overwrites_existing() {
    let mut store = Store::new();

    store.set(b"name".to_vec(), b"Alice".to_vec());
    store.set(b"name".to_vec(), b"Bob".to_vec());

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(b"name"), Some(&b"Bob"[..]));
}

#[test]
fn test_empty_value_is_not_absent() {
    let mut store = Store::new();

    // The store itself does not validate; the parser rejects empty values
    store.set(b"k".to_vec(), Vec::new());

    assert_eq!(store.get(b"k"), Some(&b""[..]));
    assert!(store.exists(b"k"));
}

#[test]
fn test_binary_keys_and_values() {
    let mut store = Store::new();
    let key = vec![0x00, 0xff, 0x10];
    let value: Vec<u8> = (0..=255).collect();

    store.set(key.clone(), value.clone());

    assert_eq!(store.get(&key), Some(value.as_slice()));
}

// =============================================================================
// Remove / Exists Tests
// =============================================================================

#[test]
fn test_remove_existing_key() {
    let mut store = Store::new();
    store.set(b"name".to_vec(), b"Alice".to_vec());

    assert!(store.remove(b"name"));
    assert!(!store.exists(b"name"));
    assert_eq!(store.get(b"name"), None);
}

#[test]
fn test_remove_is_true_only_once() {
    let mut store = Store::new();
    store.set(b"k".to_vec(), b"v".to_vec());

    assert!(store.remove(b"k"));
    assert!(!store.remove(b"k"));
    assert!(!store.remove(b"k"));
}

#[test]
fn test_remove_nonexistent_key() {
    let mut store = Store::new();
    assert!(!store.remove(b"notfound"));
}

#[test]
fn test_exists_has_no_side_effect() {
    let mut store = Store::new();
    store.set(b"k".to_vec(), b"v".to_vec());

    let _ = store.get(b"k");
    let _ = store.get(b"other");

    assert!(store.exists(b"k"));
    assert!(!store.exists(b"other"));
    assert_eq!(store.len(), 1);
}

// =============================================================================
// Size / Clear Tests
// =============================================================================

#[test]
fn test_len_counts_distinct_keys() {
    let mut store = Store::new();

    store.set(b"key1".to_vec(), b"value1".to_vec());
    store.set(b"key2".to_vec(), b"value2".to_vec());
    store.set(b"key1".to_vec(), b"value3".to_vec());

    assert_eq!(store.len(), 2);
}

#[test]
fn test_clear_removes_everything() {
    let mut store = Store::new();
    for i in 0..100 {
        store.set(format!("key{}", i).into_bytes(), b"v".to_vec());
    }

    store.clear();

    assert_eq!(store.len(), 0);
    assert!(store.is_empty());
    for i in 0..100 {
        assert!(!store.exists(format!("key{}", i).as_bytes()));
    }
}

#[test]
fn test_store_usable_after_clear() {
    let mut store = Store::new();
    store.set(b"a".to_vec(), b"1".to_vec());
    store.clear();

    store.set(b"a".to_vec(), b"2".to_vec());

    assert_eq!(store.get(b"a"), Some(&b"2"[..]));
}
