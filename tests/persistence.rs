//! Save/load round-trip tests against real files.

use std::fs;
use std::path::PathBuf;

use kvmap::{KvStore, StoreError};
use serde::{Deserialize, Serialize};
use tempfile::TempDir;

fn store_path(dir: &TempDir) -> PathBuf {
    dir.path().join("store.bin")
}

#[test]
fn round_trip_restores_every_entry() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);

    let kvs: KvStore<String, String> = KvStore::new();
    for i in 0..100 {
        kvs.put(format!("k{i}"), format!("v{i}"));
    }
    kvs.save(&path).unwrap();

    let restored: KvStore<String, String> = KvStore::new();
    restored.put("stale".to_string(), "gone after load".to_string());
    restored.load(&path).unwrap();

    assert_eq!(restored.len(), 100);
    for i in 0..100 {
        assert_eq!(restored.get(&format!("k{i}")).unwrap(), format!("v{i}"));
    }
    assert!(restored.get(&"stale".to_string()).is_err());
}

#[test]
fn load_restores_pre_update_state() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);

    let kvs: KvStore<String, String> = KvStore::new();
    kvs.put("T2".to_string(), "Test2".to_string());
    kvs.save(&path).unwrap();
    kvs.update(&"T2".to_string(), "Other".to_string()).unwrap();
    kvs.load(&path).unwrap();

    assert_eq!(kvs.get(&"T2".to_string()).unwrap(), "Test2");
}

#[test]
fn save_replaces_an_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);

    let first: KvStore<String, u32> = KvStore::new();
    first.put("a".to_string(), 1);
    first.save(&path).unwrap();

    let second: KvStore<String, u32> = KvStore::new();
    second.put("b".to_string(), 2);
    second.save(&path).unwrap();

    let restored: KvStore<String, u32> = KvStore::new();
    restored.load(&path).unwrap();
    assert_eq!(restored.len(), 1);
    assert_eq!(restored.get(&"b".to_string()).unwrap(), 2);
}

#[test]
fn empty_store_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);

    let kvs: KvStore<u64, u64> = KvStore::new();
    kvs.save(&path).unwrap();

    let restored: KvStore<u64, u64> = KvStore::new();
    restored.put(1, 1);
    restored.load(&path).unwrap();
    assert!(restored.is_empty());
}

#[test]
fn load_from_missing_file_reports_unavailable() {
    let dir = TempDir::new().unwrap();
    let kvs: KvStore<String, String> = KvStore::new();

    let err = kvs.load(dir.path().join("nothing-here.bin")).unwrap_err();
    assert!(matches!(err, StoreError::Unavailable(_)));
}

#[test]
fn load_of_corrupt_file_fails_and_keeps_contents() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);
    fs::write(&path, b"not a store file").unwrap();

    let kvs: KvStore<String, String> = KvStore::new();
    kvs.put("kept".to_string(), "value".to_string());

    let err = kvs.load(&path).unwrap_err();
    assert!(matches!(err, StoreError::Decode(_)));
    assert_eq!(kvs.get(&"kept".to_string()).unwrap(), "value");
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Session {
    user: String,
    logins: u32,
}

#[test]
fn struct_values_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);

    let kvs: KvStore<u64, Session> = KvStore::new();
    kvs.put(
        7,
        Session {
            user: "ada".to_string(),
            logins: 3,
        },
    );
    kvs.save(&path).unwrap();

    let restored: KvStore<u64, Session> = KvStore::new();
    restored.load(&path).unwrap();
    let session = restored.get(&7).unwrap();
    assert_eq!(session.user, "ada");
    assert_eq!(session.logins, 3);
}
