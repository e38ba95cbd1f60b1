use rtimeclock::db::SqliteSlotStore;
use rtimeclock::errors::PersistenceError;
use rtimeclock::models::{BreakRecord, DailyTimeRecord, SessionSnapshot, SessionStatus, WorkDuration};
use rtimeclock::storage::{ChaChaCipher, Cipher, MemoryStore, SecureStateStore, SlotStore};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

mod common;
use common::{PASSPHRASE, at, record, day, secure_store};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Sample {
    name: String,
    values: Vec<i64>,
    nested: BTreeMap<String, Option<bool>>,
}

#[test]
fn save_then_load_returns_equal_value() {
    let slots = MemoryStore::new();
    let store = secure_store(&slots);

    let mut nested = BTreeMap::new();
    nested.insert("a".to_string(), Some(true));
    nested.insert("b".to_string(), None);
    let sample = Sample {
        name: "àccénts and ✓".into(),
        values: vec![-3, 0, 42],
        nested,
    };

    store.save("sample", &sample);
    assert_eq!(store.load::<Sample>("sample"), Some(sample));

    let snapshot = SessionSnapshot {
        status: SessionStatus::OnBreak,
        check_in_time: Some(at(9, 0)),
        breaks: vec![BreakRecord::open(at(10, 0), None).close(at(10, 15))],
        current_break: Some(BreakRecord::open(at(12, 0), Some("lunch".into()))),
        total_break_time: WorkDuration::new(0, 15, 0),
    };
    store.save("snapshot", &snapshot);
    assert_eq!(store.load::<SessionSnapshot>("snapshot"), Some(snapshot));

    let history = vec![record(day(2025, 3, 10), 7, 45, 30, 87.5)];
    store.save("history", &history);
    assert_eq!(store.load::<Vec<DailyTimeRecord>>("history"), Some(history));
}

#[test]
fn slot_content_is_not_plaintext() {
    let slots = MemoryStore::new();
    let store = secure_store(&slots);
    store.save("secret", &"visible-marker");

    let raw = slots.get("secret").unwrap().unwrap();
    assert!(!raw.contains("visible-marker"));
}

#[test]
fn empty_slot_loads_as_none() {
    let store = secure_store(&MemoryStore::new());
    assert_eq!(store.load::<Sample>("missing"), None);
    assert!(matches!(store.load_checked::<Sample>("missing"), Ok(None)));
}

#[test]
fn tampered_slot_loads_as_none_but_checked_reports_it() {
    let slots = MemoryStore::new();
    let store = secure_store(&slots);
    store.save("v", &vec![1, 2, 3]);

    let raw = slots.get("v").unwrap().unwrap();
    let mut chars: Vec<char> = raw.chars().collect();
    let mid = chars.len() / 2;
    chars[mid] = if chars[mid] == 'A' { 'B' } else { 'A' };
    slots.set("v", &chars.into_iter().collect::<String>()).unwrap();

    assert_eq!(store.load::<Vec<i32>>("v"), None);
    assert!(matches!(
        store.load_checked::<Vec<i32>>("v"),
        Err(PersistenceError::Cipher(_))
    ));
}

#[test]
fn garbage_slot_is_an_encoding_error() {
    let slots = MemoryStore::new();
    slots.set("v", "%%% not base64 %%%").unwrap();
    let store = secure_store(&slots);

    assert_eq!(store.load::<Vec<i32>>("v"), None);
    assert!(matches!(
        store.load_checked::<Vec<i32>>("v"),
        Err(PersistenceError::Encoding(_))
    ));
}

#[test]
fn foreign_key_cannot_read_slot() {
    let slots = MemoryStore::new();
    secure_store(&slots).save("v", &"hello");

    let other = SecureStateStore::new(slots.clone(), ChaChaCipher::from_passphrase("wrong"));
    assert_eq!(other.load::<String>("v"), None);
}

#[test]
fn wrong_shape_is_a_serialization_error() {
    let slots = MemoryStore::new();
    let store = secure_store(&slots);
    store.save("v", &"just a string");

    assert!(matches!(
        store.load_checked::<Vec<i32>>("v"),
        Err(PersistenceError::Serialization(_))
    ));
}

#[test]
fn remove_empties_slot() {
    let slots = MemoryStore::new();
    let store = secure_store(&slots);
    store.save("v", &1);
    store.remove("v");
    assert!(!slots.contains("v"));
    assert_eq!(store.load::<i32>("v"), None);
}

#[test]
fn cipher_round_trip_uses_fresh_nonce() {
    let cipher = ChaChaCipher::generate();
    let a = cipher.encrypt(b"same input").unwrap();
    let b = cipher.encrypt(b"same input").unwrap();
    assert_ne!(a, b);
    assert_eq!(cipher.decrypt(&a).unwrap(), b"same input");
    assert_eq!(cipher.decrypt(&b).unwrap(), b"same input");
    assert!(cipher.decrypt(&a[..5]).is_err());
}

#[test]
fn passphrase_key_is_deterministic() {
    let sealed = ChaChaCipher::from_passphrase(PASSPHRASE)
        .encrypt(b"payload")
        .unwrap();
    let opened = ChaChaCipher::from_passphrase(PASSPHRASE)
        .decrypt(&sealed)
        .unwrap();
    assert_eq!(opened, b"payload");
}

#[test]
fn key_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("test.key");

    let cipher = ChaChaCipher::generate();
    cipher.write_key_file(&path).unwrap();
    let sealed = cipher.encrypt(b"k").unwrap();

    let loaded = ChaChaCipher::load_key_file(&path).unwrap();
    assert_eq!(loaded.decrypt(&sealed).unwrap(), b"k");

    std::fs::write(&path, "c2hvcnQ=").unwrap();
    assert!(matches!(
        ChaChaCipher::load_key_file(&path),
        Err(PersistenceError::KeyFile(_))
    ));
}

#[test]
fn sqlite_slots_persist_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("slots.sqlite");
    let db = db.to_string_lossy();

    {
        let store = SecureStateStore::new(
            SqliteSlotStore::open(&db).unwrap(),
            ChaChaCipher::from_passphrase(PASSPHRASE),
        );
        store.save("a", &vec!["x".to_string()]);
        store.save("a", &vec!["y".to_string()]);
        store.save("b", &7u32);
        store.remove("b");
    }

    let slots = SqliteSlotStore::open(&db).unwrap();
    assert!(slots.get("b").unwrap().is_none());
    let store = SecureStateStore::new(slots, ChaChaCipher::from_passphrase(PASSPHRASE));
    assert_eq!(store.load::<Vec<String>>("a"), Some(vec!["y".to_string()]));
}
