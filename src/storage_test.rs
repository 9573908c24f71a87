use super::*;

fn user(name: &str) -> User {
    User { username: name.to_owned() }
}

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_set_get_remove() {
    let storage = MemoryStorage::default();
    assert_eq!(storage.get("k"), None);

    storage.set("k", "v");
    assert_eq!(storage.get("k"), Some("v".to_owned()));

    storage.set("k", "v2");
    assert_eq!(storage.get("k"), Some("v2".to_owned()));

    storage.remove("k");
    assert_eq!(storage.get("k"), None);
}

// =============================================================
// persist / load / clear
// =============================================================

#[test]
fn persist_then_load_round_trips() {
    let storage = MemoryStorage::default();
    persist_session(&storage, "tok-1", &user("admin"));

    let (token, loaded) = load_session(&storage).expect("session should load");
    assert_eq!(token, "tok-1");
    assert_eq!(loaded, user("admin"));
}

#[test]
fn persist_writes_both_keys() {
    let storage = MemoryStorage::default();
    persist_session(&storage, "tok-1", &user("admin"));

    assert_eq!(storage.get(TOKEN_KEY), Some("tok-1".to_owned()));
    assert_eq!(storage.get(USER_KEY), Some(r#"{"username":"admin"}"#.to_owned()));
}

#[test]
fn load_requires_both_keys() {
    let storage = MemoryStorage::default();
    storage.set(TOKEN_KEY, "tok-1");
    assert!(load_session(&storage).is_none());

    let storage = MemoryStorage::default();
    storage.set(USER_KEY, r#"{"username":"admin"}"#);
    assert!(load_session(&storage).is_none());
}

#[test]
fn load_rejects_corrupt_user_record() {
    let storage = MemoryStorage::default();
    storage.set(TOKEN_KEY, "tok-1");
    storage.set(USER_KEY, "not json");
    assert!(load_session(&storage).is_none());
}

#[test]
fn clear_removes_both_keys_and_is_idempotent() {
    let storage = MemoryStorage::default();
    persist_session(&storage, "tok-1", &user("admin"));

    clear_session(&storage);
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(USER_KEY), None);

    clear_session(&storage);
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(USER_KEY), None);
}
