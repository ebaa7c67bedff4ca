use super::*;

#[test]
fn memory_store_get_set_remove() {
    let mut store = MemoryStore::new();
    assert_eq!(store.get(PLAYER_NAME_KEY).unwrap(), None);

    store.set(PLAYER_NAME_KEY, "张三").unwrap();
    assert_eq!(store.get(PLAYER_NAME_KEY).unwrap().as_deref(), Some("张三"));

    store.set(PLAYER_NAME_KEY, "李四").unwrap();
    assert_eq!(store.get(PLAYER_NAME_KEY).unwrap().as_deref(), Some("李四"));
    assert_eq!(store.len(), 1);

    store.remove(PLAYER_NAME_KEY).unwrap();
    store.remove(PLAYER_NAME_KEY).unwrap();
    assert!(store.is_empty());
}

#[test]
fn borrowed_store_writes_through() {
    fn write_through<S: KeyValueStore>(mut store: S) {
        store.set("k", "v").unwrap();
    }

    let mut store = MemoryStore::new();
    write_through(&mut store);
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
}

#[test]
fn json_store_missing_file_is_empty_and_not_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("store.json");

    let mut store = JsonFileStore::open(&path).unwrap();
    assert_eq!(store.get(PLAYER_NAME_KEY).unwrap(), None);
    store.remove(PLAYER_NAME_KEY).unwrap();
    assert!(!path.exists());
}

#[test]
fn json_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("store.json");

    let mut store = JsonFileStore::open(&path).unwrap();
    store.set(PLAYER_NAME_KEY, "张三").unwrap();
    assert_eq!(store.path(), path.as_path());

    let reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(reopened.get(PLAYER_NAME_KEY).unwrap().as_deref(), Some("张三"));

    let raw: std::collections::BTreeMap<String, String> =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(raw.get("playerName").map(String::as_str), Some("张三"));

    let mut reopened = reopened;
    reopened.remove(PLAYER_NAME_KEY).unwrap();
    let cleared = JsonFileStore::open(&path).unwrap();
    assert_eq!(cleared.get(PLAYER_NAME_KEY).unwrap(), None);
}

#[test]
fn json_store_rejects_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "[1, 2").unwrap();
    assert!(matches!(
        JsonFileStore::open(&path),
        Err(InviteError::Storage(_))
    ));
}

#[test]
fn json_store_failed_write_leaves_entries_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    // A directory at the store path makes the rename fail.
    std::fs::create_dir(&path).unwrap();

    let mut store = JsonFileStore::open(dir.path().join("missing.json")).unwrap();
    store.path = path.clone();
    assert!(store.set(PLAYER_NAME_KEY, "张三").is_err());
    assert_eq!(store.get(PLAYER_NAME_KEY).unwrap(), None);

    std::fs::remove_dir(&path).unwrap();
    store.set(PLAYER_NAME_KEY, "张三").unwrap();
    let reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(reopened.get(PLAYER_NAME_KEY).unwrap().as_deref(), Some("张三"));
}

#[test]
fn json_store_failed_remove_can_be_retried() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    let mut store = JsonFileStore::open(&path).unwrap();
    store.set(PLAYER_NAME_KEY, "张三").unwrap();

    // Swap the file for a non-empty directory so the commit cannot replace it.
    std::fs::remove_file(&path).unwrap();
    std::fs::create_dir(&path).unwrap();
    std::fs::write(path.join("keep"), b"x").unwrap();
    assert!(store.remove(PLAYER_NAME_KEY).is_err());
    assert_eq!(store.get(PLAYER_NAME_KEY).unwrap().as_deref(), Some("张三"));

    std::fs::remove_dir_all(&path).unwrap();
    store.remove(PLAYER_NAME_KEY).unwrap();
    assert!(path.exists());
    let reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(reopened.get(PLAYER_NAME_KEY).unwrap(), None);
}

#[test]
fn json_store_write_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    let mut store = JsonFileStore::open(&path).unwrap();
    store.set(PLAYER_NAME_KEY, "张三").unwrap();

    let names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("store.json")]);
}
