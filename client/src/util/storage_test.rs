use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let storage = MemoryStorage::new();
    assert!(storage.is_empty());

    storage.set("token", "abc");
    assert_eq!(storage.get("token").as_deref(), Some("abc"));
    assert_eq!(storage.len(), 1);

    storage.remove("token");
    assert_eq!(storage.get("token"), None);
    assert!(storage.is_empty());
}

#[test]
fn load_json_reads_back_saved_value() {
    let storage = MemoryStorage::new();
    storage.save_json("numbers", &vec![1, 2, 3]);
    assert_eq!(storage.load_json::<Vec<i32>>("numbers"), Some(vec![1, 2, 3]));
}

#[test]
fn load_json_treats_malformed_entry_as_missing() {
    let storage = MemoryStorage::new();
    storage.set("user", "{not json");
    assert_eq!(storage.load_json::<serde_json::Value>("user"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_outside_the_browser() {
    let storage = BrowserStorage;
    storage.set("token", "abc");
    assert_eq!(storage.get("token"), None);
    storage.remove("token");
}
