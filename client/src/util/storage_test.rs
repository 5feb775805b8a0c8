use super::*;

#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
struct Draft {
    title: String,
    count: u32,
}

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_set_get_remove() {
    let storage = MemoryStorage::default();
    assert_eq!(storage.get("k"), None);

    storage.set("k", "v1");
    storage.set("k", "v2");
    assert_eq!(storage.get("k").as_deref(), Some("v2"));
    assert_eq!(storage.len(), 1);

    storage.remove("k");
    assert_eq!(storage.get("k"), None);
    assert!(storage.is_empty());
}

#[test]
fn memory_storage_clear_removes_everything() {
    let storage = MemoryStorage::default();
    storage.set("a", "1");
    storage.set("b", "2");
    storage.clear();
    assert!(storage.is_empty());
}

#[test]
fn memory_storage_clones_share_entries() {
    let storage = MemoryStorage::default();
    let handle = storage.clone();
    handle.set("shared", "yes");
    assert_eq!(storage.get("shared").as_deref(), Some("yes"));
}

// =============================================================
// JSON helpers
// =============================================================

#[test]
fn json_helpers_store_and_load_values() {
    let storage = MemoryStorage::default();
    let draft = Draft { title: "Q3 invoice".to_owned(), count: 3 };
    storage.set_json("draft", &draft);
    assert_eq!(storage.get_json::<Draft>("draft"), Some(draft));
}

#[test]
fn get_json_treats_garbage_as_absent() {
    let storage = MemoryStorage::default();
    storage.set("draft", "{not json");
    assert_eq!(storage.get_json::<Draft>("draft"), None);
}

// =============================================================
// BrowserStorage outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_without_hydrate() {
    let storage = BrowserStorage;
    storage.set("k", "v");
    assert_eq!(storage.get("k"), None);
    storage.remove("k");
    storage.clear();
}
