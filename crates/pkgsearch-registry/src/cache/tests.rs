//! Unit tests for the search cache

use super::*;
use tempfile::TempDir;

const URL: &str = "https://x/Packages.md";

fn temp_store() -> (TempDir, CacheStore) {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).unwrap();
    let store = CacheStore::new(dir, SEARCH_CACHE_RETENTION);
    (temp_dir, store)
}

#[test]
fn test_retention_is_one_day() {
    assert_eq!(SEARCH_CACHE_RETENTION, Duration::from_secs(86400));
}

#[test]
fn test_cache_entry_creation() {
    let entry = CacheEntry::new(URL, "payload");
    assert_eq!(entry.url, URL);
    assert_eq!(entry.payload, "payload");
    assert!(entry.is_fresh(SEARCH_CACHE_RETENTION));
}

#[test]
fn test_freshness_boundary() {
    let written = Utc::now();
    let entry = CacheEntry::with_timestamp(URL, "payload", written);
    let retention = Duration::from_secs(86400);

    let just_before = written + chrono::Duration::seconds(86400 - 1);
    let at_boundary = written + chrono::Duration::seconds(86400);

    assert!(entry.is_fresh_at(just_before, retention));
    assert!(!entry.is_fresh_at(at_boundary, retention));
}

#[test]
fn test_entry_age() {
    let written = Utc::now();
    let entry = CacheEntry::with_timestamp(URL, "payload", written);
    let later = written + chrono::Duration::seconds(90);
    assert_eq!(entry.age_at(later), chrono::Duration::seconds(90));
}

#[test]
fn test_empty_store() {
    let (_temp_dir, store) = temp_store();
    assert!(!store.has_entry());
    assert_eq!(store.read_entry(), None);
    assert_eq!(store.read_fresh_entry(URL), None);
    assert!(!store.is_fresh());
    assert!(store.entry_age().is_none());
}

#[test]
fn test_write_and_read() {
    let (_temp_dir, store) = temp_store();

    store.write_entry(URL, "[{\"repo\": \"clibs/list\"}]");

    assert!(store.has_entry());
    assert!(store.is_fresh());
    assert_eq!(store.read_entry().as_deref(), Some("[{\"repo\": \"clibs/list\"}]"));
    assert_eq!(
        store.read_fresh_entry(URL).as_deref(),
        Some("[{\"repo\": \"clibs/list\"}]")
    );
}

#[test]
fn test_write_replaces_previous_entry() {
    let (_temp_dir, store) = temp_store();

    store.write_entry(URL, "first");
    store.write_entry(URL, "second");

    assert_eq!(store.read_entry().as_deref(), Some("second"));

    // No temp files are left behind
    let leftovers: Vec<_> = std::fs::read_dir(store.dir())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn test_stale_entry_exists_but_is_not_fresh() {
    let (_temp_dir, store) = temp_store();
    let written = Utc::now() - chrono::Duration::days(2);

    store
        .store_entry(&CacheEntry::with_timestamp(URL, "old", written))
        .unwrap();

    assert!(store.has_entry());
    assert!(!store.is_fresh());
    assert_eq!(store.read_entry().as_deref(), Some("old"));
    assert_eq!(store.read_fresh_entry(URL), None);
    assert!(store.entry_age().unwrap() >= chrono::Duration::days(2));
}

#[test]
fn test_corrupt_entry_is_a_miss() {
    let (_temp_dir, store) = temp_store();
    std::fs::write(store.path(), "not json").unwrap();

    assert!(store.has_entry());
    assert_eq!(store.read_entry(), None);
    assert!(!store.is_fresh());
}

#[test]
fn test_write_failure_is_swallowed() {
    let temp_dir = tempfile::tempdir().unwrap();
    let blocker = temp_dir.path().join("not-a-dir");
    std::fs::write(&blocker, "file in the way").unwrap();

    let dir = Utf8PathBuf::from_path_buf(blocker).unwrap().join("cache");
    let store = CacheStore::new(dir, SEARCH_CACHE_RETENTION);

    // Must not panic or propagate
    store.write_entry(URL, "payload");
    assert!(!store.has_entry());

    let err = store.store_entry(&CacheEntry::new(URL, "payload")).unwrap_err();
    assert!(matches!(err, SearchError::CacheWrite { .. }));
}

#[test]
fn test_cache_path_uses_search_namespace() {
    let (_temp_dir, store) = temp_store();
    assert_eq!(store.path().file_name(), Some("search.json"));
    assert_eq!(store.retention(), SEARCH_CACHE_RETENTION);
}

#[test]
fn test_fresh_entry_from_another_registry_is_a_miss() {
    let (_temp_dir, store) = temp_store();
    store.write_entry(URL, "payload");

    assert!(store.is_fresh());
    assert_eq!(store.read_entry().as_deref(), Some("payload"));
    assert_eq!(store.read_fresh_entry("https://other.example/Packages.md"), None);
    assert_eq!(store.read_fresh_entry(URL).as_deref(), Some("payload"));
}

#[test]
fn test_entry_without_url_is_a_miss() {
    let (_temp_dir, store) = temp_store();
    std::fs::write(
        store.path(),
        format!(r#"{{"payload": "old", "timestamp": "{}"}}"#, Utc::now().to_rfc3339()),
    )
    .unwrap();

    assert_eq!(store.read_entry().as_deref(), Some("old"));
    assert_eq!(store.read_fresh_entry(URL), None);
}
