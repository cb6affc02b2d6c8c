//! Tests for settings/settings_storage

use tempfile::TempDir;

use crate::settings::settings_state::LoadMode;

use super::*;

#[test]
fn test_file_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("unihan-settings.json");
    let mut store = FileStore::at(path);

    let settings = Settings {
        enabled: false,
        use_webfont: true,
        load_mode: LoadMode::Fallback,
        selected_font: "Jigmo".to_string(),
    };
    store.save(&settings);

    assert_eq!(store.load(), settings);
}

#[test]
fn test_file_store_missing_file_is_defaults() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::at(dir.path().join("nothing-here.json"));

    assert_eq!(store.load(), Settings::default());
}

#[test]
fn test_file_store_malformed_file_is_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("unihan-settings.json");
    std::fs::write(&path, "{{{{").unwrap();
    let store = FileStore::at(path);

    assert_eq!(store.load(), Settings::default());
}

#[test]
fn test_file_store_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("deep").join("nested").join("settings.json");
    let mut store = FileStore::at(path.clone());

    store.save(&Settings::default());

    assert!(path.exists());
}

#[test]
fn test_memory_store_starts_with_defaults() {
    let store = MemoryStore::new();
    assert_eq!(store.load(), Settings::default());
}

#[test]
fn test_memory_store_round_trip() {
    let mut store = MemoryStore::new();
    let settings = Settings {
        use_webfont: true,
        ..Settings::default()
    };

    store.save(&settings);

    assert_eq!(store.load(), settings);
}

#[test]
fn test_memory_store_merges_partial_record() {
    let store = MemoryStore::with_record(r#"{"selectedFont": "Jigmo"}"#);

    let loaded = store.load();

    assert_eq!(loaded.selected_font, "Jigmo");
    assert!(loaded.enabled);
}
