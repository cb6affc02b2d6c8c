//! Settings persistence
//!
//! One JSON record under one key. The file-backed store lives in the user
//! config directory; a missing, unreadable or malformed record falls back to
//! defaults, and write failures are logged and swallowed so the page never
//! breaks over storage.

use std::fs;
use std::path::PathBuf;

use super::settings_state::Settings;

const CONFIG_DIR: &str = "glyphtip";

/// The single key the record is stored under
pub const STORAGE_KEY: &str = "unihan-settings";

/// Where the settings record lives
pub trait SettingsStore {
    fn load(&self) -> Settings;
    fn save(&mut self, settings: &Settings);
}

/// Store backed by a JSON file in the user config directory
pub struct FileStore {
    path: Option<PathBuf>,
}

impl FileStore {
    pub fn new() -> Self {
        Self {
            path: default_path(),
        }
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| {
        p.join(".config")
            .join(CONFIG_DIR)
            .join(format!("{STORAGE_KEY}.json"))
    })
}

impl SettingsStore for FileStore {
    fn load(&self) -> Settings {
        let Some(path) = &self.path else {
            return Settings::default();
        };

        match fs::read_to_string(path) {
            Ok(contents) => Settings::from_json(&contents),
            Err(_) => Settings::default(),
        }
    }

    fn save(&mut self, settings: &Settings) {
        let Some(path) = &self.path else {
            return;
        };

        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                log::warn!("failed to create settings directory: {err}");
                return;
            }
        }
        if let Err(err) = fs::write(path, settings.to_json()) {
            log::warn!("failed to save settings: {err}");
        }
    }
}

/// Ephemeral store holding the serialized record in memory
#[derive(Default)]
pub struct MemoryStore {
    record: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(json: &str) -> Self {
        Self {
            record: Some(json.to_string()),
        }
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Settings {
        match &self.record {
            Some(json) => Settings::from_json(json),
            None => Settings::default(),
        }
    }

    fn save(&mut self, settings: &Settings) {
        self.record = Some(settings.to_json());
    }
}

#[cfg(test)]
#[path = "settings_storage_tests.rs"]
mod settings_storage_tests;
