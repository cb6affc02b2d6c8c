//! The settings record
//!
//! One small JSON-shaped record controlling the whole gadget. Parsing merges
//! the stored record over the hard-coded defaults: missing fields take their
//! default, a record that does not parse at all falls back entirely.

use serde::{Deserialize, Serialize};

/// Font selected before the user ever picked one
pub const DEFAULT_FONT: &str = "Plangothic";

/// How an injected webfont ranks against the reader's system fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadMode {
    /// System font first; the webfont only covers what it cannot render
    Fallback,
    /// Webfont first, overriding whatever the system has
    #[default]
    Always,
}

/// User-facing configuration, persisted as a single record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Master switch; nothing binds or injects when off
    pub enabled: bool,
    /// Substitute glyphs with fonts fetched from the catalog service
    pub use_webfont: bool,
    pub load_mode: LoadMode,
    pub selected_font: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: true,
            use_webfont: false,
            load_mode: LoadMode::Always,
            selected_font: DEFAULT_FONT.to_string(),
        }
    }
}

impl Settings {
    /// Parse a stored record, merging over defaults; malformed input falls
    /// back to the defaults entirely
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("malformed settings record, using defaults: {err}");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        // Serializing a plain struct of bools and strings cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "settings_state_tests.rs"]
mod settings_state_tests;
