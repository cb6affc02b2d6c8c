//! Webfont injection
//!
//! Substitutes glyphs one character at a time: for every (font, code point)
//! pair not yet applied, append a single `@font-face` rule scoped to that
//! code point through the host's style sink, then point every trigger
//! containing the character at the scoped family. The applied-set and the
//! version cache are owned here and torn down with the injector.

use std::collections::{HashMap, HashSet};

use crate::catalog::{API_BASE, FontInfo, font_api_url};
use crate::host::HostPage;
use crate::settings::{DEFAULT_FONT, Settings};

/// Version known before the catalog has ever been fetched
const SEED_VERSION: &str = "2.9.5787";

/// Unicode code point of a character, decimal
pub fn code_point(ch: char) -> u32 {
    ch as u32
}

/// Unicode code point, uppercase hex, as used in unicode-range
pub fn hex_code_point(ch: char) -> String {
    format!("{:X}", ch as u32)
}

/// Font family name scoped to one character of one font
pub fn scoped_family(font_id: &str, code_point: u32) -> String {
    format!("{font_id}-{code_point}")
}

/// One `@font-face` rule covering exactly one code point
pub fn font_face_rule(font_id: &str, ch: char, url: &str) -> String {
    let family = scoped_family(font_id, code_point(ch));
    let hex = hex_code_point(ch);
    format!(
        "@font-face {{\n  font-family: \"{family}\";\n  src: url(\"{url}\") format(\"woff2\");\n  unicode-range: U+{hex};\n}}\n"
    )
}

/// Owns webfont application state for one page
pub struct WebfontInjector {
    base: String,
    applied: HashSet<String>,
    versions: HashMap<String, String>,
}

impl WebfontInjector {
    pub fn new() -> Self {
        Self::with_base(API_BASE)
    }

    pub fn with_base(base: &str) -> Self {
        let mut versions = HashMap::new();
        versions.insert(DEFAULT_FONT.to_string(), SEED_VERSION.to_string());
        Self {
            base: base.to_string(),
            applied: HashSet::new(),
            versions,
        }
    }

    /// Remember the versions of a fetched font list, so later rules carry a
    /// cache-busting version parameter
    pub fn note_versions(&mut self, fonts: &[FontInfo]) {
        for font in fonts {
            self.versions
                .insert(font.id.clone(), font.version.clone());
        }
    }

    pub fn version(&self, font_id: &str) -> Option<&str> {
        self.versions.get(font_id).map(String::as_str)
    }

    /// Number of (font, code point) pairs applied so far
    pub fn applied_count(&self) -> usize {
        self.applied.len()
    }

    /// Apply the webfont for one character wherever it appears on the page
    pub fn apply_char<H: HostPage>(&mut self, host: &mut H, ch: char, settings: &Settings) {
        let font_id = settings.selected_font.as_str();
        let cp = code_point(ch);

        let key = scoped_family(font_id, cp);
        if !self.applied.insert(key.clone()) {
            return;
        }

        let url = font_api_url(&self.base, font_id, cp, self.version(font_id));
        host.append_style_rule(&font_face_rule(font_id, ch, &url));

        for trigger in host.triggers() {
            if host.text_content(trigger).contains(ch) {
                host.set_font_family(trigger, &key, settings.load_mode);
            }
        }
    }

    /// Walk every trigger on the page and apply its characters
    pub fn process_page<H: HostPage>(&mut self, host: &mut H, settings: &Settings) {
        for trigger in host.triggers() {
            let text = host.text_content(trigger);
            for ch in text.trim().chars() {
                self.apply_char(host, ch, settings);
            }
        }
    }

    /// Forget everything applied and empty the style sink
    pub fn clear<H: HostPage>(&mut self, host: &mut H) {
        self.applied.clear();
        host.clear_style_rules();
    }
}

impl Default for WebfontInjector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "webfont_tests.rs"]
mod webfont_tests;
