//! Settings dialog view-model
//!
//! Pure dialog behavior, independent of how it is rendered: draft edits
//! against the saved record, change detection gating the save action, and
//! the fonts-area lifecycle (not loaded → loading → loaded or failed).

use crate::catalog::{CatalogError, FontInfo};

use super::settings_state::{LoadMode, Settings};

/// Served by the catalog but not offered for selection
const HIDDEN_FONT_ID: &str = "SourceHanSans";

/// State of the font list inside the dialog
#[derive(Debug, Clone, PartialEq)]
pub enum FontsLoad {
    /// Never requested (webfont off, or dialog opened without a catalog)
    NotLoaded,
    /// Request in flight
    Loading,
    Loaded(Vec<FontInfo>),
    Failed,
}

/// Observable state of one open settings dialog
pub struct DialogState {
    open: bool,
    draft: Settings,
    original: Settings,
    fonts: FontsLoad,
}

impl DialogState {
    /// Open seeded with the current settings and whatever part of the
    /// catalog is already known
    pub fn open_with(current: &Settings, fonts: Option<&[FontInfo]>) -> Self {
        let fonts = match fonts {
            Some(list) => FontsLoad::Loaded(filter_hidden(list)),
            None => FontsLoad::NotLoaded,
        };
        Self {
            open: true,
            draft: current.clone(),
            original: current.clone(),
            fonts,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> &Settings {
        &self.draft
    }

    pub fn fonts(&self) -> &FontsLoad {
        &self.fonts
    }

    /// Save is only offered once something actually changed
    pub fn has_changes(&self) -> bool {
        self.draft != self.original
    }

    pub fn toggle_enabled(&mut self) {
        self.draft.enabled = !self.draft.enabled;
    }

    /// Toggle webfont use. Returns true when the font list should now be
    /// fetched (switched on with no list present).
    pub fn toggle_webfont(&mut self) -> bool {
        self.draft.use_webfont = !self.draft.use_webfont;
        self.needs_fonts()
    }

    pub fn set_load_mode(&mut self, mode: LoadMode) {
        self.draft.load_mode = mode;
    }

    pub fn select_font(&mut self, font_id: &str) {
        self.draft.selected_font = font_id.to_string();
    }

    /// Webfont is on but no list has been fetched yet
    pub fn needs_fonts(&self) -> bool {
        self.draft.use_webfont && self.fonts == FontsLoad::NotLoaded
    }

    /// The fetch is underway; keeps a second request from piling on
    pub fn begin_fonts_load(&mut self) {
        if self.fonts == FontsLoad::NotLoaded {
            self.fonts = FontsLoad::Loading;
        }
    }

    /// The fetch came back. A failed fetch shows the load-failed area
    /// instead of an empty list.
    pub fn fonts_loaded(&mut self, result: Result<Vec<FontInfo>, CatalogError>) {
        self.fonts = match result {
            Ok(list) => FontsLoad::Loaded(filter_hidden(&list)),
            Err(err) => {
                log::warn!("font list load failed: {err}");
                FontsLoad::Failed
            }
        };
    }

    /// Close without saving
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Commit the draft. Returns the record to persist, or None when
    /// nothing changed (the dialog closes either way).
    pub fn save(&mut self) -> Option<Settings> {
        if !self.has_changes() {
            self.open = false;
            return None;
        }
        self.original = self.draft.clone();
        self.open = false;
        Some(self.draft.clone())
    }
}

fn filter_hidden(list: &[FontInfo]) -> Vec<FontInfo> {
    list.iter()
        .filter(|font| font.id != HIDDEN_FONT_ID)
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "dialog_state_tests.rs"]
mod dialog_state_tests;
