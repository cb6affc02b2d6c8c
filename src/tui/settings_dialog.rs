//! Terminal settings dialog
//!
//! Keyboard-driven rendering of the dialog view-model: arrows move between
//! fields, space toggles, enter saves, escape closes. The engine side only
//! ever sees the presenter trait; the dialog itself lives with the host
//! application loop.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent};

use crate::catalog::FontInfo;
use crate::settings::{
    DialogState, FontsLoad, LoadMode, PresenterError, Settings, SettingsPresenter,
};

/// Presenter that queues an open request for the application loop to pick
/// up after the engine call returns
pub struct DialogRequest {
    request: Rc<RefCell<Option<Settings>>>,
}

impl DialogRequest {
    /// Returns the presenter and the cell the loop drains
    pub fn new() -> (Self, Rc<RefCell<Option<Settings>>>) {
        let request = Rc::new(RefCell::new(None));
        (
            Self {
                request: Rc::clone(&request),
            },
            request,
        )
    }
}

impl SettingsPresenter for DialogRequest {
    fn open(&mut self, current: &Settings) -> Result<(), PresenterError> {
        *self.request.borrow_mut() = Some(current.clone());
        Ok(())
    }
}

/// What a key press did to the dialog
#[derive(Debug, PartialEq)]
pub enum DialogOutcome {
    None,
    /// The font list should be fetched now
    FetchFonts,
    /// The user saved this record
    Saved(Settings),
    Closed,
}

/// Fixed fields before the font radios start
const FIXED_FIELDS: usize = 4;

/// The open dialog plus its keyboard cursor
pub struct SettingsDialog {
    pub state: DialogState,
    cursor: usize,
}

impl SettingsDialog {
    pub fn open(current: &Settings, fonts: Option<&[FontInfo]>) -> Self {
        Self {
            state: DialogState::open_with(current, fonts),
            cursor: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn font_count(&self) -> usize {
        match self.state.fonts() {
            FontsLoad::Loaded(list) => list.len(),
            _ => 0,
        }
    }

    fn field_count(&self) -> usize {
        FIXED_FIELDS + self.font_count()
    }

    /// Greyed-out fields ignore activation
    fn field_enabled(&self, index: usize) -> bool {
        let draft = self.state.draft();
        match index {
            0 => true,
            1 => draft.enabled,
            _ => draft.enabled && draft.use_webfont,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogOutcome {
        match key.code {
            KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                DialogOutcome::None
            }
            KeyCode::Down => {
                self.cursor = (self.cursor + 1).min(self.field_count() - 1);
                DialogOutcome::None
            }
            KeyCode::Char(' ') => self.activate(),
            KeyCode::Enter => match self.state.save() {
                Some(settings) => DialogOutcome::Saved(settings),
                None => DialogOutcome::Closed,
            },
            KeyCode::Esc => {
                self.state.close();
                DialogOutcome::Closed
            }
            _ => DialogOutcome::None,
        }
    }

    fn activate(&mut self) -> DialogOutcome {
        if !self.field_enabled(self.cursor) {
            return DialogOutcome::None;
        }
        match self.cursor {
            0 => {
                self.state.toggle_enabled();
                DialogOutcome::None
            }
            1 => {
                if self.state.toggle_webfont() {
                    DialogOutcome::FetchFonts
                } else {
                    DialogOutcome::None
                }
            }
            2 => {
                self.state.set_load_mode(LoadMode::Fallback);
                DialogOutcome::None
            }
            3 => {
                self.state.set_load_mode(LoadMode::Always);
                DialogOutcome::None
            }
            index => {
                let font_id = match self.state.fonts() {
                    FontsLoad::Loaded(list) => {
                        list.get(index - FIXED_FIELDS).map(|font| font.id.clone())
                    }
                    _ => None,
                };
                if let Some(font_id) = font_id {
                    self.state.select_font(&font_id);
                }
                DialogOutcome::None
            }
        }
    }
}

#[cfg(test)]
#[path = "settings_dialog_tests.rs"]
mod settings_dialog_tests;
