//! Settings presenter contract
//!
//! The dialog itself is an injected collaborator: the engine only asks for
//! it to open and reports failure through the host notification area.

use thiserror::Error;

use super::settings_state::Settings;

/// Why the dialog could not be opened
#[derive(Debug, Error)]
pub enum PresenterError {
    #[error("settings dialog unavailable: {0}")]
    Unavailable(String),
}

/// Owns the settings dialog UI
pub trait SettingsPresenter {
    /// Open the dialog seeded with the current settings. Returns as soon as
    /// the dialog is up; the saved record comes back through the host
    /// application applying it to the engine.
    fn open(&mut self, current: &Settings) -> Result<(), PresenterError>;
}
