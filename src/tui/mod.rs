//! Terminal host page for the demo binary
//!
//! Everything the browser would own, on a ratatui buffer: the page with its
//! trigger spans, mouse-to-pointer-event synthesis, tooltip surface
//! rendering, the settings dialog, and the notification line.

pub mod hover;
mod notification;
mod page;
mod popup;
pub mod render;
mod settings_dialog;

pub use hover::{HitRegion, pointer_events, region_at};
pub use notification::NotificationState;
pub use page::{SETTINGS_BUTTON, Segment, TuiPage, TuiSurface, TuiTrigger, cell_placement};
pub use settings_dialog::{DialogOutcome, DialogRequest, SettingsDialog};
