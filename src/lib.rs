//! glyphtip: tooltip engine and webfont helpers for rare CJK characters.
//!
//! The engine drives hover/tap-triggered tooltips over trigger elements
//! supplied by a host page: viewport-aware placement, show/hide delay
//! timers, fade-out lifecycle, and one-visible-at-a-time touch arbitration.
//! Around it sit the collaborator modules the full gadget needs: the
//! settings record and dialog view-model, the font catalog client, the
//! per-character webfont injector, the font-support probe and the localized
//! message table. The `tui` module plus the binary provide a terminal host
//! page for trying all of it out.

pub mod catalog;
pub mod engine;
pub mod host;
pub mod messages;
pub mod probe;
pub mod settings;
pub mod timer;
pub mod tooltip;
pub mod tui;
pub mod webfont;

mod test_utils;

pub use engine::TipEngine;
