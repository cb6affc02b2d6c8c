//! Host page boundary
//!
//! Everything the surrounding page owns sits behind the `HostPage` trait:
//! trigger elements and their geometry, tooltip surfaces, the style sink for
//! injected font rules, and the notification area. The engine never touches
//! the page directly, so tests drive it with a scripted fake and the binary
//! drives it with a terminal page.

use crate::settings::LoadMode;
use crate::tooltip::{DocRect, Placement, Size, Viewport};

/// Identifies one trigger element on the host page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TriggerId(pub u64);

/// Identifies one tooltip surface created by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u64);

/// Input capability of the device driving the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    /// Hover-capable pointer (mouse, trackpad)
    Pointer,
    /// Touch-only: taps toggle tooltips, hover events never arrive
    Touch,
}

/// Fade class currently applied to a surface (exclusive, one at a time)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fade {
    #[default]
    None,
    /// Appearing above the anchor, sliding down into place
    InDown,
    /// Appearing below the anchor, sliding up into place
    InUp,
    /// Disappearing from above the anchor
    OutUp,
    /// Disappearing from below the anchor
    OutDown,
}

/// Pointer/touch events the host page feeds into the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    TriggerEnter(TriggerId),
    TriggerLeave(TriggerId),
    SurfaceEnter(TriggerId),
    SurfaceLeave(TriggerId),
    /// Tap on a trigger (touch devices)
    Tap(TriggerId),
    /// Tap that landed outside every trigger and surface (touch devices)
    TapOutside,
    /// Settings button inside the surface of this trigger was activated
    SettingsPressed(TriggerId),
}

/// The page the tooltips live in
pub trait HostPage {
    /// All trigger elements currently on the page
    fn triggers(&self) -> Vec<TriggerId>;

    /// Explanatory text shown in the tooltip for this trigger
    fn tip_text(&self, trigger: TriggerId) -> String;

    /// Raw text content of the trigger (the characters webfonts apply to)
    fn text_content(&self, trigger: TriggerId) -> String;

    /// Anchor rectangle of the trigger in document coordinates
    fn anchor_rect(&self, trigger: TriggerId) -> DocRect;

    /// Current viewport size and scroll offsets
    fn viewport(&self) -> Viewport;

    /// Build a surface for this trigger; it is not in the document yet
    fn create_surface(&mut self, trigger: TriggerId, text: &str) -> SurfaceId;

    /// Measured content size of the surface
    fn surface_size(&self, surface: SurfaceId) -> Size;

    /// Insert the surface into the document
    fn mount_surface(&mut self, surface: SurfaceId);

    /// Remove the surface from the document, keeping it reusable
    fn unmount_surface(&mut self, surface: SurfaceId);

    /// Release the surface for good
    fn discard_surface(&mut self, surface: SurfaceId);

    /// Position the surface and toggle its above/below side
    fn apply_placement(&mut self, surface: SurfaceId, placement: &Placement);

    /// Replace the surface's fade class
    fn set_fade(&mut self, surface: SurfaceId, fade: Fade);

    /// Point the trigger's text at a scoped font family; `mode` decides
    /// whether the webfont overrides or falls behind the system font
    fn set_font_family(&mut self, trigger: TriggerId, family: &str, mode: LoadMode);

    /// Append one CSS rule to the shared injected-style sink
    fn append_style_rule(&mut self, css: &str);

    /// Drop every injected style rule
    fn clear_style_rules(&mut self);

    /// Show a non-blocking notification to the user
    fn notify(&mut self, text: &str);
}
