//! Tooltip placement calculator
//!
//! Pure geometry: given the anchor rectangle, the measured surface size and
//! the viewport, decide which side the tooltip goes on, where its top-left
//! corner lands, and where the tail marker sits so it keeps pointing at the
//! anchor after clamping. Recomputed on every show, never cached, because
//! both the content size and the viewport can change between calls.

/// Axis-aligned rectangle in document coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl DocRect {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// Measured content size of a surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Visible window onto the document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_top: f64,
    pub scroll_left: f64,
}

impl Viewport {
    /// Document coordinate of the viewport's right edge
    pub fn right(&self) -> f64 {
        self.scroll_left + self.width
    }
}

/// Which side of the anchor the tooltip sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalSide {
    Above,
    Below,
}

/// Computed surface position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub side: VerticalSide,
    pub top: f64,
    pub left: f64,
    /// Tail marker offset from the surface's own left edge
    pub tail_left: f64,
}

/// Fixed offsets used by the placement algorithm, in document units
#[derive(Debug, Clone, Copy)]
pub struct PlacementConfig {
    /// Gap between the surface bottom and the anchor top when placed above
    pub gap_above: f64,
    /// Gap between the anchor bottom and the surface top when placed below
    pub gap_below: f64,
    /// Clearance required above the anchor before the above placement is kept
    pub top_margin: f64,
    /// Offset from the anchor center back to the surface's left edge
    pub tail_offset: f64,
    /// Half the width of the tail marker
    pub tail_half_width: f64,
    /// Slack subtracted from the viewport's right edge before clamping
    pub right_margin: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            gap_above: 7.0,
            gap_below: 9.0,
            top_margin: 6.0,
            tail_offset: 20.0,
            tail_half_width: 6.0,
            right_margin: 1.0,
        }
    }
}

/// Compute where the surface goes for this anchor and viewport
pub fn compute_placement(
    anchor: DocRect,
    tip: Size,
    viewport: Viewport,
    cfg: &PlacementConfig,
) -> Placement {
    let anchor_center_x = anchor.center_x();

    // Default: above the anchor, tail-aligned to the anchor center
    let mut top = anchor.top - tip.height - cfg.gap_above;
    let mut left = anchor_center_x - cfg.tail_offset;
    let mut side = VerticalSide::Above;

    // Would clip above the scrolled viewport: flip below
    if anchor.top < tip.height + viewport.scroll_top + cfg.top_margin {
        top = anchor.bottom() + cfg.gap_below;
        side = VerticalSide::Below;
    }

    // Shift left just enough to fit inside the right edge
    if left + tip.width > viewport.right() - cfg.right_margin {
        left = viewport.right() - tip.width;
    }

    // Never start left of the scrolled-in region
    if left < viewport.scroll_left {
        left = viewport.scroll_left;
    }

    // Tail still points at the anchor center after clamping
    let tail_left = anchor_center_x - left - cfg.tail_half_width;

    Placement {
        side,
        top,
        left,
        tail_left,
    }
}

#[cfg(test)]
#[path = "placement_tests.rs"]
mod placement_tests;
