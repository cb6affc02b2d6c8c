//! Tooltip engine: placement geometry, per-instance visibility lifecycle,
//! hover timing, and page-wide coordination.

pub mod dispatcher;
mod placement;
mod timings;
pub mod tooltip_events;
mod tooltip_state;

pub use dispatcher::Registry;
pub use placement::{
    DocRect, Placement, PlacementConfig, Size, VerticalSide, Viewport, compute_placement,
};
pub use timings::Timings;
pub use tooltip_state::{TooltipInstance, VisibilityState};
