//! Interaction timing constants
//!
//! The hide delay and the fade duration happen to share a value; they stay
//! separate fields so either can be tuned without the other.

use std::time::Duration;

use crate::host::DeviceClass;

/// Delays governing the hover/hide/fade lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Hover dwell before a tooltip shows
    pub show_delay: Duration,
    /// Grace period after pointer leave before the fade-out starts
    pub hide_delay: Duration,
    /// Fade-out length; the surface unmounts when it elapses
    pub fade_duration: Duration,
    /// Settings button stays disabled this long after an activation
    pub settings_cooldown: Duration,
}

impl Timings {
    pub fn for_device(device: DeviceClass) -> Self {
        // Touch drives tooltips through the tap path, so there is no hover
        // dwell to wait out
        let show_delay = match device {
            DeviceClass::Pointer => Duration::from_millis(200),
            DeviceClass::Touch => Duration::ZERO,
        };

        Self {
            show_delay,
            hide_delay: Duration::from_millis(200),
            fade_duration: Duration::from_millis(200),
            settings_cooldown: Duration::from_millis(300),
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self::for_device(DeviceClass::Pointer)
    }
}
