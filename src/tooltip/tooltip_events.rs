//! Per-trigger interaction handling
//!
//! Mediates hover timing between the pointer and the visibility machine:
//! enter and leave arm the show/hide delay timers, the surface keeps itself
//! open while hovered, and the embedded settings button is guarded by an
//! in-flight flag plus a cooldown timer.

use std::time::Instant;

use crate::host::HostPage;
use crate::timer::TimerQueue;

use super::timings::Timings;
use super::tooltip_state::TooltipInstance;

/// Pointer entered the trigger: wait out the hover dwell before showing.
/// Re-entering restarts the dwell from scratch and calls off a pending hide.
pub fn pointer_enter_trigger(
    instance: &mut TooltipInstance,
    timers: &mut TimerQueue,
    timings: &Timings,
    now: Instant,
) {
    instance.cancel_hide_timer(timers);
    instance.arm_show_timer(timers, now + timings.show_delay);
}

/// Pointer left the trigger or the surface: drop any pending show and give
/// the user the hide-delay grace period to reach the surface (or come back)
pub fn pointer_leave(
    instance: &mut TooltipInstance,
    timers: &mut TimerQueue,
    timings: &Timings,
    now: Instant,
) {
    instance.cancel_show_timer(timers);
    instance.arm_hide_timer(timers, now + timings.hide_delay);
}

/// Pointer entered the surface itself: the tooltip stays open while hovered,
/// even if a fade-out had already started
pub fn pointer_enter_surface<H: HostPage>(
    instance: &mut TooltipInstance,
    host: &mut H,
    timers: &mut TimerQueue,
) {
    instance.cancel_show_timer(timers);
    instance.revive(host, timers);
}

/// Settings button pressed. Returns false while a previous activation is
/// still cooling down; otherwise marks the instance busy and arms the
/// cooldown timer that re-enables the button.
pub fn settings_pressed(
    instance: &mut TooltipInstance,
    timers: &mut TimerQueue,
    timings: &Timings,
    now: Instant,
) -> bool {
    if instance.settings_busy() {
        return false;
    }
    instance.set_settings_busy();
    instance.arm_cooldown_timer(timers, now + timings.settings_cooldown);
    true
}

#[cfg(test)]
#[path = "tooltip_events_tests.rs"]
mod tooltip_events_tests;
