//! Page-wide tooltip coordination
//!
//! Owns the trigger → instance registry and the touch arbitration rule: a
//! tap first hides every other tooltip, then toggles its own, and a tap that
//! lands nowhere hides everything. Hover on pointer devices never needs
//! cross-instance suppression; the hide-on-leave timers keep steady state at
//! one visible tooltip anyway.

use std::collections::HashMap;
use std::time::Instant;

use crate::host::{HostPage, TriggerId};
use crate::timer::TimerQueue;

use super::placement::PlacementConfig;
use super::timings::Timings;
use super::tooltip_state::TooltipInstance;

/// All tooltip instances on the page, one per bound trigger
#[derive(Default)]
pub struct Registry {
    instances: HashMap<TriggerId, TooltipInstance>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind an instance; a trigger is only ever bound once
    pub fn insert(&mut self, instance: TooltipInstance) {
        self.instances.insert(instance.trigger(), instance);
    }

    pub fn get_mut(&mut self, trigger: TriggerId) -> Option<&mut TooltipInstance> {
        self.instances.get_mut(&trigger)
    }

    pub fn get(&self, trigger: TriggerId) -> Option<&TooltipInstance> {
        self.instances.get(&trigger)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut TooltipInstance> {
        self.instances.values_mut()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TooltipInstance> {
        self.instances.values()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Remove every instance, handing each to the caller for teardown
    pub fn drain(&mut self) -> impl Iterator<Item = TooltipInstance> + '_ {
        self.instances.drain().map(|(_, instance)| instance)
    }
}

/// Tap landed on a trigger: hide everyone else first, then toggle the tapped
/// tooltip (show if hidden or still fading out, hide if visible)
pub fn tap_trigger<H: HostPage>(
    registry: &mut Registry,
    trigger: TriggerId,
    host: &mut H,
    timers: &mut TimerQueue,
    timings: &Timings,
    cfg: &PlacementConfig,
    now: Instant,
) {
    for instance in registry.iter_mut() {
        if instance.trigger() != trigger {
            instance.hide(host, timers, timings, now);
        }
    }

    let Some(instance) = registry.get_mut(trigger) else {
        return;
    };
    if instance.is_visible() {
        instance.hide(host, timers, timings, now);
    } else {
        instance.cancel_show_timer(timers);
        instance.show(host, timers, cfg);
    }
}

/// Tap landed outside every trigger and surface: hide everything
pub fn tap_outside<H: HostPage>(
    registry: &mut Registry,
    host: &mut H,
    timers: &mut TimerQueue,
    timings: &Timings,
    now: Instant,
) {
    for instance in registry.iter_mut() {
        instance.hide(host, timers, timings, now);
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod dispatcher_tests;
