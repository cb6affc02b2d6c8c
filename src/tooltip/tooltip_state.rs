//! Tooltip visibility state machine
//!
//! One `TooltipInstance` per trigger element. The instance exclusively owns
//! its surface handle and its pending timers; no other component mutates
//! them. The surface is built lazily on the first show and then reused for
//! the instance's whole life, so repeated show/hide cycles never re-create
//! it. Invariant: the surface is mounted in the document iff the state is
//! Visible or Disappearing.

use std::time::Instant;

use crate::host::{Fade, HostPage, SurfaceId, TriggerId};
use crate::timer::{TimerId, TimerKind, TimerQueue};

use super::placement::{PlacementConfig, VerticalSide, compute_placement};
use super::timings::Timings;

/// Lifecycle phase of one tooltip surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilityState {
    /// No surface in the document (initial and terminal)
    #[default]
    Hidden,
    /// Surface mounted and interactive
    Visible,
    /// Surface mounted, fade-out running, removal pending
    Disappearing,
}

/// State for one trigger's tooltip
pub struct TooltipInstance {
    trigger: TriggerId,
    text: String,
    surface: Option<SurfaceId>,
    state: VisibilityState,
    last_side: Option<VerticalSide>,
    show_timer: Option<TimerId>,
    hide_timer: Option<TimerId>,
    remove_timer: Option<TimerId>,
    cooldown_timer: Option<TimerId>,
    settings_busy: bool,
}

impl TooltipInstance {
    pub fn new(trigger: TriggerId, text: String) -> Self {
        Self {
            trigger,
            text,
            surface: None,
            state: VisibilityState::Hidden,
            last_side: None,
            show_timer: None,
            hide_timer: None,
            remove_timer: None,
            cooldown_timer: None,
            settings_busy: false,
        }
    }

    pub fn trigger(&self) -> TriggerId {
        self.trigger
    }

    pub fn state(&self) -> VisibilityState {
        self.state
    }

    /// Mounted and not fading out
    pub fn is_visible(&self) -> bool {
        self.state == VisibilityState::Visible
    }

    pub fn surface(&self) -> Option<SurfaceId> {
        self.surface
    }

    pub fn last_side(&self) -> Option<VerticalSide> {
        self.last_side
    }

    pub fn settings_busy(&self) -> bool {
        self.settings_busy
    }

    /// Mount (or revive) the surface and position it against the anchor.
    ///
    /// Cancels any pending hide/removal first, so a show during a fade-out
    /// keeps the still-mounted surface without ever unmounting it.
    pub fn show<H: HostPage>(
        &mut self,
        host: &mut H,
        timers: &mut TimerQueue,
        cfg: &PlacementConfig,
    ) {
        self.cancel_hide_timer(timers);
        self.cancel_remove_timer(timers);

        let surface = match self.surface {
            Some(surface) => surface,
            None => {
                // Lazy construction, once per instance
                let surface = host.create_surface(self.trigger, &self.text);
                self.surface = Some(surface);
                surface
            }
        };

        // Drop any fade-out left over from an interrupted hide
        host.set_fade(surface, Fade::None);

        if self.state == VisibilityState::Hidden {
            host.mount_surface(surface);
        }
        self.state = VisibilityState::Visible;

        // Anchor, content and viewport may all have changed since last time
        let placement = compute_placement(
            host.anchor_rect(self.trigger),
            host.surface_size(surface),
            host.viewport(),
            cfg,
        );
        host.apply_placement(surface, &placement);
        host.set_fade(
            surface,
            match placement.side {
                VerticalSide::Above => Fade::InDown,
                VerticalSide::Below => Fade::InUp,
            },
        );
        self.last_side = Some(placement.side);

        log::debug!("tooltip {:?} shown {:?}", self.trigger, placement.side);
    }

    /// Start the fade-out; the removal timer unmounts when it elapses.
    ///
    /// No-op unless currently Visible, so repeated hides collapse into one.
    pub fn hide<H: HostPage>(
        &mut self,
        host: &mut H,
        timers: &mut TimerQueue,
        timings: &Timings,
        now: Instant,
    ) {
        if self.state != VisibilityState::Visible {
            return;
        }
        let Some(surface) = self.surface else {
            return;
        };

        self.state = VisibilityState::Disappearing;
        host.set_fade(
            surface,
            match self.last_side {
                Some(VerticalSide::Below) => Fade::OutDown,
                _ => Fade::OutUp,
            },
        );

        self.cancel_remove_timer(timers);
        self.remove_timer =
            Some(timers.arm(now + timings.fade_duration, self.trigger, TimerKind::Remove));
    }

    /// Removal timer elapsed: unmount and settle in Hidden
    pub fn finish_hide<H: HostPage>(&mut self, host: &mut H) {
        self.remove_timer = None;
        if self.state != VisibilityState::Disappearing {
            return;
        }
        if let Some(surface) = self.surface {
            host.unmount_surface(surface);
        }
        self.state = VisibilityState::Hidden;
    }

    /// Pointer re-entered the surface: cancel pending hide work and undo an
    /// in-progress fade without a full reposition
    pub fn revive<H: HostPage>(&mut self, host: &mut H, timers: &mut TimerQueue) {
        self.cancel_hide_timer(timers);
        self.cancel_remove_timer(timers);
        if self.state == VisibilityState::Disappearing {
            if let Some(surface) = self.surface {
                host.set_fade(surface, Fade::None);
            }
            self.state = VisibilityState::Visible;
        }
    }

    /// Tear down everything the instance owns; used when the trigger leaves
    /// the page
    pub fn destroy<H: HostPage>(&mut self, host: &mut H, timers: &mut TimerQueue) {
        self.cancel_show_timer(timers);
        self.cancel_hide_timer(timers);
        self.cancel_remove_timer(timers);
        self.cancel_cooldown_timer(timers);

        if let Some(surface) = self.surface.take() {
            if self.state != VisibilityState::Hidden {
                host.unmount_surface(surface);
            }
            host.discard_surface(surface);
        }
        self.state = VisibilityState::Hidden;
        self.last_side = None;
        self.settings_busy = false;
    }

    // Timer handle plumbing. Arming a kind always cancels the previous timer
    // of that kind, so at most one of each is ever pending.

    pub(crate) fn arm_show_timer(&mut self, timers: &mut TimerQueue, deadline: Instant) {
        self.cancel_show_timer(timers);
        self.show_timer = Some(timers.arm(deadline, self.trigger, TimerKind::ShowDelay));
    }

    pub(crate) fn cancel_show_timer(&mut self, timers: &mut TimerQueue) {
        if let Some(id) = self.show_timer.take() {
            timers.cancel(id);
        }
    }

    pub(crate) fn show_timer_fired(&mut self) {
        self.show_timer = None;
    }

    pub(crate) fn arm_hide_timer(&mut self, timers: &mut TimerQueue, deadline: Instant) {
        self.cancel_hide_timer(timers);
        self.hide_timer = Some(timers.arm(deadline, self.trigger, TimerKind::HideDelay));
    }

    pub(crate) fn cancel_hide_timer(&mut self, timers: &mut TimerQueue) {
        if let Some(id) = self.hide_timer.take() {
            timers.cancel(id);
        }
    }

    pub(crate) fn hide_timer_fired(&mut self) {
        self.hide_timer = None;
    }

    fn cancel_remove_timer(&mut self, timers: &mut TimerQueue) {
        if let Some(id) = self.remove_timer.take() {
            timers.cancel(id);
        }
    }

    pub(crate) fn arm_cooldown_timer(&mut self, timers: &mut TimerQueue, deadline: Instant) {
        self.cancel_cooldown_timer(timers);
        self.cooldown_timer = Some(timers.arm(deadline, self.trigger, TimerKind::SettingsCooldown));
    }

    fn cancel_cooldown_timer(&mut self, timers: &mut TimerQueue) {
        if let Some(id) = self.cooldown_timer.take() {
            timers.cancel(id);
        }
    }

    pub(crate) fn set_settings_busy(&mut self) {
        self.settings_busy = true;
    }

    pub(crate) fn cooldown_elapsed(&mut self) {
        self.cooldown_timer = None;
        self.settings_busy = false;
    }
}

#[cfg(test)]
#[path = "tooltip_state_tests.rs"]
mod tooltip_state_tests;
