//! Tests for tooltip/dispatcher

use std::time::{Duration, Instant};

use crate::host::TriggerId;
use crate::test_utils::test_helpers::FakeHost;
use crate::timer::{TimerKind, TimerQueue};
use crate::tooltip::placement::PlacementConfig;
use crate::tooltip::timings::Timings;
use crate::tooltip::tooltip_state::{TooltipInstance, VisibilityState};

use super::*;

struct Fixture {
    host: FakeHost,
    registry: Registry,
    timers: TimerQueue,
    timings: Timings,
    cfg: PlacementConfig,
    now: Instant,
    a: TriggerId,
    b: TriggerId,
}

impl Fixture {
    fn new() -> Self {
        let mut host = FakeHost::new();
        let a = host.add_trigger(1, "𫟼");
        let b = host.add_trigger(2, "𰻝");

        let mut registry = Registry::new();
        registry.insert(TooltipInstance::new(a, "tip a".to_string()));
        registry.insert(TooltipInstance::new(b, "tip b".to_string()));

        Self {
            host,
            registry,
            timers: TimerQueue::new(),
            timings: Timings::default(),
            cfg: PlacementConfig::default(),
            now: Instant::now(),
            a,
            b,
        }
    }

    fn tap(&mut self, trigger: TriggerId) {
        tap_trigger(
            &mut self.registry,
            trigger,
            &mut self.host,
            &mut self.timers,
            &self.timings,
            &self.cfg,
            self.now,
        );
    }

    fn run_removals(&mut self, ms: u64) {
        self.now += Duration::from_millis(ms);
        for fired in self.timers.pop_due(self.now) {
            if fired.kind == TimerKind::Remove {
                if let Some(instance) = self.registry.get_mut(fired.trigger) {
                    instance.finish_hide(&mut self.host);
                }
            }
        }
    }

    fn state(&self, trigger: TriggerId) -> VisibilityState {
        self.registry.get(trigger).unwrap().state()
    }
}

#[test]
fn test_tap_shows_hidden_tooltip() {
    let mut fx = Fixture::new();

    fx.tap(fx.a);

    assert_eq!(fx.state(fx.a), VisibilityState::Visible);
    assert!(fx.host.mounted(fx.a));
}

#[test]
fn test_tap_visible_tooltip_hides_it() {
    let mut fx = Fixture::new();

    fx.tap(fx.a);
    fx.tap(fx.a);

    assert_eq!(fx.state(fx.a), VisibilityState::Disappearing);
    fx.run_removals(200);
    assert_eq!(fx.state(fx.a), VisibilityState::Hidden);
    assert!(!fx.host.mounted(fx.a));
}

#[test]
fn test_tap_disappearing_tooltip_shows_it_again() {
    let mut fx = Fixture::new();

    fx.tap(fx.a);
    fx.tap(fx.a);
    assert_eq!(fx.state(fx.a), VisibilityState::Disappearing);

    // Third tap lands during the fade: toggle back to visible
    fx.tap(fx.a);
    assert_eq!(fx.state(fx.a), VisibilityState::Visible);
    assert!(fx.host.mounted(fx.a));
}

#[test]
fn test_tap_b_hides_a_never_both_visible() {
    let mut fx = Fixture::new();

    fx.tap(fx.a);
    assert_eq!(fx.state(fx.a), VisibilityState::Visible);

    fx.tap(fx.b);

    assert_eq!(fx.state(fx.b), VisibilityState::Visible);
    assert_ne!(fx.state(fx.a), VisibilityState::Visible);

    fx.run_removals(200);
    assert_eq!(fx.state(fx.a), VisibilityState::Hidden);
    assert_eq!(fx.state(fx.b), VisibilityState::Visible);
}

#[test]
fn test_tap_unknown_trigger_only_hides_others() {
    let mut fx = Fixture::new();
    fx.tap(fx.a);

    tap_trigger(
        &mut fx.registry,
        TriggerId(99),
        &mut fx.host,
        &mut fx.timers,
        &fx.timings,
        &fx.cfg,
        fx.now,
    );

    assert_eq!(fx.state(fx.a), VisibilityState::Disappearing);
}

#[test]
fn test_tap_outside_hides_everything() {
    let mut fx = Fixture::new();
    fx.tap(fx.a);
    // Make both visible by hand; touch taps would have suppressed one
    fx.registry
        .get_mut(fx.b)
        .unwrap()
        .show(&mut fx.host, &mut fx.timers, &fx.cfg);

    tap_outside(
        &mut fx.registry,
        &mut fx.host,
        &mut fx.timers,
        &fx.timings,
        fx.now,
    );

    assert_eq!(fx.state(fx.a), VisibilityState::Disappearing);
    assert_eq!(fx.state(fx.b), VisibilityState::Disappearing);
    fx.run_removals(200);
    assert_eq!(fx.state(fx.a), VisibilityState::Hidden);
    assert_eq!(fx.state(fx.b), VisibilityState::Hidden);
}

#[test]
fn test_tap_outside_with_nothing_visible_is_noop() {
    let mut fx = Fixture::new();

    tap_outside(
        &mut fx.registry,
        &mut fx.host,
        &mut fx.timers,
        &fx.timings,
        fx.now,
    );

    assert_eq!(fx.state(fx.a), VisibilityState::Hidden);
    assert_eq!(fx.state(fx.b), VisibilityState::Hidden);
    assert_eq!(fx.timers.pending(), 0);
}

#[test]
fn test_registry_binds_each_trigger_once() {
    let mut registry = Registry::new();
    let trigger = TriggerId(5);

    registry.insert(TooltipInstance::new(trigger, "first".to_string()));
    registry.insert(TooltipInstance::new(trigger, "second".to_string()));

    assert_eq!(registry.len(), 1);
}
