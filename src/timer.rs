//! Deadline queue for the tooltip engine
//!
//! All timing runs through one single-threaded queue: the engine arms timers
//! against `Instant` deadlines, the host loop drains the due ones each tick.
//! Arming a timer of a kind always follows cancellation of the previous one
//! of the same kind, so a superseded timer can never fire late.

use std::time::Instant;

use crate::host::TriggerId;

/// Handle to one pending timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// What a timer does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Hover delay before a tooltip shows
    ShowDelay,
    /// Grace delay between pointer leave and the fade-out starting
    HideDelay,
    /// Fade-out finished; unmount the surface
    Remove,
    /// Settings button becomes pressable again
    SettingsCooldown,
}

/// A due timer, delivered to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub trigger: TriggerId,
    pub kind: TimerKind,
}

#[derive(Debug)]
struct Entry {
    id: TimerId,
    deadline: Instant,
    trigger: TriggerId,
    kind: TimerKind,
}

/// Pending timers, owned by the engine
#[derive(Debug, Default)]
pub struct TimerQueue {
    next_id: u64,
    entries: Vec<Entry>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a timer; the handle is needed to cancel it later
    pub fn arm(&mut self, deadline: Instant, trigger: TriggerId, kind: TimerKind) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.entries.push(Entry {
            id,
            deadline,
            trigger,
            kind,
        });
        id
    }

    /// Cancel by handle; canceling an already-fired timer is a no-op
    pub fn cancel(&mut self, id: TimerId) {
        self.entries.retain(|entry| entry.id != id);
    }

    /// Remove and return every timer due at `now`, earliest deadline first
    pub fn pop_due(&mut self, now: Instant) -> Vec<Fired> {
        let mut due: Vec<Entry> = Vec::new();
        let mut remaining: Vec<Entry> = Vec::new();
        for entry in self.entries.drain(..) {
            if entry.deadline <= now {
                due.push(entry);
            } else {
                remaining.push(entry);
            }
        }
        self.entries = remaining;

        // Same-deadline timers fire in arm order
        due.sort_by(|a, b| a.deadline.cmp(&b.deadline).then(a.id.0.cmp(&b.id.0)));
        due.into_iter()
            .map(|entry| Fired {
                trigger: entry.trigger,
                kind: entry.kind,
            })
            .collect()
    }

    /// Earliest pending deadline, for the host loop's poll timeout
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.deadline).min()
    }

    /// Number of pending timers
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Drop every pending timer
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod timer_tests;
