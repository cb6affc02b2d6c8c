//! Mouse-to-pointer-event synthesis
//!
//! Hit-tests mouse positions against trigger spans and mounted surfaces and
//! turns crossterm mouse events into the engine's pointer vocabulary.
//! Surfaces sit on top of the page, so they win the hit test.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::host::{DeviceClass, PointerEvent, TriggerId};

use super::page::{SETTINGS_BUTTON, TuiPage};
use unicode_width::UnicodeWidthStr;

/// What is under the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    Trigger(TriggerId),
    Surface(TriggerId),
    /// The settings button inside a surface
    SettingsButton(TriggerId),
    Outside,
}

/// Which hover target a region belongs to; the settings button is part of
/// its surface for enter/leave purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HoverTarget {
    Trigger(TriggerId),
    Surface(TriggerId),
    None,
}

fn target_of(region: HitRegion) -> HoverTarget {
    match region {
        HitRegion::Trigger(trigger) => HoverTarget::Trigger(trigger),
        HitRegion::Surface(trigger) | HitRegion::SettingsButton(trigger) => {
            HoverTarget::Surface(trigger)
        }
        HitRegion::Outside => HoverTarget::None,
    }
}

/// Find what sits at a cell position
pub fn region_at(page: &TuiPage, column: u16, row: u16) -> HitRegion {
    // Mounted surfaces first
    for surface in page.mounted_surfaces() {
        let Some(rect) = surface.rect() else {
            continue;
        };
        let inside = column >= rect.x
            && column < rect.x + rect.width
            && row >= rect.y
            && row < rect.y + rect.height;
        if !inside {
            continue;
        }

        // Button occupies the leading cells of the inner line
        let button_width = SETTINGS_BUTTON.width() as u16;
        let on_button = row == rect.y + 1
            && column >= rect.x + 1
            && column < rect.x + 1 + button_width;
        if on_button {
            return HitRegion::SettingsButton(surface.trigger);
        }
        return HitRegion::Surface(surface.trigger);
    }

    for trigger in &page.triggers {
        if row == trigger.row && column >= trigger.col && column < trigger.col + trigger.cell_width()
        {
            return HitRegion::Trigger(trigger.id);
        }
    }

    HitRegion::Outside
}

/// Turn one mouse event into pointer events, updating the tracked hover
pub fn pointer_events(
    page: &TuiPage,
    hover: &mut HitRegion,
    mouse: MouseEvent,
    device: DeviceClass,
) -> Vec<PointerEvent> {
    let mut events = Vec::new();

    match mouse.kind {
        MouseEventKind::Moved => {
            if device != DeviceClass::Pointer {
                return events;
            }
            let region = region_at(page, mouse.column, mouse.row);
            let old = target_of(*hover);
            let new = target_of(region);
            if old != new {
                match old {
                    HoverTarget::Trigger(trigger) => {
                        events.push(PointerEvent::TriggerLeave(trigger));
                    }
                    HoverTarget::Surface(trigger) => {
                        events.push(PointerEvent::SurfaceLeave(trigger));
                    }
                    HoverTarget::None => {}
                }
                match new {
                    HoverTarget::Trigger(trigger) => {
                        events.push(PointerEvent::TriggerEnter(trigger));
                    }
                    HoverTarget::Surface(trigger) => {
                        events.push(PointerEvent::SurfaceEnter(trigger));
                    }
                    HoverTarget::None => {}
                }
            }
            *hover = region;
        }
        MouseEventKind::Down(MouseButton::Left) => {
            let region = region_at(page, mouse.column, mouse.row);
            match (device, region) {
                // The button works the same on both device classes
                (_, HitRegion::SettingsButton(trigger)) => {
                    events.push(PointerEvent::SettingsPressed(trigger));
                }
                (DeviceClass::Touch, HitRegion::Trigger(trigger)) => {
                    events.push(PointerEvent::Tap(trigger));
                }
                (DeviceClass::Touch, HitRegion::Outside) => {
                    events.push(PointerEvent::TapOutside);
                }
                _ => {}
            }
        }
        _ => {}
    }

    events
}

#[cfg(test)]
#[path = "hover_tests.rs"]
mod hover_tests;
