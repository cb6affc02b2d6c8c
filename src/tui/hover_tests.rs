//! Tests for tui/hover

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::host::{HostPage, PointerEvent};
use crate::tooltip::{Placement, VerticalSide};

use super::*;
use crate::host::DeviceClass;

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    }
}

fn moved(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Moved, column, row)
}

fn click(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

/// Page with one surface mounted at a known rect
fn page_with_surface() -> (TuiPage, crate::host::TriggerId) {
    let mut page = TuiPage::demo();
    let trigger = page.triggers[0].id;
    let surface = page.create_surface(trigger, "tip text");
    page.apply_placement(
        surface,
        &Placement {
            side: VerticalSide::Above,
            top: 2.0,
            left: 10.0,
            tail_left: 4.0,
        },
    );
    page.mount_surface(surface);
    (page, trigger)
}

#[test]
fn test_region_at_trigger() {
    let page = TuiPage::demo();
    let trigger = &page.triggers[0];

    assert_eq!(
        region_at(&page, trigger.col, trigger.row),
        HitRegion::Trigger(trigger.id)
    );
    // Second cell of a double-width char still hits
    assert_eq!(
        region_at(&page, trigger.col + 1, trigger.row),
        HitRegion::Trigger(trigger.id)
    );
}

#[test]
fn test_region_at_outside() {
    let page = TuiPage::demo();

    assert_eq!(region_at(&page, 0, 0), HitRegion::Outside);
}

#[test]
fn test_region_at_surface_beats_page() {
    let (page, trigger) = page_with_surface();

    // Inside the surface body (row 3 is the inner line; past the button)
    assert_eq!(region_at(&page, 20, 3), HitRegion::Surface(trigger));
}

#[test]
fn test_region_at_settings_button() {
    let (page, trigger) = page_with_surface();

    // Leading cells of the inner line
    assert_eq!(region_at(&page, 11, 3), HitRegion::SettingsButton(trigger));
}

#[test]
fn test_move_onto_trigger_emits_enter() {
    let page = TuiPage::demo();
    let trigger = &page.triggers[0];
    let mut hover = HitRegion::Outside;

    let events = pointer_events(
        &page,
        &mut hover,
        moved(trigger.col, trigger.row),
        DeviceClass::Pointer,
    );

    assert_eq!(events, vec![PointerEvent::TriggerEnter(trigger.id)]);
    assert_eq!(hover, HitRegion::Trigger(trigger.id));
}

#[test]
fn test_move_within_trigger_emits_nothing() {
    let page = TuiPage::demo();
    let trigger = &page.triggers[0];
    let mut hover = HitRegion::Trigger(trigger.id);

    let events = pointer_events(
        &page,
        &mut hover,
        moved(trigger.col + 1, trigger.row),
        DeviceClass::Pointer,
    );

    assert!(events.is_empty());
}

#[test]
fn test_move_off_trigger_emits_leave() {
    let page = TuiPage::demo();
    let trigger = &page.triggers[0];
    let mut hover = HitRegion::Trigger(trigger.id);

    let events = pointer_events(&page, &mut hover, moved(0, 0), DeviceClass::Pointer);

    assert_eq!(events, vec![PointerEvent::TriggerLeave(trigger.id)]);
    assert_eq!(hover, HitRegion::Outside);
}

#[test]
fn test_surface_to_button_is_not_a_leave() {
    let (page, _) = page_with_surface();
    let mut hover = HitRegion::Surface(page.triggers[0].id);

    // Moving from the surface body onto its settings button stays "on the
    // surface" as far as the engine is concerned
    let events = pointer_events(&page, &mut hover, moved(11, 3), DeviceClass::Pointer);

    assert!(events.is_empty());
}

#[test]
fn test_hover_ignored_in_touch_mode() {
    let page = TuiPage::demo();
    let trigger = &page.triggers[0];
    let mut hover = HitRegion::Outside;

    let events = pointer_events(
        &page,
        &mut hover,
        moved(trigger.col, trigger.row),
        DeviceClass::Touch,
    );

    assert!(events.is_empty());
}

#[test]
fn test_touch_click_taps_trigger() {
    let page = TuiPage::demo();
    let trigger = &page.triggers[0];
    let mut hover = HitRegion::Outside;

    let events = pointer_events(
        &page,
        &mut hover,
        click(trigger.col, trigger.row),
        DeviceClass::Touch,
    );

    assert_eq!(events, vec![PointerEvent::Tap(trigger.id)]);
}

#[test]
fn test_touch_click_outside_taps_outside() {
    let page = TuiPage::demo();
    let mut hover = HitRegion::Outside;

    let events = pointer_events(&page, &mut hover, click(0, 0), DeviceClass::Touch);

    assert_eq!(events, vec![PointerEvent::TapOutside]);
}

#[test]
fn test_settings_button_click_works_on_both_devices() {
    for device in [DeviceClass::Pointer, DeviceClass::Touch] {
        let (page, trigger) = page_with_surface();
        let mut hover = HitRegion::Outside;

        let events = pointer_events(&page, &mut hover, click(11, 3), device);

        assert_eq!(events, vec![PointerEvent::SettingsPressed(trigger)]);
    }
}

#[test]
fn test_pointer_click_on_page_does_nothing() {
    let page = TuiPage::demo();
    let mut hover = HitRegion::Outside;

    let events = pointer_events(&page, &mut hover, click(0, 0), DeviceClass::Pointer);

    assert!(events.is_empty());
}
