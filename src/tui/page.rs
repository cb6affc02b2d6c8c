//! Terminal host page
//!
//! Implements the host boundary on a ratatui buffer: a short demo article
//! with rare-character trigger spans, tooltip surfaces as floating boxes,
//! the injected-style sink as a rule log, and a notification line. One cell
//! is one document unit; there is no scrolling, so the viewport is the
//! frame.

use std::collections::HashMap;

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use crate::host::{Fade, HostPage, SurfaceId, TriggerId};
use crate::settings::LoadMode;
use crate::tooltip::{DocRect, Placement, PlacementConfig, Size, Viewport};

use super::notification::NotificationState;

/// Placement offsets in cell units rather than pixels
pub fn cell_placement() -> PlacementConfig {
    PlacementConfig {
        gap_above: 1.0,
        gap_below: 1.0,
        top_margin: 1.0,
        tail_offset: 4.0,
        tail_half_width: 0.0,
        right_margin: 1.0,
    }
}

/// One piece of page text at a fixed position
pub struct Segment {
    pub row: u16,
    pub col: u16,
    pub text: String,
    /// Set when this segment is a tooltip trigger
    pub trigger: Option<TriggerId>,
}

/// A trigger span and its tooltip payload
pub struct TuiTrigger {
    pub id: TriggerId,
    pub row: u16,
    pub col: u16,
    pub text: String,
    pub tip: String,
}

impl TuiTrigger {
    pub fn cell_width(&self) -> u16 {
        self.text.width() as u16
    }
}

/// One tooltip surface as a floating box
pub struct TuiSurface {
    pub trigger: TriggerId,
    pub text: String,
    pub mounted: bool,
    pub fade: Fade,
    pub placement: Option<Placement>,
    pub width: u16,
    pub height: u16,
}

impl TuiSurface {
    /// Rect the surface occupies once placed
    pub fn rect(&self) -> Option<Rect> {
        let placement = self.placement?;
        Some(Rect {
            x: placement.left.max(0.0) as u16,
            y: placement.top.max(0.0) as u16,
            width: self.width,
            height: self.height,
        })
    }
}

/// The demo page
pub struct TuiPage {
    pub segments: Vec<Segment>,
    pub triggers: Vec<TuiTrigger>,
    pub surfaces: HashMap<SurfaceId, TuiSurface>,
    pub area: Rect,
    pub style_rules: Vec<String>,
    pub families: HashMap<TriggerId, (String, LoadMode)>,
    pub notification: NotificationState,
    next_surface: u64,
}

/// Label on the surface's embedded settings button
pub const SETTINGS_BUTTON: &str = "[⚙]";

impl TuiPage {
    /// Build the demo article: running text with rare-character triggers
    pub fn demo() -> Self {
        let mut page = Self {
            segments: Vec::new(),
            triggers: Vec::new(),
            surfaces: HashMap::new(),
            area: Rect::new(0, 0, 80, 24),
            style_rules: Vec::new(),
            families: HashMap::new(),
            notification: NotificationState::new(),
            next_surface: 0,
        };

        page.line(4, 4, &[("一些条目会用到罕见汉字，例如", None)]);
        page.line(
            6,
            4,
            &[
                ("陕西的面食“", None),
                ("𰻝", Some("𰻝（U+30EDD）：biáng，面食名用字")),
                ("𰻝", Some("𰻝（U+30EDD）：biáng，面食名用字")),
                ("面”、新造元素名“", None),
                ("鿬", Some("鿬（U+9FEC）：tián，第 117 号元素")),
                ("”，", None),
            ],
        );
        page.line(
            8,
            4,
            &[
                ("以及扩展区汉字“", None),
                ("𫟼", Some("𫟼（U+2B7FC）：dá，金部罕用字")),
                ("”“", None),
                ("䲜", Some("䲜（U+4C9C）：yè，鱼群之貌")),
                ("”“", None),
                ("𠮷", Some("𠮷（U+20BB7）：jí，吉的异体字")),
                ("”。", None),
            ],
        );
        page.line(
            10,
            4,
            &[("把指针悬停在高亮字上；触摸模式下轻点它们。", None)],
        );

        page
    }

    /// Append one line of segments, advancing columns by display width
    fn line(&mut self, row: u16, col: u16, parts: &[(&str, Option<&str>)]) {
        let mut col = col;
        for (text, tip) in parts.iter().copied() {
            let trigger = tip.map(|tip| {
                let id = TriggerId(self.triggers.len() as u64 + 1);
                self.triggers.push(TuiTrigger {
                    id,
                    row,
                    col,
                    text: text.to_string(),
                    tip: tip.to_string(),
                });
                id
            });
            self.segments.push(Segment {
                row,
                col,
                text: text.to_string(),
                trigger,
            });
            col += text.width() as u16;
        }
    }

    pub fn trigger(&self, id: TriggerId) -> Option<&TuiTrigger> {
        self.triggers.iter().find(|trigger| trigger.id == id)
    }

    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    /// Surfaces currently in the document
    pub fn mounted_surfaces(&self) -> impl Iterator<Item = &TuiSurface> {
        self.surfaces.values().filter(|surface| surface.mounted)
    }

    fn surface_mut(&mut self, surface: SurfaceId) -> Option<&mut TuiSurface> {
        self.surfaces.get_mut(&surface)
    }
}

impl HostPage for TuiPage {
    fn triggers(&self) -> Vec<TriggerId> {
        self.triggers.iter().map(|trigger| trigger.id).collect()
    }

    fn tip_text(&self, trigger: TriggerId) -> String {
        self.trigger(trigger)
            .map(|trigger| trigger.tip.clone())
            .unwrap_or_default()
    }

    fn text_content(&self, trigger: TriggerId) -> String {
        self.trigger(trigger)
            .map(|trigger| trigger.text.clone())
            .unwrap_or_default()
    }

    fn anchor_rect(&self, trigger: TriggerId) -> DocRect {
        let Some(trigger) = self.trigger(trigger) else {
            return DocRect {
                top: 0.0,
                left: 0.0,
                width: 0.0,
                height: 0.0,
            };
        };
        DocRect {
            top: trigger.row as f64,
            left: trigger.col as f64,
            width: trigger.cell_width() as f64,
            height: 1.0,
        }
    }

    fn viewport(&self) -> Viewport {
        Viewport {
            width: self.area.width as f64,
            height: self.area.height as f64,
            scroll_top: 0.0,
            scroll_left: 0.0,
        }
    }

    fn create_surface(&mut self, trigger: TriggerId, text: &str) -> SurfaceId {
        self.next_surface += 1;
        let id = SurfaceId(self.next_surface);

        // Borders plus the settings button in front of the text
        let inner = format!("{SETTINGS_BUTTON} {text}");
        let surface = TuiSurface {
            trigger,
            text: text.to_string(),
            mounted: false,
            fade: Fade::None,
            placement: None,
            width: inner.width() as u16 + 2,
            height: 3,
        };
        self.surfaces.insert(id, surface);
        id
    }

    fn surface_size(&self, surface: SurfaceId) -> Size {
        match self.surfaces.get(&surface) {
            Some(surface) => Size {
                width: surface.width as f64,
                height: surface.height as f64,
            },
            None => Size {
                width: 0.0,
                height: 0.0,
            },
        }
    }

    fn mount_surface(&mut self, surface: SurfaceId) {
        if let Some(surface) = self.surface_mut(surface) {
            surface.mounted = true;
        }
    }

    fn unmount_surface(&mut self, surface: SurfaceId) {
        if let Some(surface) = self.surface_mut(surface) {
            surface.mounted = false;
        }
    }

    fn discard_surface(&mut self, surface: SurfaceId) {
        self.surfaces.remove(&surface);
    }

    fn apply_placement(&mut self, surface: SurfaceId, placement: &Placement) {
        if let Some(surface) = self.surface_mut(surface) {
            surface.placement = Some(*placement);
        }
    }

    fn set_fade(&mut self, surface: SurfaceId, fade: Fade) {
        if let Some(surface) = self.surface_mut(surface) {
            surface.fade = fade;
        }
    }

    fn set_font_family(&mut self, trigger: TriggerId, family: &str, mode: LoadMode) {
        self.families.insert(trigger, (family.to_string(), mode));
    }

    fn append_style_rule(&mut self, css: &str) {
        self.style_rules.push(css.to_string());
    }

    fn clear_style_rules(&mut self) {
        self.style_rules.clear();
        self.families.clear();
    }

    fn notify(&mut self, text: &str) {
        self.notification.show(text, std::time::Instant::now());
    }
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod page_tests;
