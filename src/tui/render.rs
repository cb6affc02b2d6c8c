//! Frame rendering for the terminal host
//!
//! Draws the demo article, any mounted tooltip surfaces with their tail
//! markers, the status/notification line, and the settings dialog overlay.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::host::{DeviceClass, Fade};
use crate::messages::{Messages, MsgKey, Variant};
use crate::settings::FontsLoad;
use crate::tooltip::VerticalSide;

use super::page::{SETTINGS_BUTTON, TuiPage, TuiSurface};
use super::popup::{centered_popup, clear_area};
use super::settings_dialog::SettingsDialog;

pub fn draw(
    frame: &mut Frame,
    page: &TuiPage,
    dialog: Option<&SettingsDialog>,
    messages: &Messages,
    device: DeviceClass,
) {
    draw_chrome(frame, device);
    draw_page(frame, page);
    for surface in page.mounted_surfaces() {
        draw_surface(frame, surface);
    }
    draw_status(frame, page);

    if let Some(dialog) = dialog {
        draw_dialog(frame, dialog, messages);
    }
}

fn draw_chrome(frame: &mut Frame, device: DeviceClass) {
    let mode = match device {
        DeviceClass::Pointer => "指针模式",
        DeviceClass::Touch => "触摸模式",
    };
    let title = Line::from(format!(" 僻字辅助工具示例 — {mode}（q 退出） "))
        .style(Style::default().fg(Color::Black).bg(Color::Cyan));
    frame.render_widget(
        Paragraph::new(title),
        Rect {
            height: 1.min(frame.area().height),
            ..frame.area()
        },
    );
}

fn draw_page(frame: &mut Frame, page: &TuiPage) {
    let area = frame.area();
    let buffer = frame.buffer_mut();

    for segment in &page.segments {
        if segment.row >= area.height {
            continue;
        }
        let style = match segment.trigger {
            Some(trigger) => {
                // Dotted-underline equivalent; webfont-substituted spans
                // stand out further
                if page.families.contains_key(&trigger) {
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
                } else {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::UNDERLINED)
                }
            }
            None => Style::default(),
        };
        buffer.set_string(segment.col, segment.row, &segment.text, style);
    }
}

fn draw_surface(frame: &mut Frame, surface: &TuiSurface) {
    let Some(rect) = surface.rect() else {
        return;
    };
    let rect = rect.intersection(frame.area());
    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let dimmed = matches!(surface.fade, Fade::OutUp | Fade::OutDown);
    let style = if dimmed {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(Color::White)
    };

    clear_area(frame, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style);
    let content = Paragraph::new(format!("{SETTINGS_BUTTON} {}", surface.text))
        .block(block)
        .style(style);
    frame.render_widget(content, rect);

    draw_tail(frame, surface, rect, style);
}

/// Tail marker on the border row facing the anchor
fn draw_tail(frame: &mut Frame, surface: &TuiSurface, rect: Rect, style: Style) {
    let Some(placement) = surface.placement else {
        return;
    };
    let tail_col = placement.left.max(0.0) as u16 + placement.tail_left.max(0.0) as u16;
    let rightmost = (rect.x + rect.width.saturating_sub(2)).max(rect.x + 1);
    let tail_col = tail_col.clamp(rect.x + 1, rightmost);

    let (row, marker) = match placement.side {
        VerticalSide::Above => (rect.y + rect.height - 1, "▼"),
        VerticalSide::Below => (rect.y, "▲"),
    };
    if row < frame.area().height {
        frame.buffer_mut().set_string(tail_col, row, marker, style);
    }
}

fn draw_status(frame: &mut Frame, page: &TuiPage) {
    let area = frame.area();
    if area.height < 2 {
        return;
    }
    let row = area.height - 1;

    let status = match page.notification.current() {
        Some(text) => format!(" {text} "),
        None => format!(" 已注入字体规则：{} ", page.style_rules.len()),
    };
    let style = match page.notification.current() {
        Some(_) => Style::default().fg(Color::Black).bg(Color::Yellow),
        None => Style::default().fg(Color::DarkGray),
    };
    frame.buffer_mut().set_string(0, row, status, style);
}

fn draw_dialog(frame: &mut Frame, dialog: &SettingsDialog, messages: &Messages) {
    // Assemble the body first; every entry is (text, field index, enabled)
    let draft = dialog.state.draft();
    let mut rows: Vec<(String, Option<usize>, bool)> = Vec::new();

    rows.push((
        format!(
            "[{}] {}",
            if draft.enabled { "x" } else { " " },
            messages.text(MsgKey::Enable)
        ),
        Some(0),
        true,
    ));
    rows.push((
        format!(
            "[{}] {}",
            if draft.use_webfont { "x" } else { " " },
            messages.text(MsgKey::UseWebfont)
        ),
        Some(1),
        draft.enabled,
    ));
    rows.push((String::new(), None, true));

    let modes_enabled = draft.enabled && draft.use_webfont;
    rows.push((messages.text(MsgKey::LoadMode).to_string(), None, true));
    rows.push((
        format!(
            "({}) {}",
            if draft.load_mode == crate::settings::LoadMode::Fallback {
                "•"
            } else {
                " "
            },
            messages.text(MsgKey::LoadModeFallback)
        ),
        Some(2),
        modes_enabled,
    ));
    rows.push((
        format!(
            "({}) {}",
            if draft.load_mode == crate::settings::LoadMode::Always {
                "•"
            } else {
                " "
            },
            messages.text(MsgKey::LoadModeAlways)
        ),
        Some(3),
        modes_enabled,
    ));
    rows.push((String::new(), None, true));

    rows.push((messages.text(MsgKey::PreferredFont).to_string(), None, true));
    if !draft.use_webfont {
        rows.push((
            messages.text(MsgKey::EnableWebfontToShowFonts).to_string(),
            None,
            false,
        ));
    } else {
        match dialog.state.fonts() {
            FontsLoad::NotLoaded | FontsLoad::Loading => {
                rows.push((messages.text(MsgKey::LoadingFonts).to_string(), None, false));
            }
            FontsLoad::Failed => {
                rows.push((messages.text(MsgKey::FontLoadFailed).to_string(), None, false));
            }
            FontsLoad::Loaded(fonts) => {
                for (index, font) in fonts.iter().enumerate() {
                    let name = match messages.variant() {
                        Variant::Hans => &font.name.hans,
                        Variant::Hant => &font.name.hant,
                    };
                    rows.push((
                        format!(
                            "({}) {}（{}{}）",
                            if draft.selected_font == font.id { "•" } else { " " },
                            name,
                            messages.text(MsgKey::Version),
                            font.version
                        ),
                        Some(4 + index),
                        modes_enabled,
                    ));
                }
            }
        }
    }

    rows.push((String::new(), None, true));
    rows.push((
        format!(
            "空格 切换 · Enter {} · Esc {}",
            messages.text(MsgKey::Save),
            messages.text(MsgKey::Close)
        ),
        None,
        true,
    ));

    let width = rows
        .iter()
        .map(|(text, _, _)| text.width() as u16)
        .max()
        .unwrap_or(0)
        .max(messages.text(MsgKey::SettingsTitle).width() as u16)
        + 6;
    let height = rows.len() as u16 + 2;
    let area = centered_popup(frame.area(), width, height);
    clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", messages.text(MsgKey::SettingsTitle)))
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let buffer = frame.buffer_mut();
    for (offset, (text, field, enabled)) in rows.iter().enumerate() {
        let row = area.y + 1 + offset as u16;
        if row >= area.y + area.height - 1 {
            break;
        }
        let selected = *field == Some(dialog.cursor());
        let style = if selected {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else if !*enabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        buffer.set_string(area.x + 2, row, text, style);
    }
}
