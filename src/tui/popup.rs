//! Popup area helpers

use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Center a popup of the wanted size inside the frame, shrinking to fit
pub fn centered_popup(frame_area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(frame_area.width);
    let popup_height = height.min(frame_area.height);

    let popup_x = (frame_area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (frame_area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: popup_height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_popup(area, 60, 20);

        assert_eq!(popup, Rect::new(20, 10, 60, 20));
    }

    #[test]
    fn test_centered_popup_shrinks_to_frame() {
        let area = Rect::new(0, 0, 40, 10);
        let popup = centered_popup(area, 60, 20);

        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 10);
    }
}
