//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Home screen layout areas
pub struct HomeLayout {
    pub heading: Rect,
    pub button: Rect,
    pub help: Rect,
}

/// Width of the "Open Form" button including its border
pub const BUTTON_WIDTH: u16 = 17;

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Whether a terminal cell lies inside `rect`
pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}

/// Calculate home screen layout
pub fn calculate_home_layout(area: Rect) -> HomeLayout {
    // Content + help bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    // Heading and button stacked in the middle of the content area
    let content = centered_popup(main_chunks[0], main_chunks[0].width, 6);
    let content_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(content);

    HomeLayout {
        heading: content_chunks[0],
        button: centered_popup(content_chunks[2], BUTTON_WIDTH, 3),
        help: main_chunks[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_fits() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_popup(area, 60, 20);
        assert_eq!(popup, Rect::new(20, 10, 60, 20));
    }

    #[test]
    fn test_centered_popup_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 10);
        let popup = centered_popup(area, 60, 20);
        assert_eq!(popup, Rect::new(0, 0, 30, 10));
    }

    #[test]
    fn test_centered_popup_respects_offset() {
        let area = Rect::new(10, 5, 20, 10);
        let popup = centered_popup(area, 10, 4);
        assert_eq!(popup, Rect::new(15, 8, 10, 4));
    }

    #[test]
    fn test_contains_edges() {
        let rect = Rect::new(10, 5, 4, 2);
        assert!(contains(rect, 10, 5));
        assert!(contains(rect, 13, 6));
        assert!(!contains(rect, 14, 6));
        assert!(!contains(rect, 13, 7));
        assert!(!contains(rect, 9, 5));
    }

    #[test]
    fn test_home_layout_button_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = calculate_home_layout(area);
        assert_eq!(layout.button.width, BUTTON_WIDTH);
        assert_eq!(layout.button.height, 3);
        assert_eq!(layout.help.height, 3);
        assert!(layout.button.bottom() <= layout.help.y);
    }
}
