//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
pub struct MainLayout {
    pub tabs: Rect,
    /// Search input line, present only while search mode is active
    pub search: Option<Rect>,
    pub table: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = (area.width.saturating_sub(width)) / 2;
    let popup_y = (area.height.saturating_sub(height)) / 2;

    Rect::new(
        area.x + popup_x,
        area.y + popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate main screen layout
pub fn calculate_main_layout(area: Rect, search_open: bool) -> MainLayout {
    let chunks = if search_open {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // tabs
                Constraint::Length(3), // search input
                Constraint::Min(0),    // table
                Constraint::Length(1), // status
                Constraint::Length(1), // help
            ])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area)
    };

    if search_open {
        MainLayout {
            tabs: chunks[0],
            search: Some(chunks[1]),
            table: chunks[2],
            status: chunks[3],
            help: chunks[4],
        }
    } else {
        MainLayout {
            tabs: chunks[0],
            search: None,
            table: chunks[1],
            status: chunks[2],
            help: chunks[3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_accounts_for_search_line() {
        let area = Rect::new(0, 0, 80, 24);
        let closed = calculate_main_layout(area, false);
        assert!(closed.search.is_none());

        let open = calculate_main_layout(area, true);
        assert!(open.search.is_some());
        assert!(open.table.height < closed.table.height);
    }

    #[test]
    fn test_centered_popup_fits_area() {
        let area = Rect::new(2, 1, 80, 24);
        let popup = centered_popup(area, 40, 10);
        assert!(popup.x >= area.x);
        assert!(popup.width <= area.width);
        assert!(popup.height <= area.height);
    }
}
