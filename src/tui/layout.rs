use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions
pub struct AppLayout {
    pub search_area: Rect,
    pub results_area: Rect,
    pub details_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// - Search input: 3 rows at the top (bordered single line)
    /// - Story list: 60% width (left)
    /// - Details pane: 40% width (right)
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search input
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(vertical_chunks[1]);

        Self {
            search_area: vertical_chunks[0],
            results_area: horizontal_chunks[0],
            details_area: horizontal_chunks[1],
            status_area: vertical_chunks[2],
        }
    }

    /// Split a one-row banner off the top of `area`
    pub fn with_banner(area: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);
        (chunks[0], chunks[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_splits_correctly() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = AppLayout::new(area);

        assert_eq!(layout.search_area.height, 3);
        assert_eq!(layout.search_area.y, 0);

        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.status_area.y, 29);

        assert_eq!(layout.results_area.height, 26);
        assert_eq!(layout.details_area.height, 26);
        assert_eq!(layout.results_area.width, 60);
        assert_eq!(layout.details_area.width, 40);
    }

    #[test]
    fn test_layout_minimum_height() {
        let area = Rect::new(0, 0, 100, 7);
        let layout = AppLayout::new(area);

        assert_eq!(layout.search_area.height, 3);
        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.results_area.height, 3);
    }

    #[test]
    fn test_banner_split() {
        let (banner, rest) = AppLayout::with_banner(Rect::new(0, 3, 60, 10));
        assert_eq!(banner.height, 1);
        assert_eq!(banner.y, 3);
        assert_eq!(rest.height, 9);
        assert_eq!(rest.y, 4);
    }
}
