use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, Mode};

pub mod colors;
pub mod page;
pub mod themes;
pub mod widgets;

pub use page::Page;
pub use themes::Theme;

/// Rows taken by the header (content row plus bottom border).
pub const HEADER_ROWS: u16 = 2;
/// Rows taken by the status/footer bar.
pub const FOOTER_ROWS: u16 = 1;

/// Split the terminal into header, page body and footer.
pub fn layout(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(HEADER_ROWS),
                Constraint::Min(0),
                Constraint::Length(FOOTER_ROWS),
            ]
            .as_ref(),
        )
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Rows available to the page body in a terminal `height` rows tall.
pub fn body_height(height: u16) -> u32 {
    u32::from(height.saturating_sub(HEADER_ROWS + FOOTER_ROWS))
}

pub fn ui(f: &mut Frame, app: &App, page: &Page) {
    let [header_area, body_area, footer_area] = layout(f.area());
    let theme = colors::current();

    // Only the visible slice is handed to the paragraph; offsets can exceed u16.
    let start = usize::try_from(app.scroll.offset).unwrap_or(usize::MAX);
    let visible: Vec<_> = page
        .lines
        .iter()
        .skip(start)
        .take(usize::from(body_area.height))
        .cloned()
        .collect();
    f.render_widget(Paragraph::new(visible).style(theme.base_style), body_area);

    widgets::header::render(f, header_area, app);
    widgets::footer::render(f, footer_area, app);
    widgets::menu_drawer::render(f, body_area, app);

    if app.mode == Mode::Help {
        widgets::help::render(f, f.area());
    }
}
