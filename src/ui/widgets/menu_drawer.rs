use ratatui::{layout::Rect, text::{Line, Span}, widgets::{Block, Borders, Clear, List, ListItem}, Frame};

use crate::app::{App, SectionId};
use crate::ui::colors::current as current_colors;

/// Item index of the theme row (after the sections and a spacer).
pub const THEME_ROW: usize = SectionId::ALL.len() + 1;

/// Area of the drawer: full width, dropping down from just under the header.
pub fn drawer_area(body: Rect) -> Rect {
    // items + theme row + borders
    let wanted = SectionId::ALL.len() as u16 + 4;
    Rect::new(body.x, body.y, body.width, wanted.min(body.height))
}

/// Navigation drawer shown while the menu is open.
pub fn render(f: &mut Frame, body: Rect, app: &App) {
    if !app.menu.open {
        return;
    }
    let colors = current_colors();
    let area = drawer_area(body);

    let mut items: Vec<ListItem> = SectionId::ALL
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let marker = if i == app.menu.cursor { "› " } else { "  " };
            let style = if *s == app.active { colors.nav_active_style } else { colors.nav_style };
            ListItem::new(Line::from(vec![
                Span::styled(marker, colors.accent_style),
                Span::styled(format!("{} {}", i + 1, s.label()), style),
            ]))
        })
        .collect();
    let mode = if app.theme.current().is_dark() { "Light Mode" } else { "Dark Mode" };
    items.push(ListItem::new(Line::default()));
    items.push(ListItem::new(Span::styled(format!("  t: {}", mode), colors.muted_style)));

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Menu ")
            .border_style(colors.border_style)
            .style(colors.header_style),
    );
    f.render_widget(Clear, area);
    f.render_widget(list, area);
}
