use ratatui::{layout::{Constraint, Direction, Layout, Rect}, text::{Line, Span}, widgets::{Block, Borders, Clear, Paragraph}, Frame};

use crate::app::settings::runtime_keybinds;
use crate::ui::colors::current as current_colors;

const ROWS: &[(&str, &str)] = &[
    ("down", "Scroll down"),
    ("up", "Scroll up"),
    ("page_down", "Page down"),
    ("page_up", "Page up"),
    ("top", "Top of page"),
    ("bottom", "Bottom of page"),
    ("next_section", "Next section"),
    ("prev_section", "Previous section"),
    ("toggle_menu", "Open/close menu"),
    ("toggle_theme", "Toggle light/dark"),
    ("contact", "Write a message"),
    ("submit", "Send message"),
    ("open_github", "Open GitHub"),
    ("open_linkedin", "Open LinkedIn"),
    ("open_email", "Send an email"),
    ("open_resume", "Download resume"),
    ("quit", "Quit"),
];

/// Centre a `w` x `h` rectangle inside `area`.
pub fn centered(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width);
    let h = h.min(area.height);
    let v = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length((area.height - h) / 2), Constraint::Length(h), Constraint::Min(0)])
        .split(area);
    let hz = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length((area.width - w) / 2), Constraint::Length(w), Constraint::Min(0)])
        .split(v[1]);
    hz[1]
}

/// Keybinding overview, reflecting any overrides from the settings file.
pub fn render(f: &mut Frame, area: Rect) {
    let colors = current_colors();
    let kb = runtime_keybinds::get();
    let mut lines: Vec<Line> = ROWS
        .iter()
        .map(|(action, label)| {
            Line::from(vec![
                Span::styled(format!(" {:>8}  ", kb.describe(action)), colors.accent_style),
                Span::styled(*label, colors.base_style),
            ])
        })
        .collect();
    lines.push(Line::from(Span::styled("   1-6     Jump to section", colors.base_style)));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(" Esc closes this window", colors.muted_style)));

    let popup = centered(area, 42, lines.len() as u16 + 2);
    let p = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Keys ")
            .border_style(colors.border_style)
            .style(colors.base_style),
    );
    f.render_widget(Clear, popup);
    f.render_widget(p, popup);
}
