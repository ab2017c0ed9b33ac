use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

use crate::app::settings::runtime_keybinds;
use crate::app::{App, Mode};
use crate::ui::colors::current as current_colors;

/// Bottom row: transient status message, otherwise key hints and position.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let colors = current_colors();
    let kb = runtime_keybinds::get();
    let left = match (app.status_text(), &app.mode) {
        (Some(s), _) => Span::styled(format!(" {}", s), colors.accent_style),
        (None, Mode::Form { field }) => Span::styled(
            format!(
                " Editing {} · {}: next · {}: send · {}: done",
                field.label(),
                kb.describe("tab"),
                kb.describe("submit"),
                kb.describe("esc"),
            ),
            colors.footer_style,
        ),
        (None, _) => Span::styled(
            format!(
                " {}/{} scroll · 1-6 jump · {} menu · {} theme · {} contact · {} help · {} quit",
                kb.describe("down"),
                kb.describe("up"),
                kb.describe("toggle_menu"),
                kb.describe("toggle_theme"),
                kb.describe("contact"),
                kb.describe("help"),
                kb.describe("quit"),
            ),
            colors.footer_style,
        ),
    };
    let pct = if app.scroll.max_offset() == 0 {
        100
    } else {
        app.scroll.offset * 100 / app.scroll.max_offset()
    };
    let right = format!("{} {:>3}% ", app.active.label(), pct);
    let used = left.content.chars().count() + right.chars().count();
    let pad = usize::from(area.width).saturating_sub(used);
    let line = Line::from(vec![
        left,
        Span::styled(" ".repeat(pad), colors.footer_style),
        Span::styled(right, colors.footer_style),
    ]);
    f.render_widget(Paragraph::new(line).style(colors.footer_style), area);
}
