use ratatui::{layout::Rect, text::{Line, Span}, widgets::{Block, Borders, Paragraph}, Frame};

use crate::app::{App, SectionId};
use crate::ui::colors::current as current_colors;

/// Terminals narrower than this get the drawer instead of inline nav items.
pub const NARROW_WIDTH: u16 = 80;

const NAV_GAP: u16 = 1;
/// Room kept free on the right for the theme indicator.
const THEME_INDICATOR_WIDTH: u16 = 12;

/// Column span `[start, end)` of every inline nav item for a header `width`
/// columns wide, or nothing when the layout is narrow.
pub fn nav_item_columns(width: u16, logo_width: u16) -> Vec<(SectionId, u16, u16)> {
    if width < NARROW_WIDTH {
        return Vec::new();
    }
    let mut x = logo_width.saturating_add(2);
    let cols: Vec<(SectionId, u16, u16)> = SectionId::ALL
        .iter()
        .map(|s| {
            let w = columns(s.label()).saturating_add(2);
            let span = (*s, x, x.saturating_add(w));
            x = x.saturating_add(w).saturating_add(NAV_GAP);
            span
        })
        .collect();
    // Fall back to the drawer when the items would not fit.
    let fits = cols
        .last()
        .is_some_and(|(_, _, end)| u32::from(*end) + u32::from(THEME_INDICATOR_WIDTH) <= u32::from(width));
    if fits {
        cols
    } else {
        Vec::new()
    }
}

fn columns(s: &str) -> u16 {
    u16::try_from(s.chars().count()).unwrap_or(u16::MAX)
}

fn logo_width(app: &App) -> u16 {
    // " SS " + " " + name + " "
    columns(&app.content.initials())
        .saturating_add(columns(&app.content.profile.name))
        .saturating_add(4)
}

/// Map a click at column `x` of the header's first row to a nav item.
pub fn nav_hit_test(app: &App, width: u16, x: u16) -> Option<SectionId> {
    nav_item_columns(width, logo_width(app))
        .into_iter()
        .find(|(_, start, end)| x >= *start && x < *end)
        .map(|(s, _, _)| s)
}

/// What a click on the header row landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderHit {
    Nav(SectionId),
    MenuButton,
    ThemeToggle,
}

const MENU_BUTTON_WIDTH: u16 = 8;

/// Classify a click at column `x` of a header `width` columns wide.
pub fn hit_test(app: &App, width: u16, x: u16) -> Option<HeaderHit> {
    if x >= width.saturating_sub(THEME_INDICATOR_WIDTH) {
        return Some(HeaderHit::ThemeToggle);
    }
    let logo = logo_width(app);
    if nav_item_columns(width, logo).is_empty() {
        let start = logo.saturating_add(1);
        return (x >= start && x < start.saturating_add(MENU_BUTTON_WIDTH)).then_some(HeaderHit::MenuButton);
    }
    nav_hit_test(app, width, x).map(HeaderHit::Nav)
}

/// Logo, inline navigation (wide) or menu button (narrow), theme indicator.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let colors = current_colors();
    let mut spans = vec![
        Span::styled(format!(" {} ", app.content.initials()), colors.logo_style),
        Span::styled(" ", colors.header_style),
        Span::styled(format!("{} ", app.content.profile.name), colors.header_style),
    ];

    let items = nav_item_columns(area.width, logo_width(app));
    if items.is_empty() {
        let icon = if app.menu.open { " ✕ Menu " } else { " ☰ Menu " };
        spans.push(Span::styled(" ", colors.header_style));
        spans.push(Span::styled(icon, colors.nav_style));
    } else {
        spans.push(Span::styled("  ", colors.header_style));
        for (s, _, _) in &items {
            let style = if *s == app.active { colors.nav_active_style } else { colors.nav_style };
            spans.push(Span::styled(format!(" {} ", s.label()), style));
            spans.push(Span::styled(" ", colors.header_style));
        }
    }

    let theme_icon = if app.theme.current().is_dark() { "☀ light (t)" } else { "☾ dark (t)" };
    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let right = theme_icon.chars().count() + 1;
    let pad = usize::from(area.width).saturating_sub(used + right);
    spans.push(Span::styled(" ".repeat(pad), colors.header_style));
    spans.push(Span::styled(theme_icon, colors.nav_style));

    let p = Paragraph::new(Line::from(spans))
        .style(colors.header_style)
        .block(Block::default().borders(Borders::BOTTOM).border_style(colors.border_style));
    f.render_widget(p, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::core::test_support::app;

    #[test]
    fn narrow_header_has_no_inline_items() {
        assert!(nav_item_columns(79, 10).is_empty());
        assert_eq!(nav_item_columns(90, 10).len(), SectionId::ALL.len());
        // Wide enough in principle, but a long name pushes the items out.
        assert!(nav_item_columns(90, 40).is_empty());
    }

    #[test]
    fn item_columns_do_not_overlap() {
        let cols = nav_item_columns(120, 17);
        assert_eq!(cols[0].1, 19);
        for w in cols.windows(2) {
            assert!(w[0].2 < w[1].1);
        }
    }

    #[test]
    fn hit_test_maps_columns_to_sections() {
        let a = app();
        let cols = nav_item_columns(120, logo_width(&a));
        for (s, start, end) in &cols {
            assert_eq!(nav_hit_test(&a, 120, *start), Some(*s));
            assert_eq!(nav_hit_test(&a, 120, end - 1), Some(*s));
        }
        assert_eq!(nav_hit_test(&a, 120, 0), None);
        assert_eq!(nav_hit_test(&a, 60, cols[0].1), None);
    }

    #[test]
    fn header_hits_menu_button_and_theme_toggle() {
        let a = app();
        let logo = logo_width(&a);
        assert_eq!(hit_test(&a, 60, logo + 2), Some(HeaderHit::MenuButton));
        assert_eq!(hit_test(&a, 60, 59), Some(HeaderHit::ThemeToggle));
        assert_eq!(hit_test(&a, 120, 119), Some(HeaderHit::ThemeToggle));
        assert_eq!(hit_test(&a, 60, 0), None);
        let (s, start, _) = nav_item_columns(120, logo)[2];
        assert_eq!(hit_test(&a, 120, start), Some(HeaderHit::Nav(s)));
    }

    #[test]
    fn oversized_name_saturates_instead_of_wrapping() {
        let mut a = app();
        a.content.profile.name = "n".repeat(70_000);
        assert_eq!(logo_width(&a), u16::MAX);
        assert!(nav_item_columns(200, logo_width(&a)).is_empty());
        assert_eq!(hit_test(&a, 200, 5), None);
        assert_eq!(hit_test(&a, 200, 199), Some(HeaderHit::ThemeToggle));
    }
}
