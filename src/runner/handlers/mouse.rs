use std::time::Instant;

use ratatui::layout::Rect;

use crate::app::{App, SectionId};
use crate::input::mouse::{MouseEvent, MouseEventKind};
use crate::ui::widgets::header::{self, HeaderHit};
use crate::ui::widgets::menu_drawer;
use crate::ui::{self, Page};

/// Rows scrolled per wheel notch.
pub const WHEEL_STEP: i64 = 3;

/// Handle a mouse event over a terminal of size `term`, with `page` the
/// layout drawn in the last frame.
pub fn handle_mouse(
    app: &mut App,
    me: MouseEvent,
    term: Rect,
    page: &Page,
    now: Instant,
) -> anyhow::Result<()> {
    if !app.settings.mouse_enabled {
        return Ok(());
    }
    let [header_area, body_area, _] = ui::layout(term);

    match me.kind {
        MouseEventKind::ScrollDown if !app.menu.open => app.scroll_by(WHEEL_STEP),
        MouseEventKind::ScrollUp if !app.menu.open => app.scroll_by(-WHEEL_STEP),
        MouseEventKind::LeftDown if me.row == header_area.y => {
            match header::hit_test(app, term.width, me.column) {
                Some(HeaderHit::Nav(section)) => app.navigate_to(section),
                Some(HeaderHit::MenuButton) => app.toggle_menu(),
                Some(HeaderHit::ThemeToggle) => app.toggle_theme(now),
                None => {}
            }
        }
        MouseEventKind::LeftDown if app.menu.open => {
            let drawer = menu_drawer::drawer_area(body_area);
            // First row inside the border is the first item.
            let item = me.row.checked_sub(drawer.y + 1).map(usize::from);
            let inside = me.row < drawer.y + drawer.height;
            match (inside, item) {
                (true, Some(menu_drawer::THEME_ROW)) => app.toggle_theme(now),
                (true, Some(i)) => {
                    if let Some(section) = SectionId::from_index(i) {
                        app.navigate_to(section);
                    }
                }
                (true, None) => {}
                (false, _) => app.toggle_menu(),
            }
        }
        MouseEventKind::LeftDown if me.row >= body_area.y && me.row < body_area.y + body_area.height => {
            let row = app.scroll.offset + u32::from(me.row - body_area.y);
            if let Some(target) = page.link_at(row) {
                app.open_link(target, now);
            }
        }
        _ => {}
    }
    Ok(())
}
