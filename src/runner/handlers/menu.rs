use std::time::Instant;

use crate::app::settings::keybinds;
use crate::app::{App, SectionId};
use crate::input::KeyEvent;

/// Keys while the navigation drawer is open. Page scrolling is suspended.
pub fn handle_menu(app: &mut App, key: &KeyEvent, now: Instant) -> anyhow::Result<bool> {
    if keybinds::is_quit(key) {
        return Ok(true);
    }
    if let Some(i) = keybinds::digit_index(key) {
        if let Some(section) = SectionId::from_index(i) {
            app.navigate_to(section);
        }
    } else if keybinds::is_down(key) || keybinds::is_tab(key) {
        app.menu_down();
    } else if keybinds::is_up(key) || keybinds::is_backtab(key) {
        app.menu_up();
    } else if keybinds::is_enter(key) {
        app.menu_activate();
    } else if keybinds::is_esc(key) || keybinds::is_toggle_menu(key) {
        app.toggle_menu();
    } else if keybinds::is_toggle_theme(key) {
        app.toggle_theme(now);
    }
    Ok(false)
}
