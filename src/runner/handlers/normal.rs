use std::time::Instant;

use crate::app::core::LinkTarget;
use crate::app::settings::keybinds;
use crate::app::{App, Mode, SectionId};
use crate::input::KeyEvent;

pub fn handle_normal(app: &mut App, key: &KeyEvent, now: Instant) -> anyhow::Result<bool> {
    if keybinds::is_quit(key) {
        return Ok(true);
    }
    if let Some(i) = keybinds::digit_index(key) {
        if let Some(section) = SectionId::from_index(i) {
            app.navigate_to(section);
        }
        return Ok(false);
    }

    if keybinds::is_down(key) {
        app.scroll_by(1);
    } else if keybinds::is_up(key) {
        app.scroll_by(-1);
    } else if keybinds::is_page_down(key) {
        app.page_down();
    } else if keybinds::is_page_up(key) {
        app.page_up();
    } else if keybinds::is_top(key) {
        app.scroll_to_top();
    } else if keybinds::is_bottom(key) {
        app.scroll_to_bottom();
    } else if keybinds::is_next_section(key) {
        app.next_section();
    } else if keybinds::is_prev_section(key) {
        app.prev_section();
    } else if keybinds::is_toggle_theme(key) {
        app.toggle_theme(now);
    } else if keybinds::is_toggle_menu(key) {
        app.toggle_menu();
    } else if keybinds::is_contact(key) {
        app.focus_form();
    } else if keybinds::is_help(key) {
        app.mode = Mode::Help;
    } else if keybinds::is_open_github(key) {
        app.open_link(LinkTarget::GitHub, now);
    } else if keybinds::is_open_linkedin(key) {
        app.open_link(LinkTarget::LinkedIn, now);
    } else if keybinds::is_open_email(key) {
        app.open_link(LinkTarget::Email, now);
    } else if keybinds::is_open_resume(key) {
        app.open_link(LinkTarget::Resume, now);
    }
    Ok(false)
}
