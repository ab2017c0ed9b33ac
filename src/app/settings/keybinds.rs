// Centralised keybind predicates for the application.
//
// Handlers call `is_quit(&key)` and friends instead of matching raw
// `KeyCode` patterns, so user overrides from the settings file apply
// everywhere without touching the handlers.

use crate::input::KeyEvent;
use crate::app::settings::runtime_keybinds;

fn is_bound(action: &str, key: &KeyEvent) -> bool {
	runtime_keybinds::get().is_bound(action, key)
}

pub fn is_quit(key: &KeyEvent) -> bool {
	is_bound("quit", key)
}

pub fn is_down(key: &KeyEvent) -> bool {
	is_bound("down", key)
}

pub fn is_up(key: &KeyEvent) -> bool {
	is_bound("up", key)
}

pub fn is_page_down(key: &KeyEvent) -> bool {
	is_bound("page_down", key)
}

pub fn is_page_up(key: &KeyEvent) -> bool {
	is_bound("page_up", key)
}

pub fn is_top(key: &KeyEvent) -> bool {
	is_bound("top", key)
}

pub fn is_bottom(key: &KeyEvent) -> bool {
	is_bound("bottom", key)
}

pub fn is_next_section(key: &KeyEvent) -> bool {
	is_bound("next_section", key)
}

pub fn is_prev_section(key: &KeyEvent) -> bool {
	is_bound("prev_section", key)
}

pub fn is_toggle_theme(key: &KeyEvent) -> bool {
	is_bound("toggle_theme", key)
}

pub fn is_toggle_menu(key: &KeyEvent) -> bool {
	is_bound("toggle_menu", key)
}

pub fn is_contact(key: &KeyEvent) -> bool {
	is_bound("contact", key)
}

pub fn is_help(key: &KeyEvent) -> bool {
	is_bound("help", key)
}

pub fn is_open_github(key: &KeyEvent) -> bool {
	is_bound("open_github", key)
}

pub fn is_open_linkedin(key: &KeyEvent) -> bool {
	is_bound("open_linkedin", key)
}

pub fn is_open_email(key: &KeyEvent) -> bool {
	is_bound("open_email", key)
}

pub fn is_open_resume(key: &KeyEvent) -> bool {
	is_bound("open_resume", key)
}

pub fn is_enter(key: &KeyEvent) -> bool {
	is_bound("enter", key)
}

pub fn is_esc(key: &KeyEvent) -> bool {
	is_bound("esc", key)
}

pub fn is_tab(key: &KeyEvent) -> bool {
	is_bound("tab", key)
}

pub fn is_backtab(key: &KeyEvent) -> bool {
	is_bound("backtab", key)
}

pub fn is_backspace(key: &KeyEvent) -> bool {
	is_bound("backspace", key)
}

pub fn is_submit(key: &KeyEvent) -> bool {
	is_bound("submit", key)
}

/// Digit shortcut `1`..`9` mapped to a zero-based index.
pub fn digit_index(key: &KeyEvent) -> Option<usize> {
	match key.code {
		crate::input::KeyCode::Char(c @ '1'..='9') => Some(c as usize - '1' as usize),
		_ => None,
	}
}
