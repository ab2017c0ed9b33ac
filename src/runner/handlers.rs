//! Key and mouse dispatch, split per input mode.

pub mod form;
pub mod help;
pub mod menu;
pub mod mouse;
pub mod normal;

pub use form::{handle_form, handle_paste};
pub use help::handle_help;
pub use menu::handle_menu;
pub use mouse::handle_mouse;
pub use normal::handle_normal;

use std::time::Instant;

use crate::app::{App, Mode};
use crate::input::KeyEvent;

/// Top-level key handler. Returns `true` when the application should exit.
pub fn handle_key(app: &mut App, key: &KeyEvent, now: Instant) -> anyhow::Result<bool> {
    match app.mode {
        Mode::Form { field } => handle_form(app, field, key, now),
        Mode::Help => handle_help(app, key),
        Mode::Normal if app.menu.open => handle_menu(app, key, now),
        Mode::Normal => handle_normal(app, key, now),
    }
}
