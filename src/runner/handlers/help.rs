use crate::app::settings::keybinds;
use crate::app::{App, Mode};
use crate::input::KeyEvent;

pub fn handle_help(app: &mut App, key: &KeyEvent) -> anyhow::Result<bool> {
    if keybinds::is_quit(key) {
        return Ok(true);
    }
    if keybinds::is_esc(key) || keybinds::is_help(key) || keybinds::is_enter(key) {
        app.mode = Mode::Normal;
    }
    Ok(false)
}
