use std::time::Instant;

use crate::app::settings::keybinds;
use crate::app::{App, FormField, Mode};
use crate::input::keyboard::printable_char;
use crate::input::{KeyEvent, KeyModifiers};

/// Keys while typing into the contact form.
///
/// Only chords and editing keys are interpreted; every other printable
/// character goes into the focused field, so `q` or `t` type text here.
pub fn handle_form(
    app: &mut App,
    field: FormField,
    key: &KeyEvent,
    now: Instant,
) -> anyhow::Result<bool> {
    // Plain-letter quit keys are text here; only a chord (Ctrl+c) quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && keybinds::is_quit(key) {
        return Ok(true);
    }
    if keybinds::is_submit(key) {
        app.submit_form(now);
    } else if keybinds::is_esc(key) {
        app.mode = Mode::Normal;
    } else if keybinds::is_backtab(key) {
        app.mode = Mode::Form { field: field.prev() };
    } else if keybinds::is_tab(key) {
        app.mode = Mode::Form { field: field.next() };
    } else if keybinds::is_enter(key) {
        match field {
            FormField::Message => {
                app.form.insert_char(field, '\n');
            }
            // Single-line fields: Enter advances like Tab.
            _ => app.mode = Mode::Form { field: field.next() },
        }
    } else if keybinds::is_backspace(key) {
        app.form.backspace(field);
    } else if let Some(c) = printable_char(key) {
        app.form.insert_char(field, c);
    }
    Ok(false)
}

/// Bracketed paste goes into the focused field; ignored outside the form.
pub fn handle_paste(app: &mut App, text: &str) {
    if let Mode::Form { field } = app.mode {
        let text = match field {
            FormField::Message => text.replace("\r\n", "\n"),
            _ => text.replace(['\r', '\n'], " "),
        };
        app.form.insert_str(field, &text);
    }
}
