//! Terminal input: crossterm events narrowed to what the handlers need.

pub mod keyboard;
pub mod mouse;

pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};

use crossterm::event::{self, Event, KeyEventKind};
use std::io;
use std::time::Duration;

/// Input events delivered to the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(mouse::MouseEvent),
    /// Bracketed paste; the whole clipboard text in one event.
    Paste(String),
    Resize(u16, u16),
    Other,
}

impl From<Event> for InputEvent {
    fn from(ev: Event) -> Self {
        match ev {
            // Release/repeat reports (Windows, kitty protocol) would double every keypress.
            Event::Key(k) if k.kind == KeyEventKind::Press => InputEvent::Key(k),
            Event::Mouse(m) => InputEvent::Mouse(m.into()),
            Event::Resize(w, h) => InputEvent::Resize(w, h),
            Event::Paste(s) => InputEvent::Paste(s),
            _ => InputEvent::Other,
        }
    }
}

/// Wait up to `timeout` for an event to become available.
pub fn poll(timeout: Duration) -> io::Result<bool> {
    event::poll(timeout)
}

/// Read the next event; only call after [`poll`] returned `true`.
pub fn read_event() -> io::Result<InputEvent> {
    Ok(event::read()?.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    #[test]
    fn key_release_is_ignored() {
        let press = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(InputEvent::from(Event::Key(press)), InputEvent::Key(press));
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(InputEvent::from(Event::Key(release)), InputEvent::Other);
        assert_eq!(InputEvent::from(Event::Resize(80, 24)), InputEvent::Resize(80, 24));
    }
}
