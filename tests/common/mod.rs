#![allow(dead_code)]

use portfolio::app::core::theme::MemoryThemeStore;
use portfolio::app::settings::Settings;
use portfolio::app::{App, Portfolio, SectionId};
use portfolio::input::{KeyCode, KeyEvent, KeyModifiers};

/// App over the built-in content with links swallowed and a fixed layout.
pub fn app() -> App {
    let content = Portfolio::builtin().expect("built-in content");
    let mut app = App::new(
        content,
        Settings::default(),
        Box::new(MemoryThemeStore::default()),
        None,
    )
    .with_link_opener(Box::new(|_| Ok(())));
    app.set_layout(
        vec![
            (SectionId::Home, 0),
            (SectionId::About, 20),
            (SectionId::Skills, 40),
            (SectionId::Experience, 60),
            (SectionId::Projects, 80),
            (SectionId::Contact, 110),
        ],
        150,
        30,
    );
    app
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ch(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
