//! Key hints follow the `[keybinds]` overrides. Kept in its own test binary
//! because the binding table is process-wide.

mod common;

use std::collections::BTreeMap;
use std::time::Instant;

use ratatui::backend::TestBackend;
use ratatui::Terminal;

use portfolio::app::settings::runtime_keybinds::{self, Keybinds};
use portfolio::runner::event_loop_main::draw_frame;
use portfolio::runner::handlers;
use portfolio::ui::colors;
use portfolio::ui::widgets::contact_form::form_lines;
use portfolio::Mode;

use common::{app, ch};

fn footer(terminal: &Terminal<TestBackend>) -> String {
    let buf = terminal.backend().buffer();
    let y = buf.area.height - 1;
    (0..buf.area.width).map(|x| buf[(x, y)].symbol().to_string()).collect()
}

#[test]
fn hints_reflect_overridden_keys() {
    let mut o = BTreeMap::new();
    o.insert("quit".to_string(), vec!["x".to_string()]);
    o.insert("contact".to_string(), vec!["w".to_string()]);
    o.insert("toggle_theme".to_string(), vec!["F5".to_string()]);
    o.insert("submit".to_string(), vec!["Ctrl+d".to_string()]);
    runtime_keybinds::install(Keybinds::with_overrides(&o));

    let mut a = app();
    let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
    draw_frame(&mut terminal, &mut a).unwrap();
    let line = footer(&terminal);
    assert!(line.contains("x quit"), "{line}");
    assert!(line.contains("F5 theme"), "{line}");
    assert!(line.contains("w contact"), "{line}");
    assert!(!line.contains("q quit"), "{line}");

    let lines = form_lines(&a, 80, &colors::current());
    let text: String = lines
        .iter()
        .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
        .collect();
    assert!(text.contains("Press w to write a message"), "{text}");

    handlers::handle_key(&mut a, &ch('w'), Instant::now()).unwrap();
    assert!(matches!(a.mode, Mode::Form { .. }));
    draw_frame(&mut terminal, &mut a).unwrap();
    let line = footer(&terminal);
    assert!(line.contains("Ctrl+d: send"), "{line}");
}
