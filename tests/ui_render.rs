mod common;

use std::time::Instant;

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

use portfolio::input::mouse::{MouseEvent, MouseEventKind};
use portfolio::input::KeyCode;
use portfolio::runner::event_loop_main::draw_frame;
use portfolio::runner::handlers;
use portfolio::{Mode, SectionId};

use common::{app, ch, key};

fn row(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width)
        .map(|x| buf[(x, y)].symbol().to_string())
        .collect()
}

fn screen(buf: &Buffer) -> String {
    (0..buf.area.height).map(|y| row(buf, y)).collect::<Vec<_>>().join("\n")
}

#[test]
fn wide_header_shows_inline_navigation() {
    let mut a = app();
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    draw_frame(&mut terminal, &mut a).unwrap();
    let header = row(terminal.backend().buffer(), 0);
    assert!(header.contains("SS"));
    for s in SectionId::ALL {
        assert!(header.contains(s.label()), "{header}");
    }
    assert!(!header.contains("Menu"));
}

#[test]
fn narrow_header_shows_menu_button_and_drawer() {
    let mut a = app();
    let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
    draw_frame(&mut terminal, &mut a).unwrap();
    let header = row(terminal.backend().buffer(), 0);
    assert!(header.contains("☰ Menu"), "{header}");
    assert!(!header.contains("Experience"));

    handlers::handle_key(&mut a, &ch('m'), Instant::now()).unwrap();
    draw_frame(&mut terminal, &mut a).unwrap();
    let text = screen(terminal.backend().buffer());
    assert!(text.contains("✕ Menu"));
    assert!(text.contains("4 Experience"), "{text}");
    assert!(text.contains("Dark Mode"));
}

#[test]
fn first_frame_starts_at_the_hero() {
    let mut a = app();
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    draw_frame(&mut terminal, &mut a).unwrap();
    let text = screen(terminal.backend().buffer());
    assert!(text.contains("Hi, I'm Sangam Singh"));
    assert_eq!(a.active, SectionId::Home);
}

#[test]
fn help_popup_lists_bindings() {
    let mut a = app();
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    handlers::handle_key(&mut a, &ch('?'), Instant::now()).unwrap();
    assert_eq!(a.mode, Mode::Help);
    draw_frame(&mut terminal, &mut a).unwrap();
    let text = screen(terminal.backend().buffer());
    assert!(text.contains("Toggle light/dark"));
    handlers::handle_key(&mut a, &key(KeyCode::Esc), Instant::now()).unwrap();
    assert_eq!(a.mode, Mode::Normal);
}

#[test]
fn theme_indicator_flips_with_toggle() {
    let mut a = app();
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    draw_frame(&mut terminal, &mut a).unwrap();
    assert!(row(terminal.backend().buffer(), 0).contains("dark (t)"));
    handlers::handle_key(&mut a, &ch('t'), Instant::now()).unwrap();
    draw_frame(&mut terminal, &mut a).unwrap();
    assert!(row(terminal.backend().buffer(), 0).contains("light (t)"));
}

#[test]
fn clicking_a_header_item_navigates() {
    let mut a = app();
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    let page = draw_frame(&mut terminal, &mut a).unwrap();
    let header = row(terminal.backend().buffer(), 0);
    let col = header.find("Projects").unwrap();
    // every cell before the match is one column wide in this header
    let column = header[..col].chars().count() as u16;
    let me = MouseEvent {
        column,
        row: 0,
        kind: MouseEventKind::LeftDown,
    };
    handlers::handle_mouse(&mut a, me, Rect::new(0, 0, 100, 30), &page, Instant::now()).unwrap();
    assert_eq!(a.scroll.target, a.scroll.top_of(SectionId::Projects));
}

#[test]
fn wheel_scrolls_three_rows() {
    let mut a = app();
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    let page = draw_frame(&mut terminal, &mut a).unwrap();
    let me = MouseEvent {
        column: 10,
        row: 10,
        kind: MouseEventKind::ScrollDown,
    };
    handlers::handle_mouse(&mut a, me, Rect::new(0, 0, 100, 30), &page, Instant::now()).unwrap();
    assert_eq!(a.scroll.offset, 3);
}

fn click(a: &mut portfolio::App, page: &portfolio::ui::Page, term: Rect, column: u16, row: u16) {
    let me = MouseEvent {
        column,
        row,
        kind: MouseEventKind::LeftDown,
    };
    handlers::handle_mouse(a, me, term, page, Instant::now()).unwrap();
}

#[test]
fn drawer_rows_navigate_and_toggle_theme() {
    let mut a = app();
    let term = Rect::new(0, 0, 60, 30);
    let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
    handlers::handle_key(&mut a, &ch('m'), Instant::now()).unwrap();
    let page = draw_frame(&mut terminal, &mut a).unwrap();
    let buf = terminal.backend().buffer().clone();
    let row_of = |needle: &str| (0..30).find(|y| row(&buf, *y).contains(needle)).unwrap();

    let dark = a.theme.current().is_dark();
    click(&mut a, &page, term, 4, row_of("t: "));
    assert_ne!(a.theme.current().is_dark(), dark);
    assert!(a.menu.open);

    click(&mut a, &page, term, 4, row_of("5 Projects"));
    assert!(!a.menu.open);
    assert_eq!(a.scroll.target, a.scroll.top_of(SectionId::Projects));
}

#[test]
fn click_below_drawer_closes_it() {
    let mut a = app();
    let term = Rect::new(0, 0, 60, 30);
    let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
    handlers::handle_key(&mut a, &ch('m'), Instant::now()).unwrap();
    let page = draw_frame(&mut terminal, &mut a).unwrap();
    click(&mut a, &page, term, 4, 25);
    assert!(!a.menu.open);
}
