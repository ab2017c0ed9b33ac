mod common;

use std::time::Instant;

use portfolio::app::core::sections::{active_section, DEFAULT_HEADER_OFFSET};
use portfolio::app::SectionId;
use portfolio::input::KeyCode;
use portfolio::runner::handlers;

use common::{app, ch, key};

fn settle(a: &mut portfolio::App) {
    let now = Instant::now();
    for _ in 0..200 {
        if !a.tick(now) && a.scroll.target.is_none() {
            break;
        }
    }
}

#[test]
fn tracker_follows_header_offset() {
    let tops = [
        (SectionId::Home, 0),
        (SectionId::About, 800),
        (SectionId::Skills, 1400),
    ];
    assert_eq!(active_section(0, &tops, DEFAULT_HEADER_OFFSET), SectionId::Home);
    assert_eq!(active_section(679, &tops, DEFAULT_HEADER_OFFSET), SectionId::Home);
    assert_eq!(active_section(680, &tops, DEFAULT_HEADER_OFFSET), SectionId::About);
    assert_eq!(active_section(10_000, &tops, DEFAULT_HEADER_OFFSET), SectionId::Skills);
}

#[test]
fn scroll_keys_update_active_section() {
    let mut a = app();
    let now = Instant::now();
    for _ in 0..17 {
        handlers::handle_key(&mut a, &ch('j'), now).unwrap();
    }
    // 17 rows + 3 rows of header reach About's top at row 20
    assert_eq!(a.active, SectionId::About);
    handlers::handle_key(&mut a, &key(KeyCode::PageDown), now).unwrap();
    assert_eq!(a.scroll.offset, 46);
    assert_eq!(a.active, SectionId::Skills);
    handlers::handle_key(&mut a, &ch('G'), now).unwrap();
    assert_eq!(a.active, SectionId::Contact);
    handlers::handle_key(&mut a, &key(KeyCode::Home), now).unwrap();
    assert_eq!(a.scroll.offset, 0);
    assert_eq!(a.active, SectionId::Home);
}

#[test]
fn digit_shortcut_smooth_scrolls_to_section() {
    let mut a = app();
    let now = Instant::now();
    handlers::handle_key(&mut a, &ch('5'), now).unwrap();
    assert_eq!(a.scroll.target, Some(80));
    // first step covers a quarter of the distance
    a.tick(now);
    assert_eq!(a.scroll.offset, 20);
    settle(&mut a);
    assert_eq!(a.scroll.offset, 80);
    assert_eq!(a.active, SectionId::Projects);
    assert!(!a.is_animating());
}

#[test]
fn direct_scroll_cancels_smooth_scroll() {
    let mut a = app();
    let now = Instant::now();
    a.navigate_to(SectionId::Contact);
    a.tick(now);
    handlers::handle_key(&mut a, &key(KeyCode::Down), now).unwrap();
    assert_eq!(a.scroll.target, None);
}

#[test]
fn navigation_closes_menu() {
    let mut a = app();
    let now = Instant::now();
    handlers::handle_key(&mut a, &ch('m'), now).unwrap();
    assert!(a.menu.open);
    assert_eq!(a.menu.cursor, 0);
    handlers::handle_key(&mut a, &key(KeyCode::Down), now).unwrap();
    handlers::handle_key(&mut a, &key(KeyCode::Down), now).unwrap();
    assert_eq!(a.menu.cursor, 2);
    // page does not scroll while the drawer has focus
    assert_eq!(a.scroll.offset, 0);
    handlers::handle_key(&mut a, &key(KeyCode::Enter), now).unwrap();
    assert!(!a.menu.open);
    assert_eq!(a.scroll.target, Some(40));
}

#[test]
fn menu_toggle_is_a_plain_flip() {
    let mut a = app();
    let now = Instant::now();
    assert!(!a.menu.open);
    handlers::handle_key(&mut a, &ch('m'), now).unwrap();
    handlers::handle_key(&mut a, &key(KeyCode::Esc), now).unwrap();
    assert!(!a.menu.open);
    handlers::handle_key(&mut a, &key(KeyCode::F(2)), now).unwrap();
    assert!(a.menu.open);
}

#[test]
fn next_and_previous_section_keys() {
    let mut a = app();
    let now = Instant::now();
    handlers::handle_key(&mut a, &ch(']'), now).unwrap();
    settle(&mut a);
    assert_eq!(a.active, SectionId::About);
    a.scroll_by(5);
    handlers::handle_key(&mut a, &ch('['), now).unwrap();
    settle(&mut a);
    // back to the top of About before moving on to Home
    assert_eq!(a.scroll.offset, 20);
    handlers::handle_key(&mut a, &ch('['), now).unwrap();
    settle(&mut a);
    assert_eq!(a.active, SectionId::Home);
}

#[test]
fn quit_key_ends_loop() {
    let mut a = app();
    assert!(handlers::handle_key(&mut a, &ch('q'), Instant::now()).unwrap());
}

#[test]
fn link_keys_hand_urls_to_the_opener() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let seen = Rc::new(RefCell::new(Vec::<String>::new()));
    let sink = Rc::clone(&seen);
    let mut a = app().with_link_opener(Box::new(move |u| {
        sink.borrow_mut().push(u.to_string());
        Ok(())
    }));
    let now = Instant::now();
    handlers::handle_key(&mut a, &ch('h'), now).unwrap();
    handlers::handle_key(&mut a, &ch('e'), now).unwrap();
    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert!(seen[0].contains("github.com"));
    assert!(seen[1].starts_with("mailto:"));
    assert!(a.status_text().unwrap().starts_with("Opened"));
}
