use crate::app::{App, ThemePreference};
use crate::input::{poll, read_event, InputEvent};
use crate::platform::SystemThemeWatcher;
use crate::runner::handlers;
use crate::runner::terminal::{init_terminal, restore_raw, restore_terminal, Term};
use crate::ui::{self, colors, Page};

use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

/// Poll interval while something is moving (smooth scroll, pending submit).
const ANIMATION_POLL: Duration = Duration::from_millis(16);
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Lay the page out for the current terminal size, feed the new layout to
/// the scroll tracker and draw one frame. Returns the page that was drawn so
/// mouse clicks can be mapped back onto it.
pub fn draw_frame<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<Page> {
    let size = terminal.size()?;
    let page = Page::build(app, size.width);
    let viewport = ui::body_height(size.height);
    app.set_layout(page.tops.clone(), page.padded_height(viewport), viewport);
    terminal.draw(|f| ui::ui(f, app, &page))?;
    Ok(page)
}

/// Forward OS scheme changes to the controller, then restyle for every
/// theme change it announces. Returns `true` if the palette changed.
pub fn apply_theme_changes(
    app: &mut App,
    theme_rx: &Receiver<ThemePreference>,
    watcher: Option<&SystemThemeWatcher>,
) -> bool {
    if let Some(w) = watcher {
        for prefers_dark in w.drain() {
            app.theme.on_system_change(prefers_dark);
        }
    }
    let mut changed = false;
    for pref in theme_rx.try_iter() {
        tracing::info!(theme = %pref, "applying theme");
        colors::set_theme(pref);
        changed = true;
    }
    changed
}

pub fn run_app(mut app: App, watcher: Option<SystemThemeWatcher>) -> anyhow::Result<()> {
    let theme_rx = app.theme.subscribe();
    colors::set_theme(app.theme.current());

    let mut terminal = init_terminal(app.settings.mouse_enabled)?;
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_raw();
        default_hook(info);
    }));

    let result = event_loop(&mut terminal, &mut app, &theme_rx, watcher.as_ref());
    restore_terminal(terminal)?;
    result
}

fn event_loop(
    terminal: &mut Term,
    app: &mut App,
    theme_rx: &Receiver<ThemePreference>,
    watcher: Option<&SystemThemeWatcher>,
) -> anyhow::Result<()> {
    loop {
        apply_theme_changes(app, theme_rx, watcher);
        let page = draw_frame(terminal, app)?;

        let timeout = if app.is_animating() { ANIMATION_POLL } else { IDLE_POLL };
        if poll(timeout)? {
            let now = Instant::now();
            match read_event()? {
                InputEvent::Key(key) => {
                    if handlers::handle_key(app, &key, now)? {
                        tracing::info!("quit requested");
                        break;
                    }
                }
                InputEvent::Mouse(me) => {
                    let ts = terminal.size()?;
                    let term_rect = Rect::new(0, 0, ts.width, ts.height);
                    handlers::handle_mouse(app, me, term_rect, &page, now)?;
                }
                InputEvent::Paste(text) => handlers::handle_paste(app, &text),
                // Layout is recomputed on the next frame.
                InputEvent::Resize(_, _) | InputEvent::Other => {}
            }
        }
        app.tick(Instant::now());
    }
    Ok(())
}
