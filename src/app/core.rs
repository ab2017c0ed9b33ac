use std::io;
use std::time::{Duration, Instant};

use self::form::{ContactForm, FormEvent, FormTimings};
use self::theme::{ThemeController, ThemeStore};
use super::content::Portfolio;
use super::settings::Settings;
use super::types::{Mode, SectionId};
use crate::delivery::{MessageSender, SimulatedSender};

// submodules live in `src/app/core/`

pub mod form;
mod links;
mod navigation;
pub mod sections;
pub mod theme;

pub use links::LinkTarget;

/// How long a status-line message stays visible.
pub const STATUS_TTL: Duration = Duration::from_secs(4);

/// Opens an outbound link (browser, mail client, PDF viewer).
pub type LinkOpener = Box<dyn Fn(&str) -> io::Result<()>>;

/// Mobile-style navigation drawer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
    /// Highlighted row inside the drawer.
    pub cursor: usize,
}

/// Vertical position of the page viewport, in rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: u32,
    /// Destination of an in-progress smooth scroll.
    pub target: Option<u32>,
    /// Total rendered page height.
    pub content_height: u32,
    /// Rows available to the page body.
    pub viewport_height: u32,
    /// Top row of each section, in declared order.
    pub section_tops: Vec<(SectionId, u32)>,
}

impl ScrollState {
    pub fn max_offset(&self) -> u32 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn top_of(&self, section: SectionId) -> Option<u32> {
        self.section_tops
            .iter()
            .find(|(id, _)| *id == section)
            .map(|(_, top)| *top)
    }
}

/// Whole application state. Rendering reads it, handlers mutate it.
pub struct App {
    pub content: Portfolio,
    pub theme: ThemeController,
    pub menu: MenuState,
    pub scroll: ScrollState,
    pub active: SectionId,
    pub form: ContactForm,
    pub mode: Mode,
    pub settings: Settings,
    pub status: Option<(String, Instant)>,
    header_offset: u32,
    sender: Box<dyn MessageSender>,
    opener: LinkOpener,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("theme", &self.theme)
            .field("menu", &self.menu)
            .field("scroll", &self.scroll)
            .field("active", &self.active)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

fn system_open(target: &str) -> io::Result<()> {
    open::that(target)
}

impl App {
    /// Build the application from loaded settings/content.
    ///
    /// `os_prefers_dark` is the OS colour-scheme preference read once at
    /// startup (`None` when it cannot be determined).
    pub fn new(
        content: Portfolio,
        settings: Settings,
        store: Box<dyn ThemeStore>,
        os_prefers_dark: Option<bool>,
    ) -> Self {
        let theme = ThemeController::init(store, os_prefers_dark);
        let timings = FormTimings {
            submit_latency: Duration::from_millis(settings.submit_latency_ms),
            success_display: Duration::from_millis(settings.success_display_ms),
        };
        App {
            content,
            theme,
            menu: MenuState::default(),
            scroll: ScrollState::default(),
            active: SectionId::Home,
            form: ContactForm::new(timings),
            mode: Mode::Normal,
            header_offset: u32::from(settings.header_offset_rows),
            settings,
            status: None,
            sender: Box::new(SimulatedSender),
            opener: Box::new(system_open),
        }
    }

    /// Replace the delivery collaborator behind the contact form.
    pub fn with_sender(mut self, sender: Box<dyn MessageSender>) -> Self {
        self.sender = sender;
        self
    }

    /// Replace the outbound link opener (tests use a recorder).
    pub fn with_link_opener(mut self, opener: LinkOpener) -> Self {
        self.opener = opener;
        self
    }

    /// Show `msg` on the status line for [`STATUS_TTL`].
    pub fn set_status(&mut self, msg: impl Into<String>, now: Instant) {
        self.status = Some((msg.into(), now));
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|(s, _)| s.as_str())
    }

    /// Flip the theme; storage failures are surfaced on the status line.
    pub fn toggle_theme(&mut self, now: Instant) {
        if let Err(e) = self.theme.toggle() {
            tracing::error!(error = %e, "failed to persist theme");
            let msg = format!("Theme not saved: {}", crate::errors::render_error(&e));
            self.set_status(msg, now);
        }
    }

    /// Enter the contact form with the cursor on the first field.
    pub fn focus_form(&mut self) {
        self.navigate_to(SectionId::Contact);
        self.mode = Mode::Form {
            field: super::FormField::Name,
        };
    }

    /// Submit the contact form at `now`.
    pub fn submit_form(&mut self, now: Instant) {
        use self::form::SubmitOutcome;
        match self.form.submit(now) {
            SubmitOutcome::Started => self.set_status("Sending...", now),
            SubmitOutcome::Invalid(_) => self.set_status("Please fix the highlighted fields", now),
            SubmitOutcome::Ignored => {}
        }
    }

    /// Advance timers: smooth scrolling, the form state machine and the
    /// status line. Returns `true` when anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.step_smooth_scroll();

        if let Some(ev) = self.form.tick(now, self.sender.as_ref()) {
            changed = true;
            match ev {
                FormEvent::Sent => self.set_status("Message sent", now),
                FormEvent::Failed(e) => self.set_status(e.to_string(), now),
                FormEvent::Reset => {}
            }
        }

        if let Some((_, since)) = &self.status {
            if now.duration_since(*since) >= STATUS_TTL {
                self.status = None;
                changed = true;
            }
        }
        changed
    }

    /// Whether the event loop should poll at animation speed.
    pub fn is_animating(&self) -> bool {
        self.scroll.target.is_some() || self.form.next_deadline().is_some()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::app::core::theme::MemoryThemeStore;

    /// App over the built-in content with a fixed layout and no side effects.
    pub fn app() -> App {
        let content = Portfolio::builtin().unwrap_or_else(|e| panic!("builtin content: {e}"));
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
}
