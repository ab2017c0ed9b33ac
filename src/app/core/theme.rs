//! Light/dark theme resolution and persistence.
//!
//! Precedence: an explicit choice stored under the `theme` key, then the
//! OS colour-scheme preference, then light. A manual toggle always writes
//! the new value, which turns it into an explicit choice; OS change
//! notifications only apply while no explicit choice is stored.

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};

use crate::app::settings::{load_settings, load_settings_or_default, save_settings};
use crate::app::ThemePreference;
use crate::errors::Result;

/// Persistent storage for the explicit theme choice.
pub trait ThemeStore {
    /// Stored explicit choice, `None` when absent or unreadable.
    fn load(&self) -> Option<ThemePreference>;
    fn save(&mut self, pref: ThemePreference) -> Result<()>;
    /// Forget the explicit choice.
    fn clear(&mut self) -> Result<()>;
}

/// Keeps the choice in memory only. Used by tests and `--print`.
#[derive(Debug, Default, Clone)]
pub struct MemoryThemeStore {
    pub value: Option<ThemePreference>,
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<ThemePreference> {
        self.value
    }

    fn save(&mut self, pref: ThemePreference) -> Result<()> {
        self.value = Some(pref);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.value = None;
        Ok(())
    }
}

/// Stores the choice as the `theme` key of `settings.toml`, leaving the other
/// settings in the file untouched.
#[derive(Debug, Clone)]
pub struct SettingsThemeStore {
    path: PathBuf,
}

impl SettingsThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SettingsThemeStore { path: path.into() }
    }

    /// A malformed file is replaced by the defaults plus the new value.
    fn write(&self, value: Option<ThemePreference>) -> Result<()> {
        let mut s = load_settings_or_default(&self.path);
        s.theme = value.map(|p| p.as_str().to_string());
        save_settings(&self.path, &s)
    }
}

impl ThemeStore for SettingsThemeStore {
    fn load(&self) -> Option<ThemePreference> {
        match load_settings(&self.path) {
            Ok(s) => s.stored_theme(),
            Err(e) => {
                tracing::warn!(error = %e, "cannot read stored theme");
                None
            }
        }
    }

    fn save(&mut self, pref: ThemePreference) -> Result<()> {
        self.write(Some(pref))
    }

    fn clear(&mut self) -> Result<()> {
        self.write(None)
    }
}

/// Owner of the resolved theme.
pub struct ThemeController {
    store: Box<dyn ThemeStore>,
    current: ThemePreference,
    subscribers: Vec<Sender<ThemePreference>>,
}

impl std::fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("current", &self.current)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

/// Pure precedence rule used at startup.
pub fn initial_theme(stored: Option<ThemePreference>, os_prefers_dark: Option<bool>) -> ThemePreference {
    stored
        .or_else(|| os_prefers_dark.map(ThemePreference::from_dark))
        .unwrap_or_default()
}

impl ThemeController {
    /// Resolve the startup theme. Reading never writes the store.
    pub fn init(store: Box<dyn ThemeStore>, os_prefers_dark: Option<bool>) -> Self {
        let stored = store.load();
        let current = initial_theme(stored, os_prefers_dark);
        tracing::info!(
            theme = %current,
            explicit = stored.is_some(),
            os = ?os_prefers_dark,
            "theme resolved"
        );
        ThemeController {
            store,
            current,
            subscribers: Vec::new(),
        }
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    /// Whether an explicit user choice is currently stored.
    pub fn has_explicit_choice(&self) -> bool {
        self.store.load().is_some()
    }

    /// Receive every subsequent change of the resolved theme.
    pub fn subscribe(&mut self) -> Receiver<ThemePreference> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    /// Flip the theme and persist the new value unconditionally. The flip
    /// takes effect even when saving fails; the error is still returned.
    pub fn toggle(&mut self) -> Result<ThemePreference> {
        let next = self.current.flipped();
        self.set(next);
        self.store.save(next)?;
        Ok(next)
    }

    /// Apply an OS preference change unless an explicit choice is stored.
    /// Returns `true` when the resolved theme changed.
    pub fn on_system_change(&mut self, prefers_dark: bool) -> bool {
        if self.has_explicit_choice() {
            tracing::debug!(prefers_dark, "ignoring OS theme change: explicit choice stored");
            return false;
        }
        let next = ThemePreference::from_dark(prefers_dark);
        if next == self.current {
            return false;
        }
        self.set(next);
        true
    }

    /// Remove the stored choice so OS changes apply again. The current theme
    /// is kept until the next OS notification.
    pub fn clear_explicit(&mut self) -> Result<()> {
        self.store.clear()
    }

    fn set(&mut self, next: ThemePreference) {
        self.current = next;
        tracing::info!(theme = %next, "theme changed");
        // Drop subscribers whose receiver is gone.
        self.subscribers.retain(|tx| tx.send(next).is_ok());
    }
}
