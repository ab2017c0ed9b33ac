use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::app::ThemePreference;
use crate::errors::Result;

/// User settings persisted as TOML.
///
/// The `theme` key is the one piece of application state that outlives a
/// session: it records an explicit light/dark choice. Its absence means the
/// user never toggled the theme and the OS preference applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Raw stored theme value. Only `"dark"` and `"light"` are meaningful.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Rows hidden under the sticky header, added to the scroll offset when
    /// deciding which section is active.
    pub header_offset_rows: u16,
    /// Simulated latency of a contact form submission.
    pub submit_latency_ms: u64,
    /// How long the "Message Sent!" confirmation stays up.
    pub success_display_ms: u64,
    /// Seconds between OS colour-scheme checks. Zero disables the watcher.
    pub system_theme_poll_secs: u64,
    pub mouse_enabled: bool,
    /// Overrides the default `info` filter when `RUST_LOG` is unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    /// Action name -> key names, e.g. `quit = ["q", "Ctrl+c"]`.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub keybinds: BTreeMap<String, Vec<String>>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            theme: None,
            header_offset_rows: 3,
            submit_latency_ms: 1500,
            success_display_ms: 3000,
            system_theme_poll_secs: 5,
            mouse_enabled: true,
            log_level: None,
            keybinds: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Explicit theme choice recorded in the file, if any.
    pub fn stored_theme(&self) -> Option<ThemePreference> {
        self.theme.as_deref().and_then(ThemePreference::parse)
    }
}

/// Write `settings` to `path`, creating parent directories as needed. The
/// file is written to a sibling temp file first and renamed into place.
pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let body = toml::to_string_pretty(settings)?;
    let tmp = path.with_extension("toml.tmp");
    fs::write(&tmp, body)?;
    fs::rename(&tmp, path)?;
    tracing::debug!(path = %path.display(), "settings saved");
    Ok(())
}
