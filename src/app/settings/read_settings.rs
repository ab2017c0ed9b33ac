use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::Settings;
use crate::errors::{AppError, Result};

/// Load settings from `path`. A missing file yields the defaults; a file
/// that exists but does not parse is an error.
pub fn load_settings(path: &Path) -> Result<Settings> {
    let body = match fs::read_to_string(path) {
        Ok(b) => b,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => return Err(e.into()),
    };
    toml::from_str(&body).map_err(|source| AppError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Like [`load_settings`] but never fails: unreadable or malformed files are
/// logged and replaced by the defaults.
pub fn load_settings_or_default(path: &Path) -> Settings {
    match load_settings(path) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "using default settings");
            Settings::default()
        }
    }
}
