use directories_next::ProjectDirs;
use std::path::PathBuf;

use crate::errors::{AppError, Result};

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "portfolio")
}

/// Per-user configuration directory, e.g. `~/.config/portfolio`.
pub fn project_config_dir() -> Option<PathBuf> {
    project_dirs().map(|p| p.config_dir().to_path_buf())
}

/// Per-user cache directory; log files live here.
pub fn user_cache_dir() -> Option<PathBuf> {
    project_dirs().map(|p| p.cache_dir().to_path_buf())
}

/// Location of `settings.toml` when no `--settings` override is given.
pub fn default_settings_path() -> Result<PathBuf> {
    project_config_dir()
        .map(|d| d.join("settings.toml"))
        .ok_or(AppError::NoConfigDir)
}
