use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use portfolio::app::core::theme::{MemoryThemeStore, SettingsThemeStore, ThemeStore};
use portfolio::app::settings::{self, runtime_keybinds, Settings};
use portfolio::app::{App, Portfolio};
use portfolio::platform::{self, SystemThemeWatcher};
use portfolio::runner;
use portfolio::ui::{colors, Page};

/// A personal portfolio as a single scrollable terminal page.
#[derive(Debug, Parser)]
#[command(name = "portfolio", version, about)]
struct Cli {
    /// Settings file (default: <config dir>/portfolio/settings.toml)
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Portfolio content file (default: built-in content)
    #[arg(long, value_name = "PATH")]
    content: Option<PathBuf>,

    /// Forget the stored light/dark choice and follow the OS again
    #[arg(long)]
    reset_theme: bool,

    /// Print the page as plain text and exit
    #[arg(long)]
    print: bool,

    /// Page width used with --print
    #[arg(long, default_value_t = 100, value_name = "COLUMNS")]
    width: u16,

    /// Log file (default: <cache dir>/portfolio/portfolio.log)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn default_log_file() -> Option<PathBuf> {
    settings::user_cache_dir().map(|d| d.join("portfolio.log"))
}

/// File-only logging; the terminal belongs to the TUI. Without a usable log
/// file nothing is logged.
fn init_tracing(log_file: Option<&Path>, level: Option<&str>) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.unwrap_or("info")))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let path = log_file?;
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let name = path.file_name()?;
    if std::fs::create_dir_all(dir).is_err() {
        return None;
    }
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .with(env_filter)
        .init();
    tracing::info!(path = %path.display(), "logging initialized");
    Some(guard)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings_path = match cli.settings.clone() {
        Some(p) => Some(p),
        None => settings::default_settings_path().ok(),
    };
    let loaded = settings_path.as_deref().map(settings::load_settings);
    let log_level = match &loaded {
        Some(Ok(s)) => s.log_level.clone(),
        _ => None,
    };
    let log_file = cli.log_file.clone().or_else(default_log_file);
    let _guard = init_tracing(log_file.as_deref(), log_level.as_deref());

    let settings = match loaded {
        Some(Ok(s)) => s,
        Some(Err(e)) => {
            tracing::warn!(error = %e, "settings unreadable, using defaults");
            Settings::default()
        }
        None => Settings::default(),
    };
    runtime_keybinds::install(runtime_keybinds::Keybinds::with_overrides(&settings.keybinds));

    let content = match &cli.content {
        Some(p) => Portfolio::load(p).with_context(|| format!("loading content from {}", p.display()))?,
        None => Portfolio::builtin().context("built-in content")?,
    };

    let mut store: Box<dyn ThemeStore> = match &settings_path {
        Some(p) => Box::new(SettingsThemeStore::new(p)),
        None => {
            tracing::warn!("no config directory; theme choice will not be saved");
            Box::new(MemoryThemeStore::default())
        }
    };
    if cli.reset_theme {
        store.clear().context("clearing stored theme")?;
        tracing::info!("stored theme cleared");
    }

    if cli.print {
        // Deterministic output: light palette, no OS lookup, nothing persisted.
        let app = App::new(content, settings, Box::new(MemoryThemeStore::default()), None);
        colors::set_theme(app.theme.current());
        print!("{}", Page::build(&app, cli.width).plain_text());
        return Ok(());
    }

    let os_prefers_dark = platform::detect_system_dark_mode();
    let watcher = match settings.system_theme_poll_secs {
        0 => None,
        secs => match SystemThemeWatcher::spawn(Duration::from_secs(secs), os_prefers_dark) {
            Ok(w) => Some(w),
            Err(e) => {
                tracing::warn!(error = %e, "OS theme watcher not started");
                None
            }
        },
    };

    let app = App::new(content, settings, store, os_prefers_dark);
    runner::run_app(app, watcher)
}
