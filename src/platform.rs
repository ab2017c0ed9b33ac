//! OS colour-scheme detection.
//!
//! Terminals have no "prefers-color-scheme" event, so the watcher polls the
//! desktop setting on a background thread and reports changes over a
//! channel. The event loop drains that channel and forwards each value to
//! the theme controller.

use std::process::Command;
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Whether the desktop prefers a dark colour scheme, `None` if unknown.
pub fn detect_system_dark_mode() -> Option<bool> {
    if let Some(v) = from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref()) {
        return Some(v);
    }
    detect_desktop()
}

/// Interpret `COLORFGBG` (`"fg;bg"`, set by rxvt, Konsole and others): a
/// background colour index of 0-6 or 8 is dark.
pub fn from_colorfgbg(value: Option<&str>) -> Option<bool> {
    let bg = value?.rsplit(';').next()?.trim().parse::<u8>().ok()?;
    Some(matches!(bg, 0..=6 | 8))
}

fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    let out = Command::new(program).args(args).output().ok()?;
    out.status
        .success()
        .then(|| String::from_utf8_lossy(&out.stdout).to_lowercase())
}

#[cfg(target_os = "linux")]
fn detect_desktop() -> Option<bool> {
    if let Some(scheme) = command_stdout(
        "gsettings",
        &["get", "org.gnome.desktop.interface", "color-scheme"],
    ) {
        if scheme.contains("prefer-dark") {
            return Some(true);
        }
        if scheme.contains("prefer-light") {
            return Some(false);
        }
    }
    command_stdout("gsettings", &["get", "org.gnome.desktop.interface", "gtk-theme"])
        .map(|theme| theme.contains("dark"))
}

#[cfg(target_os = "macos")]
fn detect_desktop() -> Option<bool> {
    // The key only exists while dark mode is on.
    match command_stdout("defaults", &["read", "-g", "AppleInterfaceStyle"]) {
        Some(style) => Some(style.contains("dark")),
        None => Some(false),
    }
}

#[cfg(target_os = "windows")]
fn detect_desktop() -> Option<bool> {
    // AppsUseLightTheme: 0 = dark mode, 1 = light mode
    let out = command_stdout(
        "reg",
        &[
            "query",
            r"HKCU\Software\Microsoft\Windows\CurrentVersion\Themes\Personalize",
            "/v",
            "AppsUseLightTheme",
        ],
    )?;
    if out.contains("0x0") {
        Some(true)
    } else if out.contains("0x1") {
        Some(false)
    } else {
        None
    }
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn detect_desktop() -> Option<bool> {
    None
}

/// Background poller reporting OS preference changes.
///
/// Dropping the watcher stops the thread at its next wake-up.
#[derive(Debug)]
pub struct SystemThemeWatcher {
    rx: Receiver<bool>,
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl SystemThemeWatcher {
    /// Poll `detect_system_dark_mode` every `interval`, starting from the
    /// `initial` value so only real changes are reported.
    pub fn spawn(interval: Duration, initial: Option<bool>) -> std::io::Result<Self> {
        Self::spawn_with(interval, initial, detect_system_dark_mode)
    }

    /// Same as [`spawn`](Self::spawn) with a custom detector.
    pub fn spawn_with<F>(interval: Duration, initial: Option<bool>, detect: F) -> std::io::Result<Self>
    where
        F: Fn() -> Option<bool> + Send + 'static,
    {
        let (tx, rx) = channel();
        let (stop_tx, stop_rx) = channel::<()>();
        let handle = thread::Builder::new()
            .name("os-theme-watcher".into())
            .spawn(move || {
                let mut last = initial;
                loop {
                    match stop_rx.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => {}
                        // Explicit stop or watcher dropped.
                        _ => break,
                    }
                    let now = detect();
                    if now.is_some() && now != last {
                        last = now;
                        if let Some(dark) = now {
                            tracing::debug!(prefers_dark = dark, "OS theme preference changed");
                            if tx.send(dark).is_err() {
                                break;
                            }
                        }
                    }
                }
            })?;
        Ok(SystemThemeWatcher {
            rx,
            stop: Some(stop_tx),
            handle: Some(handle),
        })
    }

    /// Changes observed since the last call, oldest first.
    pub fn drain(&self) -> Vec<bool> {
        self.rx.try_iter().collect()
    }

    /// Block up to `timeout` for the next change.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<bool> {
        self.rx.recv_timeout(timeout).ok()
    }
}

impl Drop for SystemThemeWatcher {
    fn drop(&mut self) {
        drop(self.stop.take());
        if let Some(h) = self.handle.take() {
            let _ = h.join();
        }
    }
}
