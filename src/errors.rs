use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the settings and content layers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Wrapper for underlying IO errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A TOML document (settings or content) could not be parsed.
    #[error("failed to parse `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Settings could not be serialised back to TOML.
    #[error("failed to serialise settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The portfolio content violates one of its invariants.
    #[error("invalid portfolio content: {0}")]
    Content(#[from] crate::app::content::ContentError),

    /// No platform configuration directory could be determined.
    #[error("no configuration directory available on this platform")]
    NoConfigDir,
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Render an error as a single status-line message, including the chain of
/// sources so the user sees the root cause.
pub fn render_error(err: &(dyn std::error::Error + 'static)) -> String {
    let mut msg = err.to_string();
    let mut cur = err.source();
    while let Some(src) = cur {
        let s = src.to_string();
        if !msg.contains(&s) {
            msg.push_str(": ");
            msg.push_str(&s);
        }
        cur = src.source();
    }
    msg
}
