pub mod content;
pub mod core;
pub mod settings;
pub mod types;

pub use content::Portfolio;
pub use core::{App, LinkTarget};
pub use types::{FormField, Mode, SectionId, ThemePreference};
