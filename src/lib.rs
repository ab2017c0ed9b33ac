pub mod app;
pub mod delivery;
pub mod errors;
pub mod input;
pub mod platform;
pub mod runner;
pub mod ui;

pub use crate::app::{App, FormField, Mode, Portfolio, SectionId, ThemePreference};
