//! Process-wide colour styles.
//!
//! Every widget reads its styles through [`current`]. The styles are derived
//! from the resolved theme once at startup and again whenever the theme
//! controller reports a change; nothing else writes them.

use ratatui::style::{Modifier, Style};
use crate::app::ThemePreference;
use crate::ui::Theme;
use once_cell::sync::Lazy;
use std::sync::Mutex;

#[derive(Clone, Debug)]
pub struct Colors {
	pub mode: ThemePreference,
	pub base_style: Style,
	pub header_style: Style,
	pub logo_style: Style,
	pub nav_style: Style,
	pub nav_active_style: Style,
	pub heading_style: Style,
	pub accent_style: Style,
	pub muted_style: Style,
	pub tag_style: Style,
	pub featured_style: Style,
	pub error_style: Style,
	pub success_style: Style,
	pub border_style: Style,
	pub input_style: Style,
	pub input_focused_style: Style,
	pub button_style: Style,
	pub footer_style: Style,
}

impl Colors {
	/// Derive concrete runtime Styles from the provided Theme.
	pub fn from_theme(mode: ThemePreference, theme: &Theme) -> Self {
		let panels = theme.panels.clone().unwrap_or_default();

		let header_bg = panels.header_bg.unwrap_or(theme.bg);
		let header_fg = panels.header_fg.unwrap_or(theme.fg);
		let muted_fg = panels.muted_fg.unwrap_or(theme.fg);
		let tag_bg = panels.tag_bg.unwrap_or(theme.bg);
		let tag_fg = panels.tag_fg.unwrap_or(theme.fg);
		let selected_bg = panels.selected_bg.unwrap_or(theme.accent);
		let selected_fg = panels.selected_fg.unwrap_or(theme.fg);
		let error_fg = panels.error_fg.unwrap_or(theme.accent);
		let success_fg = panels.success_fg.unwrap_or(theme.accent);
		let border_fg = panels.border_fg.unwrap_or(theme.fg);

		let base = Style::default().fg(theme.fg).bg(theme.bg);
		Colors {
			mode,
			base_style: base,
			header_style: Style::default().fg(header_fg).bg(header_bg),
			logo_style: Style::default().fg(theme.bg).bg(theme.accent).add_modifier(Modifier::BOLD),
			nav_style: Style::default().fg(muted_fg).bg(header_bg),
			nav_active_style: Style::default().fg(selected_fg).bg(selected_bg).add_modifier(Modifier::BOLD),
			heading_style: base.add_modifier(Modifier::BOLD),
			accent_style: base.fg(theme.accent),
			muted_style: base.fg(muted_fg),
			tag_style: Style::default().fg(tag_fg).bg(tag_bg),
			featured_style: Style::default().fg(selected_fg).bg(selected_bg),
			error_style: base.fg(error_fg),
			success_style: base.fg(success_fg).add_modifier(Modifier::BOLD),
			border_style: base.fg(border_fg),
			input_style: Style::default().fg(theme.fg).bg(tag_bg),
			input_focused_style: Style::default().fg(theme.fg).bg(tag_bg).add_modifier(Modifier::UNDERLINED),
			button_style: Style::default().fg(theme.bg).bg(theme.accent).add_modifier(Modifier::BOLD),
			footer_style: Style::default().fg(muted_fg).bg(header_bg),
		}
	}
}

static CURRENT: Lazy<Mutex<Colors>> = Lazy::new(|| {
	Mutex::new(Colors::from_theme(ThemePreference::Light, &Theme::light()))
});

/// Switch the global styles to the bundled palette of `pref`.
pub fn set_theme(pref: ThemePreference) {
	set_from_theme(pref, &Theme::for_preference(pref));
}

/// Derive styles from an explicit `theme` and store them.
pub fn set_from_theme(pref: ThemePreference, theme: &Theme) {
	let mut g = CURRENT.lock().unwrap_or_else(|e| e.into_inner());
	*g = Colors::from_theme(pref, theme);
}

pub fn current() -> Colors { CURRENT.lock().unwrap_or_else(|e| e.into_inner()).clone() }

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn palettes_produce_distinct_styles() {
		let dark = Colors::from_theme(ThemePreference::Dark, &Theme::for_preference(ThemePreference::Dark));
		let light = Colors::from_theme(ThemePreference::Light, &Theme::for_preference(ThemePreference::Light));
		assert_eq!(dark.mode, ThemePreference::Dark);
		assert_ne!(dark.base_style, light.base_style);
		assert_ne!(dark.error_style, light.error_style);
	}
}
