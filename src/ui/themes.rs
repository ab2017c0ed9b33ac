use ratatui::style::Color;
use serde::Deserialize;

use crate::app::ThemePreference;

const DARK_TOML: &str = include_str!("../../resources/themes/dark.toml");
const LIGHT_TOML: &str = include_str!("../../resources/themes/light.toml");

/// Base palette plus optional per-surface overrides.
#[derive(Clone, Debug)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub panels: Option<Panels>,
}

/// Per-surface colour tokens; anything left out falls back to the palette.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Panels {
    pub header_bg: Option<Color>,
    pub header_fg: Option<Color>,
    pub muted_fg: Option<Color>,
    pub tag_bg: Option<Color>,
    pub tag_fg: Option<Color>,
    pub selected_bg: Option<Color>,
    pub selected_fg: Option<Color>,
    pub error_fg: Option<Color>,
    pub success_fg: Option<Color>,
    pub border_fg: Option<Color>,
}

#[derive(Deserialize)]
struct Pal {
    bg: String,
    fg: String,
    accent: String,
}

#[derive(Deserialize, Default)]
struct RawPanels {
    header_bg: Option<String>,
    header_fg: Option<String>,
    muted_fg: Option<String>,
    tag_bg: Option<String>,
    tag_fg: Option<String>,
    selected_bg: Option<String>,
    selected_fg: Option<String>,
    error_fg: Option<String>,
    success_fg: Option<String>,
    border_fg: Option<String>,
}

#[derive(Deserialize)]
struct RawTheme {
    palette: Option<Pal>,
    panels: Option<RawPanels>,
}

impl Theme {
    /// Fallback used when the bundled palette cannot be parsed.
    pub fn dark() -> Self {
        Self { bg: Color::Rgb(15, 23, 42), fg: Color::Gray, accent: Color::LightBlue, panels: None }
    }

    pub fn light() -> Self {
        Self { bg: Color::White, fg: Color::Black, accent: Color::Blue, panels: None }
    }

    /// Bundled palette for `pref`.
    pub fn for_preference(pref: ThemePreference) -> Self {
        let (src, fallback) = match pref {
            ThemePreference::Dark => (DARK_TOML, Self::dark()),
            ThemePreference::Light => (LIGHT_TOML, Self::light()),
        };
        Self::from_toml(src).unwrap_or_else(|e| {
            tracing::warn!(theme = %pref, error = %e, "bundled palette unreadable, using fallback");
            fallback
        })
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let raw: RawTheme = toml::from_str(s)?;
        let mut theme = match raw.palette {
            Some(p) => Self { bg: parse_hex(&p.bg), fg: parse_hex(&p.fg), accent: parse_hex(&p.accent), panels: None },
            None => Self::dark(),
        };
        theme.panels = raw.panels.map(|p| Panels {
            header_bg: p.header_bg.as_deref().map(parse_hex),
            header_fg: p.header_fg.as_deref().map(parse_hex),
            muted_fg: p.muted_fg.as_deref().map(parse_hex),
            tag_bg: p.tag_bg.as_deref().map(parse_hex),
            tag_fg: p.tag_fg.as_deref().map(parse_hex),
            selected_bg: p.selected_bg.as_deref().map(parse_hex),
            selected_fg: p.selected_fg.as_deref().map(parse_hex),
            error_fg: p.error_fg.as_deref().map(parse_hex),
            success_fg: p.success_fg.as_deref().map(parse_hex),
            border_fg: p.border_fg.as_deref().map(parse_hex),
        });
        Ok(theme)
    }
}

/// `#rrggbb` to an RGB colour; anything else becomes `Color::Reset`.
pub fn parse_hex(s: &str) -> Color {
    let s = s.trim_start_matches('#');
    if s.len() == 6 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&s[0..2], 16),
            u8::from_str_radix(&s[2..4], 16),
            u8::from_str_radix(&s[4..6], 16),
        ) {
            return Color::Rgb(r, g, b);
        }
    }
    Color::Reset
}
