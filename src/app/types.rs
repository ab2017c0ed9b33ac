use serde::{Deserialize, Serialize};
use std::fmt;

/// Resolved colour scheme of the whole page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }

    pub fn flipped(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Value written under the `theme` key of the settings file.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than `dark`/`light` counts as
    /// "no preference recorded".
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(ThemePreference::Dark),
            "light" => Some(ThemePreference::Light),
            _ => None,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named anchors of the page, in declared (top to bottom) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        SectionId::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }

    pub fn from_index(i: usize) -> Option<Self> {
        SectionId::ALL.get(i).copied()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Input field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Your name",
            FormField::Email => "your.email@example.com",
            FormField::Message => "Your message...",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Message,
            FormField::Message => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Message,
            FormField::Email => FormField::Name,
            FormField::Message => FormField::Email,
        }
    }
}

/// Which surface currently receives key presses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Scrolling the page.
    Normal,
    /// Typing into the contact form; `field` has the cursor.
    Form { field: FormField },
    /// Keybinding overview popup.
    Help,
}
