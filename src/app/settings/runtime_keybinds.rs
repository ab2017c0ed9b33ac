//! Process-wide key binding table.
//!
//! Defaults are compiled in; the `[keybinds]` table of the settings file
//! replaces the bindings of any action it names. Handlers never look at raw
//! key codes for actions, they ask [`Keybinds::is_bound`] through the helper
//! predicates in `keybinds.rs`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard};

/// One key plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub const fn plain(code: KeyCode) -> Self {
        KeyBinding {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub const fn ctrl(c: char) -> Self {
        KeyBinding {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
        }
    }

    fn matches(&self, ev: &KeyEvent) -> bool {
        if self.code != ev.code {
            return false;
        }
        // Shift is implied by the character itself ('G' vs 'g').
        let relevant = ev.modifiers - KeyModifiers::SHIFT;
        relevant == self.modifiers - KeyModifiers::SHIFT
    }
}

/// Parse a key description such as `q`, `Ctrl+s`, `PageDown` or `F1`.
pub fn parse_key(s: &str) -> Option<KeyBinding> {
    let mut modifiers = KeyModifiers::NONE;
    let mut rest = s.trim();
    loop {
        let lower = rest.to_ascii_lowercase();
        if let Some(r) = lower.strip_prefix("ctrl+") {
            modifiers |= KeyModifiers::CONTROL;
            rest = &rest[rest.len() - r.len()..];
        } else if let Some(r) = lower.strip_prefix("alt+") {
            modifiers |= KeyModifiers::ALT;
            rest = &rest[rest.len() - r.len()..];
        } else {
            break;
        }
    }
    let code = match rest.to_ascii_lowercase().as_str() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backtab" | "shift+tab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "space" => KeyCode::Char(' '),
        f if f.len() > 1 && f.starts_with('f') => KeyCode::F(f[1..].parse().ok()?),
        _ => {
            let mut chars = rest.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(c)
        }
    };
    Some(KeyBinding { code, modifiers })
}

#[derive(Debug, Clone)]
pub struct Keybinds {
    map: HashMap<String, Vec<KeyBinding>>,
}

impl Default for Keybinds {
    fn default() -> Self {
        use KeyCode::*;
        let p = KeyBinding::plain;
        let defaults: Vec<(&str, Vec<KeyBinding>)> = vec![
            ("quit", vec![p(Char('q')), KeyBinding::ctrl('c')]),
            ("down", vec![p(Down), p(Char('j'))]),
            ("up", vec![p(Up), p(Char('k'))]),
            ("page_down", vec![p(PageDown), p(Char(' '))]),
            ("page_up", vec![p(PageUp)]),
            ("top", vec![p(Home), p(Char('g'))]),
            ("bottom", vec![p(End), p(Char('G'))]),
            ("next_section", vec![p(Char(']'))]),
            ("prev_section", vec![p(Char('['))]),
            ("toggle_theme", vec![p(Char('t'))]),
            ("toggle_menu", vec![p(Char('m')), p(F(2))]),
            ("contact", vec![p(Char('c'))]),
            ("help", vec![p(Char('?')), p(F(1))]),
            ("open_github", vec![p(Char('h'))]),
            ("open_linkedin", vec![p(Char('l'))]),
            ("open_email", vec![p(Char('e'))]),
            ("open_resume", vec![p(Char('d'))]),
            ("enter", vec![p(Enter)]),
            ("esc", vec![p(Esc)]),
            ("tab", vec![p(Tab)]),
            ("backtab", vec![p(BackTab)]),
            ("backspace", vec![p(Backspace)]),
            ("submit", vec![KeyBinding::ctrl('s')]),
        ];
        Keybinds {
            map: defaults
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        }
    }
}

impl Keybinds {
    /// Defaults with the actions named in `overrides` replaced. Unparseable
    /// key names are skipped with a warning.
    pub fn with_overrides(overrides: &BTreeMap<String, Vec<String>>) -> Self {
        let mut kb = Keybinds::default();
        for (action, keys) in overrides {
            let parsed: Vec<KeyBinding> = keys
                .iter()
                .filter_map(|k| {
                    let b = parse_key(k);
                    if b.is_none() {
                        tracing::warn!(action = %action, key = %k, "ignoring unknown key name");
                    }
                    b
                })
                .collect();
            kb.map.insert(action.clone(), parsed);
        }
        kb
    }

    pub fn is_bound(&self, action: &str, ev: &KeyEvent) -> bool {
        self.map
            .get(action)
            .is_some_and(|bs| bs.iter().any(|b| b.matches(ev)))
    }

    /// First binding of `action` rendered for the help popup.
    pub fn describe(&self, action: &str) -> String {
        self.map
            .get(action)
            .and_then(|bs| bs.first())
            .map(describe_binding)
            .unwrap_or_else(|| "-".to_string())
    }
}

fn describe_binding(b: &KeyBinding) -> String {
    let key = match b.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        other => format!("{:?}", other),
    };
    if b.modifiers.contains(KeyModifiers::CONTROL) {
        format!("Ctrl+{}", key)
    } else {
        key
    }
}

static KEYBINDS: Lazy<RwLock<Keybinds>> = Lazy::new(|| RwLock::new(Keybinds::default()));

/// Replace the process-wide table, usually once at startup.
pub fn install(kb: Keybinds) {
    let mut g = KEYBINDS.write().unwrap_or_else(|e| e.into_inner());
    *g = kb;
}

pub fn get() -> RwLockReadGuard<'static, Keybinds> {
    KEYBINDS.read().unwrap_or_else(|e| e.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn parse_named_and_modified_keys() {
        assert_eq!(parse_key("q"), Some(KeyBinding::plain(KeyCode::Char('q'))));
        assert_eq!(parse_key("Ctrl+s"), Some(KeyBinding::ctrl('s')));
        assert_eq!(parse_key("PageDown"), Some(KeyBinding::plain(KeyCode::PageDown)));
        assert_eq!(parse_key("F5"), Some(KeyBinding::plain(KeyCode::F(5))));
        assert_eq!(parse_key("nonsense"), None);
        assert_eq!(parse_key(""), None);
    }

    #[test]
    fn modifiers_must_match_except_shift() {
        let kb = Keybinds::default();
        assert!(kb.is_bound("quit", &key(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(!kb.is_bound("quit", &key(KeyCode::Char('q'), KeyModifiers::CONTROL)));
        assert!(kb.is_bound("quit", &key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(kb.is_bound("bottom", &key(KeyCode::Char('G'), KeyModifiers::SHIFT)));
        assert!(!kb.is_bound("contact", &key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn overrides_replace_only_named_actions() {
        let mut o = BTreeMap::new();
        o.insert("quit".to_string(), vec!["x".to_string(), "bogus-key".to_string()]);
        let kb = Keybinds::with_overrides(&o);
        assert!(kb.is_bound("quit", &key(KeyCode::Char('x'), KeyModifiers::NONE)));
        assert!(!kb.is_bound("quit", &key(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(kb.is_bound("toggle_theme", &key(KeyCode::Char('t'), KeyModifiers::NONE)));
    }

    #[test]
    fn describe_uses_first_binding() {
        let kb = Keybinds::default();
        assert_eq!(kb.describe("submit"), "Ctrl+s");
        assert_eq!(kb.describe("page_up"), "PgUp");
        assert_eq!(kb.describe("missing"), "-");
    }
}
