//! User configuration — keybindings and layout widths.
//!
//! Settings are read from a simple key-value text file at
//! `$XDG_CONFIG_HOME/findme/config.toml` (default `~/.config/findme/config.toml`).
//! The file is never written by the browser; `--print-config` emits a
//! commented default that can be redirected into place.

use std::collections::HashMap;
use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ToggleSidebar,
    ToggleMobileFilters,
    NextPin,
    PrevPin,
    OpenPin,
    CloseDetails,
    ScrollUp,
    ScrollDown,
    FocusSearch,
    CycleFocus,
    OpenHelp,
    Quit,
}

impl Action {
    /// Ordered list of all actions (used for the help popup and the config file).
    pub const ALL: &[Action] = &[
        Action::ToggleSidebar,
        Action::ToggleMobileFilters,
        Action::NextPin,
        Action::PrevPin,
        Action::OpenPin,
        Action::CloseDetails,
        Action::ScrollUp,
        Action::ScrollDown,
        Action::FocusSearch,
        Action::CycleFocus,
        Action::OpenHelp,
        Action::Quit,
    ];

    /// Human-readable label for the UI.
    pub fn label(self) -> &'static str {
        match self {
            Action::ToggleSidebar => "Toggle Sidebar",
            Action::ToggleMobileFilters => "Toggle Filters (compact)",
            Action::NextPin => "Next Pin",
            Action::PrevPin => "Previous Pin",
            Action::OpenPin => "Open Pin",
            Action::CloseDetails => "Close Details",
            Action::ScrollUp => "Scroll Up",
            Action::ScrollDown => "Scroll Down",
            Action::FocusSearch => "Search",
            Action::CycleFocus => "Cycle Focus",
            Action::OpenHelp => "Help",
            Action::Quit => "Quit",
        }
    }

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::ToggleSidebar => "toggle_sidebar",
            Action::ToggleMobileFilters => "toggle_mobile_filters",
            Action::NextPin => "next_pin",
            Action::PrevPin => "prev_pin",
            Action::OpenPin => "open_pin",
            Action::CloseDetails => "close_details",
            Action::ScrollUp => "scroll_up",
            Action::ScrollDown => "scroll_down",
            Action::FocusSearch => "focus_search",
            Action::CycleFocus => "cycle_focus",
            Action::OpenHelp => "open_help",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// Named keys: (config spelling, display glyph, code).
const NAMED_KEYS: &[(&str, &str, KeyCode)] = &[
    ("Up", "↑", KeyCode::Up),
    ("Down", "↓", KeyCode::Down),
    ("Left", "←", KeyCode::Left),
    ("Right", "→", KeyCode::Right),
    ("Enter", "Enter", KeyCode::Enter),
    ("Esc", "Esc", KeyCode::Esc),
    ("Tab", "Tab", KeyCode::Tab),
    ("Backspace", "Bksp", KeyCode::Backspace),
    ("Delete", "Del", KeyCode::Delete),
    ("Home", "Home", KeyCode::Home),
    ("End", "End", KeyCode::End),
    ("PageUp", "PgUp", KeyCode::PageUp),
    ("PageDown", "PgDn", KeyCode::PageDown),
    ("Space", "Space", KeyCode::Char(' ')),
];

const MODIFIER_MASK: KeyModifiers = KeyModifiers::CONTROL
    .union(KeyModifiers::ALT)
    .union(KeyModifiers::SHIFT);

/// A single key binding — key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Does this binding match a key event?  Only CTRL/ALT/SHIFT are compared.
    pub fn matches(&self, event: KeyEvent) -> bool {
        self.code == event.code
            && (self.modifiers & MODIFIER_MASK) == (event.modifiers & MODIFIER_MASK)
    }

    /// User-friendly display string (e.g. `"Ctrl+c"`, `"→"`, `"q"`).
    pub fn display(&self) -> String {
        self.render(|(_, glyph, _)| *glyph)
    }

    /// Config-file spelling (e.g. `"Ctrl+c"`, `"Right"`, `"q"`).
    fn to_config_string(&self) -> String {
        self.render(|(name, _, _)| *name)
    }

    fn render(&self, pick: impl Fn(&(&'static str, &'static str, KeyCode)) -> &'static str) -> String {
        let mut s = String::new();
        for (flag, prefix) in [
            (KeyModifiers::CONTROL, "Ctrl+"),
            (KeyModifiers::ALT, "Alt+"),
            (KeyModifiers::SHIFT, "Shift+"),
        ] {
            if self.modifiers.contains(flag) {
                s.push_str(prefix);
            }
        }
        match NAMED_KEYS.iter().find(|(_, _, code)| *code == self.code) {
            Some(entry) => s.push_str(pick(entry)),
            None => match self.code {
                KeyCode::Char(c) => s.push(c),
                KeyCode::F(n) => s.push_str(&format!("F{n}")),
                other => s.push_str(&format!("{other:?}")),
            },
        }
        s
    }

    /// Parse a key string like `"Ctrl+c"`, `"Alt+Up"`, `"q"`, `"Enter"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let (prefix, key_part) = match s.rsplit_once('+') {
            // A lone "+" is the plus key itself.
            Some((p, "")) => (p.strip_suffix('+').map(|p| p.trim_end_matches('+')), "+"),
            Some((p, k)) => (Some(p), k),
            None => (None, s),
        };

        for part in prefix.into_iter().flat_map(|p| p.split('+')).filter(|p| !p.is_empty()) {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let lower = key_part.to_lowercase();
        let code = if let Some((_, _, code)) = NAMED_KEYS
            .iter()
            .find(|(name, _, _)| name.to_lowercase() == lower)
        {
            *code
        } else {
            match lower.as_str() {
                "return" => KeyCode::Enter,
                "escape" => KeyCode::Esc,
                "bksp" => KeyCode::Backspace,
                "del" => KeyCode::Delete,
                "pgup" => KeyCode::PageUp,
                "pgdn" => KeyCode::PageDown,
                f if f.starts_with('f') && f.len() > 1 => KeyCode::F(f[1..].parse().ok()?),
                _ if key_part.chars().count() == 1 => KeyCode::Char(key_part.chars().next()?),
                _ => return None,
            }
        };

        Some(KeyBind { code, modifiers })
    }
}

// ───────────────────────────────────────── config ────────────

/// Application configuration — keybindings and panel widths.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// Terminals narrower than this use the compact (mobile) layout.
    pub compact_width: u16,
    /// Width of the desktop filter sidebar.
    pub sidebar_width: u16,
    /// Width of the detail panel in the wide layout.
    pub detail_width: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            compact_width: 80,
            sidebar_width: 32,
            detail_width: 48,
        }
    }
}

/// Accepted range for every width setting, in columns.
const WIDTH_RANGE: (u16, u16) = (16, 400);

fn clamp_width(cols: u16) -> u16 {
    cols.clamp(WIDTH_RANGE.0, WIDTH_RANGE.1)
}

impl AppConfig {
    /// Override the compact breakpoint (command line), clamped like the
    /// config file value.
    pub fn set_compact_width(&mut self, cols: u16) {
        self.compact_width = clamp_width(cols);
    }

    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let mut m = HashMap::new();

        m.insert(ToggleSidebar, vec![KeyBind::new(Char('s'), n)]);
        m.insert(ToggleMobileFilters, vec![KeyBind::new(Char('f'), n)]);
        m.insert(NextPin, vec![KeyBind::new(Right, n), KeyBind::new(Char('l'), n)]);
        m.insert(PrevPin, vec![KeyBind::new(Left, n), KeyBind::new(Char('h'), n)]);
        m.insert(OpenPin, vec![KeyBind::new(Enter, n)]);
        m.insert(CloseDetails, vec![KeyBind::new(Esc, n), KeyBind::new(Char('x'), n)]);
        m.insert(ScrollUp, vec![KeyBind::new(Up, n), KeyBind::new(Char('k'), n)]);
        m.insert(ScrollDown, vec![KeyBind::new(Down, n), KeyBind::new(Char('j'), n)]);
        m.insert(FocusSearch, vec![KeyBind::new(Char('/'), n)]);
        m.insert(CycleFocus, vec![KeyBind::new(Tab, n)]);
        m.insert(OpenHelp, vec![KeyBind::new(Char('?'), n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n)]);

        m
    }

    /// Find the action that matches a key event.  When several bindings
    /// match, the one with the most modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        let mut best: Option<(Action, u32)> = None;
        for (&action, binds) in &self.bindings {
            for bind in binds.iter().filter(|b| b.matches(event)) {
                let mc = bind.modifiers.bits().count_ones();
                if best.map_or(true, |(_, count)| mc > count) {
                    best = Some((action, mc));
                }
            }
        }
        best.map(|(action, _)| action)
    }

    /// Format the binding list for a given action (e.g. `"→/l"`).
    pub fn display_bindings(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => {
                binds.iter().map(|b| b.display()).collect::<Vec<_>>().join("/")
            }
            _ => "unbound".into(),
        }
    }

    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    /// Build the status-bar hint string from current bindings.
    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}/{}: pins | {}: open | {}: close | {}: filters | {}: help",
            self.short_binding(Action::PrevPin),
            self.short_binding(Action::NextPin),
            self.short_binding(Action::OpenPin),
            self.short_binding(Action::CloseDetails),
            self.short_binding(Action::ToggleSidebar),
            self.short_binding(Action::OpenHelp),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::info!(path = %path.display(), "loaded config");
                Self::parse(&contents)
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "no config file, using defaults");
                Self::default()
            }
        }
    }

    pub fn parse(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            let width = |v: &str| v.parse::<u16>().ok().map(clamp_width);
            match key {
                "compact_width" => {
                    config.compact_width = width(value).unwrap_or(config.compact_width);
                    continue;
                }
                "sidebar_width" => {
                    config.sidebar_width = width(value).unwrap_or(config.sidebar_width);
                    continue;
                }
                "detail_width" => {
                    config.detail_width = width(value).unwrap_or(config.detail_width);
                    continue;
                }
                _ => {}
            }

            let Some(action) = Action::from_config_key(key) else {
                tracing::debug!(key, "ignoring unknown config key");
                continue;
            };

            let parsed: Vec<KeyBind> = value
                .split(',')
                .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
                .collect();
            if !parsed.is_empty() {
                config.bindings.insert(action, parsed);
            }
        }

        config
    }

    pub fn serialise(&self) -> String {
        let mut lines = vec![
            "# findme configuration".to_string(),
            String::new(),
            "# Layout".to_string(),
            format!("compact_width = {}", self.compact_width),
            format!("sidebar_width = {}", self.sidebar_width),
            format!("detail_width = {}", self.detail_width),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            "# Special keys: Up, Down, Left, Right, Enter, Esc, Tab,".to_string(),
            "#   Backspace, Delete, Home, End, PageUp, PageDown, Space, F1-F12".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.to_config_string()).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/findme/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("findme").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn parses_modifiers_and_named_keys() {
        assert_eq!(
            KeyBind::parse("Ctrl+c"),
            Some(KeyBind::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
        );
        assert_eq!(
            KeyBind::parse("alt+shift+up"),
            Some(KeyBind::new(
                KeyCode::Up,
                KeyModifiers::ALT | KeyModifiers::SHIFT
            ))
        );
        assert_eq!(
            KeyBind::parse("F5"),
            Some(KeyBind::new(KeyCode::F(5), KeyModifiers::NONE))
        );
        assert_eq!(
            KeyBind::parse("+"),
            Some(KeyBind::new(KeyCode::Char('+'), KeyModifiers::NONE))
        );
        assert_eq!(KeyBind::parse("Hyper+x"), None);
        assert_eq!(KeyBind::parse("nonsense"), None);
    }

    #[test]
    fn default_file_reads_back_to_defaults() {
        let defaults = AppConfig::default();
        let reparsed = AppConfig::parse(&defaults.serialise());
        assert_eq!(reparsed.bindings, defaults.bindings);
        assert_eq!(reparsed.compact_width, defaults.compact_width);
    }

    #[test]
    fn overrides_apply_and_junk_is_skipped() {
        let config = AppConfig::parse(
            "[layout]\ncompact_width = 100\ndetail_width = abc\nbogus = 1\nquit = Ctrl+q, Esc\n",
        );
        assert_eq!(config.compact_width, 100);
        assert_eq!(config.detail_width, 48);
        assert_eq!(
            config.match_key(key(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(config.match_key(key(KeyCode::Char('q'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn command_line_width_is_clamped_like_the_file() {
        let mut config = AppConfig::default();
        config.set_compact_width(0);
        assert_eq!(config.compact_width, 16);
        config.set_compact_width(u16::MAX);
        assert_eq!(config.compact_width, AppConfig::parse("compact_width = 65535").compact_width);
        config.set_compact_width(120);
        assert_eq!(config.compact_width, 120);
    }

    #[test]
    fn display_uses_glyphs() {
        let config = AppConfig::default();
        assert_eq!(config.display_bindings(Action::NextPin), "→/l");
        assert!(config.status_bar_hint().contains("?: help"));
    }
}
