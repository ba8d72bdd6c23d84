//! Keybinding registry — maps actions to key events with config overrides.
//!
//! Replaces hardcoded key match arms with a data-driven registry that supports
//! user customization via config.toml.
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

// ============================================================================
// Action Enum
// ============================================================================

/// All user-facing actions that can be triggered by keybindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    NavDown,
    NavUp,
    CycleFocus,
    Back,
    Select,
    EnterSearch,
    ExitSearch,
    CommitSearch,
    LoadMore,
    NextCategory,
    PrevCategory,
    CycleTheme,
    ShareLink,
    Compose,
    ShowHelp,
    ScrollDown,
    ScrollUp,
    PageDown,
    PageUp,
}

impl Action {
    /// Human-readable description for the help screen.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Quit => "Quit application",
            Self::NavDown => "Navigate down",
            Self::NavUp => "Navigate up",
            Self::CycleFocus => "Cycle panel focus",
            Self::Back => "Go back / dismiss",
            Self::Select => "Select / open",
            Self::EnterSearch => "Enter search mode",
            Self::ExitSearch => "Clear search and exit search mode",
            Self::CommitSearch => "Keep search and leave input",
            Self::LoadMore => "Reveal more stories",
            Self::NextCategory => "Next category filter",
            Self::PrevCategory => "Previous category filter",
            Self::CycleTheme => "Cycle theme",
            Self::ShareLink => "Copy share link to status bar",
            Self::Compose => "Write a comment",
            Self::ShowHelp => "Show help",
            Self::ScrollDown => "Scroll down one line",
            Self::ScrollUp => "Scroll up one line",
            Self::PageDown => "Page down",
            Self::PageUp => "Page up",
        }
    }
}

// ============================================================================
// Context Enum
// ============================================================================

/// Dispatch context — determines which bindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    Global,
    Home,
    Article,
    Search,
    Compose,
}

// ============================================================================
// Key Specification
// ============================================================================

/// A key event: code + modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySpec {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeySpec {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }
}

/// Parse a key string from config into a KeySpec.
///
/// Supported formats:
/// - Single char: "q", "j", "/"
/// - Named keys: "Enter", "Esc", "Tab", "Up", "Down", "Backspace"
/// - Modifier combos: "Ctrl+d", "Ctrl+u"
/// - Function keys: "F1" through "F12"
fn parse_key_string(s: &str) -> Option<KeySpec> {
    let s = s.trim();

    // Handle Ctrl+ prefix
    if let Some(rest) = s.strip_prefix("Ctrl+") {
        let rest = rest.trim();
        if rest.len() == 1 {
            let c = rest.chars().next()?;
            return Some(KeySpec::ctrl(c));
        }
        return None;
    }

    // Named keys (case-insensitive)
    match s.to_lowercase().as_str() {
        "enter" | "return" => return Some(KeySpec::plain(KeyCode::Enter)),
        "esc" | "escape" => return Some(KeySpec::plain(KeyCode::Esc)),
        "tab" => return Some(KeySpec::plain(KeyCode::Tab)),
        "up" => return Some(KeySpec::plain(KeyCode::Up)),
        "down" => return Some(KeySpec::plain(KeyCode::Down)),
        "left" => return Some(KeySpec::plain(KeyCode::Left)),
        "right" => return Some(KeySpec::plain(KeyCode::Right)),
        "backspace" => return Some(KeySpec::plain(KeyCode::Backspace)),
        "space" => return Some(KeySpec::plain(KeyCode::Char(' '))),
        _ => {}
    }

    // Function keys
    if s.starts_with('F') || s.starts_with('f') {
        if let Ok(n) = s[1..].parse::<u8>() {
            if (1..=12).contains(&n) {
                return Some(KeySpec::plain(KeyCode::F(n)));
            }
        }
    }

    // Single character
    if s.len() == 1 {
        let c = s.chars().next()?;
        return Some(KeySpec::plain(KeyCode::Char(c)));
    }

    None
}

/// Format a KeySpec as a human-readable string for the help screen.
fn format_key(key: &KeySpec) -> String {
    let modifier = if key.modifiers.contains(KeyModifiers::CONTROL) {
        "Ctrl+"
    } else {
        ""
    };

    let key_name = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => "?".to_string(),
    };

    format!("{}{}", modifier, key_name)
}

// ============================================================================
// Keybinding Registry
// ============================================================================

/// Registry of keybindings, supporting default bindings and config overrides.
///
/// Lookup is O(1) via HashMap. The registry supports context-aware dispatch:
/// the same key can map to different actions in different contexts.
pub struct KeybindingRegistry {
    /// Primary lookup: (Context, KeySpec) -> Action
    lookup: HashMap<(Context, KeySpec), Action>,
    /// All bindings for help screen enumeration
    bindings: Vec<(Context, KeySpec, Action)>,
}

impl KeybindingRegistry {
    /// Create a registry with the default bindings.
    pub fn new() -> Self {
        let mut registry = Self {
            lookup: HashMap::new(),
            bindings: Vec::new(),
        };
        registry.register_defaults();
        registry
    }

    /// Register a single binding.
    fn bind(&mut self, context: Context, key: KeySpec, action: Action) {
        self.lookup.insert((context, key), action);
        self.bindings.push((context, key, action));
    }

    /// Register all default bindings.
    fn register_defaults(&mut self) {
        // === Global ===
        self.bind(
            Context::Global,
            KeySpec::plain(KeyCode::Char('q')),
            Action::Quit,
        );

        // Navigation
        self.bind(
            Context::Global,
            KeySpec::plain(KeyCode::Char('j')),
            Action::NavDown,
        );
        self.bind(
            Context::Global,
            KeySpec::plain(KeyCode::Down),
            Action::NavDown,
        );
        self.bind(
            Context::Global,
            KeySpec::plain(KeyCode::Char('k')),
            Action::NavUp,
        );
        self.bind(Context::Global, KeySpec::plain(KeyCode::Up), Action::NavUp);

        // Focus
        self.bind(
            Context::Global,
            KeySpec::plain(KeyCode::Tab),
            Action::CycleFocus,
        );

        // Back / dismiss
        self.bind(Context::Global, KeySpec::plain(KeyCode::Esc), Action::Back);

        // Select / open
        self.bind(
            Context::Global,
            KeySpec::plain(KeyCode::Enter),
            Action::Select,
        );

        // Search
        self.bind(
            Context::Global,
            KeySpec::plain(KeyCode::Char('/')),
            Action::EnterSearch,
        );

        // Share link for the current story
        self.bind(
            Context::Global,
            KeySpec::plain(KeyCode::Char('y')),
            Action::ShareLink,
        );

        // Theme + Help
        self.bind(
            Context::Global,
            KeySpec::plain(KeyCode::Char('T')),
            Action::CycleTheme,
        );
        self.bind(
            Context::Global,
            KeySpec::plain(KeyCode::Char('?')),
            Action::ShowHelp,
        );

        // === Home view ===
        self.bind(
            Context::Home,
            KeySpec::plain(KeyCode::Char('m')),
            Action::LoadMore,
        );
        self.bind(
            Context::Home,
            KeySpec::plain(KeyCode::Right),
            Action::NextCategory,
        );
        self.bind(
            Context::Home,
            KeySpec::plain(KeyCode::Char(']')),
            Action::NextCategory,
        );
        self.bind(
            Context::Home,
            KeySpec::plain(KeyCode::Left),
            Action::PrevCategory,
        );
        self.bind(
            Context::Home,
            KeySpec::plain(KeyCode::Char('[')),
            Action::PrevCategory,
        );

        // === Article view ===
        self.bind(
            Context::Article,
            KeySpec::plain(KeyCode::Char('b')),
            Action::Back,
        );
        self.bind(
            Context::Article,
            KeySpec::plain(KeyCode::Char('j')),
            Action::ScrollDown,
        );
        self.bind(
            Context::Article,
            KeySpec::plain(KeyCode::Down),
            Action::ScrollDown,
        );
        self.bind(
            Context::Article,
            KeySpec::plain(KeyCode::Char('k')),
            Action::ScrollUp,
        );
        self.bind(
            Context::Article,
            KeySpec::plain(KeyCode::Up),
            Action::ScrollUp,
        );
        self.bind(Context::Article, KeySpec::ctrl('d'), Action::PageDown);
        self.bind(Context::Article, KeySpec::ctrl('u'), Action::PageUp);
        self.bind(
            Context::Article,
            KeySpec::plain(KeyCode::Char('c')),
            Action::Compose,
        );

        // === Search mode ===
        self.bind(
            Context::Search,
            KeySpec::plain(KeyCode::Esc),
            Action::ExitSearch,
        );
        self.bind(
            Context::Search,
            KeySpec::plain(KeyCode::Enter),
            Action::CommitSearch,
        );
    }

    /// Apply user overrides from config keybindings map.
    ///
    /// Keys in the map are action names (e.g., "quit", "load_more").
    /// Values are key strings (e.g., "q", "Ctrl+d", "F5").
    ///
    /// Returns a list of warnings for unrecognized action names or unparseable keys.
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, String>) -> Vec<String> {
        let mut warnings = Vec::new();

        for (action_name, key_str) in overrides {
            let action = match parse_action_name(action_name) {
                Some(a) => a,
                None => {
                    warnings.push(format!("Unknown action '{}', ignoring", action_name));
                    continue;
                }
            };

            let key = match parse_key_string(key_str) {
                Some(k) => k,
                None => {
                    warnings.push(format!(
                        "Cannot parse key '{}' for action '{}', ignoring",
                        key_str, action_name
                    ));
                    continue;
                }
            };

            // Remove old bindings for this action (in all contexts where it's bound)
            let contexts_for_action: Vec<Context> = self
                .bindings
                .iter()
                .filter(|(_, _, a)| *a == action)
                .map(|(c, _, _)| *c)
                .collect();

            self.lookup.retain(|_, a| *a != action);
            self.bindings.retain(|(_, _, a)| *a != action);

            // Re-bind in the same contexts with the new key
            for ctx in contexts_for_action {
                self.bind(ctx, key, action);
            }

            tracing::info!(
                action = %action_name,
                key = %key_str,
                "Applied keybinding override"
            );
        }

        warnings
    }

    /// Look up the action for a given key in a given context.
    ///
    /// Tries the specific context first, then falls back to Global.
    /// Shift is dropped for character keys: the character itself already
    /// carries the case ('T', '?'), and terminals differ on whether they
    /// report SHIFT alongside it.
    pub fn action_for_key(
        &self,
        code: KeyCode,
        modifiers: KeyModifiers,
        context: Context,
    ) -> Option<Action> {
        let modifiers = if matches!(code, KeyCode::Char(_)) {
            modifiers.difference(KeyModifiers::SHIFT)
        } else {
            modifiers
        };
        let key = KeySpec::new(code, modifiers);

        // Try specific context first
        if let Some(&action) = self.lookup.get(&(context, key)) {
            return Some(action);
        }

        // Fall back to Global (unless we're already looking at Global)
        if context != Context::Global {
            if let Some(&action) = self.lookup.get(&(Context::Global, key)) {
                return Some(action);
            }
        }

        None
    }

    /// Get all bindings for the help screen.
    ///
    /// Returns (context, key_display_string, action, description) tuples.
    pub fn all_bindings(&self) -> Vec<(Context, String, Action, &'static str)> {
        self.bindings
            .iter()
            .map(|(ctx, key, action)| (*ctx, format_key(key), *action, action.describe()))
            .collect()
    }
}

impl Default for KeybindingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an action name string (from config) into an Action enum.
fn parse_action_name(name: &str) -> Option<Action> {
    match name.to_lowercase().as_str() {
        "quit" => Some(Action::Quit),
        "nav_down" | "navdown" | "down" => Some(Action::NavDown),
        "nav_up" | "navup" | "up" => Some(Action::NavUp),
        "cycle_focus" | "cyclefocus" | "tab" => Some(Action::CycleFocus),
        "back" => Some(Action::Back),
        "select" | "enter" => Some(Action::Select),
        "enter_search" | "entersearch" | "search" => Some(Action::EnterSearch),
        "exit_search" | "exitsearch" => Some(Action::ExitSearch),
        "commit_search" | "commitsearch" => Some(Action::CommitSearch),
        "load_more" | "loadmore" | "more" => Some(Action::LoadMore),
        "next_category" | "nextcategory" => Some(Action::NextCategory),
        "prev_category" | "prevcategory" => Some(Action::PrevCategory),
        "cycle_theme" | "cycletheme" | "theme" => Some(Action::CycleTheme),
        "share_link" | "sharelink" | "share" => Some(Action::ShareLink),
        "compose" | "comment" => Some(Action::Compose),
        "show_help" | "showhelp" | "help" => Some(Action::ShowHelp),
        "scroll_down" | "scrolldown" => Some(Action::ScrollDown),
        "scroll_up" | "scrollup" => Some(Action::ScrollUp),
        "page_down" | "pagedown" => Some(Action::PageDown),
        "page_up" | "pageup" => Some(Action::PageUp),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
