//! Centralized shortcut and action system.
//!
//! This module connects the keybindings listed in `help.toml` with the
//! actions the event loop performs.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use crate::behavior::SectionId;

/// All possible actions in the application.
///
/// This enum is the bridge between keyboard shortcuts and application
/// behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Action {
    // === SCROLLING ===
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    JumpToTop,
    JumpToBottom,

    // === SECTIONS ===
    NextSection,
    PreviousSection,
    GoToSection(SectionId),

    // === PAGE CONTROLS ===
    ToggleTheme,
    RequestResume,

    // === HELP ===
    ToggleHelp,

    // === GENERAL ===
    Quit,
    Cancel,
}

impl Action {
    /// Get the action ID string used in help.toml
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::ScrollUp => "scroll_up",
            Self::ScrollDown => "scroll_down",
            Self::PageUp => "page_up",
            Self::PageDown => "page_down",
            Self::JumpToTop => "jump_top",
            Self::JumpToBottom => "jump_bottom",

            Self::NextSection => "next_section",
            Self::PreviousSection => "previous_section",
            Self::GoToSection(_) => "go_to_section",

            Self::ToggleTheme => "toggle_theme",
            Self::RequestResume => "request_resume",

            Self::ToggleHelp => "toggle_help",

            Self::Quit => "quit",
            Self::Cancel => "cancel",
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
#[derive(Debug, Clone)]
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Modifier state
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_main_shortcuts();
        registry.register_help_shortcuts();
        registry
    }

    /// Register all shortcuts for the page view.
    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = "main";

        // === SCROLLING ===
        self.register(ctx, K::Up, M::NONE, Action::ScrollUp);
        self.register(ctx, K::Down, M::NONE, Action::ScrollDown);
        self.register(ctx, K::Char('k'), M::NONE, Action::ScrollUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::ScrollDown);
        self.register(ctx, K::PageUp, M::NONE, Action::PageUp);
        self.register(ctx, K::PageDown, M::NONE, Action::PageDown);
        self.register(ctx, K::Char(' '), M::NONE, Action::PageDown);
        self.register(ctx, K::Home, M::NONE, Action::JumpToTop);
        self.register(ctx, K::End, M::NONE, Action::JumpToBottom);
        self.register(ctx, K::Char('g'), M::NONE, Action::JumpToTop);
        self.register(ctx, K::Char('G'), M::SHIFT, Action::JumpToBottom);

        // === SECTIONS ===
        self.register(ctx, K::Tab, M::NONE, Action::NextSection);
        self.register(ctx, K::BackTab, M::SHIFT, Action::PreviousSection);
        self.register(ctx, K::BackTab, M::NONE, Action::PreviousSection);
        self.register(ctx, K::Char('n'), M::NONE, Action::NextSection);
        self.register(ctx, K::Char('p'), M::NONE, Action::PreviousSection);
        for (digit, section) in ('1'..='7').zip(SectionId::ALL) {
            self.register(ctx, K::Char(digit), M::NONE, Action::GoToSection(section));
        }

        // === PAGE CONTROLS ===
        self.register(ctx, K::Char('t'), M::NONE, Action::ToggleTheme);
        self.register(ctx, K::Char('r'), M::NONE, Action::RequestResume);

        // === HELP ===
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Char('?'), M::SHIFT, Action::ToggleHelp);

        // === GENERAL ===
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
    }

    /// Register shortcuts for the help overlay.
    fn register_help_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = "help";

        self.register(ctx, K::Up, M::NONE, Action::ScrollUp);
        self.register(ctx, K::Down, M::NONE, Action::ScrollDown);
        self.register(ctx, K::Char('k'), M::NONE, Action::ScrollUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::ScrollDown);
        self.register(ctx, K::PageUp, M::NONE, Action::PageUp);
        self.register(ctx, K::PageDown, M::NONE, Action::PageDown);
        self.register(ctx, K::Home, M::NONE, Action::JumpToTop);
        self.register(ctx, K::End, M::NONE, Action::JumpToBottom);
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Char('?'), M::SHIFT, Action::ToggleHelp);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
        self.register(ctx, K::Char('q'), M::NONE, Action::Cancel);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    /// Register a shortcut binding.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }

    /// Check if a key event matches a specific action in the given context.
    #[must_use]
    pub fn matches(&self, context: &str, event: KeyEvent, action: Action) -> bool {
        self.lookup(context, event) == Some(action)
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_basic_lookup() {
        let registry = ShortcutRegistry::new();

        assert_eq!(registry.lookup("main", key(KeyCode::Up)), Some(Action::ScrollUp));
        assert_eq!(
            registry.lookup("main", key(KeyCode::Char('t'))),
            Some(Action::ToggleTheme)
        );
        assert_eq!(
            registry.lookup("main", key(KeyCode::Char('r'))),
            Some(Action::RequestResume)
        );

        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(registry.lookup("main", event), Some(Action::Quit));
    }

    #[test]
    fn test_digits_jump_to_sections_in_page_order() {
        let registry = ShortcutRegistry::new();
        assert_eq!(
            registry.lookup("main", key(KeyCode::Char('1'))),
            Some(Action::GoToSection(SectionId::Hero))
        );
        assert_eq!(
            registry.lookup("main", key(KeyCode::Char('7'))),
            Some(Action::GoToSection(SectionId::Contact))
        );
        assert_eq!(registry.lookup("main", key(KeyCode::Char('8'))), None);
    }

    #[test]
    fn test_vim_navigation() {
        let registry = ShortcutRegistry::new();

        assert!(registry.matches("main", key(KeyCode::Char('j')), Action::ScrollDown));
        assert!(registry.matches("main", key(KeyCode::Char('k')), Action::ScrollUp));
    }

    #[test]
    fn test_help_question_mark_with_or_without_shift() {
        let registry = ShortcutRegistry::new();
        let shifted = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        for ctx in ["main", "help"] {
            assert!(registry.matches(ctx, key(KeyCode::Char('?')), Action::ToggleHelp));
            assert!(registry.matches(ctx, shifted, Action::ToggleHelp));
        }
    }

    #[test]
    fn test_contexts_are_separate() {
        let registry = ShortcutRegistry::new();
        assert_eq!(
            registry.lookup("main", key(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
        assert_eq!(
            registry.lookup("help", key(KeyCode::Char('q'))),
            Some(Action::Cancel)
        );
        assert_eq!(registry.lookup("help", key(KeyCode::Char('t'))), None);
    }
}
