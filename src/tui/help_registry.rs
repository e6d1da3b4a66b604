//! Help registry for centralized keybinding definitions.
//!
//! Loads help definitions from an embedded TOML file and answers queries by
//! context for the status bar and the help overlay.

use serde::Deserialize;
use std::collections::HashMap;

/// Embedded help definitions TOML file
const HELP_TOML: &str = include_str!("../data/help.toml");

/// A single keybinding definition
#[derive(Debug, Clone, Deserialize)]
pub struct Binding {
    /// Action id, matching `Action::id()`
    pub id: String,
    /// Primary key(s) for this action
    pub keys: Vec<String>,
    /// Alternative keys (optional)
    #[serde(default)]
    pub alt_keys: Vec<String>,
    /// Full description of the action
    pub action: String,
    /// Short hint for status bar (optional, bindings without one stay out of it)
    pub hint: Option<String>,
    /// Priority for display order (lower = more important, shown first)
    #[serde(default = "default_priority")]
    pub priority: u32,
}

const fn default_priority() -> u32 {
    50
}

/// A context with its bindings
#[derive(Debug, Clone, Deserialize)]
pub struct Context {
    /// Human-readable name
    pub name: String,
    /// Description of when this context is active
    pub description: String,
    /// Keybindings for this context
    pub bindings: Vec<Binding>,
}

/// Metadata about the help file
#[derive(Debug, Clone, Deserialize)]
pub struct HelpMeta {
    /// Version of the help file format
    pub version: String,
    /// Name of the application
    pub app_name: String,
}

/// Root structure of the help TOML file
#[derive(Debug, Clone, Deserialize)]
struct HelpFile {
    meta: HelpMeta,
    contexts: HashMap<String, Context>,
}

/// Help registry providing access to keybinding definitions
#[derive(Debug, Clone)]
pub struct HelpRegistry {
    meta: HelpMeta,
    contexts: HashMap<String, Context>,
}

impl HelpRegistry {
    /// Load the help registry from the embedded TOML file
    pub fn load() -> Result<Self, toml::de::Error> {
        let help_file: HelpFile = toml::from_str(HELP_TOML)?;
        Ok(Self {
            meta: help_file.meta,
            contexts: help_file.contexts,
        })
    }

    /// Get the app name from metadata
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.meta.app_name
    }

    /// Get help file version from metadata.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.meta.version
    }

    /// Get a context by name
    #[must_use]
    pub fn get_context(&self, name: &str) -> Option<&Context> {
        self.contexts.get(name)
    }

    /// Get all bindings for a context, sorted by priority
    #[must_use]
    pub fn get_bindings(&self, context_name: &str) -> Vec<&Binding> {
        if let Some(context) = self.contexts.get(context_name) {
            let mut bindings: Vec<&Binding> = context.bindings.iter().collect();
            bindings.sort_by_key(|b| b.priority);
            bindings
        } else {
            Vec::new()
        }
    }

    /// Bindings with a status bar hint, sorted by priority
    #[must_use]
    pub fn get_status_bar_hints(&self, context_name: &str) -> Vec<&Binding> {
        self.get_bindings(context_name)
            .into_iter()
            .filter(|b| b.hint.is_some())
            .collect()
    }

    /// Format a binding for display in help overlay
    /// Returns (`keys_string`, `action_string`)
    #[must_use]
    pub fn format_binding_for_help(binding: &Binding) -> (String, String) {
        let keys = if binding.alt_keys.is_empty() {
            binding.keys.join("/")
        } else {
            format!(
                "{} ({})",
                binding.keys.join("/"),
                binding.alt_keys.join("/")
            )
        };
        (keys, binding.action.clone())
    }

    /// Format bindings for status bar display
    /// Returns (key, hint) pairs like ("t", "Theme")
    #[must_use]
    pub fn format_status_bar_hints(
        &self,
        context_name: &str,
        max_hints: usize,
    ) -> Vec<(String, String)> {
        self.get_status_bar_hints(context_name)
            .into_iter()
            .take(max_hints)
            .map(|b| {
                let key = b.keys.first().map_or("", String::as_str);
                let hint = b.hint.as_deref().unwrap_or(&b.action);
                (key.to_string(), hint.to_string())
            })
            .collect()
    }
}

/// Known context names as constants for type safety
pub mod contexts {
    /// Page view
    pub const MAIN: &str = "main";
    /// Help overlay
    pub const HELP: &str = "help";
}
