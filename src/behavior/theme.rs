//! Theme controller.
//!
//! The light/dark mode is an explicit value owned by [`ThemeController`]. It
//! reaches the styling layer through exactly one setter,
//! [`PresentationTarget::set_presentation`], and nothing else writes it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual mode of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light text on a dark background
    #[default]
    Dark,
    /// Dark text on a light background
    Light,
}

impl ThemeMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Value of the document-level presentation attribute.
    #[must_use]
    pub const fn attribute_value(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attribute_value())
    }
}

/// The styling layer's single entry point for the theme.
pub trait PresentationTarget {
    /// Applies `mode` to everything rendered from now on.
    fn set_presentation(&mut self, mode: ThemeMode);
}

/// Owns the current [`ThemeMode`] and propagates changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeController {
    mode: ThemeMode,
}

impl ThemeController {
    /// Creates a controller starting in `mode`.
    #[must_use]
    pub const fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    /// Current mode.
    pub const fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Pushes the current mode to `target` without changing it.
    pub fn apply(&self, target: &mut dyn PresentationTarget) {
        target.set_presentation(self.mode);
    }

    /// Flips the mode and applies it. Returns the new mode.
    pub fn toggle(&mut self, target: &mut dyn PresentationTarget) -> ThemeMode {
        self.mode = self.mode.toggled();
        target.set_presentation(self.mode);
        self.mode
    }
}

impl Default for ThemeController {
    fn default() -> Self {
        Self::new(ThemeMode::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<ThemeMode>);

    impl PresentationTarget for Recorder {
        fn set_presentation(&mut self, mode: ThemeMode) {
            self.0.push(mode);
        }
    }

    #[test]
    fn test_starts_dark() {
        assert_eq!(ThemeController::default().mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_alternates() {
        let mut controller = ThemeController::default();
        let mut target = Recorder::default();

        assert_eq!(controller.toggle(&mut target), ThemeMode::Light);
        assert_eq!(controller.toggle(&mut target), ThemeMode::Dark);
        assert_eq!(controller.toggle(&mut target), ThemeMode::Light);
        assert_eq!(
            target.0,
            vec![ThemeMode::Light, ThemeMode::Dark, ThemeMode::Light]
        );
    }

    #[test]
    fn test_double_toggle_is_identity() {
        for start in [ThemeMode::Dark, ThemeMode::Light] {
            let mut controller = ThemeController::new(start);
            let mut target = Recorder::default();
            controller.toggle(&mut target);
            controller.toggle(&mut target);
            assert_eq!(controller.mode(), start);
            assert_eq!(target.0.last(), Some(&start));
        }
    }

    #[test]
    fn test_apply_does_not_flip() {
        let controller = ThemeController::new(ThemeMode::Light);
        let mut target = Recorder::default();
        controller.apply(&mut target);
        assert_eq!(target.0, vec![ThemeMode::Light]);
        assert_eq!(controller.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_attribute_values() {
        assert_eq!(ThemeMode::Dark.attribute_value(), "dark");
        assert_eq!(ThemeMode::Light.to_string(), "light");
    }
}
