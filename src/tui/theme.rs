//! Color palettes for dark and light modes.
//!
//! The palette is the styling layer's view of [`ThemeMode`]: the page
//! swaps palettes when the theme controller sets a new mode, and every
//! widget reads colors from the current palette.

use ratatui::style::Color;

use crate::behavior::ThemeMode;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Primary UI colors
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for highlights and the active nav entry
    pub accent: Color,
    /// Success color, used for links
    pub success: Color,

    // Text hierarchy
    /// Primary text content color
    pub text: Color,
    /// Secondary text color for company names and labels
    pub text_secondary: Color,
    /// Muted text color for locations, tags and help text
    pub text_muted: Color,

    // Backgrounds
    /// Main background color
    pub background: Color,
    /// Highlight background for the active nav entry
    pub highlight_bg: Color,
    /// Toast background
    pub toast_bg: Color,
    /// Toast text
    pub toast_fg: Color,
}

impl Theme {
    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::Rgb(40, 40, 60),
            toast_bg: Color::Rgb(102, 126, 234),
            toast_fg: Color::White,
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    ///
    /// # Color Choices
    /// - Darker colors for text and chrome
    /// - Dark orange accent, yellow is unreadable on white
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0),
            success: Color::Rgb(0, 128, 0),

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 240),
            toast_bg: Color::Rgb(118, 75, 162),
            toast_fg: Color::White,
        }
    }

    /// Palette for `mode`.
    #[must_use]
    pub const fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
