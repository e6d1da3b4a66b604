//! Typewriter animator for the rotating hero titles.
//!
//! A four-state machine: each [`Typewriter::step`] performs one transition
//! and returns how long to wait before the next one. The caller owns the
//! clock, so only one step is ever pending per animator.

use std::time::Duration;

/// Delay between typed characters.
pub const TYPE_DELAY: Duration = Duration::from_millis(100);
/// Delay between deleted characters.
pub const DELETE_DELAY: Duration = Duration::from_millis(50);
/// Hold once the full title is shown.
pub const FULL_PAUSE: Duration = Duration::from_millis(2000);
/// Hold once the text is empty, before the next title.
pub const EMPTY_PAUSE: Duration = Duration::from_millis(500);

/// Phase of the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterPhase {
    /// Appending characters
    Typing,
    /// Full title displayed
    PausedAtFull,
    /// Removing characters
    Deleting,
    /// Nothing displayed, about to switch titles
    PausedAtEmpty,
}

/// Cycles through a fixed list of titles forever.
#[derive(Debug, Clone)]
pub struct Typewriter {
    titles: Vec<String>,
    title_index: usize,
    char_index: usize,
    phase: TypewriterPhase,
}

impl Typewriter {
    /// Creates an animator. Returns `None` for an empty title list.
    #[must_use]
    pub fn new(titles: Vec<String>) -> Option<Self> {
        if titles.is_empty() {
            return None;
        }
        Some(Self {
            titles,
            title_index: 0,
            char_index: 0,
            phase: TypewriterPhase::Typing,
        })
    }

    /// Current phase.
    pub const fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    /// Index of the title being animated.
    pub const fn title_index(&self) -> usize {
        self.title_index
    }

    /// Number of characters currently displayed.
    pub const fn char_index(&self) -> usize {
        self.char_index
    }

    /// Title being animated.
    pub fn current_title(&self) -> &str {
        &self.titles[self.title_index]
    }

    /// The displayed prefix of the current title.
    pub fn text(&self) -> &str {
        let title = self.current_title();
        let end = title
            .char_indices()
            .nth(self.char_index)
            .map_or(title.len(), |(i, _)| i);
        &title[..end]
    }

    /// Performs one transition and returns the delay before the next.
    pub fn step(&mut self) -> Duration {
        match self.phase {
            TypewriterPhase::Typing => self.type_one(),
            TypewriterPhase::PausedAtFull => {
                self.phase = TypewriterPhase::Deleting;
                self.delete_one()
            }
            TypewriterPhase::Deleting => self.delete_one(),
            TypewriterPhase::PausedAtEmpty => {
                self.title_index = (self.title_index + 1) % self.titles.len();
                self.phase = TypewriterPhase::Typing;
                self.type_one()
            }
        }
    }

    fn title_len(&self) -> usize {
        self.current_title().chars().count()
    }

    fn type_one(&mut self) -> Duration {
        let len = self.title_len();
        if self.char_index < len {
            self.char_index += 1;
        }
        if self.char_index == len {
            self.phase = TypewriterPhase::PausedAtFull;
            FULL_PAUSE
        } else {
            TYPE_DELAY
        }
    }

    fn delete_one(&mut self) -> Duration {
        self.char_index = self.char_index.saturating_sub(1);
        if self.char_index == 0 {
            self.phase = TypewriterPhase::PausedAtEmpty;
            EMPTY_PAUSE
        } else {
            DELETE_DELAY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator(titles: &[&str]) -> Typewriter {
        Typewriter::new(titles.iter().map(ToString::to_string).collect()).unwrap()
    }

    #[test]
    fn test_empty_titles_rejected() {
        assert!(Typewriter::new(Vec::new()).is_none());
    }

    #[test]
    fn test_types_then_pauses() {
        let mut tw = animator(&["abc"]);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.step(), TYPE_DELAY);
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.step(), TYPE_DELAY);
        assert_eq!(tw.step(), FULL_PAUSE);
        assert_eq!(tw.text(), "abc");
        assert_eq!(tw.phase(), TypewriterPhase::PausedAtFull);
    }

    #[test]
    fn test_deletes_then_advances() {
        let mut tw = animator(&["ab", "xyz"]);
        tw.step();
        tw.step();
        assert_eq!(tw.phase(), TypewriterPhase::PausedAtFull);

        // The pause ends with the first deletion
        assert_eq!(tw.step(), DELETE_DELAY);
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.phase(), TypewriterPhase::Deleting);

        assert_eq!(tw.step(), EMPTY_PAUSE);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phase(), TypewriterPhase::PausedAtEmpty);
        assert_eq!(tw.title_index(), 0);

        assert_eq!(tw.step(), TYPE_DELAY);
        assert_eq!(tw.title_index(), 1);
        assert_eq!(tw.text(), "x");
    }

    #[test]
    fn test_wraps_to_first_title() {
        let mut tw = animator(&["a", "b"]);
        let mut seen = Vec::new();
        for _ in 0..8 {
            tw.step();
            if tw.phase() == TypewriterPhase::PausedAtFull {
                seen.push(tw.text().to_string());
            }
        }
        assert_eq!(seen, vec!["a", "b", "a", "b"]);
    }

    #[test]
    fn test_multibyte_prefix() {
        let mut tw = animator(&["héllo"]);
        tw.step();
        tw.step();
        assert_eq!(tw.text(), "hé");
    }

    #[test]
    fn test_empty_title_does_not_stall() {
        let mut tw = animator(&["", "z"]);
        assert_eq!(tw.step(), FULL_PAUSE);
        assert_eq!(tw.step(), EMPTY_PAUSE);
        tw.step();
        assert_eq!(tw.text(), "z");
    }
}
