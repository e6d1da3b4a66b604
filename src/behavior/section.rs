//! Section identifiers shared by the navigation bar and the page.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the fixed, ordered page sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// Banner with name, rotating titles and calls to action
    Hero,
    /// Biography and education
    About,
    /// Work history
    Experience,
    /// Skill groups
    Skills,
    /// Project showcase
    Projects,
    /// Awards and certificates
    Achievements,
    /// Contact details
    Contact,
}

impl SectionId {
    /// All sections in page order.
    pub const ALL: [Self; 7] = [
        Self::Hero,
        Self::About,
        Self::Experience,
        Self::Skills,
        Self::Projects,
        Self::Achievements,
        Self::Contact,
    ];

    /// Stable key used as the section's identifier.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Achievements => "achievements",
            Self::Contact => "contact",
        }
    }

    /// Human-readable label for the nav bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Achievements => "Achievements",
            Self::Contact => "Contact",
        }
    }

    /// Position of the section in page order.
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Section following this one, wrapping to the first.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Section preceding this one, wrapping to the last.
    #[must_use]
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when a string is not a known section key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSectionError {
    key: String,
}

impl fmt::Display for ParseSectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section '{}'", self.key)
    }
}

impl std::error::Error for ParseSectionError {}

impl FromStr for SectionId {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.key() == s)
            .ok_or_else(|| ParseSectionError { key: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for section in SectionId::ALL {
            assert_eq!(section.key().parse::<SectionId>(), Ok(section));
        }
    }

    #[test]
    fn test_unknown_key() {
        let err = "blog".parse::<SectionId>().unwrap_err();
        assert_eq!(err.to_string(), "unknown section 'blog'");
        assert!("Hero".parse::<SectionId>().is_err(), "keys are case sensitive");
    }

    #[test]
    fn test_next_previous_wrap() {
        assert_eq!(SectionId::Contact.next(), SectionId::Hero);
        assert_eq!(SectionId::Hero.previous(), SectionId::Contact);
        assert_eq!(SectionId::About.next(), SectionId::Experience);
    }

    #[test]
    fn test_index_matches_order() {
        for (i, section) in SectionId::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }
}
