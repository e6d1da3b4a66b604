//! Portfolio content model.
//!
//! The page copy lives in a TOML document. A default document is embedded
//! in the binary; users can point the CLI at their own file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Embedded default portfolio document
const DEFAULT_PORTFOLIO_TOML: &str = include_str!("../data/portfolio.toml");

/// A link rendered as an opaque reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Display label (e.g., "GitHub")
    pub label: String,
    /// Target URL or URI
    pub url: String,
}

/// A downloadable static resource such as a certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Display label
    pub label: String,
    /// Path of the resource relative to the site root
    pub path: String,
}

/// Hero banner content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Full name shown in the banner
    pub name: String,
    /// Short line shown above the name
    #[serde(default)]
    pub greeting: String,
    /// Paragraph under the rotating titles
    pub summary: String,
    /// Social and contact links
    #[serde(default)]
    pub links: Vec<Link>,
}

/// One school or degree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    /// School name
    pub institution: String,
    /// Degree or programme
    pub degree: String,
    /// City or region
    #[serde(default)]
    pub location: String,
}

/// About section content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct About {
    /// Biography paragraph
    pub description: String,
    /// Education history, most recent first
    #[serde(default)]
    pub education: Vec<Education>,
}

/// One position in the experience section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    /// Job title
    pub role: String,
    /// Employer
    pub company: String,
    /// Location or "Remote"
    #[serde(default)]
    pub location: String,
    /// Bullet points
    #[serde(default)]
    pub highlights: Vec<String>,
    /// Optional certificate
    #[serde(default)]
    pub attachment: Option<Attachment>,
}

/// A named group of skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    /// Group heading (e.g., "Frontend")
    pub name: String,
    /// Skills in the group
    pub items: Vec<String>,
}

/// A showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project name
    pub name: String,
    /// Short description
    pub description: String,
    /// Technologies used
    #[serde(default)]
    pub tags: Vec<String>,
    /// Repository or demo link
    #[serde(default)]
    pub link: Option<String>,
}

/// An award, publication or certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    /// Headline
    pub title: String,
    /// Issuing organisation
    #[serde(default)]
    pub issuer: Option<String>,
    /// Description
    pub description: String,
    /// Certificates
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// Contact section content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Email address
    pub email: String,
    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// City, region, country
    #[serde(default)]
    pub location: Option<String>,
}

/// The full page content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Hero banner
    pub profile: Profile,
    /// Titles cycled by the typewriter in the hero banner
    #[serde(default = "default_titles")]
    pub titles: Vec<String>,
    /// About section
    #[serde(default)]
    pub about: About,
    /// Experience section
    #[serde(default)]
    pub experience: Vec<Experience>,
    /// Skills section
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    /// Projects section
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Achievements section
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    /// Contact section
    pub contact: Contact,
}

fn default_titles() -> Vec<String> {
    vec![
        "Full-Stack Developer".to_string(),
        "AI/ML Enthusiast".to_string(),
        "Software Engineer".to_string(),
    ]
}

impl Portfolio {
    /// Parses a portfolio from TOML and validates it.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let portfolio: Self = toml::from_str(content).context("Failed to parse portfolio TOML")?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Returns the embedded default portfolio.
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(DEFAULT_PORTFOLIO_TOML).context("Embedded portfolio is invalid")
    }

    /// Loads a portfolio from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read portfolio file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid portfolio file: {}", path.display()))
    }

    /// Validates content the interactive layer depends on.
    ///
    /// Checks:
    /// - the profile name is not blank
    /// - at least one typewriter title is present and none is blank
    /// - the contact email is not blank
    pub fn validate(&self) -> Result<()> {
        if self.profile.name.trim().is_empty() {
            anyhow::bail!("profile.name must not be empty");
        }
        if self.titles.is_empty() {
            anyhow::bail!("titles must contain at least one entry");
        }
        if let Some(pos) = self.titles.iter().position(|t| t.trim().is_empty()) {
            anyhow::bail!("titles[{pos}] is blank");
        }
        if self.contact.email.trim().is_empty() {
            anyhow::bail!("contact.email must not be empty");
        }
        Ok(())
    }

    /// Number of entries in each section, in page order.
    ///
    /// Used by `--check` to print a summary.
    pub fn section_counts(&self) -> [(crate::behavior::SectionId, usize); 7] {
        use crate::behavior::SectionId;
        [
            (SectionId::Hero, self.profile.links.len()),
            (SectionId::About, self.about.education.len()),
            (SectionId::Experience, self.experience.len()),
            (SectionId::Skills, self.skills.len()),
            (SectionId::Projects, self.projects.len()),
            (SectionId::Achievements, self.achievements.len()),
            (SectionId::Contact, 1),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[profile]
name = "Sam Doe"
summary = "Builds things."

[contact]
email = "sam@example.com"
"#;

    #[test]
    fn test_embedded_portfolio_is_valid() {
        let portfolio = Portfolio::embedded().unwrap();
        assert!(!portfolio.profile.name.is_empty());
        assert_eq!(portfolio.titles.len(), 3);
        assert!(!portfolio.projects.is_empty());
    }

    #[test]
    fn test_minimal_uses_default_titles() {
        let portfolio = Portfolio::from_toml_str(MINIMAL).unwrap();
        assert_eq!(portfolio.titles, default_titles());
        assert!(portfolio.experience.is_empty());
        assert!(portfolio.about.description.is_empty());
    }

    #[test]
    fn test_blank_name_rejected() {
        let toml = MINIMAL.replace("Sam Doe", "  ");
        let err = Portfolio::from_toml_str(&toml).unwrap_err();
        assert!(err.to_string().contains("profile.name"));
    }

    #[test]
    fn test_empty_titles_rejected() {
        let toml = format!("titles = []\n{MINIMAL}");
        let err = Portfolio::from_toml_str(&toml).unwrap_err();
        assert!(err.to_string().contains("at least one"));
    }

    #[test]
    fn test_blank_title_rejected() {
        let toml = format!("titles = [\"Engineer\", \" \"]\n{MINIMAL}");
        let err = Portfolio::from_toml_str(&toml).unwrap_err();
        assert!(err.to_string().contains("titles[1]"));
    }

    #[test]
    fn test_missing_contact_is_parse_error() {
        let toml = "[profile]\nname = \"A\"\nsummary = \"B\"\n";
        assert!(Portfolio::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_section_counts_in_page_order() {
        let portfolio = Portfolio::embedded().unwrap();
        let counts = portfolio.section_counts();
        let order: Vec<_> = counts.iter().map(|(s, _)| *s).collect();
        assert_eq!(order, crate::behavior::SectionId::ALL.to_vec());
    }
}
