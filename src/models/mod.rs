//! Data models for the portfolio content.
//!
//! Models are plain serde structs, independent of UI and behavior.

pub mod portfolio;

// Re-export all model types
pub use portfolio::{
    About, Achievement, Attachment, Contact, Education, Experience, Link, Portfolio, Profile,
    Project, SkillGroup,
};
