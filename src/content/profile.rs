//! Owner profile shown in the About section and the footer

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const BUNDLED_PROFILE: &str = include_str!("../../assets/profile.json");

/// A label/value pair from the "Quick Facts" card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileFact {
    pub label: String,
    pub value: String,
}

/// A skill with a one-line note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub label: String,
    #[serde(default)]
    pub note: String,
}

/// External profile link (GitHub, LinkedIn, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub greeting: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub facts: Vec<ProfileFact>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub links: Vec<ProfileLink>,
    /// Fallback contact address, also quoted by the failure notification
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub footer: String,
}

impl Profile {
    /// Profile compiled into the binary
    pub fn bundled() -> Result<Self> {
        serde_json::from_str(BUNDLED_PROFILE).context("Bundled profile.json is malformed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_profile_parses() {
        let profile = Profile::bundled().unwrap();
        assert!(!profile.name.is_empty());
        assert!(profile.email.is_some());
        assert!(!profile.links.is_empty());
    }

    #[test]
    fn test_optional_sections_default_to_empty() {
        let profile: Profile = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        assert_eq!(profile.name, "Ada");
        assert!(profile.about.is_empty());
        assert!(profile.skills.is_empty());
        assert!(profile.email.is_none());
    }
}
