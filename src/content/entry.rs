//! Project record as stored in the content file

use serde::{Deserialize, Serialize};

/// One portfolio project.
///
/// Keys follow the bundled `projects.json` (`liveLink`, `githubLink`, `type`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    /// Resource reference for the preview image
    pub image: String,
    #[serde(default)]
    pub tech: Option<Vec<String>>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub live_link: Option<String>,
    #[serde(default)]
    pub github_link: Option<String>,
}

impl ProjectEntry {
    /// Technology tags in source order (empty when absent)
    pub fn tech(&self) -> &[String] {
        self.tech.as_deref().unwrap_or_default()
    }

    /// Project type, `None` when absent or empty
    pub fn kind(&self) -> Option<&str> {
        non_empty(self.kind.as_deref())
    }

    /// Live demo URL, `None` when absent or empty
    pub fn live_link(&self) -> Option<&str> {
        non_empty(self.live_link.as_deref())
    }

    /// Source repository URL, `None` when absent or empty
    pub fn github_link(&self) -> Option<&str> {
        non_empty(self.github_link.as_deref())
    }
}

/// Only the empty string counts as absent; whitespace is a real value
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_full_entry() {
        let json = r#"{
            "title": "ShopSphere",
            "description": "Store",
            "image": "shop.png",
            "tech": ["React", "Node.js"],
            "type": "Full Stack",
            "liveLink": "https://shop.example.com",
            "githubLink": "https://github.com/me/shop"
        }"#;
        let entry: ProjectEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.title, "ShopSphere");
        assert_eq!(entry.tech(), ["React".to_string(), "Node.js".to_string()]);
        assert_eq!(entry.kind(), Some("Full Stack"));
        assert_eq!(entry.live_link(), Some("https://shop.example.com"));
        assert_eq!(entry.github_link(), Some("https://github.com/me/shop"));
    }

    #[test]
    fn test_deserialize_minimal_entry() {
        let json = r#"{"title": "A", "description": "B", "image": "c.png"}"#;
        let entry: ProjectEntry = serde_json::from_str(json).unwrap();

        assert!(entry.tech().is_empty());
        assert!(entry.kind().is_none());
        assert!(entry.live_link().is_none());
        assert!(entry.github_link().is_none());
    }

    #[test]
    fn test_null_tech_is_empty() {
        let json = r#"{"title": "A", "description": "B", "image": "c.png", "tech": null}"#;
        let entry: ProjectEntry = serde_json::from_str(json).unwrap();
        assert!(entry.tech().is_empty());
    }

    #[test]
    fn test_empty_links_count_as_absent() {
        let json = r#"{"title": "A", "description": "B", "image": "c.png",
                       "liveLink": "", "githubLink": "", "type": ""}"#;
        let entry: ProjectEntry = serde_json::from_str(json).unwrap();

        assert!(entry.live_link().is_none());
        assert!(entry.github_link().is_none());
        assert!(entry.kind().is_none());
    }

    #[test]
    fn test_whitespace_values_are_kept() {
        let json = r#"{"title": "A", "description": "B", "image": "c.png",
                       "liveLink": " ", "githubLink": "   ", "type": " "}"#;
        let entry: ProjectEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.live_link(), Some(" "));
        assert_eq!(entry.github_link(), Some("   "));
        assert_eq!(entry.kind(), Some(" "));
    }

    #[test]
    fn test_missing_title_is_rejected() {
        let json = r#"{"description": "B", "image": "c.png"}"#;
        assert!(serde_json::from_str::<ProjectEntry>(json).is_err());
    }
}
