//! Ordered list of project records available at startup

use super::ProjectEntry;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const BUNDLED_PROJECTS: &str = include_str!("../../assets/projects.json");

/// Immutable, ordered snapshot of the project records
#[derive(Debug, Clone, Default)]
pub struct ContentSource {
    entries: Vec<ProjectEntry>,
}

impl ContentSource {
    /// Wrap already-parsed entries
    pub fn new(entries: Vec<ProjectEntry>) -> Self {
        Self { entries }
    }

    /// Parse a JSON array of project records
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<ProjectEntry> =
            serde_json::from_str(json).context("Project list is not a valid JSON array")?;
        Ok(Self::new(entries))
    }

    /// Records compiled into the binary
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_PROJECTS)
    }

    /// Read records from a file on disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read projects from {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("Invalid projects file {}", path.display()))
    }

    /// Load from `path` when given, otherwise fall back to the bundled list
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let source = match path {
            Some(path) => Self::from_path(path)?,
            None => Self::bundled()?,
        };
        if source.is_empty() {
            tracing::warn!("Project list is empty; the gallery will have nothing to show");
        } else {
            tracing::info!("Loaded {} project entries", source.len());
        }
        Ok(source)
    }

    pub fn entries(&self) -> &[ProjectEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_bundled_projects_parse() {
        let source = ContentSource::bundled().unwrap();
        assert!(!source.is_empty());
    }

    #[test]
    fn test_from_json_keeps_order() {
        let json = r#"[
            {"title": "first", "description": "", "image": "1.png"},
            {"title": "second", "description": "", "image": "2.png"},
            {"title": "third", "description": "", "image": "3.png"}
        ]"#;
        let source = ContentSource::from_json(json).unwrap();
        let titles: Vec<_> = source.entries().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        assert!(ContentSource::from_json(r#"{"title": "x"}"#).is_err());
    }

    #[test]
    fn test_from_path_reads_file() {
        let path = std::env::temp_dir().join(format!(
            "portfolio-tui-projects-{}.json",
            std::process::id()
        ));
        {
            let mut file = fs::File::create(&path).unwrap();
            write!(
                file,
                r#"[{{"title": "disk", "description": "d", "image": "i.png"}}]"#
            )
            .unwrap();
        }

        let source = ContentSource::load(Some(&path)).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(source.len(), 1);
        assert_eq!(source.entries()[0].title, "disk");
    }

    #[test]
    fn test_from_path_missing_file_errors() {
        let result = ContentSource::from_path(Path::new("/definitely/not/here.json"));
        assert!(result.is_err());
    }
}
