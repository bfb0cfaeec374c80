//! Gallery view model built from the project records
//!
//! The renderer applies the per-entry display rules once, at startup. The
//! terminal layer only lays the resulting items out as cards.

use super::{ContentSource, ProjectEntry};

/// Badge shown when an entry has no `type`
pub const DEFAULT_BADGE: &str = "Project";

/// Kind of action link on a gallery card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Link to the deployed project
    Live,
    /// Link to the source repository
    Code,
}

impl ActionKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Live => "Live",
            Self::Code => "Code",
        }
    }
}

/// A clickable action on a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryAction {
    pub kind: ActionKind,
    pub url: String,
}

/// One rendered gallery card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub title: String,
    pub description: String,
    pub image: String,
    /// Tag row; `None` means the row is omitted entirely
    pub tags: Option<Vec<String>>,
    pub badge: String,
    /// Live first, then Code, each only when its link exists
    pub actions: Vec<GalleryAction>,
}

impl GalleryItem {
    pub fn from_entry(entry: &ProjectEntry) -> Self {
        let tags = if entry.tech().is_empty() {
            None
        } else {
            Some(entry.tech().to_vec())
        };

        let mut actions = Vec::with_capacity(2);
        if let Some(url) = entry.live_link() {
            actions.push(GalleryAction {
                kind: ActionKind::Live,
                url: url.to_string(),
            });
        }
        if let Some(url) = entry.github_link() {
            actions.push(GalleryAction {
                kind: ActionKind::Code,
                url: url.to_string(),
            });
        }

        Self {
            title: entry.title.clone(),
            description: entry.description.clone(),
            image: entry.image.clone(),
            tags,
            badge: entry.kind().unwrap_or(DEFAULT_BADGE).to_string(),
            actions,
        }
    }

    /// Find the action of the given kind, if the card has one
    pub fn action(&self, kind: ActionKind) -> Option<&GalleryAction> {
        self.actions.iter().find(|a| a.kind == kind)
    }
}

/// Turns the content source into gallery items, in source order
#[derive(Debug, Clone, Default)]
pub struct ContentRenderer {
    items: Vec<GalleryItem>,
}

impl ContentRenderer {
    pub fn new(source: &ContentSource) -> Self {
        let items = source.entries().iter().map(GalleryItem::from_entry).collect();
        Self { items }
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&GalleryItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
