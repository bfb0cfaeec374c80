//! Portfolio content: project records, owner profile and the gallery model
//!
//! Everything here is loaded once at startup and stays read-only for the
//! rest of the session.

mod entry;
mod profile;
mod renderer;
mod source;

pub use entry::ProjectEntry;
pub use profile::Profile;
pub use renderer::{ActionKind, ContentRenderer, GalleryItem};
pub use source::ContentSource;
