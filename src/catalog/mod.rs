//! Video catalog: the fixed set of records a session browses.
//!
//! The catalog is populated once, before any command runs, and is immutable
//! for the rest of the session except for each video's moderation flag,
//! which only [`crate::player::PlayerState`] may toggle.

mod loader;

pub use loader::{default_catalog, from_json, load_file, CatalogError};

use std::collections::HashMap;
use std::fmt;

/// Reason rendered for a flagged video when none was supplied.
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// A single catalog entry.
///
/// Everything except the moderation flag is fixed at construction time.
#[derive(Debug, Clone)]
pub struct Video {
    id: String,
    title: String,
    tags: Vec<String>,
    flagged: bool,
    flag_reason: Option<String>,
}

impl Video {
    /// Creates an unflagged video record.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        tags: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            flagged: false,
            flag_reason: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn is_flagged(&self) -> bool {
        self.flagged
    }

    /// The reason this video was flagged, or [`DEFAULT_FLAG_REASON`] when
    /// none was supplied. Meaningful only while `is_flagged()` holds,
    /// though the last reason is retained after the flag is lifted.
    pub fn flag_reason(&self) -> &str {
        self.flag_reason.as_deref().unwrap_or(DEFAULT_FLAG_REASON)
    }

    pub(crate) fn set_flag(&mut self, reason: Option<String>) {
        self.flagged = true;
        self.flag_reason = reason;
    }

    pub(crate) fn clear_flag(&mut self) {
        // The reason is kept around so a later look at the record still
        // shows why it was flagged.
        self.flagged = false;
    }
}

impl fmt::Display for Video {
    /// Renders the canonical one-line form: `Title (id) [tag1 tag2]`,
    /// with a flag note appended while the video is flagged.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tags.join(" "))?;
        if self.flagged {
            write!(f, " - FLAGGED (reason: {})", self.flag_reason())?;
        }
        Ok(())
    }
}

/// Read-only accessor over the session's videos.
///
/// Videos are kept in title order; that order is the "natural" ordering
/// used by listings and search results. Ids must be unique - the loader
/// enforces this for external catalogs.
#[derive(Debug)]
pub struct VideoCatalog {
    videos: Vec<Video>,
    by_id: HashMap<String, usize>,
}

impl VideoCatalog {
    pub fn new(mut videos: Vec<Video>) -> Self {
        videos.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
        let by_id = videos
            .iter()
            .enumerate()
            .map(|(i, v)| (v.id.clone(), i))
            .collect();
        Self { videos, by_id }
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Iterates the videos in title order.
    pub fn iter(&self) -> impl Iterator<Item = &Video> {
        self.videos.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Video> {
        self.by_id.get(id).map(|&i| &self.videos[i])
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Video> {
        self.by_id.get(id).map(|&i| &mut self.videos[i])
    }
}
