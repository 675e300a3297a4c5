//! Catalog search: title substring and exact tag matching.
//!
//! Both searches skip flagged videos and return matches in catalog
//! (title) order; numbering and the interactive follow-up belong to the
//! shell layer.

use crate::catalog::{Video, VideoCatalog};

/// Videos whose title contains `term`, case-insensitively.
pub fn by_title<'a>(catalog: &'a VideoCatalog, term: &str) -> Vec<&'a Video> {
    let needle = term.to_uppercase();
    catalog
        .iter()
        .filter(|v| !v.is_flagged() && v.title().to_uppercase().contains(&needle))
        .collect()
}

/// Videos carrying exactly the tag `tag`, case-insensitively.
pub fn by_tag<'a>(catalog: &'a VideoCatalog, tag: &str) -> Vec<&'a Video> {
    let needle = tag.to_uppercase();
    catalog
        .iter()
        .filter(|v| !v.is_flagged() && v.tags().iter().any(|t| t.to_uppercase() == needle))
        .collect()
}
