//! Site content bundled into the binary
//!
//! Entries that fail schema validation are logged and skipped; `folio-check`
//! is what rejects them before a deploy.

use folio_common::{
    featured_projects, parse_entry, sort_newest_first, Entry, GalleryItem, Illustration, Project,
};
use serde::de::DeserializeOwned;
use tracing::{error, info};

const ILLUSTRATIONS: &[(&str, &str)] = &[
    ("crows-on-a-wire", include_str!("../content/illustrations/crows-on-a-wire.md")),
    ("harbor-at-dusk", include_str!("../content/illustrations/harbor-at-dusk.md")),
    ("night-market", include_str!("../content/illustrations/night-market.md")),
    ("owl-study", include_str!("../content/illustrations/owl-study.md")),
    ("the-lighthouse-keeper", include_str!("../content/illustrations/the-lighthouse-keeper.md")),
    ("winter-allotment", include_str!("../content/illustrations/winter-allotment.md")),
];

const PROJECTS: &[(&str, &str)] = &[
    ("city-birds-field-guide", include_str!("../content/projects/city-birds-field-guide.md")),
    ("market-posters", include_str!("../content/projects/market-posters.md")),
    ("the-quiet-tide", include_str!("../content/projects/the-quiet-tide.md")),
];

fn parse_all<T: DeserializeOwned>(collection: &str, sources: &[(&str, &str)]) -> Vec<Entry<T>> {
    let entries: Vec<Entry<T>> = sources
        .iter()
        .filter_map(|(slug, source)| match parse_entry(slug, source) {
            Ok(entry) => Some(entry),
            Err(e) => {
                error!("Skipping {collection}/{slug}: {e}");
                None
            }
        })
        .collect();
    info!("Loaded {} {collection} entries", entries.len());
    entries
}

/// Illustrations as gallery items, newest first
pub fn illustration_items() -> Vec<GalleryItem> {
    let mut entries = parse_all::<Illustration>("illustrations", ILLUSTRATIONS);
    sort_newest_first(&mut entries);
    entries.iter().map(|entry| GalleryItem::from(&entry.data)).collect()
}

/// Featured projects as gallery items, newest first
pub fn featured_project_items() -> Vec<GalleryItem> {
    let mut entries = parse_all::<Project>("projects", PROJECTS);
    sort_newest_first(&mut entries);
    featured_projects(&entries)
        .into_iter()
        .map(|entry| GalleryItem::from(&entry.data))
        .collect()
}
