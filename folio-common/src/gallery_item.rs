use std::collections::BTreeSet;

use crate::content::{Illustration, Project};

/// One displayable gallery record. The gallery never mutates items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryItem {
    pub title: String,
    /// Image URL or site-relative path
    pub image: String,
    pub tags: Vec<String>,
    pub description: Option<String>,
}

impl From<&Illustration> for GalleryItem {
    fn from(illustration: &Illustration) -> Self {
        Self {
            title: illustration.title.clone(),
            image: illustration.image.clone(),
            tags: illustration.tags.clone(),
            description: illustration.description.clone(),
        }
    }
}

impl From<&Project> for GalleryItem {
    fn from(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            image: project.cover_image.clone(),
            tags: project.tags.clone(),
            description: Some(project.description.clone()),
        }
    }
}

/// Every tag used by `items`, sorted and de-duplicated.
pub fn all_tags(items: &[GalleryItem]) -> Vec<String> {
    items
        .iter()
        .flat_map(|item| item.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Items carrying every tag in `selected`. An empty selection keeps all items.
pub fn filter_by_tags(items: &[GalleryItem], selected: &[String]) -> Vec<GalleryItem> {
    items
        .iter()
        .filter(|item| selected.iter().all(|tag| item.tags.contains(tag)))
        .cloned()
        .collect()
}
