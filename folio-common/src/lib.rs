mod content;
mod gallery_item;
mod lightbox;

pub use content::{
    featured_projects, parse_entry, sort_newest_first, split_frontmatter, Collection,
    ContentError, Dated, Entry, Illustration, Project,
};
pub use gallery_item::{all_tags, filter_by_tags, GalleryItem};
pub use lightbox::{
    counter_label, next_index, previous_index, LightboxKey, LightboxState, LightboxTarget,
};
