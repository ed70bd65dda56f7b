//! Shared UI components

pub mod gallery;
pub mod icons;
pub mod lightbox;
pub mod tag_filter;

pub use gallery::IllustrationGalleryView;
pub use icons::{Icon, IconShape};
pub use lightbox::GalleryLightbox;
pub use tag_filter::TagFilterView;
