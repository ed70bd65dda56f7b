use crate::config::SiteConfig;
use crate::content;
use dioxus::prelude::*;
use folio_common::{all_tags, filter_by_tags};
use folio_ui::{IllustrationGalleryView, TagFilterView};

#[component]
pub fn Home() -> Element {
    let config = use_hook(SiteConfig::load);
    let illustrations = use_hook(content::illustration_items);
    let featured = use_hook(content::featured_project_items);
    let mut selected_tags = use_signal(Vec::<String>::new);

    let tags = all_tags(&illustrations);
    let visible = filter_by_tags(&illustrations, &selected_tags.read());

    rsx! {
        div { class: "max-w-7xl mx-auto px-4 py-12",
            header { class: "mb-12",
                h1 { class: "text-4xl font-bold", "{config.title}" }
                if let Some(tagline) = &config.tagline {
                    p { class: "text-gray-500 mt-2", "{tagline}" }
                }
            }

            if !featured.is_empty() {
                section { class: "mb-16",
                    h2 { class: "text-2xl font-bold mb-6", "Featured projects" }
                    IllustrationGalleryView {
                        items: featured.clone(),
                        empty_message: "No featured projects yet.".to_string(),
                    }
                }
            }

            section {
                h2 { class: "text-2xl font-bold mb-6", "Illustrations" }
                if config.show_tag_filter {
                    TagFilterView {
                        tags,
                        selected: selected_tags(),
                        on_toggle: move |tag: String| {
                            let mut selected = selected_tags.write();
                            if let Some(pos) = selected.iter().position(|t| *t == tag) {
                                selected.remove(pos);
                            } else {
                                selected.push(tag);
                            }
                        },
                        on_clear: move |_| selected_tags.write().clear(),
                    }
                }
                IllustrationGalleryView { items: visible }
            }
        }
    }
}
