//! Gallery lightbox component
//!
//! Full-screen overlay showing one item with an info panel. Pure view: the
//! owning gallery holds the selection and the keyboard listener.

use crate::components::icons::{Icon, IconShape};
use dioxus::prelude::*;
use folio_common::{counter_label, GalleryItem, LightboxTarget};

/// Lightbox overlay for a single gallery item
///
/// Every click is reported with the region it landed on. Clicks on the
/// controls and the content stop propagating so they never reach the backdrop.
#[component]
pub fn GalleryLightbox(
    item: GalleryItem,
    /// Zero-based position of `item`
    index: usize,
    total: usize,
    on_click: EventHandler<LightboxTarget>,
) -> Element {
    let counter = counter_label(index, total);

    rsx! {
        div {
            class: "fixed inset-0 bg-black/95 z-50 flex items-center justify-center p-4 animate-fade-in",
            "data-testid": "lightbox",
            onclick: move |_| on_click.call(LightboxTarget::Backdrop),

            button {
                class: "absolute top-4 right-4 text-white hover:text-gray-300 w-12 h-12 flex items-center justify-center z-10",
                aria_label: "Close",
                onclick: move |evt| {
                    evt.stop_propagation();
                    on_click.call(LightboxTarget::Close);
                },
                Icon { shape: IconShape::Close, class: "w-8 h-8" }
            }

            button {
                class: "absolute left-4 top-1/2 -translate-y-1/2 text-white hover:text-gray-300 w-16 h-16 flex items-center justify-center z-10 hover:bg-white/10 rounded-full transition-all",
                aria_label: "Previous image",
                onclick: move |evt| {
                    evt.stop_propagation();
                    on_click.call(LightboxTarget::Previous);
                },
                Icon {
                    shape: IconShape::ChevronLeft,
                    class: "w-10 h-10",
                    stroke_width: "1.5",
                }
            }

            button {
                class: "absolute right-4 top-1/2 -translate-y-1/2 text-white hover:text-gray-300 w-16 h-16 flex items-center justify-center z-10 hover:bg-white/10 rounded-full transition-all",
                aria_label: "Next image",
                onclick: move |evt| {
                    evt.stop_propagation();
                    on_click.call(LightboxTarget::Next);
                },
                Icon {
                    shape: IconShape::ChevronRight,
                    class: "w-10 h-10",
                    stroke_width: "1.5",
                }
            }

            div {
                class: "max-w-7xl w-full max-h-[90vh] flex flex-col md:flex-row gap-6",
                onclick: move |evt| {
                    evt.stop_propagation();
                    on_click.call(LightboxTarget::Content);
                },

                // Image pane
                div { class: "flex-1 flex items-center justify-center select-none",
                    img {
                        src: "{item.image}",
                        alt: "{item.title}",
                        class: "max-w-full max-h-[80vh] object-contain rounded-lg shadow-2xl pointer-events-none",
                        draggable: "false",
                        oncontextmenu: move |evt| evt.prevent_default(),
                    }
                }

                // Info panel
                div { class: "md:w-96 bg-white rounded-lg p-6 overflow-y-auto max-h-[80vh]",
                    h2 { class: "text-2xl font-bold mb-4", {item.title.clone()} }

                    if let Some(description) = &item.description {
                        div { class: "mb-6",
                            p { class: "text-gray-700 leading-relaxed", {description.clone()} }
                        }
                    }

                    div { class: "mb-6",
                        h3 { class: "font-bold text-sm text-gray-500 uppercase mb-2", "Tags" }
                        div { class: "flex flex-wrap gap-2",
                            for (i , tag) in item.tags.iter().enumerate() {
                                span {
                                    key: "{i}",
                                    class: "px-3 py-1 bg-gray-100 text-gray-700 text-sm rounded-full",
                                    {tag.clone()}
                                }
                            }
                        }
                    }

                    div { class: "pt-4 border-t border-gray-200",
                        p { class: "text-sm text-gray-500", "{counter}" }
                        p { class: "text-xs text-gray-400 mt-2", "Use arrow keys or buttons to navigate" }
                    }
                }
            }
        }
    }
}
