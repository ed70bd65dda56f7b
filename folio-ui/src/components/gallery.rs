//! Gallery grid with lightbox
//!
//! Owns the selection for its items. While the lightbox is open a document
//! `keydown` listener is held in a signal; closing the lightbox, replacing the
//! item list or unmounting the gallery drops it, which detaches it.

use crate::components::icons::{Icon, IconShape};
use crate::components::lightbox::GalleryLightbox;
use crate::wasm_utils::DocumentKeyListener;
use dioxus::prelude::*;
use folio_common::{GalleryItem, LightboxState};

/// Responsive grid of gallery items with a lightbox viewer
#[component]
pub fn IllustrationGalleryView(
    items: Vec<GalleryItem>,
    #[props(default = "No illustrations match your filters.".to_string())] empty_message: String,
) -> Element {
    let mut lightbox = use_signal(LightboxState::new);
    let mut last_items = use_signal(|| items.clone());
    let mut key_listener: Signal<Option<DocumentKeyListener>> = use_signal(|| None);

    // A different item list (e.g. the tag filter changed) resets to the grid
    if *last_items.peek() != items {
        let current = *lightbox.peek();
        let synced = current.after_items_change(last_items.peek().as_slice(), items.as_slice());
        last_items.set(items.clone());
        if synced != current {
            lightbox.set(synced);
        }
    }

    // Only re-run the listener effect on open/close, not on every navigation
    let is_open = use_memo(move || lightbox().is_open());

    use_effect(move || {
        if !is_open() {
            // Dropping the listener detaches it
            key_listener.set(None);
            return;
        }

        let Some(document) = web_sys_x::window().and_then(|w| w.document()) else {
            return;
        };

        let listener = DocumentKeyListener::new(document, move |key| {
            let len = last_items.peek().len();
            lightbox.write().handle_key(key, len);
        });
        key_listener.set(Some(listener));
    });

    use_drop(move || {
        if let Ok(mut guard) = key_listener.try_write() {
            guard.take();
        }
    });

    if items.is_empty() {
        return rsx! {
            div { class: "text-center py-12",
                div { class: "text-gray-400 mb-4",
                    Icon { shape: IconShape::Image, class: "w-16 h-16 mx-auto" }
                }
                p { class: "text-gray-500 text-lg", "{empty_message}" }
            }
        };
    }

    let total = items.len();
    let mut state = lightbox();
    state.clamp_to(total);

    rsx! {
        div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
            for (index , item) in items.iter().enumerate() {
                button {
                    key: "{index}",
                    class: "group cursor-pointer focus:outline-none focus:ring-2 focus:ring-black rounded-lg",
                    "data-testid": "gallery-tile",
                    onclick: move |_| lightbox.write().open(index, total),
                    div { class: "bg-white rounded-lg shadow-md overflow-hidden hover:shadow-xl transition-all duration-300 transform hover:-translate-y-1",
                        div { class: "aspect-[3/4] bg-gray-200 overflow-hidden select-none",
                            img {
                                src: "{item.image}",
                                alt: "{item.title}",
                                class: "w-full h-full object-cover group-hover:scale-105 transition-transform duration-300 pointer-events-none",
                                "loading": "lazy",
                                draggable: "false",
                                oncontextmenu: move |evt| evt.prevent_default(),
                            }
                        }
                        div { class: "p-4",
                            h3 { class: "font-bold text-left group-hover:text-gray-600 transition-colors",
                                {item.title.clone()}
                            }
                        }
                    }
                }
            }
        }

        if let Some(index) = state.selected() {
            GalleryLightbox {
                item: items[index].clone(),
                index,
                total,
                on_click: move |target| lightbox.write().handle_click(target, total),
            }
        }
    }
}
