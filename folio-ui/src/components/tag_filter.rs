//! Tag filter chips - pure view with callbacks

use dioxus::prelude::*;

/// Row of toggleable tag chips
///
/// The parent owns the selected tags and filters the gallery items itself.
#[component]
pub fn TagFilterView(
    tags: Vec<String>,
    selected: Vec<String>,
    on_toggle: EventHandler<String>,
    on_clear: EventHandler<()>,
) -> Element {
    if tags.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "flex flex-wrap items-center gap-2 mb-8",
            for tag in tags {
                {
                    let is_selected = selected.contains(&tag);
                    let chip_class = if is_selected {
                        "bg-black text-white"
                    } else {
                        "bg-gray-100 text-gray-700 hover:bg-gray-200"
                    };
                    let pressed = if is_selected { "true" } else { "false" };
                    rsx! {
                        button {
                            key: "{tag}",
                            class: "px-3 py-1 text-sm rounded-full transition-colors {chip_class}",
                            "aria-pressed": pressed,
                            onclick: {
                                let tag = tag.clone();
                                move |_| on_toggle.call(tag.clone())
                            },
                            "{tag}"
                        }
                    }
                }
            }
            if !selected.is_empty() {
                button {
                    class: "px-3 py-1 text-sm text-gray-500 hover:text-black underline",
                    onclick: move |_| on_clear.call(()),
                    "Clear"
                }
            }
        }
    }
}
