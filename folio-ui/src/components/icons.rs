//! Icons from the Lucide set (https://lucide.dev)
//!
//! One `Icon` component draws every shape with stroke="currentColor", so color
//! comes from Tailwind text classes. Default size is w-4 h-4, override with `class`.

use dioxus::prelude::*;

/// Shapes the gallery draws
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconShape {
    ChevronLeft,
    ChevronRight,
    Close,
    /// Picture frame, used by the empty gallery
    Image,
}

#[component]
pub fn Icon(
    shape: IconShape,
    #[props(default = "w-4 h-4")] class: &'static str,
    #[props(default = "2")] stroke_width: &'static str,
) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "{stroke_width}",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            match shape {
                IconShape::ChevronLeft => rsx! {
                    path { d: "m15 18-6-6 6-6" }
                },
                IconShape::ChevronRight => rsx! {
                    path { d: "m9 18 6-6-6-6" }
                },
                IconShape::Close => rsx! {
                    path { d: "M18 6 6 18" }
                    path { d: "m6 6 12 12" }
                },
                IconShape::Image => rsx! {
                    rect {
                        x: "3",
                        y: "3",
                        width: "18",
                        height: "18",
                        rx: "2",
                        ry: "2",
                    }
                    circle { cx: "9", cy: "9", r: "2" }
                    path { d: "m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21" }
                },
            }
        }
    }
}
