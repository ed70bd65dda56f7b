//! folio - illustration portfolio site
//!
//! Single page: featured projects and a filterable illustrations gallery, both
//! rendered from content bundled at build time.

mod config;
mod content;
mod pages;

use dioxus::prelude::*;
use pages::Home;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen bg-gray-50", Home {} }
    }
}

fn main() {
    dioxus::launch(App);
}
