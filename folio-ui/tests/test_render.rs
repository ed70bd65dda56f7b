use dioxus::prelude::*;
use folio_common::GalleryItem;
use folio_ui::{GalleryLightbox, IllustrationGalleryView};

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn item(title: &str, description: Option<&str>) -> GalleryItem {
    GalleryItem {
        title: title.to_string(),
        image: format!("/images/{}.jpg", title.to_lowercase()),
        tags: vec!["ink".to_string(), "birds".to_string()],
        description: description.map(|d| d.to_string()),
    }
}

fn three_items() -> Vec<GalleryItem> {
    vec![item("A", None), item("B", Some("Ink on paper.")), item("C", None)]
}

#[test]
fn test_empty_gallery_shows_no_results() {
    fn app() -> Element {
        rsx! {
            IllustrationGalleryView { items: Vec::new() }
        }
    }

    let html = render(app);
    assert!(html.contains("No illustrations match your filters."));
    assert!(!html.contains("data-testid=\"gallery-tile\""));
    assert!(!html.contains("data-testid=\"lightbox\""));
}

#[test]
fn test_empty_gallery_custom_message() {
    fn app() -> Element {
        rsx! {
            IllustrationGalleryView { items: Vec::new(), empty_message: "Nothing here yet.".to_string() }
        }
    }

    assert!(render(app).contains("Nothing here yet."));
}

#[test]
fn test_grid_renders_one_tile_per_item_with_lightbox_closed() {
    fn app() -> Element {
        rsx! {
            IllustrationGalleryView { items: three_items() }
        }
    }

    let html = render(app);
    assert_eq!(html.matches("data-testid=\"gallery-tile\"").count(), 3);
    for src in ["/images/a.jpg", "/images/b.jpg", "/images/c.jpg"] {
        assert!(html.contains(src), "missing tile image {src}");
    }
    assert!(html.contains("draggable=\"false\""));
    assert!(!html.contains("data-testid=\"lightbox\""));
    assert!(!html.contains("No illustrations match"));
}

#[test]
fn test_lightbox_shows_item_counter_and_controls() {
    fn app() -> Element {
        let items = three_items();
        rsx! {
            GalleryLightbox {
                item: items[1].clone(),
                index: 1,
                total: items.len(),
                on_click: move |_| {},
            }
        }
    }

    let html = render(app);
    assert!(html.contains("data-testid=\"lightbox\""));
    assert!(html.contains("2 of 3"));
    assert!(html.contains("Ink on paper."));
    assert!(html.contains("/images/b.jpg"));
    assert!(html.contains(">birds<"));
    assert!(html.contains("draggable=\"false\""));
    for label in ["Close", "Previous image", "Next image"] {
        assert!(
            html.contains(&format!("aria-label=\"{label}\"")),
            "missing control {label}"
        );
    }
}

#[test]
fn test_lightbox_without_description_omits_it() {
    fn app() -> Element {
        rsx! {
            GalleryLightbox {
                item: item("A", None),
                index: 0,
                total: 1,
                on_click: move |_| {},
            }
        }
    }

    let html = render(app);
    assert!(html.contains("1 of 1"));
    assert!(!html.contains("leading-relaxed"));
}
