//! WASM utilities for browser interop
//!
//! # Scoped Key Listener
//!
//! A `keydown` listener on the document needs its `Closure` kept alive for as
//! long as it is attached. `closure.forget()` would leak it and leave the
//! listener attached forever, so the closure is owned by a guard whose `Drop`
//! removes the listener:
//!
//! ```ignore
//! // Attached when created
//! let listener = DocumentKeyListener::new(document, move |key| { /* ... */ });
//!
//! // Detached when dropped
//! drop(listener);
//! ```
//!
//! Stored in a `Signal<Option<DocumentKeyListener>>`, setting the signal to
//! `None` detaches the listener.

use folio_common::LightboxKey;
use wasm_bindgen_x::prelude::*;

/// A document `keydown` listener for the lightbox keys, removed on drop.
///
/// Keys it recognizes have their default action prevented so arrow keys don't
/// scroll the page behind the overlay. Other keys pass through untouched.
pub struct DocumentKeyListener {
    document: web_sys_x::Document,
    callback: Closure<dyn FnMut(web_sys_x::KeyboardEvent)>,
}

impl DocumentKeyListener {
    const EVENT_NAME: &'static str = "keydown";

    pub fn new(document: web_sys_x::Document, mut on_key: impl FnMut(LightboxKey) + 'static) -> Self {
        let callback: Closure<dyn FnMut(web_sys_x::KeyboardEvent)> =
            Closure::wrap(Box::new(move |event: web_sys_x::KeyboardEvent| {
                if let Some(key) = LightboxKey::from_key_name(&event.key()) {
                    event.prevent_default();
                    on_key(key);
                }
            }));

        document
            .add_event_listener_with_callback(Self::EVENT_NAME, callback.as_ref().unchecked_ref())
            .ok();
        tracing::debug!("Attached lightbox key listener");

        Self { document, callback }
    }
}

impl Drop for DocumentKeyListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            Self::EVENT_NAME,
            self.callback.as_ref().unchecked_ref(),
        );
        tracing::debug!("Detached lightbox key listener");
    }
}
