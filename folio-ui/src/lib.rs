//! folio-ui - View components for the folio portfolio site
//!
//! Pure view components over `folio-common` types. The only browser interop is
//! the scoped keyboard listener the lightbox holds while it is open.

pub mod components;
pub mod wasm_utils;

pub use components::*;
