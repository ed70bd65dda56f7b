use tracing::debug;

/// Index after `current` in a list of `len` items, wrapping to the first.
///
/// `len` must be non-zero and `current` a valid index.
pub fn next_index(current: usize, len: usize) -> usize {
    if current + 1 >= len {
        0
    } else {
        current + 1
    }
}

/// Index before `current` in a list of `len` items, wrapping to the last.
///
/// `len` must be non-zero and `current` a valid index.
pub fn previous_index(current: usize, len: usize) -> usize {
    if current == 0 {
        len - 1
    } else {
        current - 1
    }
}

/// Position counter shown in the lightbox info panel, e.g. "2 of 5".
pub fn counter_label(index: usize, total: usize) -> String {
    format!("{} of {}", index + 1, total)
}

/// Keys the lightbox responds to while open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl LightboxKey {
    /// Map a DOM `KeyboardEvent.key` value. Anything else is left to the browser.
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(LightboxKey::Escape),
            "ArrowLeft" => Some(LightboxKey::ArrowLeft),
            "ArrowRight" => Some(LightboxKey::ArrowRight),
            _ => None,
        }
    }
}

/// Regions of the open lightbox that react to a click
///
/// Only `Backdrop` and `Close` dismiss. Clicks on `Content` (image pane or info
/// panel) stop there and leave the selection alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxTarget {
    Backdrop,
    Close,
    Previous,
    Next,
    Content,
}

/// Selection state of a gallery: `None` shows the grid, `Some(i)` shows item `i`
/// in the lightbox.
///
/// Pure data, no I/O. The item count is passed to each transition instead of
/// being stored so the state can't drift from the list it indexes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LightboxState {
    selected: Option<usize>,
}

impl LightboxState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Open the lightbox on `index`. Ignored when `index` is out of range,
    /// which makes opening impossible on an empty list.
    pub fn open(&mut self, index: usize, len: usize) {
        if index >= len {
            debug!("Ignoring lightbox open at {index} for {len} items");
            return;
        }
        debug!("Opening lightbox at {index}");
        self.selected = Some(index);
    }

    pub fn close(&mut self) {
        if self.selected.take().is_some() {
            debug!("Closing lightbox");
        }
    }

    /// Advance to the next item, wrapping. No-op while closed.
    pub fn next(&mut self, len: usize) {
        if let Some(current) = self.selected {
            if len > 0 {
                self.selected = Some(next_index(current.min(len - 1), len));
            }
        }
    }

    /// Step back to the previous item, wrapping. No-op while closed.
    pub fn previous(&mut self, len: usize) {
        if let Some(current) = self.selected {
            if len > 0 {
                self.selected = Some(previous_index(current.min(len - 1), len));
            }
        }
    }

    pub fn handle_key(&mut self, key: LightboxKey, len: usize) {
        match key {
            LightboxKey::Escape => self.close(),
            LightboxKey::ArrowLeft => self.previous(len),
            LightboxKey::ArrowRight => self.next(len),
        }
    }

    pub fn handle_click(&mut self, target: LightboxTarget, len: usize) {
        match target {
            LightboxTarget::Backdrop | LightboxTarget::Close => self.close(),
            LightboxTarget::Previous => self.previous(len),
            LightboxTarget::Next => self.next(len),
            LightboxTarget::Content => {}
        }
    }

    /// Selection to keep when the gallery's items go from `previous` to
    /// `current`: unchanged lists keep it, any other list returns to the grid.
    pub fn after_items_change<T: PartialEq>(self, previous: &[T], current: &[T]) -> Self {
        if previous == current {
            self
        } else {
            if self.is_open() {
                debug!("Item list changed, closing lightbox");
            }
            Self::default()
        }
    }

    /// Drop a selection that no longer points into a list of `len` items.
    pub fn clamp_to(&mut self, len: usize) {
        if matches!(self.selected, Some(index) if index >= len) {
            debug!("Selection no longer valid for {len} items, closing lightbox");
            self.selected = None;
        }
    }
}
