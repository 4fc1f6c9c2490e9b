//! Lightbox selection state machine.
//!
//! Two states: closed, or open on an index. `open` is the only way in and
//! `close` the only way out; `next` and `previous` move around the gallery
//! circularly while open and do nothing while closed.

use serde::{Deserialize, Serialize};

/// Snapshot of the lightbox selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "index", rename_all = "lowercase")]
pub enum GallerySelection {
    Closed,
    Open(usize),
}

impl GallerySelection {
    pub fn index(&self) -> Option<usize> {
        match self {
            GallerySelection::Closed => None,
            GallerySelection::Open(index) => Some(*index),
        }
    }
}

/// Tracks which gallery item, if any, is shown full-size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryNavigator {
    len: usize,
    current: Option<usize>,
}

impl GalleryNavigator {
    /// Create a closed navigator over `len` items.
    pub fn new(len: usize) -> Self {
        Self { len, current: None }
    }

    /// Show the item at `index`, re-targeting if already open.
    ///
    /// Out-of-range indices are ignored. Returns whether the selection changed
    /// to `index`.
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.len {
            tracing::warn!(index, len = self.len, "ignoring out-of-range gallery index");
            return false;
        }
        self.current = Some(index);
        tracing::debug!(index, "lightbox opened");
        true
    }

    /// Close the lightbox. No-op when already closed.
    pub fn close(&mut self) {
        if self.current.take().is_some() {
            tracing::debug!("lightbox closed");
        }
    }

    /// Advance one item, wrapping from last to first.
    pub fn next(&mut self) -> Option<usize> {
        let index = self.current?;
        let next = (index + 1) % self.len;
        self.current = Some(next);
        Some(next)
    }

    /// Step back one item, wrapping from first to last.
    pub fn previous(&mut self) -> Option<usize> {
        let index = self.current?;
        let previous = (index + self.len - 1) % self.len;
        self.current = Some(previous);
        Some(previous)
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Current index, if open.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn selection(&self) -> GallerySelection {
        match self.current {
            Some(index) => GallerySelection::Open(index),
            None => GallerySelection::Closed,
        }
    }

    /// Number of items in the gallery.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
