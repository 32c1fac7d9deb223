//! Page slots that may be empty.
//!
//! Viewers keep pages in `Option<Page>` slots (not yet loaded, already
//! evicted). [`PageSlot`] gives such a slot the page accessors with fixed
//! answers for the empty case, so callers never have to special-case it.

use crate::document::Document;
use crate::page::Page;
use folio_types::{BackendData, PageError, Result};
use std::sync::Arc;

/// Page accessors on an optional page.
///
/// | accessor          | empty slot |
/// |-------------------|------------|
/// | `index`           | `0`        |
/// | `width`/`height`  | `-1.0`     |
/// | `visibility`      | `false`    |
/// | `label_is_number` | `false`    |
/// | `document`/`data`/`label` | `None` |
///
/// Setters on an empty slot do nothing.
pub trait PageSlot {
    fn document(&self) -> Option<Arc<Document>>;
    fn index(&self) -> usize;
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn visibility(&self) -> bool;
    fn data(&self) -> Option<&BackendData>;
    fn label(&self) -> Option<&str>;
    fn label_is_number(&self) -> bool;
    fn set_width(&mut self, width: f64);
    fn set_height(&mut self, height: f64);
    fn set_visibility(&mut self, visible: bool);

    /// Destroy the page in the slot, leaving the slot empty.
    ///
    /// # Errors
    ///
    /// [`PageError::InvalidArguments`] for an empty slot, otherwise the result
    /// of [`Page::destroy`].
    fn destroy(&mut self) -> Result<()>;
}

impl PageSlot for Option<Page> {
    fn document(&self) -> Option<Arc<Document>> {
        self.as_ref().and_then(Page::document)
    }

    fn index(&self) -> usize {
        self.as_ref().map_or(0, Page::index)
    }

    fn width(&self) -> f64 {
        self.as_ref().map_or(-1.0, Page::width)
    }

    fn height(&self) -> f64 {
        self.as_ref().map_or(-1.0, Page::height)
    }

    fn visibility(&self) -> bool {
        self.as_ref().is_some_and(Page::visibility)
    }

    fn data(&self) -> Option<&BackendData> {
        self.as_ref().and_then(Page::data)
    }

    fn label(&self) -> Option<&str> {
        self.as_ref().and_then(|page| page.label().ok().flatten())
    }

    fn label_is_number(&self) -> bool {
        self.as_ref().is_some_and(Page::label_is_number)
    }

    fn set_width(&mut self, width: f64) {
        if let Some(page) = self {
            page.set_width(width);
        }
    }

    fn set_height(&mut self, height: f64) {
        if let Some(page) = self {
            page.set_height(height);
        }
    }

    fn set_visibility(&mut self, visible: bool) {
        if let Some(page) = self {
            page.set_visibility(visible);
        }
    }

    fn destroy(&mut self) -> Result<()> {
        match self.take() {
            Some(page) => page.destroy(),
            None => Err(PageError::invalid_arguments("no page to destroy")),
        }
    }
}
