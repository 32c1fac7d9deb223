//! Page entity and its lifecycle

use crate::document::Document;
use crate::label::is_page_number;
use folio_types::{BackendData, PageError, Result};
use std::sync::{Arc, Weak};

/// One page of an open document.
///
/// The page owns its format-independent metadata and the backend's opaque
/// page state. It is created with [`Page::new`] (or [`Document::page`]) and
/// torn down with [`Page::destroy`]; a page that is simply dropped goes
/// through the same teardown.
#[derive(Debug)]
pub struct Page {
    document: Weak<Document>,
    data: Option<BackendData>,
    label: Option<String>,
    width: f64,
    height: f64,
    index: usize,
    visible: bool,
    label_is_number: bool,
    released: bool,
}

impl Page {
    /// Create the page at `index` (0-based) of `document`.
    ///
    /// Runs the backend's page initialization and, when the backend provides
    /// labels, fetches the page label. Construction is all-or-nothing: if
    /// either step fails, the half-built page is destroyed (the backend's
    /// clear capability runs once) and the backend's error is returned.
    ///
    /// # Errors
    ///
    /// * [`PageError::InvalidArguments`] if the document is gone
    /// * whatever the backend's init or label capability reports
    pub fn new(document: &Weak<Document>, index: usize) -> Result<Page> {
        let doc = document
            .upgrade()
            .ok_or_else(|| PageError::invalid_arguments("cannot create a page without a document"))?;
        let functions = doc.functions();

        let mut page = Page {
            document: document.clone(),
            data: None,
            label: None,
            width: 0.0,
            height: 0.0,
            index,
            visible: false,
            label_is_number: false,
            released: false,
        };

        let data = match (functions.init)(&mut page) {
            Ok(data) => data,
            Err(e) => return Err(page.discard(e)),
        };

        let label = match functions.label.as_ref() {
            Some(get_label) => get_label(&page, &data),
            None => Ok(None),
        };
        page.data = Some(data);

        match label {
            Ok(label) => {
                page.label_is_number = label
                    .as_deref()
                    .is_some_and(|label| is_page_number(label, index));
                page.label = label;
            }
            Err(e) => return Err(page.discard(e)),
        }

        log::debug!(
            "page {} created ({}x{}, label {:?})",
            index,
            page.width,
            page.height,
            page.label
        );
        Ok(page)
    }

    /// Destroy the page.
    ///
    /// Hands the backend state to the backend's clear capability and releases
    /// the page. The page is gone whatever the outcome; the result only
    /// reports what the backend said.
    ///
    /// # Errors
    ///
    /// * [`PageError::InvalidArguments`] if the document was torn down first
    ///   (the page is still released, without calling the backend)
    /// * whatever the backend's clear capability reports
    pub fn destroy(mut self) -> Result<()> {
        self.release()
    }

    /// Tear down a page whose construction failed, returning the construction error.
    fn discard(mut self, error: PageError) -> PageError {
        log::debug!("page {} construction failed: {}", self.index, error);
        if let Err(e) = self.release() {
            log::debug!("page {} teardown after failed construction: {}", self.index, e);
        }
        error
    }

    fn release(&mut self) -> Result<()> {
        if self.released {
            return Ok(());
        }
        self.released = true;

        let data = self.data.take();
        let Some(document) = self.document.upgrade() else {
            log::warn!("page {} released after its document was torn down", self.index);
            self.label = None;
            return Err(PageError::invalid_arguments("page is not bound to a document"));
        };

        let result = (document.functions().clear)(self, data);
        self.label = None;

        if let Err(e) = &result {
            log::warn!("backend failed to clear page {}: {}", self.index, e);
        } else {
            log::debug!("page {} destroyed", self.index);
        }
        result
    }

    /// Owning document, if it is still open.
    pub fn document(&self) -> Option<Arc<Document>> {
        self.document.upgrade()
    }

    /// Zero-based position of the page in the document.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Page width in backend units.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Set the page width.
    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    /// Page height in backend units.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Set the page height.
    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    /// Whether the viewer currently shows the page.
    pub fn visibility(&self) -> bool {
        self.visible
    }

    /// Mark the page as shown or hidden.
    pub fn set_visibility(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Backend page state. `None` only while the page is being built.
    pub fn data(&self) -> Option<&BackendData> {
        self.data.as_ref()
    }

    /// Whether the page label equals the 1-based page number.
    pub fn label_is_number(&self) -> bool {
        self.label_is_number
    }

    pub(crate) fn stored_label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        log::warn!("page {} dropped without destroy", self.index);
        // failures are already logged by release
        let _ = self.release();
    }
}
