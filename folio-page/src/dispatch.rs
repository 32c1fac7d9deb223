//! Content operations dispatched to the backend.
//!
//! Every operation follows the same steps: check that the page is still bound
//! to its document and holds backend state, look the capability up in the
//! plugin's table, then call the backend with the page, its state and the
//! operation's arguments. A missing capability yields
//! [`PageError::NotImplemented`] without calling the backend; anything the
//! backend returns is passed through untouched.
//!
//! Returned values belong to the caller and release their resources (including
//! backend state attached to images) when dropped.
//!
//! # Example
//!
//! ```
//! use folio_page::{Document, Plugin, PluginFunctions};
//! use folio_types::{BackendData, ErrorCode, Rectangle};
//! use std::sync::Arc;
//!
//! let functions = PluginFunctions::new(
//!     |_page| Ok(BackendData::new(String::from("Hello, world"))),
//!     |_page, _data| Ok(()),
//!     |_page, _data, _surface, _printing| Ok(()),
//! )
//! .with_text(|_page, data, _region| {
//!     Ok(data.downcast_ref::<String>().cloned().unwrap_or_default())
//! });
//!
//! let document = Document::new(Arc::new(Plugin::new("plain", functions)));
//! let page = document.page(0)?;
//!
//! assert_eq!(page.text(Rectangle::new(0.0, 0.0, 100.0, 20.0))?, "Hello, world");
//! assert_eq!(ErrorCode::of(&page.links()), ErrorCode::NotImplemented);
//! # Ok::<(), folio_types::PageError>(())
//! ```

use crate::document::Document;
use crate::page::Page;
use folio_types::{
    BackendData, FormField, Link, Operation, PageError, PageImage, Rectangle, Result, Signature,
    Surface,
};
use std::sync::Arc;

fn require<F: ?Sized>(operation: Operation, capability: Option<&F>) -> Result<&F> {
    capability.ok_or_else(|| {
        log::trace!("backend does not implement {}", operation);
        PageError::not_implemented(operation)
    })
}

impl Page {
    /// Validate the page for `operation`, returning its document and backend state.
    fn bind(&self, operation: Operation) -> Result<(Arc<Document>, &BackendData)> {
        let document = self.document().ok_or_else(|| {
            PageError::invalid_arguments(format!("{operation}: page is not bound to a document"))
        })?;
        let data = self.data().ok_or_else(|| {
            PageError::invalid_arguments(format!("{operation}: page has no backend data"))
        })?;
        log::trace!("page {}: {}", self.index(), operation);
        Ok((document, data))
    }

    /// Check whether the page's backend implements `operation`.
    ///
    /// Always false once the document is gone.
    pub fn supports(&self, operation: Operation) -> bool {
        self.document()
            .is_some_and(|document| document.functions().supports(operation))
    }

    /// Search the page for `text`, returning the matching areas.
    pub fn search_text(&self, text: &str) -> Result<Vec<Rectangle>> {
        let (document, data) = self.bind(Operation::SearchText)?;
        let search = require(
            Operation::SearchText,
            document.functions().search_text.as_deref(),
        )?;
        search(self, data, text)
    }

    /// Links on the page.
    pub fn links(&self) -> Result<Vec<Link>> {
        let (document, data) = self.bind(Operation::Links)?;
        let links = require(Operation::Links, document.functions().links.as_deref())?;
        links(self, data)
    }

    /// Form fields on the page.
    pub fn form_fields(&self) -> Result<Vec<FormField>> {
        let (document, data) = self.bind(Operation::FormFields)?;
        let form_fields = require(
            Operation::FormFields,
            document.functions().form_fields.as_deref(),
        )?;
        form_fields(self, data)
    }

    /// Images placed on the page.
    pub fn images(&self) -> Result<Vec<PageImage>> {
        let (document, data) = self.bind(Operation::Images)?;
        let images = require(Operation::Images, document.functions().images.as_deref())?;
        images(self, data)
    }

    /// Convert an image returned by [`Page::images`] into a surface.
    pub fn image_surface(&self, image: &PageImage) -> Result<Surface> {
        let (document, data) = self.bind(Operation::ImageSurface)?;
        let image_surface = require(
            Operation::ImageSurface,
            document.functions().image_surface.as_deref(),
        )?;
        image_surface(self, data, image)
    }

    /// Text inside `region`.
    pub fn text(&self, region: Rectangle) -> Result<String> {
        let (document, data) = self.bind(Operation::Text)?;
        let text = require(Operation::Text, document.functions().text.as_deref())?;
        text(self, data, region)
    }

    /// Selection rectangles covering the content inside `region`.
    pub fn selection(&self, region: Rectangle) -> Result<Vec<Rectangle>> {
        let (document, data) = self.bind(Operation::Selection)?;
        let selection = require(
            Operation::Selection,
            document.functions().selection.as_deref(),
        )?;
        selection(self, data, region)
    }

    /// Render the page onto `surface`.
    ///
    /// Rendering is mandatory for every backend, so this never reports
    /// [`PageError::NotImplemented`] on its own.
    pub fn render(&self, surface: &mut Surface, printing: bool) -> Result<()> {
        let (document, data) = self.bind(Operation::Render)?;
        (document.functions().render)(self, data, surface, printing)
    }

    /// Digital signatures on the page.
    pub fn signatures(&self) -> Result<Vec<Signature>> {
        let (document, data) = self.bind(Operation::Signatures)?;
        let signatures = require(
            Operation::Signatures,
            document.functions().signatures.as_deref(),
        )?;
        signatures(self, data)
    }
}
