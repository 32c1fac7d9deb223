//! Backend plugins and their capability tables.
//!
//! A format backend describes what it can do with a [`PluginFunctions`]
//! table. Page initialization, teardown and rendering are mandatory and are
//! passed to [`PluginFunctions::new`]; every other operation is an optional
//! slot filled through the `with_*` builder methods. An empty slot means the
//! backend does not support the operation, and the page core answers with
//! [`PageError::NotImplemented`](folio_types::PageError::NotImplemented)
//! without calling into the backend.
//!
//! # Example
//!
//! ```
//! use folio_page::{Plugin, PluginFunctions};
//! use folio_types::{BackendData, Operation};
//!
//! struct RasterPage {
//!     pixels: Vec<u8>,
//! }
//!
//! let functions = PluginFunctions::new(
//!     |page| {
//!         page.set_width(612.0);
//!         page.set_height(792.0);
//!         Ok(BackendData::new(RasterPage { pixels: Vec::new() }))
//!     },
//!     |_page, _data| Ok(()),
//!     |_page, _data, _surface, _printing| Ok(()),
//! )
//! .with_text(|_page, _data, _region| Ok(String::new()));
//!
//! let plugin = Plugin::new("raster", functions).with_mime_type("image/png");
//! assert!(plugin.functions().supports(Operation::Text));
//! assert!(!plugin.functions().supports(Operation::Links));
//! ```

use crate::page::Page;
use folio_types::{
    BackendData, FormField, Link, Operation, PageImage, Rectangle, Result, Signature, Surface,
};
use std::fmt;

/// Populates a freshly allocated page and returns the backend's page state.
pub type PageInitFn = Box<dyn Fn(&mut Page) -> Result<BackendData> + Send + Sync>;
/// Releases the backend's page state. `None` when initialization failed.
pub type PageClearFn = Box<dyn Fn(&Page, Option<BackendData>) -> Result<()> + Send + Sync>;
/// Renders the page onto a surface; the flag is set when printing.
pub type PageRenderFn =
    Box<dyn Fn(&Page, &BackendData, &mut Surface, bool) -> Result<()> + Send + Sync>;
/// Returns the page label, if the document defines one.
pub type PageLabelFn = Box<dyn Fn(&Page, &BackendData) -> Result<Option<String>> + Send + Sync>;
/// Returns the areas matching a search string.
pub type SearchTextFn =
    Box<dyn Fn(&Page, &BackendData, &str) -> Result<Vec<Rectangle>> + Send + Sync>;
/// Returns the links of the page.
pub type LinksFn = Box<dyn Fn(&Page, &BackendData) -> Result<Vec<Link>> + Send + Sync>;
/// Returns the form fields of the page.
pub type FormFieldsFn = Box<dyn Fn(&Page, &BackendData) -> Result<Vec<FormField>> + Send + Sync>;
/// Returns the images placed on the page.
pub type ImagesFn = Box<dyn Fn(&Page, &BackendData) -> Result<Vec<PageImage>> + Send + Sync>;
/// Converts an image of the page into a surface.
pub type ImageSurfaceFn =
    Box<dyn Fn(&Page, &BackendData, &PageImage) -> Result<Surface> + Send + Sync>;
/// Returns the text inside a region.
pub type TextFn = Box<dyn Fn(&Page, &BackendData, Rectangle) -> Result<String> + Send + Sync>;
/// Returns the selection rectangles inside a region.
pub type SelectionFn =
    Box<dyn Fn(&Page, &BackendData, Rectangle) -> Result<Vec<Rectangle>> + Send + Sync>;
/// Returns the digital signatures of the page.
pub type SignaturesFn = Box<dyn Fn(&Page, &BackendData) -> Result<Vec<Signature>> + Send + Sync>;

/// Capability table of a backend.
pub struct PluginFunctions {
    pub(crate) init: PageInitFn,
    pub(crate) clear: PageClearFn,
    pub(crate) render: PageRenderFn,
    pub(crate) label: Option<PageLabelFn>,
    pub(crate) search_text: Option<SearchTextFn>,
    pub(crate) links: Option<LinksFn>,
    pub(crate) form_fields: Option<FormFieldsFn>,
    pub(crate) images: Option<ImagesFn>,
    pub(crate) image_surface: Option<ImageSurfaceFn>,
    pub(crate) text: Option<TextFn>,
    pub(crate) selection: Option<SelectionFn>,
    pub(crate) signatures: Option<SignaturesFn>,
}

impl PluginFunctions {
    /// Create a table with the mandatory capabilities and no optional ones.
    pub fn new<I, C, R>(init: I, clear: C, render: R) -> Self
    where
        I: Fn(&mut Page) -> Result<BackendData> + Send + Sync + 'static,
        C: Fn(&Page, Option<BackendData>) -> Result<()> + Send + Sync + 'static,
        R: Fn(&Page, &BackendData, &mut Surface, bool) -> Result<()> + Send + Sync + 'static,
    {
        Self {
            init: Box::new(init),
            clear: Box::new(clear),
            render: Box::new(render),
            label: None,
            search_text: None,
            links: None,
            form_fields: None,
            images: None,
            image_surface: None,
            text: None,
            selection: None,
            signatures: None,
        }
    }

    /// Provide page labels.
    #[must_use = "returns the table with the capability added"]
    pub fn with_label<F>(mut self, f: F) -> Self
    where
        F: Fn(&Page, &BackendData) -> Result<Option<String>> + Send + Sync + 'static,
    {
        self.label = Some(Box::new(f));
        self
    }

    /// Provide text search.
    #[must_use = "returns the table with the capability added"]
    pub fn with_search_text<F>(mut self, f: F) -> Self
    where
        F: Fn(&Page, &BackendData, &str) -> Result<Vec<Rectangle>> + Send + Sync + 'static,
    {
        self.search_text = Some(Box::new(f));
        self
    }

    /// Provide link extraction.
    #[must_use = "returns the table with the capability added"]
    pub fn with_links<F>(mut self, f: F) -> Self
    where
        F: Fn(&Page, &BackendData) -> Result<Vec<Link>> + Send + Sync + 'static,
    {
        self.links = Some(Box::new(f));
        self
    }

    /// Provide form-field extraction.
    #[must_use = "returns the table with the capability added"]
    pub fn with_form_fields<F>(mut self, f: F) -> Self
    where
        F: Fn(&Page, &BackendData) -> Result<Vec<FormField>> + Send + Sync + 'static,
    {
        self.form_fields = Some(Box::new(f));
        self
    }

    /// Provide image extraction.
    #[must_use = "returns the table with the capability added"]
    pub fn with_images<F>(mut self, f: F) -> Self
    where
        F: Fn(&Page, &BackendData) -> Result<Vec<PageImage>> + Send + Sync + 'static,
    {
        self.images = Some(Box::new(f));
        self
    }

    /// Provide image-to-surface conversion.
    #[must_use = "returns the table with the capability added"]
    pub fn with_image_surface<F>(mut self, f: F) -> Self
    where
        F: Fn(&Page, &BackendData, &PageImage) -> Result<Surface> + Send + Sync + 'static,
    {
        self.image_surface = Some(Box::new(f));
        self
    }

    /// Provide text extraction over a region.
    #[must_use = "returns the table with the capability added"]
    pub fn with_text<F>(mut self, f: F) -> Self
    where
        F: Fn(&Page, &BackendData, Rectangle) -> Result<String> + Send + Sync + 'static,
    {
        self.text = Some(Box::new(f));
        self
    }

    /// Provide selection extraction over a region.
    #[must_use = "returns the table with the capability added"]
    pub fn with_selection<F>(mut self, f: F) -> Self
    where
        F: Fn(&Page, &BackendData, Rectangle) -> Result<Vec<Rectangle>> + Send + Sync + 'static,
    {
        self.selection = Some(Box::new(f));
        self
    }

    /// Provide signature extraction.
    #[must_use = "returns the table with the capability added"]
    pub fn with_signatures<F>(mut self, f: F) -> Self
    where
        F: Fn(&Page, &BackendData) -> Result<Vec<Signature>> + Send + Sync + 'static,
    {
        self.signatures = Some(Box::new(f));
        self
    }

    /// Check whether the backend implements `operation`.
    pub fn supports(&self, operation: Operation) -> bool {
        match operation {
            Operation::Render => true,
            Operation::Label => self.label.is_some(),
            Operation::SearchText => self.search_text.is_some(),
            Operation::Links => self.links.is_some(),
            Operation::FormFields => self.form_fields.is_some(),
            Operation::Images => self.images.is_some(),
            Operation::ImageSurface => self.image_surface.is_some(),
            Operation::Text => self.text.is_some(),
            Operation::Selection => self.selection.is_some(),
            Operation::Signatures => self.signatures.is_some(),
        }
    }

    /// Operations the backend implements.
    pub fn supported(&self) -> impl Iterator<Item = Operation> + '_ {
        Operation::ALL
            .into_iter()
            .filter(move |operation| self.supports(*operation))
    }
}

impl fmt::Debug for PluginFunctions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.supported()).finish()
    }
}

/// A format backend: metadata plus its capability table.
#[derive(Debug)]
pub struct Plugin {
    name: String,
    version: Option<String>,
    mime_types: Vec<String>,
    functions: PluginFunctions,
}

impl Plugin {
    pub fn new(name: impl Into<String>, functions: PluginFunctions) -> Self {
        Self {
            name: name.into(),
            version: None,
            mime_types: Vec::new(),
            functions,
        }
    }

    /// Set the plugin version.
    #[must_use = "returns the plugin with the version set"]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Register a MIME type handled by the plugin.
    #[must_use = "returns the plugin with the MIME type added"]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_types.push(mime_type.into());
        self
    }

    /// Plugin name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Plugin version, if set.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// MIME types handled by the plugin.
    pub fn mime_types(&self) -> &[String] {
        &self.mime_types
    }

    /// Check whether the plugin handles `mime_type` (case-insensitive).
    pub fn handles(&self, mime_type: &str) -> bool {
        self.mime_types
            .iter()
            .any(|m| m.eq_ignore_ascii_case(mime_type))
    }

    /// Capability table.
    pub fn functions(&self) -> &PluginFunctions {
        &self.functions
    }
}
