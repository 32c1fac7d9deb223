//! # folio-page
//!
//! Format-independent page objects for a document viewer with pluggable
//! format backends.
//!
//! A backend describes itself with a [`Plugin`] whose [`PluginFunctions`]
//! table holds the mandatory page init/clear/render capabilities and any
//! optional ones (labels, search, links, form fields, images, text,
//! selection, signatures). A [`Page`] owns the format-independent metadata
//! and the backend's opaque page state, checks its inputs, and forwards each
//! operation to the backend if (and only if) the backend implements it.
//!
//! ## Quick Start
//!
//! ```
//! use folio_page::{Document, Plugin, PluginFunctions};
//! use folio_types::{BackendData, Link, LinkTarget, Operation, PixelFormat, Rectangle, Surface};
//! use std::sync::Arc;
//!
//! let functions = PluginFunctions::new(
//!     |page| {
//!         page.set_width(612.0);
//!         page.set_height(792.0);
//!         Ok(BackendData::new(page.index() as u32))
//!     },
//!     |_page, _data| Ok(()),
//!     |_page, _data, surface, _printing| surface.fill(&[255, 255, 255, 255]),
//! )
//! .with_label(|page, _data| Ok(Some((page.index() + 1).to_string())))
//! .with_links(|_page, _data| {
//!     Ok(vec![Link::new(
//!         Rectangle::new(72.0, 700.0, 200.0, 714.0),
//!         LinkTarget::Uri("https://example.org".into()),
//!     )])
//! });
//!
//! let document = Document::new(Arc::new(Plugin::new("demo", functions)));
//! let page = document.page(0)?;
//!
//! assert_eq!(page.label()?, Some("1"));
//! assert!(page.label_is_number());
//! assert_eq!(page.links()?[0].uri(), Some("https://example.org"));
//! assert!(!page.supports(Operation::Signatures));
//!
//! let mut surface = Surface::new(61, 79, PixelFormat::Bgra);
//! page.render(&mut surface, false)?;
//!
//! page.destroy()?;
//! # Ok::<(), folio_types::PageError>(())
//! ```

mod dispatch;
mod document;
mod label;
mod page;
mod plugin;
mod region;
mod slot;

pub use document::Document;
pub use page::Page;
pub use plugin::{
    FormFieldsFn, ImageSurfaceFn, ImagesFn, LinksFn, PageClearFn, PageInitFn, PageLabelFn,
    PageRenderFn, Plugin, PluginFunctions, SearchTextFn, SelectionFn, SignaturesFn, TextFn,
};
pub use region::REGION_BUFFER_SIZE;
pub use slot::PageSlot;
