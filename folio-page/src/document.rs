//! Document handle owning the backend plugin

use crate::page::Page;
use crate::plugin::{Plugin, PluginFunctions};
use folio_types::Result;
use std::sync::Arc;

/// An open document.
///
/// Pages only keep a weak reference to their document, so dropping the last
/// `Arc<Document>` tears the document down even while pages still exist;
/// those pages then refuse every backend operation.
#[derive(Debug)]
pub struct Document {
    plugin: Arc<Plugin>,
}

impl Document {
    /// Open a document served by `plugin`.
    pub fn new(plugin: Arc<Plugin>) -> Arc<Self> {
        Arc::new(Self { plugin })
    }

    /// Plugin serving this document.
    pub fn plugin(&self) -> &Arc<Plugin> {
        &self.plugin
    }

    /// Capability table of the plugin.
    pub fn functions(&self) -> &PluginFunctions {
        self.plugin.functions()
    }

    /// Create the page at `index` (0-based).
    ///
    /// See [`Page::new`].
    pub fn page(self: &Arc<Self>, index: usize) -> Result<Page> {
        Page::new(&Arc::downgrade(self), index)
    }
}
