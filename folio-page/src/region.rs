//! Region strings for external tools.
//!
//! A region is written as `page=<n>,trim=<left>bp <bottom>bp <right>bp <top>bp,clip`,
//! the form `\includegraphics` understands: the page number is 1-based and
//! the four trim amounts are measured inward from the page edges in a
//! bottom-left origin, with two decimals.

use crate::page::Page;
use folio_types::Rectangle;

/// Buffer size that fits any region string of an ordinary page.
pub const REGION_BUFFER_SIZE: usize = 64;

impl Page {
    /// Region string for `rectangle` on this page.
    ///
    /// # Example
    ///
    /// ```
    /// # use folio_page::{Document, Plugin, PluginFunctions};
    /// # use folio_types::{BackendData, Rectangle};
    /// # use std::sync::Arc;
    /// # let functions = PluginFunctions::new(
    /// #     |page| {
    /// #         page.set_width(100.0);
    /// #         page.set_height(200.0);
    /// #         Ok(BackendData::new(()))
    /// #     },
    /// #     |_page, _data| Ok(()),
    /// #     |_page, _data, _surface, _printing| Ok(()),
    /// # );
    /// # let document = Document::new(Arc::new(Plugin::new("test", functions)));
    /// let page = document.page(0)?;
    /// let region = page.format_region(&Rectangle::new(10.0, 20.0, 90.0, 180.0));
    /// assert_eq!(region, "page=1,trim=10.00bp 20.00bp 10.00bp 20.00bp,clip");
    /// # Ok::<(), folio_types::PageError>(())
    /// ```
    pub fn format_region(&self, rectangle: &Rectangle) -> String {
        format!(
            "page={},trim={:.2}bp {:.2}bp {:.2}bp {:.2}bp,clip",
            self.index() as u128 + 1,
            rectangle.x1,
            self.height() - rectangle.y2,
            self.width() - rectangle.x2,
            rectangle.y1
        )
    }

    /// Write the region string for `rectangle` into `buffer`.
    ///
    /// Copies as many bytes as fit and returns the full length of the region
    /// string, so a return value larger than `buffer.len()` means the output
    /// was truncated.
    pub fn write_region(&self, rectangle: &Rectangle, buffer: &mut [u8]) -> usize {
        let region = self.format_region(rectangle);
        let n = region.len().min(buffer.len());
        buffer[..n].copy_from_slice(&region.as_bytes()[..n]);
        region.len()
    }
}
