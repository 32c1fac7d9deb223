//! Page label support.
//!
//! Backends may give pages custom labels like "i, ii, iii" for front matter
//! or "A-1, A-2" for appendices. The label is fetched once when the page is
//! created; the page also remembers whether the label is just its 1-based
//! page number, so the viewer can skip showing both.

use crate::page::Page;
use folio_types::{PageError, Result};

/// Check whether `label` is the decimal 1-based number of the page at `index`.
pub(crate) fn is_page_number(label: &str, index: usize) -> bool {
    index
        .checked_add(1)
        .is_some_and(|number| label == number.to_string())
}

impl Page {
    /// Page label fetched from the backend at construction.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(label))` - The page has a label
    /// * `Ok(None)` - The backend has no label for the page, or no label support
    /// * `Err(PageError::InvalidArguments)` - The document was torn down
    pub fn label(&self) -> Result<Option<&str>> {
        if self.document().is_none() {
            return Err(PageError::invalid_arguments("page is not bound to a document"));
        }
        Ok(self.stored_label())
    }
}
