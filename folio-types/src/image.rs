//! Embedded images returned by page image extraction

use crate::geometry::Rectangle;
use crate::handle::BackendData;

/// An image placed on a page.
///
/// The backend may keep its own state for the image (object id, decoded
/// stream, ...) in `data`; it is dropped together with the image.
#[derive(Debug)]
pub struct PageImage {
    /// Placement of the image on the page.
    pub position: Rectangle,
    /// Backend state needed to turn the image into a surface.
    pub data: Option<BackendData>,
}

impl PageImage {
    pub fn new(position: Rectangle) -> Self {
        Self {
            position,
            data: None,
        }
    }

    /// Attach backend state.
    pub fn with_data(mut self, data: BackendData) -> Self {
        self.data = Some(data);
        self
    }
}
