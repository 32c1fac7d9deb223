//! # folio-types
//!
//! Values shared between the folio page core and format backends.
//!
//! A backend builds its capability table against these types: it reports
//! failures through [`PageError`], keeps per-page state in a [`BackendData`]
//! handle, and returns content as [`Link`], [`FormField`], [`PageImage`] and
//! [`Signature`] values or draws into a [`Surface`].

mod error;
mod form;
mod geometry;
mod handle;
mod image;
mod link;
mod signature;
mod surface;

pub use error::{BackendFailure, ErrorCode, Operation, PageError, Result};
pub use form::{FormField, FormFieldKind};
pub use geometry::Rectangle;
pub use handle::BackendData;
pub use image::PageImage;
pub use link::{DestinationKind, Link, LinkTarget};
pub use signature::{Signature, SignatureState};
pub use surface::{PixelFormat, Surface};
