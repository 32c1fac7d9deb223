//! Opaque backend handle
//!
//! Backends attach their own per-page (or per-image) state to core objects
//! through [`BackendData`]. The core stores, forwards and drops the handle but
//! has no way to name the concrete type inside it; only the backend that
//! created it can get the value back out.

use std::any::Any;
use std::fmt;

/// Backend-owned value carried by a core object.
pub struct BackendData {
    inner: Box<dyn Any + Send>,
}

impl BackendData {
    /// Wrap a backend value.
    pub fn new<T: Any + Send>(value: T) -> Self {
        Self {
            inner: Box::new(value),
        }
    }

    /// Borrow the value if it has type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Mutably borrow the value if it has type `T`.
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.inner.downcast_mut::<T>()
    }

    /// Take the value back if it has type `T`, otherwise return the handle.
    pub fn into_inner<T: Any>(self) -> std::result::Result<T, Self> {
        match self.inner.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(inner) => Err(Self { inner }),
        }
    }

    /// Check whether the handle holds a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }
}

impl fmt::Debug for BackendData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BackendData(..)")
    }
}
