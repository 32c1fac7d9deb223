//! Error types shared by the page core and format backends

use std::fmt;

use thiserror::Error;

/// Result type for page operations
pub type Result<T> = std::result::Result<T, PageError>;

/// Page-level operation a backend may or may not implement.
///
/// Used to name the missing capability in [`PageError::NotImplemented`] and
/// to query a capability table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Retrieve the page label
    Label,
    /// Search text on the page
    SearchText,
    /// Extract links
    Links,
    /// Extract form fields
    FormFields,
    /// Extract embedded images
    Images,
    /// Convert an extracted image into a drawing surface
    ImageSurface,
    /// Extract text inside a region
    Text,
    /// Compute the selection rectangles inside a region
    Selection,
    /// Render the page
    Render,
    /// Extract digital signatures
    Signatures,
}

impl Operation {
    /// All operations, in capability-table order.
    pub const ALL: [Operation; 10] = [
        Operation::Label,
        Operation::SearchText,
        Operation::Links,
        Operation::FormFields,
        Operation::Images,
        Operation::ImageSurface,
        Operation::Text,
        Operation::Selection,
        Operation::Render,
        Operation::Signatures,
    ];

    /// Stable name of the operation, used in log output.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Label => "label",
            Operation::SearchText => "search_text",
            Operation::Links => "links",
            Operation::FormFields => "form_fields",
            Operation::Images => "images",
            Operation::ImageSurface => "image_surface",
            Operation::Text => "text",
            Operation::Selection => "selection",
            Operation::Render => "render",
            Operation::Signatures => "signatures",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Failures a backend reports that the core passes through untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendFailure {
    /// Unspecified backend error
    #[error("unknown backend error")]
    Unknown,

    /// The document needs a different password
    #[error("invalid password")]
    InvalidPassword,

    /// The document forbids the operation
    #[error("permission denied")]
    PermissionDenied,

    /// Backend-specific failure with a message
    #[error("{reason}")]
    Failed { reason: String },
}

impl BackendFailure {
    /// Shorthand for [`BackendFailure::Failed`].
    pub fn failed(reason: impl Into<String>) -> Self {
        BackendFailure::Failed {
            reason: reason.into(),
        }
    }
}

/// Error taxonomy for every page operation.
#[derive(Error, Debug)]
pub enum PageError {
    /// A required input was missing or the page is no longer bound to a document
    #[error("Invalid arguments: {reason}")]
    InvalidArguments { reason: String },

    /// Allocation failed
    #[error("Out of memory")]
    OutOfMemory,

    /// The backend does not provide the requested capability
    #[error("Operation not implemented by backend: {operation}")]
    NotImplemented { operation: Operation },

    /// Failure reported by the backend
    #[error("Backend error: {0}")]
    Backend(#[from] BackendFailure),

    /// IO error while writing surface output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PageError {
    /// Build an [`PageError::InvalidArguments`] with the given reason.
    pub fn invalid_arguments(reason: impl Into<String>) -> Self {
        PageError::InvalidArguments {
            reason: reason.into(),
        }
    }

    /// Build a [`PageError::NotImplemented`] for `operation`.
    pub fn not_implemented(operation: Operation) -> Self {
        PageError::NotImplemented { operation }
    }

    /// Flat code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PageError::InvalidArguments { .. } => ErrorCode::InvalidArguments,
            PageError::OutOfMemory => ErrorCode::OutOfMemory,
            PageError::NotImplemented { .. } => ErrorCode::NotImplemented,
            PageError::Backend(BackendFailure::InvalidPassword) => ErrorCode::InvalidPassword,
            PageError::Backend(BackendFailure::PermissionDenied) => ErrorCode::PermissionDenied,
            PageError::Backend(_) | PageError::Io(_) => ErrorCode::Unknown,
        }
    }
}

/// Closed set of result codes understood by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// No error occurred
    Ok,
    /// Unspecified failure
    Unknown,
    /// Allocation failed
    OutOfMemory,
    /// Capability missing in the backend
    NotImplemented,
    /// Invalid or missing input
    InvalidArguments,
    /// Wrong password
    InvalidPassword,
    /// Operation forbidden by the document
    PermissionDenied,
}

impl ErrorCode {
    /// Code of an operation result: [`ErrorCode::Ok`] on success.
    pub fn of<T>(result: &Result<T>) -> Self {
        match result {
            Ok(_) => ErrorCode::Ok,
            Err(e) => e.code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(
            PageError::invalid_arguments("page").code(),
            ErrorCode::InvalidArguments
        );
        assert_eq!(
            PageError::not_implemented(Operation::Links).code(),
            ErrorCode::NotImplemented
        );
        assert_eq!(
            PageError::from(BackendFailure::PermissionDenied).code(),
            ErrorCode::PermissionDenied
        );
        assert_eq!(
            PageError::from(BackendFailure::failed("corrupt xref")).code(),
            ErrorCode::Unknown
        );
        assert_eq!(ErrorCode::of(&Ok::<_, PageError>(3)), ErrorCode::Ok);
    }

    #[test]
    fn test_not_implemented_names_operation() {
        let err = PageError::not_implemented(Operation::ImageSurface);
        assert_eq!(
            err.to_string(),
            "Operation not implemented by backend: image_surface"
        );
    }

    #[test]
    fn test_backend_failure_message() {
        let err = PageError::from(BackendFailure::failed("bad stream"));
        assert_eq!(err.to_string(), "Backend error: bad stream");
    }
}
