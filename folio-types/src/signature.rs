//! Digital signature values returned by page signature extraction.
//!
//! The core does not verify anything itself: the backend reports who signed,
//! when, and what it concluded about the certificate.

use crate::geometry::Rectangle;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Verification outcome reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignatureState {
    /// Signature and certificate check out.
    Valid,
    /// Signed bytes do not match the signature.
    Invalid,
    /// Certificate has expired.
    CertificateExpired,
    /// Certificate has been revoked.
    CertificateRevoked,
    /// Certificate chain is not trusted.
    CertificateUntrusted,
    /// Certificate could not be parsed or is otherwise bad.
    CertificateInvalid,
    /// Verification itself failed.
    Error,
}

impl SignatureState {
    /// Check if the signature can be trusted.
    pub fn is_valid(&self) -> bool {
        matches!(self, SignatureState::Valid)
    }
}

/// A digital signature attached to a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    /// Common name of the signer.
    pub signer: Option<String>,
    /// Signing time.
    pub time: Option<DateTime<Utc>>,
    /// Verification outcome.
    pub state: SignatureState,
    /// Widget area on the page.
    pub position: Rectangle,
}

impl Signature {
    pub fn new(state: SignatureState, position: Rectangle) -> Self {
        Self {
            signer: None,
            time: None,
            state,
            position,
        }
    }

    /// Set the signer name.
    pub fn with_signer(mut self, signer: impl Into<String>) -> Self {
        self.signer = Some(signer.into());
        self
    }

    /// Set the signing time.
    pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time);
        self
    }
}
