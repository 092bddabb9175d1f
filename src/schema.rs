//! Structural schema validation seam.
//!
//! Payloads are structurally validated before decode and again after encode.
//! The engine itself (XSD or otherwise) is external: deployments implement
//! [`SchemaValidator`] over their schema compiler of choice. [`Unvalidated`]
//! accepts every non-empty document and exists for tests and for deployments
//! that validate upstream.

use crate::error::{Result, WireError};

/// Validates one document against the schema of one protocol version.
pub trait SchemaValidator: Send + Sync {
    /// Check the document; the error text is surfaced to the client verbatim
    /// for request payloads.
    fn validate(&self, version: &str, document: &str) -> Result<()>;
}

/// Accepts any non-empty document.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unvalidated;

impl SchemaValidator for Unvalidated {
    fn validate(&self, _version: &str, document: &str) -> Result<()> {
        if document.trim().is_empty() {
            return Err(WireError::Schema("empty document".to_owned()));
        }
        Ok(())
    }
}
