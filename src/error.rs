//! Error types for the devicetree reference resolver.
//!
//! This module provides a unified error type [`DtError`] that covers all
//! hard-failure conditions during reference resolution, namespace
//! enumeration, and accessor generation.
//!
//! "No such node" is deliberately *not* an error at the library level:
//! resolvers and [`Node::at`](crate::tree::Node::at) report it as
//! `Ok(None)`. It only becomes [`DtError::NotFound`] at the query surface,
//! where the caller asked for an identifier and absence must be surfaced
//! with the offending reference attached.

use thiserror::Error;

/// Result type alias using [`DtError`].
pub type Result<T> = std::result::Result<T, DtError>;

/// Unified error type for all resolver operations.
#[derive(Error, Debug)]
pub enum DtError {
    // ============ Reference Syntax Errors ============
    /// The reference does not have the required syntactic form
    #[error("Malformed reference '{reference}': {message}")]
    MalformedReference { reference: String, message: String },

    // ============ Namespace Consistency Errors ============
    /// An existing node has no `_ORD` entry in the namespace
    #[error("Devicetree node has no ordinal: {path}")]
    MissingOrdinal { path: String },

    /// The namespace names a node that cannot be reconstructed
    #[error("Invalid devicetree node for '{subject}': {message}")]
    InvalidNode { subject: String, message: String },

    // ============ Query Surface Errors ============
    /// A syntactically valid reference denotes no existing node
    #[error("Devicetree reference '{reference}' does not match any node")]
    NotFound { reference: String },

    // ============ I/O Errors ============
    /// Error reading the generated macro header
    #[error("Failed to read devicetree header '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing the generated accessor file
    #[error("Failed to write accessor file '{path}': {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl DtError {
    /// Create a malformed-reference error.
    pub fn malformed(reference: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedReference {
            reference: reference.into(),
            message: message.into(),
        }
    }

    /// Create a missing-ordinal error.
    pub fn missing_ordinal(path: impl Into<String>) -> Self {
        Self::MissingOrdinal { path: path.into() }
    }

    /// Create an invalid-node error.
    pub fn invalid_node(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidNode {
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Create a not-found error.
    pub fn not_found(reference: impl Into<String>) -> Self {
        Self::NotFound {
            reference: reference.into(),
        }
    }
}
