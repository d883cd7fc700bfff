//! Error types for document normalization.

use thiserror::Error;

/// Errors raised by normalization operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizationError {
    /// A null-marker replacement targeted a key the document does not have.
    ///
    /// Callers should use [`crate::replace_nothing_with_value`] for fields
    /// that may be absent.
    #[error("key missing from document: {key}")]
    KeyMissing { key: String },
}
