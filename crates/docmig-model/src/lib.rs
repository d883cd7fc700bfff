//! Typed document model for field-level migrations.
//!
//! A [`Document`] is one flat record read from a database row or a JSON
//! store. Values are held as [`FieldValue`], a tagged union of scalar
//! kinds, so the three ways a field can be "empty" stay distinct:
//!
//! - the key is absent from the document,
//! - the key holds a native null ([`FieldValue::Null`]),
//! - the key holds the sentinel text `"null"` ([`NULL_MARKER`]).
//!
//! [`Document::state`] reports which of these applies to a key.

pub mod document;
pub mod error;
pub mod value;

pub use document::{Document, FieldState};
pub use error::{ModelError, Result};
pub use value::{FieldValue, NULL_MARKER};
