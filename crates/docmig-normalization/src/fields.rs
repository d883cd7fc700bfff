//! Defaults for empty fields.
//!
//! The two helpers here cover different absence encodings and are kept
//! separate: one rewrites the sentinel text `"null"` on a field that must
//! exist, the other adds a field that does not exist at all.

use docmig_model::{Document, FieldValue};

use crate::error::NormalizationError;

/// Replace the sentinel text `"null"` stored under `key` with `value`.
///
/// Any other value, including a native null, is left untouched.
///
/// # Errors
///
/// Returns [`NormalizationError::KeyMissing`] when `key` is absent.
pub fn replace_null_with_value(
    doc: &mut Document,
    key: &str,
    value: impl Into<FieldValue>,
) -> Result<(), NormalizationError> {
    let current = doc
        .get_mut(key)
        .ok_or_else(|| NormalizationError::KeyMissing {
            key: key.to_string(),
        })?;
    if current.is_null_marker() {
        *current = value.into();
        tracing::trace!(field = %key, kind = current.kind(), "replaced null marker");
    }
    Ok(())
}

/// Set `key` to `value` only when the key is absent.
pub fn replace_nothing_with_value(doc: &mut Document, key: &str, value: impl Into<FieldValue>) {
    if doc.contains_key(key) {
        return;
    }
    let value = value.into();
    tracing::trace!(field = %key, kind = value.kind(), "filled missing field");
    doc.insert(key, value);
}
