//! Schema version stamping.

use docmig_model::{Document, FieldValue};

/// Field that records the schema revision of a document.
pub const SCHEMA_FIELD: &str = "schema";

/// Record `version` under [`SCHEMA_FIELD`], overwriting any prior value.
///
/// `None` and a native null leave the document untouched. Every other
/// value is a real version, including `0`, `false` and the empty string.
pub fn update_schema_version(doc: &mut Document, version: Option<FieldValue>) {
    match version {
        None | Some(FieldValue::Null) => {}
        Some(version) => {
            tracing::trace!(kind = version.kind(), "stamped schema version");
            doc.insert(SCHEMA_FIELD, version);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_leaves_document_untouched() {
        let mut doc = Document::new();
        update_schema_version(&mut doc, None);
        assert!(!doc.contains_key(SCHEMA_FIELD));

        doc.insert(SCHEMA_FIELD, "v1");
        update_schema_version(&mut doc, None);
        update_schema_version(&mut doc, Some(FieldValue::Null));
        assert_eq!(doc.get(SCHEMA_FIELD), Some(&FieldValue::from("v1")));
    }

    #[test]
    fn version_overwrites_previous_stamp() {
        let mut doc = Document::new();
        doc.insert(SCHEMA_FIELD, "v1");
        update_schema_version(&mut doc, Some(FieldValue::from("v2")));
        assert_eq!(doc.get(SCHEMA_FIELD), Some(&FieldValue::from("v2")));
    }

    #[test]
    fn falsy_versions_are_written() {
        for version in [FieldValue::from(0), FieldValue::from(""), FieldValue::from(false)] {
            let mut doc = Document::new();
            update_schema_version(&mut doc, Some(version.clone()));
            assert_eq!(doc.get(SCHEMA_FIELD), Some(&version));
        }
    }
}
