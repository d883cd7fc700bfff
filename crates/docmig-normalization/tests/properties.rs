//! Property tests for the normalization operations.

use docmig_model::{Document, FieldValue, NULL_MARKER};
use docmig_normalization::{
    NormalizationError, SCHEMA_FIELD, quoted_or_null, replace_nothing_with_value,
    replace_null_with_value, update_schema_version,
};
use proptest::prelude::*;

fn field_value() -> impl Strategy<Value = FieldValue> {
    prop_oneof![
        Just(FieldValue::Null),
        Just(FieldValue::from(NULL_MARKER)),
        any::<bool>().prop_map(FieldValue::Bool),
        any::<i64>().prop_map(FieldValue::Integer),
        (-1.0e9..1.0e9f64).prop_map(FieldValue::Float),
        "[a-zA-Z0-9 ]{0,12}".prop_map(FieldValue::Text),
    ]
}

fn document() -> impl Strategy<Value = Document> {
    prop::collection::btree_map("[a-z]{1,6}", field_value(), 0..8)
        .prop_map(|fields| fields.into_iter().collect())
}

fn key() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

proptest! {
    #[test]
    fn null_marker_is_replaced(mut doc in document(), key in key(), value in field_value()) {
        doc.insert(key.clone(), NULL_MARKER);
        replace_null_with_value(&mut doc, &key, value.clone()).unwrap();
        prop_assert_eq!(doc.get(&key), Some(&value));
    }

    #[test]
    fn non_marker_values_are_kept(
        mut doc in document(),
        key in key(),
        existing in field_value(),
        value in field_value(),
    ) {
        prop_assume!(!existing.is_null_marker());
        doc.insert(key.clone(), existing.clone());
        let before = doc.clone();
        replace_null_with_value(&mut doc, &key, value).unwrap();
        prop_assert_eq!(doc, before);
    }

    #[test]
    fn null_replacement_requires_the_key(mut doc in document(), key in key(), value in field_value()) {
        doc.remove(&key);
        let before = doc.clone();
        let result = replace_null_with_value(&mut doc, &key, value);
        prop_assert_eq!(result, Err(NormalizationError::KeyMissing { key: key.clone() }));
        prop_assert_eq!(doc, before);
    }

    #[test]
    fn absent_field_is_filled(mut doc in document(), key in key(), value in field_value()) {
        doc.remove(&key);
        replace_nothing_with_value(&mut doc, &key, value.clone());
        prop_assert_eq!(doc.get(&key), Some(&value));
    }

    #[test]
    fn present_field_is_kept(
        mut doc in document(),
        key in key(),
        existing in field_value(),
        value in field_value(),
    ) {
        doc.insert(key.clone(), existing.clone());
        replace_nothing_with_value(&mut doc, &key, value);
        prop_assert_eq!(doc.get(&key), Some(&existing));
    }

    #[test]
    fn missing_version_leaves_document_unchanged(mut doc in document()) {
        let before = doc.clone();
        update_schema_version(&mut doc, None);
        prop_assert_eq!(doc, before);
    }

    #[test]
    fn version_is_always_written(mut doc in document()) {
        update_schema_version(&mut doc, Some(FieldValue::from("v2")));
        prop_assert_eq!(doc.get(SCHEMA_FIELD), Some(&FieldValue::from("v2")));
    }

    #[test]
    fn operations_are_idempotent(
        doc in document(),
        key in key(),
        value in field_value(),
        version in prop::option::of(field_value()),
    ) {
        prop_assume!(key != SCHEMA_FIELD);
        let mut once = doc.clone();
        if once.contains_key(&key) {
            replace_null_with_value(&mut once, &key, value.clone()).unwrap();
        }
        replace_nothing_with_value(&mut once, &key, value.clone());
        update_schema_version(&mut once, version.clone());
        let literal = quoted_or_null(&once, &key);

        let mut twice = once.clone();
        replace_null_with_value(&mut twice, &key, value.clone()).unwrap();
        replace_nothing_with_value(&mut twice, &key, value);
        update_schema_version(&mut twice, version);

        prop_assert_eq!(&twice, &once);
        prop_assert_eq!(quoted_or_null(&twice, &key), literal);
    }
}

#[test]
fn literal_examples() {
    let empty = Document::new();
    assert_eq!(quoted_or_null(&empty, "x"), "NULL");

    let number: Document = [("x", 42)].into_iter().collect();
    assert_eq!(quoted_or_null(&number, "x"), "'42'");

    let text: Document = [("x", "abc")].into_iter().collect();
    assert_eq!(quoted_or_null(&text, "x"), "'abc'");
}
