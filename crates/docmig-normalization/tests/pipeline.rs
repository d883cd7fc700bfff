//! Integration tests for rule files and statement rendering.

use docmig_model::{Document, FieldValue};
use docmig_normalization::sql::{insert_statement, values_tuple};
use docmig_normalization::{NormalizationPipeline, NormalizationRule, SqlLiteralStyle};

const RULES: &str = r#"{
    "rules": [
        {"op": "replace_null", "field": "printer", "value": "lab-1"},
        {"op": "fill_missing", "field": "quota", "value": 250},
        {"op": "fill_missing", "field": "color", "value": false},
        {"op": "stamp_schema", "version": 2}
    ]
}"#;

#[test]
fn rule_file_deserializes_in_order() {
    let pipeline: NormalizationPipeline = serde_json::from_str(RULES).expect("parse rules");
    assert_eq!(pipeline.len(), 4);
    assert_eq!(
        pipeline.rules[0],
        NormalizationRule::ReplaceNull {
            field: "printer".to_string(),
            value: FieldValue::from("lab-1"),
        }
    );
    assert_eq!(
        pipeline.rules[3],
        NormalizationRule::StampSchema {
            version: Some(FieldValue::Integer(2)),
        }
    );
}

#[test]
fn stamp_without_version_is_a_no_op() {
    let pipeline: NormalizationPipeline =
        serde_json::from_str(r#"{"rules": [{"op": "stamp_schema"}]}"#).expect("parse rules");
    let mut doc = Document::from_json_str(r#"{"schema": 1}"#).unwrap();
    let outcome = pipeline.apply(&mut doc).unwrap();
    assert!(!outcome.changed());
    assert_eq!(doc.get("schema"), Some(&FieldValue::Integer(1)));
}

#[test]
fn pipeline_normalizes_job_record() {
    let pipeline: NormalizationPipeline = serde_json::from_str(RULES).expect("parse rules");
    let mut doc =
        Document::from_json_str(r#"{"id": 7, "printer": "null", "color": null}"#).unwrap();

    let outcome = pipeline.apply(&mut doc).expect("apply pipeline");
    assert_eq!(outcome.changed_fields, vec!["printer", "quota", "schema"]);

    let json = serde_json::to_string(&doc).unwrap();
    assert_eq!(
        json,
        r#"{"color":null,"id":7,"printer":"lab-1","quota":250,"schema":2}"#
    );
}

#[test]
fn insert_statement_snapshot() {
    let doc = Document::from_json_str(r#"{"id": 7, "owner": "O'Brien", "quota": null}"#).unwrap();
    let keys = ["id", "owner", "quota", "printer"];

    insta::assert_snapshot!(
        insert_statement("jobs", &doc, &keys, SqlLiteralStyle::Escaped),
        @"INSERT INTO jobs (id, owner, quota, printer) VALUES ('7', 'O''Brien', NULL, NULL);"
    );
    insta::assert_snapshot!(
        values_tuple(&doc, &keys, SqlLiteralStyle::Raw),
        @"('7', 'O'Brien', NULL, NULL)"
    );
}
