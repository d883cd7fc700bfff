//! SQL literal fragments.
//!
//! [`quoted_or_null`] does **not** escape embedded quotes. A value such as
//! `O'Brien` produces a broken fragment, and untrusted input can inject
//! SQL. Use it only for trusted data; prefer parameterized queries or
//! [`escaped_quoted_or_null`] otherwise.

use docmig_model::{Document, FieldValue};
use serde::{Deserialize, Serialize};

/// Unquoted SQL null literal.
pub const SQL_NULL: &str = "NULL";

/// How quoted literals treat embedded single quotes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SqlLiteralStyle {
    /// Wrap the text as-is. Trusted input only.
    #[default]
    Raw,
    /// Double embedded single quotes.
    Escaped,
}

/// Render the field under `key` as `NULL` or a single-quoted literal.
///
/// An absent key and a native null both give `NULL`. The sentinel text
/// `"null"` is a string and gives `'null'`.
pub fn quoted_or_null(doc: &Document, key: &str) -> String {
    literal(doc, key, SqlLiteralStyle::Raw)
}

/// Like [`quoted_or_null`], with embedded single quotes doubled.
pub fn escaped_quoted_or_null(doc: &Document, key: &str) -> String {
    literal(doc, key, SqlLiteralStyle::Escaped)
}

/// Render the field under `key` using the given quoting style.
pub fn literal(doc: &Document, key: &str, style: SqlLiteralStyle) -> String {
    match doc.get(key) {
        None | Some(FieldValue::Null) => SQL_NULL.to_string(),
        Some(value) => quote(key, &value.to_string(), style),
    }
}

fn quote(key: &str, text: &str, style: SqlLiteralStyle) -> String {
    match style {
        SqlLiteralStyle::Raw => {
            if text.contains('\'') {
                tracing::warn!(
                    field = %key,
                    "value contains a single quote; raw SQL literal is not escaped"
                );
            }
            format!("'{text}'")
        }
        SqlLiteralStyle::Escaped => format!("'{}'", text.replace('\'', "''")),
    }
}

/// Render `keys` as a parenthesized value list, e.g. `('a', NULL, '42')`.
pub fn values_tuple<S: AsRef<str>>(doc: &Document, keys: &[S], style: SqlLiteralStyle) -> String {
    let literals: Vec<String> = keys
        .iter()
        .map(|key| literal(doc, key.as_ref(), style))
        .collect();
    format!("({})", literals.join(", "))
}

/// Render a single-row `INSERT` statement.
///
/// `table` and `keys` are emitted verbatim as identifiers.
pub fn insert_statement<S: AsRef<str>>(
    table: &str,
    doc: &Document,
    keys: &[S],
    style: SqlLiteralStyle,
) -> String {
    let columns: Vec<&str> = keys.iter().map(AsRef::<str>::as_ref).collect();
    format!(
        "INSERT INTO {table} ({}) VALUES {};",
        columns.join(", "),
        values_tuple(doc, keys, style)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_native_null_render_null() {
        let mut doc = Document::new();
        assert_eq!(quoted_or_null(&doc, "x"), "NULL");
        doc.insert("x", FieldValue::Null);
        assert_eq!(quoted_or_null(&doc, "x"), "NULL");
    }

    #[test]
    fn values_are_quoted() {
        let doc: Document = [
            ("n", FieldValue::from(42)),
            ("s", FieldValue::from("abc")),
            ("m", FieldValue::from("null")),
            ("b", FieldValue::from(true)),
        ]
        .into_iter()
        .collect();
        assert_eq!(quoted_or_null(&doc, "n"), "'42'");
        assert_eq!(quoted_or_null(&doc, "s"), "'abc'");
        assert_eq!(quoted_or_null(&doc, "m"), "'null'");
        assert_eq!(quoted_or_null(&doc, "b"), "'true'");
    }

    #[test]
    fn numbers_keep_their_exact_text() {
        let doc: Document = [
            ("big", FieldValue::Unsigned(u64::MAX)),
            ("whole", FieldValue::from(3.0)),
        ]
        .into_iter()
        .collect();
        assert_eq!(quoted_or_null(&doc, "big"), "'18446744073709551615'");
        assert_eq!(quoted_or_null(&doc, "whole"), "'3.0'");
    }

    #[test]
    fn raw_style_does_not_escape() {
        let doc: Document = [("name", "O'Brien")].into_iter().collect();
        assert_eq!(quoted_or_null(&doc, "name"), "'O'Brien'");
        assert_eq!(escaped_quoted_or_null(&doc, "name"), "'O''Brien'");
    }

    #[test]
    fn tuple_keeps_key_order() {
        let doc: Document = [("a", FieldValue::from("x")), ("b", FieldValue::from(1))]
            .into_iter()
            .collect();
        assert_eq!(
            values_tuple(&doc, &["b", "missing", "a"], SqlLiteralStyle::Raw),
            "('1', NULL, 'x')"
        );
    }
}
