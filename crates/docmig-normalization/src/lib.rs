//! Field-level normalization for migrated documents.
//!
//! Migration scripts read one record at a time, patch a handful of
//! fields and write the record back. This crate holds the patches:
//!
//! - **Null markers**: [`replace_null_with_value`] swaps the sentinel text
//!   `"null"` for a real default on a field known to exist.
//! - **Missing fields**: [`replace_nothing_with_value`] fills a field only
//!   when the key is absent.
//! - **Schema stamps**: [`update_schema_version`] records the schema
//!   revision that last touched the document.
//! - **SQL literals**: [`quoted_or_null`] renders a field as `NULL` or a
//!   single-quoted fragment.
//!
//! Every operation is idempotent. [`NormalizationPipeline`] chains them
//! in a fixed order and reports which fields changed.
//!
//! # Example
//!
//! ```
//! use docmig_model::{Document, FieldValue};
//! use docmig_normalization::{quoted_or_null, replace_null_with_value, update_schema_version};
//!
//! let mut doc = Document::from_json_str(r#"{"printer": "null", "pages": 3}"#)?;
//! replace_null_with_value(&mut doc, "printer", "default")?;
//! update_schema_version(&mut doc, Some(FieldValue::from("v2")));
//!
//! assert_eq!(quoted_or_null(&doc, "printer"), "'default'");
//! assert_eq!(quoted_or_null(&doc, "owner"), "NULL");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod fields;
mod pipeline;
mod schema;

pub mod sql;

// Operations
pub use fields::{replace_nothing_with_value, replace_null_with_value};
pub use schema::{SCHEMA_FIELD, update_schema_version};
pub use sql::{SqlLiteralStyle, escaped_quoted_or_null, quoted_or_null};

// Pipeline
pub use pipeline::{NormalizationOutcome, NormalizationPipeline, NormalizationRule};

// Error type
pub use error::NormalizationError;
