//! Rule files and document input.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use docmig_model::{Document, FieldValue};
use docmig_normalization::NormalizationPipeline;

/// Load a normalization pipeline from a JSON rule file.
pub fn load_pipeline(path: &Path) -> Result<NormalizationPipeline> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read rule file {}", path.display()))?;
    let pipeline: NormalizationPipeline = serde_json::from_str(&text)
        .with_context(|| format!("parse rule file {}", path.display()))?;
    if pipeline.is_empty() {
        tracing::warn!(path = %path.display(), "rule file contains no rules");
    }
    Ok(pipeline)
}

/// Read a JSON array of flat documents.
pub fn load_documents(path: &Path) -> Result<Vec<Document>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read documents {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("parse documents {}", path.display()))?;
    let serde_json::Value::Array(items) = value else {
        bail!("{}: expected a JSON array of documents", path.display());
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            Document::try_from(item).with_context(|| format!("document {index}"))
        })
        .collect()
}

/// Interpret a command-line schema version.
///
/// Integers become numeric versions; anything else is stored as text.
/// Surrounding whitespace is ignored in both cases.
pub fn parse_schema_version(raw: &str) -> FieldValue {
    let raw = raw.trim();
    raw.parse::<i64>()
        .map_or_else(|_| FieldValue::from(raw), FieldValue::Integer)
}
