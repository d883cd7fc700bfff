use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use docmig_normalization::SqlLiteralStyle;
use docmig_normalization::sql::insert_statement;
use tracing::{Level, debug, info, info_span, trace};

use crate::cli::{NormalizeArgs, SqlArgs};
use crate::config::{load_documents, load_pipeline, parse_schema_version};
use crate::logging::redact_value;

/// Totals for one `normalize` run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeResult {
    pub documents: usize,
    pub changed_documents: usize,
    /// Number of documents in which each field changed.
    pub field_changes: BTreeMap<String, usize>,
    pub output: Option<PathBuf>,
}

pub fn run_normalize(args: &NormalizeArgs) -> Result<NormalizeResult> {
    let span = info_span!("normalize", input = %args.input.display());
    let _guard = span.enter();

    let pipeline = load_pipeline(&args.rules)?
        .with_schema_version(args.schema_version.as_deref().map(parse_schema_version));
    let mut documents = load_documents(&args.input)?;
    info!(documents = documents.len(), rules = pipeline.len(), "loaded input");

    let mut result = NormalizeResult {
        documents: documents.len(),
        output: args.output.clone(),
        ..NormalizeResult::default()
    };
    for (index, doc) in documents.iter_mut().enumerate() {
        let outcome = pipeline
            .apply(doc)
            .with_context(|| format!("normalize document {index}"))?;
        debug!(index, changed = ?outcome.changed_fields, "document normalized");
        if tracing::enabled!(Level::TRACE) {
            let json = serde_json::to_string(doc)?;
            trace!(index, document = %redact_value(&json), "document contents");
        }
        if outcome.changed() {
            result.changed_documents += 1;
        }
        for field in outcome.changed_fields {
            *result.field_changes.entry(field).or_insert(0) += 1;
        }
    }

    let mut rendered = serde_json::to_string_pretty(&documents)?;
    rendered.push('\n');
    match &args.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("write output {}", path.display()))?,
        None => io::stdout()
            .lock()
            .write_all(rendered.as_bytes())
            .context("write output to stdout")?,
    }
    info!(
        changed = result.changed_documents,
        total = result.documents,
        "normalization complete"
    );
    Ok(result)
}

/// Render one `INSERT` statement per document.
pub fn run_sql(args: &SqlArgs) -> Result<Vec<String>> {
    let span = info_span!("sql", table = %args.table);
    let _guard = span.enter();

    let style = if args.escape {
        SqlLiteralStyle::Escaped
    } else {
        SqlLiteralStyle::Raw
    };
    let documents = load_documents(&args.input)?;
    info!(documents = documents.len(), fields = args.fields.len(), "rendering statements");
    Ok(documents
        .iter()
        .map(|doc| insert_statement(&args.table, doc, &args.fields, style))
        .collect())
}

/// Write statements one per line, reporting a closed or failing writer.
pub fn write_statements<W: Write>(mut writer: W, statements: &[String]) -> Result<()> {
    for statement in statements {
        writeln!(writer, "{statement}").context("write statement")?;
    }
    writer.flush().context("flush statements")
}
