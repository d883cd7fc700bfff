//! Declarative normalization pipelines.
//!
//! Migration scripts usually apply the same handful of patches to every
//! document in a collection. A [`NormalizationPipeline`] captures that list
//! once, can be loaded from a rule file, and is applied per document.

use docmig_model::{Document, FieldValue};
use serde::{Deserialize, Serialize};

use crate::error::NormalizationError;
use crate::fields::{replace_nothing_with_value, replace_null_with_value};
use crate::schema::{SCHEMA_FIELD, update_schema_version};

/// A single field-level patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum NormalizationRule {
    /// Replace the sentinel text `"null"` on a field that must exist.
    ReplaceNull { field: String, value: FieldValue },
    /// Add a field when the key is absent.
    FillMissing { field: String, value: FieldValue },
    /// Record the schema version; a missing version is a no-op.
    StampSchema {
        #[serde(default)]
        version: Option<FieldValue>,
    },
}

impl NormalizationRule {
    /// Field written by this rule.
    pub fn target_field(&self) -> &str {
        match self {
            NormalizationRule::ReplaceNull { field, .. }
            | NormalizationRule::FillMissing { field, .. } => field.as_str(),
            NormalizationRule::StampSchema { .. } => SCHEMA_FIELD,
        }
    }

    /// Apply this rule to `doc`.
    pub fn apply(&self, doc: &mut Document) -> Result<(), NormalizationError> {
        match self {
            NormalizationRule::ReplaceNull { field, value } => {
                replace_null_with_value(doc, field, value.clone())
            }
            NormalizationRule::FillMissing { field, value } => {
                replace_nothing_with_value(doc, field, value.clone());
                Ok(())
            }
            NormalizationRule::StampSchema { version } => {
                update_schema_version(doc, version.clone());
                Ok(())
            }
        }
    }
}

/// Ordered list of rules applied to each document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizationPipeline {
    #[serde(default)]
    pub rules: Vec<NormalizationRule>,
}

impl NormalizationPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rule(mut self, rule: NormalizationRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn push(&mut self, rule: NormalizationRule) {
        self.rules.push(rule);
    }

    /// Replace any schema stamp with one for `version`.
    ///
    /// A `None` version keeps the existing stamp rules.
    #[must_use]
    pub fn with_schema_version(mut self, version: Option<FieldValue>) -> Self {
        if let Some(version) = version {
            self.rules
                .retain(|rule| !matches!(rule, NormalizationRule::StampSchema { .. }));
            self.rules.push(NormalizationRule::StampSchema {
                version: Some(version),
            });
        }
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule to `doc` in declaration order.
    ///
    /// The first failing rule stops processing; rules before it have
    /// already been applied.
    pub fn apply(&self, doc: &mut Document) -> Result<NormalizationOutcome, NormalizationError> {
        let mut outcome = NormalizationOutcome::default();
        for rule in &self.rules {
            let field = rule.target_field();
            let before = doc.get(field).cloned();
            rule.apply(doc)?;
            if !same_value(before.as_ref(), doc.get(field)) {
                outcome.record(field);
            }
        }
        tracing::debug!(
            rules = self.rules.len(),
            changed = outcome.changed_fields.len(),
            "normalized document"
        );
        Ok(outcome)
    }
}

/// Fields modified by one pipeline application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizationOutcome {
    pub changed_fields: Vec<String>,
}

impl NormalizationOutcome {
    pub fn changed(&self) -> bool {
        !self.changed_fields.is_empty()
    }

    fn record(&mut self, field: &str) {
        if !self.changed_fields.iter().any(|known| known == field) {
            self.changed_fields.push(field.to_string());
        }
    }
}

/// Value equality that treats identical float bit patterns (NaN) as equal.
fn same_value(a: Option<&FieldValue>, b: Option<&FieldValue>) -> bool {
    match (a, b) {
        (Some(FieldValue::Float(x)), Some(FieldValue::Float(y))) => x.to_bits() == y.to_bits(),
        _ => a == b,
    }
}
