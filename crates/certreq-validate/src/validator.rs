use std::collections::BTreeMap;

use chrono::NaiveDate;

use certreq_ingest::{Record, RecordBatch};

use crate::schema::{FieldKind, RecordSchema};

/// Field name -> human-readable message for one failing record.
pub type FieldErrors = BTreeMap<String, String>;

/// File extensions the upload forms accept.
pub const ACCEPTED_FILE_EXTENSIONS: &[&str] = &["csv", "pdf", "xls", "xlsx"];

/// Outcome of validating a whole batch.
///
/// Validation is fail-closed: a single failing record withholds the entire
/// batch from submission, unlike the server-driven partial failure that can
/// happen after submission.
#[derive(Debug, Clone, Default)]
pub struct BatchValidation {
    /// Indices of records that passed every rule.
    pub valid: Vec<usize>,
    /// Failing records, keyed by record index then field name.
    pub errors: BTreeMap<usize, FieldErrors>,
}

impl BatchValidation {
    /// True when the batch may be handed to the gateway.
    pub fn is_submittable(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.values().map(BTreeMap::len).sum()
    }
}

/// Validate a single record against a schema.
///
/// Returns the field -> message map on failure so a caller can highlight the
/// exact offending inputs.
pub fn validate_record(record: &Record<'_>, schema: &RecordSchema) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    for rule in schema.fields() {
        let value = record.get(&rule.name).map(str::trim).filter(|v| !v.is_empty());
        match value {
            None => {
                if rule.required {
                    errors.insert(rule.name.clone(), "is required".to_string());
                }
            }
            Some(value) => {
                if let Some(message) = shape_error(rule.kind, value) {
                    errors.insert(rule.name.clone(), message);
                }
            }
        }
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validate every record of a batch. See [`BatchValidation`] for the
/// fail-closed gate.
pub fn validate_batch(batch: &RecordBatch, schema: &RecordSchema) -> BatchValidation {
    let mut validation = BatchValidation::default();
    for record in batch.records() {
        match validate_record(&record, schema) {
            Ok(()) => validation.valid.push(record.index()),
            Err(errors) => {
                validation.errors.insert(record.index(), errors);
            }
        }
    }
    tracing::debug!(
        records = batch.len(),
        failing = validation.errors.len(),
        "validated import batch"
    );
    validation
}

fn shape_error(kind: FieldKind, value: &str) -> Option<String> {
    match kind {
        FieldKind::Text => None,
        FieldKind::Email => {
            if is_email_shaped(value) {
                None
            } else {
                Some("must be a valid email address".to_string())
            }
        }
        FieldKind::Date => {
            if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok() {
                None
            } else {
                Some("must be a date in YYYY-MM-DD format".to_string())
            }
        }
        FieldKind::FileRef => {
            if has_accepted_extension(value) {
                None
            } else {
                Some(format!(
                    "must reference a {} file",
                    ACCEPTED_FILE_EXTENSIONS.join("/")
                ))
            }
        }
    }
}

fn is_email_shaped(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if value.chars().any(char::is_whitespace) || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

fn has_accepted_extension(value: &str) -> bool {
    let Some((stem, extension)) = value.rsplit_once('.') else {
        return false;
    };
    !stem.is_empty()
        && ACCEPTED_FILE_EXTENSIONS
            .iter()
            .any(|accepted| extension.eq_ignore_ascii_case(accepted))
}
