//! Typed-row extraction for the known bulk-import shapes.
//!
//! Extraction only binds header names to struct fields; shape validation of
//! the values is the validator's job and happens before anything is handed
//! to the gateway.

use certreq_model::{AccountRecord, EnrollmentRecord, SubjectRecord};

use crate::error::{IngestError, Result};
use crate::record::{Record, RecordBatch};

fn require_headers(batch: &RecordBatch, required: &[&str]) -> Result<()> {
    let missing: Vec<String> = required
        .iter()
        .filter(|name| {
            !batch
                .headers()
                .iter()
                .any(|header| header.eq_ignore_ascii_case(name))
        })
        .map(|name| (*name).to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(IngestError::MissingHeaders { missing })
    }
}

fn field(record: &Record<'_>, name: &str) -> String {
    record.get(name).unwrap_or_default().to_string()
}

/// Extract account bulk-create rows (`name,email,password,employee_id`).
pub fn account_records(batch: &RecordBatch) -> Result<Vec<AccountRecord>> {
    require_headers(batch, &["name", "email", "password", "employee_id"])?;
    Ok(batch
        .records()
        .map(|record| AccountRecord {
            name: field(&record, "name"),
            email: field(&record, "email"),
            password: field(&record, "password"),
            employee_id: field(&record, "employee_id"),
        })
        .collect())
}

/// Extract subject bulk-create rows (`name,subject_code,teacher_id`).
pub fn subject_records(batch: &RecordBatch) -> Result<Vec<SubjectRecord>> {
    require_headers(batch, &["name", "subject_code", "teacher_id"])?;
    Ok(batch
        .records()
        .map(|record| SubjectRecord {
            name: field(&record, "name"),
            subject_code: field(&record, "subject_code"),
            teacher_id: field(&record, "teacher_id"),
        })
        .collect())
}

/// Extract enrollment rows (`email,course_code`).
pub fn enrollment_records(batch: &RecordBatch) -> Result<Vec<EnrollmentRecord>> {
    require_headers(batch, &["email", "course_code"])?;
    Ok(batch
        .records()
        .map(|record| EnrollmentRecord {
            email: field(&record, "email"),
            course_code: field(&record, "course_code"),
        })
        .collect())
}

/// Collect the values of one column, skipping unset and empty cells.
///
/// Used to drive selection-by-import: a column of emails or subject codes is
/// matched against the fetched dataset rather than submitted directly.
pub fn key_column(batch: &RecordBatch, name: &str) -> Result<Vec<String>> {
    require_headers(batch, &[name])?;
    Ok(batch
        .records()
        .filter_map(|record| {
            record
                .get(name)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        })
        .collect())
}
