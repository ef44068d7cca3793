//! Wire contracts for the gateway collaborator and the outcome types the
//! reconciler derives from a batch response.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{CertificateRequest, Student};
use crate::ids::{StudentId, SubjectId};

/// Response envelope for the enrolled-student roster fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrolledStudentsEnvelope {
    pub enrolled_students: Vec<Student>,
}

/// Response envelope for the per-subject request board fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectRequestsEnvelope {
    pub requests: Vec<CertificateRequest>,
}

/// Validated bulk-create record for a user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub name: String,
    pub email: String,
    pub password: String,
    pub employee_id: String,
}

/// Validated bulk-create record for a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRecord {
    pub name: String,
    pub subject_code: String,
    pub teacher_id: String,
}

/// Validated bulk-create record enrolling a student into a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentRecord {
    pub email: String,
    pub course_code: String,
}

/// One item of a batched certificate-request submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestItem {
    pub target_id: StudentId,
    pub scope_id: SubjectId,
    pub due_date: DateTime<Utc>,
}

/// Request body of the batch submit call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSubmitRequest {
    pub items: Vec<RequestItem>,
}

/// Per-item result row of a batch response. The server does not guarantee
/// result order, so consumers must match rows to inputs by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResult {
    pub target_id: StudentId,
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// Response body of the batch submit call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSubmitResponse {
    pub results: Vec<ItemResult>,
}

/// Final per-item outcome after reconciling a batch response against the
/// submitted selection. Created in bulk when the response arrives and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionOutcome {
    pub target_id: StudentId,
    pub succeeded: bool,
    pub message: String,
}

/// Reconciled view of one batch submission.
///
/// The three id sets partition the submitted selection: every submitted id is
/// in exactly one of `succeeded`, `failed`, or `unresolved`. `unresolved`
/// holds ids the response failed to account for; they are never treated as
/// succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub outcomes: Vec<SubmissionOutcome>,
    pub succeeded: BTreeSet<StudentId>,
    pub failed: BTreeSet<StudentId>,
    pub unresolved: BTreeSet<StudentId>,
}

impl BatchOutcome {
    /// Total number of ids accounted for across the three sets.
    pub fn accounted(&self) -> usize {
        self.succeeded.len() + self.failed.len() + self.unresolved.len()
    }

    /// True when every submitted item succeeded.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty() && self.unresolved.is_empty()
    }

    /// Ids that should be retained for correction and retry.
    pub fn retryable(&self) -> impl Iterator<Item = &StudentId> {
        self.failed.iter().chain(self.unresolved.iter())
    }
}
