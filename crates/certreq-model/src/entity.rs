use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ids::{RequestId, StudentId, SubjectId};
use crate::ModelError;

/// Anything with a stable, unique identity usable for selection and outcome
/// tracking. Parsed import records do NOT implement this: they have no
/// server-assigned id until the server has accepted them.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Lifecycle state of a certificate request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Completed,
    Rejected,
    NoCertificate,
    UnderReview,
}

impl RequestStatus {
    pub const ALL: &'static [RequestStatus] = &[
        RequestStatus::Pending,
        RequestStatus::Completed,
        RequestStatus::Rejected,
        RequestStatus::NoCertificate,
        RequestStatus::UnderReview,
    ];

    /// Canonical wire spelling of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Completed => "completed",
            RequestStatus::Rejected => "rejected",
            RequestStatus::NoCertificate => "no_certificate",
            RequestStatus::UnderReview => "under_review",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(RequestStatus::Pending),
            "completed" => Ok(RequestStatus::Completed),
            "rejected" => Ok(RequestStatus::Rejected),
            "no_certificate" => Ok(RequestStatus::NoCertificate),
            "under_review" => Ok(RequestStatus::UnderReview),
            other => Err(ModelError::UnknownStatus(other.to_string())),
        }
    }
}

/// An enrolled student as returned by the roster fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub roll_number: String,
}

impl Identifiable for Student {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

/// A subject (course) a faculty member coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
    pub subject_code: String,
    pub teacher_id: Option<String>,
}

impl Identifiable for Subject {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

/// One certificate request, joined with its student and subject as the
/// status board endpoint returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateRequest {
    pub id: RequestId,
    pub student: Student,
    pub subject: Subject,
    pub status: RequestStatus,
    #[serde(default)]
    pub verified_total_marks: Option<i64>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Identifiable for CertificateRequest {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}
