use async_trait::async_trait;
use chrono::{DateTime, Utc};

use certreq_model::{
    AccountRecord, CertificateRequest, EnrollmentRecord, ItemResult, RequestId, RequestItem,
    Student, SubjectId, SubjectRecord,
};

use crate::error::GatewayError;

/// The remote collaborator the engine submits through.
///
/// Fetches carry replace-the-dataset semantics. Bulk creates are opaque
/// beyond pass/fail; only the batch request submit returns per-item results.
#[async_trait]
pub trait RequestGateway: Send + Sync {
    /// Students enrolled in a subject.
    async fn fetch_enrolled_students(
        &self,
        subject: &SubjectId,
    ) -> Result<Vec<Student>, GatewayError>;

    /// Certificate requests raised for a subject.
    async fn fetch_subject_requests(
        &self,
        subject: &SubjectId,
    ) -> Result<Vec<CertificateRequest>, GatewayError>;

    /// Bulk-create user accounts from validated import rows.
    async fn create_accounts(&self, accounts: &[AccountRecord]) -> Result<(), GatewayError>;

    /// Bulk-create subjects from validated import rows.
    async fn create_subjects(&self, subjects: &[SubjectRecord]) -> Result<(), GatewayError>;

    /// Bulk-enroll students into subjects from validated import rows.
    async fn create_enrollments(
        &self,
        enrollments: &[EnrollmentRecord],
    ) -> Result<(), GatewayError>;

    /// Submit one batch of certificate requests. The response holds one
    /// result per input item; order is not guaranteed to match.
    async fn submit_requests(
        &self,
        items: &[RequestItem],
    ) -> Result<Vec<ItemResult>, GatewayError>;

    /// Move the due date of every open request in a subject.
    async fn update_due_date(
        &self,
        subject: &SubjectId,
        due_date: DateTime<Utc>,
    ) -> Result<(), GatewayError>;

    /// Upload one certificate file for a request.
    async fn upload_certificate(
        &self,
        request: &RequestId,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), GatewayError>;
}
