pub mod entity;
pub mod error;
pub mod ids;
pub mod processing;

pub use entity::{CertificateRequest, Identifiable, RequestStatus, Student, Subject};
pub use error::{ModelError, Result};
pub use ids::{RequestId, StudentId, SubjectId};
pub use processing::{
    AccountRecord, BatchOutcome, BatchSubmitRequest, BatchSubmitResponse, EnrolledStudentsEnvelope,
    EnrollmentRecord, ItemResult, RequestItem, SubjectRecord, SubjectRequestsEnvelope,
    SubmissionOutcome,
};
