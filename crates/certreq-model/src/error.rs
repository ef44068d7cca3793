use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid student id: {0:?}")]
    InvalidStudentId(String),
    #[error("invalid subject id: {0:?}")]
    InvalidSubjectId(String),
    #[error("invalid request id: {0:?}")]
    InvalidRequestId(String),
    #[error("unknown request status: {0:?}")]
    UnknownStatus(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
