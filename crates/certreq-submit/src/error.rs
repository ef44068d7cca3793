use chrono::NaiveDate;
use thiserror::Error;

/// Failures of the gateway collaborator itself. A gateway error carries no
/// per-item breakdown and must never touch per-item state.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("gateway configuration: {0}")]
    Configuration(String),
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("unexpected status {status} from {endpoint}")]
    BadStatus { endpoint: String, status: u16 },
    #[error("malformed response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Failures of a batch submission attempt.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("nothing is selected for submission")]
    EmptySelection,
    #[error("due date {0} is earlier than today")]
    DueDateInPast(NaiveDate),
    #[error("invalid due date: {0:?}")]
    InvalidDueDate(String),
    #[error("a batch submission is already in flight")]
    InFlight,
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

pub type Result<T> = std::result::Result<T, SubmitError>;
