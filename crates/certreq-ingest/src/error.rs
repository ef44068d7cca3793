use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("read delimited input: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required headers: {}", .missing.join(", "))]
    MissingHeaders { missing: Vec<String> },
}

pub type Result<T> = std::result::Result<T, IngestError>;
