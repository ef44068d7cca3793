pub mod error;
pub mod record;
pub mod rows;

pub use error::{IngestError, Result};
pub use record::{Record, RecordBatch, parse_records};
pub use rows::{account_records, enrollment_records, key_column, subject_records};
