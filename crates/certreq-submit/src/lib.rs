//! Batch submission for the certificate request engine.
//!
//! - **Due dates** (`due`): calendar floor checks and wire-instant conversion
//! - **Gateway** (`gateway`, `http`): the async collaborator contract and its
//!   reqwest binding
//! - **Reconciliation** (`reconcile`, `submitter`): id-matched three-way
//!   outcome partitioning with a single-flight dispatch guard

pub mod due;
pub mod error;
pub mod gateway;
pub mod http;
pub mod reconcile;
pub mod submitter;

pub use due::{DEFAULT_DUE_DAYS, DueDate};
pub use error::{GatewayError, Result, SubmitError};
pub use gateway::RequestGateway;
pub use http::{GatewayConfig, HttpGateway, default_zone_offset};
pub use reconcile::{UNRESOLVED_MESSAGE, reconcile};
pub use submitter::{BatchSubmitter, SubmitParams};
