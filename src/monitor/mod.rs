//! Collaborators around the risk engine: the log store that supplies
//! history and records verdicts, and the submit-log flow that ties them
//! together.

pub mod service;
pub mod store;
pub mod types;

pub use service::{fetch_history, RecoveryMonitor};
pub use store::{InMemoryLogStore, LogStore};
pub use types::RiskAssessment;

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Log not found: {0}")]
    LogNotFound(Uuid),

    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    #[error("Internal lock failed")]
    LockFailed,
}

#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
