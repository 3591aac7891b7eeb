//! Post-operative risk evaluation engine.
//!
//! Pure and synchronous: every call takes a reading plus a history snapshot
//! and returns a fresh [`EvaluationResult`]. Fetching history and persisting
//! the verdict belong to the caller (see [`crate::monitor`]).

pub mod aggregate;
pub mod baseline;
pub mod engine;
pub mod escalation;
pub mod helpers;
pub mod messages;
pub mod predictive;
pub mod threshold;
pub mod trend;
pub mod types;
pub mod validation;

pub use baseline::compute_baseline;
pub use engine::DefaultRiskEngine;
pub use escalation::{Escalation, EscalationMapper};
pub use predictive::{NoopPredictor, PredictiveModel};
pub use types::{Baseline, EvaluationResult, RiskEvaluator, SignalBreakdown};
