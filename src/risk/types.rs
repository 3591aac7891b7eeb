use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{EngineInput, RiskLevel, SurgeryType, VitalField};

// ---------------------------------------------------------------------------
// Baseline
// ---------------------------------------------------------------------------

/// Patient-specific expected vitals (medians over recent stable days).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Baseline {
    pub heart_rate: Option<f64>,
    pub temperature: Option<f64>,
    pub spo2: Option<f64>,
}

// ---------------------------------------------------------------------------
// ScoreCard
// ---------------------------------------------------------------------------

/// Additive score plus the reasons that produced it, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreCard {
    pub score: u32,
    pub reasons: Vec<String>,
}

impl ScoreCard {
    pub fn add(&mut self, points: u32, reason: impl Into<String>) {
        self.score += points;
        self.reasons.push(reason.into());
    }

    pub fn is_empty(&self) -> bool {
        self.score == 0 && self.reasons.is_empty()
    }
}

// ---------------------------------------------------------------------------
// CriticalFinding
// ---------------------------------------------------------------------------

/// Single-signal conditions that force CRITICAL irrespective of score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CriticalFinding {
    Hypoxia,
    Breathlessness,
}

// ---------------------------------------------------------------------------
// SignalBreakdown & EvaluationResult
// ---------------------------------------------------------------------------

/// Severity implied by each independent layer. The verdict is their maximum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalBreakdown {
    /// Band of the additive score (streak points included), with critical
    /// short-circuits.
    pub threshold: RiskLevel,
    /// Trajectory band: an active streak or a steep slope.
    pub trend: RiskLevel,
    /// Injected predictive model.
    pub predictive: RiskLevel,
}

impl SignalBreakdown {
    pub fn levels(&self) -> [RiskLevel; 3] {
        [self.threshold, self.trend, self.predictive]
    }
}

/// Outcome of one evaluation. A new evaluation always yields a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub risk: RiskLevel,
    pub score: u32,
    /// 0–100.
    pub confidence: u8,
    pub alerts: Vec<String>,
    pub missing_fields: Vec<VitalField>,
    pub recommended_action: String,
    pub signals: SignalBreakdown,
    pub baseline: Option<Baseline>,
}

impl EvaluationResult {
    /// Caller-facing message: the alert reasons when any fired, else `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        if self.alerts.is_empty() {
            fallback.to_string()
        } else {
            self.alerts.join("; ")
        }
    }
}

// ---------------------------------------------------------------------------
// RiskEvaluator trait
// ---------------------------------------------------------------------------

/// The risk engine contract. Implementations are pure: no I/O, no shared writes.
pub trait RiskEvaluator {
    /// Evaluate a reading against the patient's history at an explicit instant.
    ///
    /// `history` is ordered oldest to newest. When `baseline` is `None` it is
    /// derived from `history`.
    fn evaluate_at(
        &self,
        reading: Option<&EngineInput>,
        history: &[EngineInput],
        surgery_type: SurgeryType,
        baseline: Option<&Baseline>,
        now: NaiveDateTime,
    ) -> EvaluationResult;

    /// Evaluate at the current local time.
    fn evaluate(
        &self,
        reading: Option<&EngineInput>,
        history: &[EngineInput],
        surgery_type: SurgeryType,
        baseline: Option<&Baseline>,
    ) -> EvaluationResult {
        self.evaluate_at(
            reading,
            history,
            surgery_type,
            baseline,
            chrono::Local::now().naive_local(),
        )
    }
}
