use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::TrafficLight;
use crate::risk::{EscalationMapper, EvaluationResult};

/// Verdict for one submitted log, in the shape the dashboards consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub log_id: Uuid,
    pub risk: TrafficLight,
    /// Alert reasons joined, or the band's generic message.
    pub message: String,
    /// Band of the additive score, critical findings included.
    pub rule_risk: TrafficLight,
    /// Band from trajectory analysis: active streaks and steep slopes.
    pub trend_risk: TrafficLight,
    pub escalation_action: String,
    pub assessed_at: NaiveDateTime,
    pub details: EvaluationResult,
}

impl RiskAssessment {
    pub fn from_result(log_id: Uuid, details: EvaluationResult, assessed_at: NaiveDateTime) -> Self {
        let escalation = EscalationMapper::for_level(details.risk);
        Self {
            log_id,
            risk: escalation.label,
            message: EscalationMapper::message_for(&details),
            rule_risk: details.signals.threshold.traffic_light(),
            trend_risk: details.signals.trend.traffic_light(),
            escalation_action: escalation.escalation_action,
            assessed_at,
            details,
        }
    }

    pub fn needs_doctor(&self) -> bool {
        self.risk == TrafficLight::Red
    }
}
