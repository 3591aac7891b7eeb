use serde::{Deserialize, Serialize};

use crate::models::{RiskLevel, TrafficLight};

use super::types::EvaluationResult;

/// What the care team and patient see for a severity band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Escalation {
    pub label: TrafficLight,
    /// Generic patient message, used only when no alert fired.
    pub message: String,
    /// Action recorded on the evaluation result.
    pub recommended_action: String,
    /// Operational instruction for the care team.
    pub escalation_action: String,
}

/// Maps severity bands to labels, messages, and escalation instructions.
pub struct EscalationMapper;

impl EscalationMapper {
    pub const NO_DATA_ACTION: &'static str = "Provide patient data";

    pub fn for_level(level: RiskLevel) -> Escalation {
        match level {
            RiskLevel::Critical => Escalation {
                label: TrafficLight::Red,
                message: "High risk detected! A doctor has been notified. \
                          Please seek immediate attention."
                    .to_string(),
                recommended_action: "Immediate medical attention required".to_string(),
                escalation_action: "Doctor notified via dashboard. \
                                    Fallback to caregiver if no response in 1 hour."
                    .to_string(),
            },
            RiskLevel::Warning => Escalation {
                label: TrafficLight::Yellow,
                message: "Minor issues detected. Please rest more and monitor closely."
                    .to_string(),
                recommended_action: "Doctor review within 24 hours".to_string(),
                escalation_action: "Increased monitoring requested. \
                                    Check temperature every 4 hours."
                    .to_string(),
            },
            RiskLevel::Normal => Escalation {
                label: TrafficLight::Green,
                message: "Your recovery is on track. Keep following the plan!".to_string(),
                recommended_action: "Continue routine monitoring".to_string(),
                escalation_action: "Continue monitoring.".to_string(),
            },
        }
    }

    /// Caller-facing message: the concatenated alert reasons, or the band's
    /// generic message when the engine raised none.
    pub fn message_for(result: &EvaluationResult) -> String {
        result.message_or(&Self::for_level(result.risk).message)
    }
}
