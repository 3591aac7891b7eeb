//! One-shot evaluation requests as exchanged with the command-line front end.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{EngineInput, SurgeryType};
use crate::risk::{Baseline, Escalation, EscalationMapper, EvaluationResult, RiskEvaluator};

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Failed to read request ({0}): {1}")]
    Read(String, String),

    #[error("Malformed request: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A reading plus everything the engine needs to judge it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationRequest {
    pub reading: Option<EngineInput>,
    /// Prior readings, oldest first.
    pub history: Vec<EngineInput>,
    pub surgery_type: SurgeryType,
    pub baseline: Option<Baseline>,
    /// Evaluation clock. Defaults to local now.
    pub evaluated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResponse {
    pub result: EvaluationResult,
    /// Coarse 0/1/2 severity for consumers that only chart a band.
    pub band: u8,
    pub message: String,
    pub escalation: Escalation,
}

impl EvaluationRequest {
    pub fn from_json(json: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Run the request through `engine`. `now` is used when the request
    /// carries no clock of its own.
    pub fn evaluate<E: RiskEvaluator + ?Sized>(
        &self,
        engine: &E,
        now: NaiveDateTime,
    ) -> EvaluationResponse {
        let result = engine.evaluate_at(
            self.reading.as_ref(),
            &self.history,
            self.surgery_type,
            self.baseline.as_ref(),
            self.evaluated_at.unwrap_or(now),
        );
        EvaluationResponse {
            band: result.risk.band(),
            message: EscalationMapper::message_for(&result),
            escalation: EscalationMapper::for_level(result.risk),
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::{RiskLevel, TrafficLight};
    use crate::risk::DefaultRiskEngine;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 4, 2)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn parses_minimal_request() {
        let request = EvaluationRequest::from_json(r#"{"reading": {"spo2": 88}}"#).unwrap();
        assert_eq!(request.reading.unwrap().spo2, Some(88.0));
        assert!(request.history.is_empty());
        assert_eq!(request.surgery_type, SurgeryType::General);
        assert!(request.baseline.is_none());
    }

    #[test]
    fn rejects_unknown_surgery_type() {
        let err = EvaluationRequest::from_json(r#"{"surgery_type": "dental"}"#).unwrap_err();
        assert!(matches!(err, RequestError::Parse(_)));
    }

    #[test]
    fn hypoxic_request_escalates_to_red() {
        let request = EvaluationRequest::from_json(
            r#"{
                "reading": {"temperature": 37.0, "spo2": 86, "heart_rate": 90, "pain": 3},
                "surgery_type": "cardiac",
                "evaluated_at": "2026-04-02T12:00:00"
            }"#,
        )
        .unwrap();
        let response = request.evaluate(&DefaultRiskEngine::default(), noon());

        assert_eq!(response.result.risk, RiskLevel::Critical);
        assert_eq!(response.escalation.label, TrafficLight::Red);
        assert_eq!(response.band, 2);
        assert!(response.message.starts_with("CRITICAL: Oxygen dangerously low"));
    }

    #[test]
    fn empty_request_reports_no_data() {
        let response = EvaluationRequest::default().evaluate(&DefaultRiskEngine::default(), noon());
        assert_eq!(response.result.alerts, vec!["No data provided"]);
        assert_eq!(response.result.confidence, 0);
        assert_eq!(response.escalation.label, TrafficLight::Green);
    }

    #[test]
    fn response_serializes_with_wire_labels() {
        let request = EvaluationRequest {
            reading: Some(EngineInput {
                temperature: Some(38.4),
                spo2: Some(97.0),
                heart_rate: Some(115.0),
                pain: Some(2.0),
                timestamp: Some(noon()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let response = request.evaluate(&DefaultRiskEngine::default(), noon());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["result"]["risk"], "WARNING");
        assert_eq!(json["escalation"]["label"], "YELLOW");
        assert_eq!(json["result"]["score"], 4);
        assert_eq!(json["band"], 1);
    }
}
