use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::reading::EngineInput;

/// A daily symptom log as submitted by the patient app.
///
/// Older app versions send `pain_score` and `discharge`; newer ones send
/// `pain` and `wound_discharge`. Both shapes are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomLog {
    pub log_id: Uuid,
    pub patient_id: String,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub spo2: Option<f64>,
    #[serde(default)]
    pub heart_rate: Option<f64>,
    #[serde(default)]
    pub pain: Option<f64>,
    #[serde(default)]
    pub pain_score: Option<f64>,
    #[serde(default)]
    pub breathlessness: Option<bool>,
    #[serde(default)]
    pub wound_discharge: Option<bool>,
    #[serde(default)]
    pub discharge: Option<bool>,
    #[serde(default)]
    pub missed_doses: Option<u32>,
    #[serde(default)]
    pub antibiotics_taken: Option<bool>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl SymptomLog {
    /// Empty log for a patient; fields are filled in by the caller.
    pub fn new(patient_id: impl Into<String>) -> Self {
        Self {
            log_id: Uuid::new_v4(),
            patient_id: patient_id.into(),
            temperature: None,
            spo2: None,
            heart_rate: None,
            pain: None,
            pain_score: None,
            breathlessness: None,
            wound_discharge: None,
            discharge: None,
            missed_doses: None,
            antibiotics_taken: None,
            created_at: None,
        }
    }

    /// Map the app-level log onto the engine's canonical reading.
    ///
    /// `now` stands in for the timestamp when the log does not carry one.
    pub fn to_engine_input(&self, now: NaiveDateTime) -> EngineInput {
        let missed_doses = self.missed_doses.unwrap_or(match self.antibiotics_taken {
            Some(false) => 1,
            _ => 0,
        });

        EngineInput {
            temperature: self.temperature,
            spo2: self.spo2,
            heart_rate: self.heart_rate,
            pain: self.pain.or(self.pain_score),
            breathlessness: self.breathlessness.unwrap_or(false),
            wound_discharge: self
                .wound_discharge
                .or(self.discharge)
                .unwrap_or(false),
            missed_doses,
            timestamp: Some(self.created_at.unwrap_or(now)),
        }
    }
}
