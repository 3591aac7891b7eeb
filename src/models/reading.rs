use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::enums::VitalField;

/// A single normalized reading as consumed by the risk engine.
///
/// Vital signs are optional: an absent value is a missing-data concern and is
/// never replaced by a default. History entries share this shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineInput {
    /// Body temperature in °C.
    pub temperature: Option<f64>,
    /// Peripheral oxygen saturation, percent.
    pub spo2: Option<f64>,
    /// Beats per minute.
    pub heart_rate: Option<f64>,
    /// Self-reported pain, 0–10.
    pub pain: Option<f64>,
    pub breathlessness: bool,
    pub wound_discharge: bool,
    pub missed_doses: u32,
    pub timestamp: Option<NaiveDateTime>,
}

impl EngineInput {
    pub fn value(&self, field: VitalField) -> Option<f64> {
        match field {
            VitalField::Temperature => self.temperature,
            VitalField::Spo2 => self.spo2,
            VitalField::Pain => self.pain,
            VitalField::HeartRate => self.heart_rate,
        }
    }

    /// Required vital fields that are absent, in canonical order.
    pub fn missing_fields(&self) -> Vec<VitalField> {
        VitalField::REQUIRED
            .into_iter()
            .filter(|f| self.value(*f).is_none())
            .collect()
    }

    /// True when the reading carries no clinical content at all.
    pub fn is_empty(&self) -> bool {
        VitalField::REQUIRED
            .iter()
            .all(|f| self.value(*f).is_none())
            && !self.breathlessness
            && !self.wound_discharge
            && self.missed_doses == 0
    }

    /// Age of the reading in hours relative to `now`. `None` without a timestamp.
    pub fn hours_since(&self, now: NaiveDateTime) -> Option<f64> {
        self.timestamp
            .map(|ts| (now - ts).num_seconds() as f64 / 3600.0)
    }
}
