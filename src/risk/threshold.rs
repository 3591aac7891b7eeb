//! Single-reading threshold scoring.
//!
//! Each function looks at one reading (plus, for the adjustments, the
//! patient's baseline or surgery type) and returns an additive [`ScoreCard`].
//! The engine sums the cards; none of them decide the verdict on their own
//! except [`critical_findings`].

use crate::config::ThresholdConfig;
use crate::models::{EngineInput, SurgeryType};

use super::messages::AlertMessages;
use super::types::{Baseline, CriticalFinding, ScoreCard};

/// Sub-score returned when oxygenation is critically low.
pub const HYPOXIA_SCORE: u32 = 10;

/// Physiological early-warning score over temperature, SpO2, and heart rate.
///
/// Critical hypoxia short-circuits: the card holds only the hypoxia entry and
/// every other contribution to this sub-score is discarded.
pub fn physiological_score(reading: &EngineInput, t: &ThresholdConfig) -> ScoreCard {
    if reading.spo2.is_some_and(|s| s < t.critical_spo2) {
        return ScoreCard {
            score: HYPOXIA_SCORE,
            reasons: vec![AlertMessages::CRITICAL_HYPOXIA.to_string()],
        };
    }

    let mut card = ScoreCard::default();

    if let Some(temp) = reading.temperature {
        if temp >= t.very_high_temp {
            card.add(3, AlertMessages::high_fever(t.very_high_temp));
        } else if temp >= t.high_temp {
            card.add(2, AlertMessages::fever(t.high_temp));
        }
    }

    if reading.spo2.is_some_and(|s| s < t.low_spo2) {
        card.add(3, AlertMessages::LOW_OXYGEN);
    }

    if let Some(hr) = reading.heart_rate {
        if hr >= t.severe_tachycardia {
            card.add(3, AlertMessages::SEVERE_TACHYCARDIA);
        } else if hr >= t.tachycardia {
            card.add(2, AlertMessages::TACHYCARDIA);
        }
    }

    card
}

/// Patient-reported symptom score: pain, wound discharge, missed medication.
pub fn symptom_score(reading: &EngineInput, t: &ThresholdConfig) -> ScoreCard {
    let mut card = ScoreCard::default();

    if let Some(pain) = reading.pain {
        if pain >= t.extreme_pain {
            card.add(3, AlertMessages::EXTREME_PAIN);
        } else if pain >= t.severe_pain {
            card.add(2, AlertMessages::SEVERE_PAIN);
        }
    }

    if reading.wound_discharge {
        card.add(3, AlertMessages::WOUND_INFECTION);
    }

    if reading.missed_doses >= t.missed_dose_limit {
        card.add(2, AlertMessages::MISSED_DOSES);
    }

    card
}

/// Conditions that force a CRITICAL verdict regardless of score.
pub fn critical_findings(reading: &EngineInput, t: &ThresholdConfig) -> Vec<CriticalFinding> {
    let mut findings = Vec::new();
    if reading.spo2.is_some_and(|s| s < t.critical_spo2) {
        findings.push(CriticalFinding::Hypoxia);
    }
    if reading.breathlessness {
        findings.push(CriticalFinding::Breathlessness);
    }
    findings
}

impl CriticalFinding {
    pub fn alert(self) -> &'static str {
        match self {
            Self::Hypoxia => AlertMessages::CRITICAL_OXYGEN,
            Self::Breathlessness => AlertMessages::CRITICAL_BREATHING,
        }
    }
}

/// One point when heart rate sits well above the patient's own baseline.
pub fn baseline_deviation(
    reading: &EngineInput,
    baseline: Option<&Baseline>,
    t: &ThresholdConfig,
) -> ScoreCard {
    let mut card = ScoreCard::default();
    let baseline_hr = baseline.and_then(|b| b.heart_rate);
    if let (Some(hr), Some(base)) = (reading.heart_rate, baseline_hr) {
        if hr > base + t.baseline_hr_delta {
            card.add(1, AlertMessages::HR_ABOVE_BASELINE);
        }
    }
    card
}

/// Surgery-specific adjustment. Cardiac patients tolerate less desaturation.
pub fn surgery_adjustment(
    reading: &EngineInput,
    surgery_type: SurgeryType,
    t: &ThresholdConfig,
) -> ScoreCard {
    let mut card = ScoreCard::default();
    if surgery_type == SurgeryType::Cardiac && reading.spo2.is_some_and(|s| s < t.cardiac_spo2) {
        card.add(1, AlertMessages::CARDIAC_OXYGEN);
    }
    card
}
