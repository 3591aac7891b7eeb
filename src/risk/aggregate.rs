use crate::config::{ConfidenceConfig, ThresholdConfig};
use crate::models::RiskLevel;

/// Band implied by the additive score. Any critical finding overrides it.
pub fn score_band(score: u32, has_critical: bool, t: &ThresholdConfig) -> RiskLevel {
    if has_critical || score >= t.critical_score {
        RiskLevel::Critical
    } else if score >= t.warning_score {
        RiskLevel::Warning
    } else {
        RiskLevel::Normal
    }
}

/// Final verdict: the most severe of the independent sub-signals.
pub fn combine(levels: &[RiskLevel]) -> RiskLevel {
    levels.iter().copied().max().unwrap_or_default()
}

/// Data-quality facts that lower confidence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DataQuality {
    pub history_len: usize,
    pub missing_fields: usize,
    pub stale: bool,
    pub has_validation_issues: bool,
}

/// Confidence in the verdict, 0–100.
///
/// Each penalty only ever subtracts, so adding missing fields, validation
/// issues, or staleness can never raise the value.
pub fn confidence(quality: &DataQuality, c: &ConfidenceConfig) -> u8 {
    let mut value = c.base;

    if quality.history_len < c.min_history {
        value = value.saturating_sub(c.short_history_penalty);
    }

    let missing = i32::try_from(quality.missing_fields).unwrap_or(i32::MAX);
    value = value.saturating_sub(missing.saturating_mul(c.missing_field_penalty));

    if quality.stale {
        value = value.saturating_sub(c.stale_penalty);
    }
    if quality.has_validation_issues {
        value = value.saturating_sub(c.invalid_input_penalty);
    }

    value.clamp(0, 100) as u8
}
