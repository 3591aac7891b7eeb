use crate::config::ThresholdConfig;
use crate::models::EngineInput;

use super::helpers::median;
use super::types::Baseline;

/// Median baseline from recent stable days.
///
/// Takes the last `window` entries of `history` (oldest first) and keeps the
/// stable ones: no fever and adequate oxygenation. An entry missing either
/// value is not disqualified by it. If no entry is stable the whole window is
/// used, so an unwell patient still gets a baseline. Empty history has none.
pub fn compute_baseline(
    history: &[EngineInput],
    window: usize,
    thresholds: &ThresholdConfig,
) -> Option<Baseline> {
    if history.is_empty() || window == 0 {
        return None;
    }

    let recent = &history[history.len().saturating_sub(window)..];
    let stable: Vec<&EngineInput> = recent
        .iter()
        .filter(|h| is_stable_day(h, thresholds))
        .collect();
    let basis: Vec<&EngineInput> = if stable.is_empty() {
        recent.iter().collect()
    } else {
        stable
    };

    let med = |get: fn(&EngineInput) -> Option<f64>| {
        let values: Vec<f64> = basis.iter().filter_map(|h| get(h)).collect();
        median(&values)
    };

    Some(Baseline {
        heart_rate: med(|h| h.heart_rate),
        temperature: med(|h| h.temperature),
        spo2: med(|h| h.spo2),
    })
}

fn is_stable_day(entry: &EngineInput, thresholds: &ThresholdConfig) -> bool {
    let afebrile = entry.temperature.map_or(true, |t| t < thresholds.high_temp);
    let oxygenated = entry.spo2.map_or(true, |s| s >= thresholds.low_spo2);
    afebrile && oxygenated
}
