//! Trajectory detection over the patient's log history.
//!
//! Two triggers for the same concern. The streak rules (sustained fever,
//! three strictly rising pain scores) add points to the score, and an active
//! streak marks the trajectory as WARNING. The slope rules fit a
//! least-squares line over the most recent entries and escalate to WARNING on
//! their own. Either can fire without the other.

use crate::config::{ThresholdConfig, TrendConfig};
use crate::models::{EngineInput, RiskLevel};

use super::helpers::{least_squares_slope, strictly_rising};
use super::messages::AlertMessages;
use super::types::ScoreCard;

/// Slope fit over recent history and the escalation it implies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlopeSignal {
    pub pain_slope: Option<f64>,
    pub temperature_slope: Option<f64>,
    pub level: RiskLevel,
    pub reasons: Vec<String>,
}

/// Streak findings: points for the score, plus the trajectory band they imply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StreakSignal {
    pub penalty: ScoreCard,
    /// WARNING while a streak is still active in the current reading.
    pub level: RiskLevel,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendAnalysis {
    pub streak: StreakSignal,
    pub slope: SlopeSignal,
}

impl TrendAnalysis {
    /// Band implied by trajectory analysis as a whole.
    pub fn level(&self) -> RiskLevel {
        self.streak.level.max(self.slope.level)
    }
}

/// Run both trend detectors. History shorter than `min_history` yields nothing.
pub fn analyze_trends(
    history: &[EngineInput],
    current: &EngineInput,
    trend: &TrendConfig,
    thresholds: &ThresholdConfig,
) -> TrendAnalysis {
    if history.len() < trend.min_history {
        return TrendAnalysis::default();
    }
    TrendAnalysis {
        streak: streak_signal(history, current, thresholds),
        slope: slope_signal(history, trend),
    }
}

/// Sustained fever and rising pain across the three most recent values.
///
/// A streak the current reading continues (fever still present, pain still
/// severe) is active; one it breaks only asks for monitoring.
/// Callers gate on history length; this only looks at present values.
pub fn streak_signal(
    history: &[EngineInput],
    current: &EngineInput,
    t: &ThresholdConfig,
) -> StreakSignal {
    let mut card = ScoreCard::default();
    let mut active = false;

    let temps = last_values(history, |h| h.temperature, 3);
    if temps.len() == 3 && temps.iter().all(|&v| v >= t.high_temp) {
        if current.temperature.is_some_and(|v| v >= t.high_temp) {
            card.add(2, AlertMessages::PERSISTENT_FEVER);
            active = true;
        } else {
            card.add(1, AlertMessages::RECENT_FEVER);
        }
    }

    let pains = last_values(history, |h| h.pain, 3);
    if strictly_rising(&pains) {
        if current.pain.is_some_and(|v| v >= t.severe_pain) {
            card.add(2, AlertMessages::PAIN_WORSENING);
            active = true;
        } else {
            card.add(1, AlertMessages::PAIN_TREND_MONITOR);
        }
    }

    StreakSignal {
        penalty: card,
        level: if active {
            RiskLevel::Warning
        } else {
            RiskLevel::Normal
        },
    }
}

/// Least-squares slopes of pain and temperature over the last `slope_window`
/// entries. Needs `min_history` present values of a field to fit it.
pub fn slope_signal(history: &[EngineInput], trend: &TrendConfig) -> SlopeSignal {
    let start = history.len().saturating_sub(trend.slope_window);
    let recent = &history[start..];

    let fit = |get: fn(&EngineInput) -> Option<f64>| {
        let values: Vec<f64> = recent.iter().filter_map(get).collect();
        if values.len() < trend.min_history {
            None
        } else {
            least_squares_slope(&values)
        }
    };

    let pain_slope = fit(|h| h.pain);
    let temperature_slope = fit(|h| h.temperature);

    let mut reasons = Vec::new();
    if pain_slope.is_some_and(|s| s > trend.pain_slope) {
        reasons.push(AlertMessages::PAIN_RISING.to_string());
    }
    if temperature_slope.is_some_and(|s| s > trend.temperature_slope) {
        reasons.push(AlertMessages::TEMPERATURE_RISING.to_string());
    }

    let level = if reasons.is_empty() {
        RiskLevel::Normal
    } else {
        RiskLevel::Warning
    };

    SlopeSignal {
        pain_slope,
        temperature_slope,
        level,
        reasons,
    }
}

/// The last `n` present values of a field, oldest first.
fn last_values(history: &[EngineInput], get: fn(&EngineInput) -> Option<f64>, n: usize) -> Vec<f64> {
    let present: Vec<f64> = history.iter().filter_map(get).collect();
    present[present.len().saturating_sub(n)..].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(temp: Option<f64>, pain: Option<f64>) -> EngineInput {
        EngineInput {
            temperature: temp,
            pain,
            ..Default::default()
        }
    }

    fn pains(values: &[f64]) -> Vec<EngineInput> {
        values.iter().map(|&p| entry(Some(37.0), Some(p))).collect()
    }

    fn temps(values: &[f64]) -> Vec<EngineInput> {
        values.iter().map(|&t| entry(Some(t), Some(2.0))).collect()
    }

    fn analyze(history: &[EngineInput], current: &EngineInput) -> TrendAnalysis {
        analyze_trends(history, current, &TrendConfig::default(), &ThresholdConfig::default())
    }

    #[test]
    fn two_entries_contribute_nothing() {
        let history = vec![entry(Some(39.0), Some(3.0)), entry(Some(39.5), Some(9.0))];
        let result = analyze(&history, &entry(Some(39.5), Some(10.0)));
        assert!(result.streak.penalty.is_empty());
        assert_eq!(result.slope.level, RiskLevel::Normal);
        assert!(result.slope.reasons.is_empty());
    }

    #[test]
    fn rising_pain_with_severe_current_pain() {
        let result = analyze(&pains(&[4.0, 6.0, 8.0]), &entry(Some(37.0), Some(8.0)));
        assert_eq!(result.streak.penalty.score, 2);
        assert_eq!(result.streak.penalty.reasons, vec!["Pain worsening trend"]);
    }

    #[test]
    fn rising_pain_with_mild_current_pain() {
        let result = analyze(&pains(&[2.0, 3.0, 4.0]), &entry(Some(37.0), Some(3.0)));
        assert_eq!(result.streak.penalty.score, 1);
        assert_eq!(result.streak.penalty.reasons, vec!["Pain trend improving but monitor"]);
    }

    #[test]
    fn active_streaks_mark_the_trajectory() {
        let worsening = analyze(&pains(&[4.0, 6.0, 8.0]), &entry(Some(37.0), Some(8.0)));
        assert_eq!(worsening.streak.level, RiskLevel::Warning);
        assert_eq!(worsening.level(), RiskLevel::Warning);

        let fever = analyze(&temps(&[38.2, 38.2, 38.2]), &entry(Some(38.2), None));
        assert_eq!(fever.streak.level, RiskLevel::Warning);
        assert_eq!(fever.slope.level, RiskLevel::Normal);
        assert_eq!(fever.level(), RiskLevel::Warning);

        let monitor = analyze(&temps(&[38.2, 38.2, 38.2]), &entry(Some(37.0), None));
        assert_eq!(monitor.streak.penalty.score, 1);
        assert_eq!(monitor.level(), RiskLevel::Normal);
    }

    #[test]
    fn plateaued_pain_is_not_a_streak() {
        let result = analyze(&pains(&[4.0, 6.0, 6.0]), &entry(Some(37.0), Some(8.0)));
        assert!(result.streak.penalty.is_empty());
    }

    #[test]
    fn persistent_fever() {
        let history = temps(&[38.1, 38.4, 38.0]);
        let active = analyze(&history, &entry(Some(38.5), None));
        assert_eq!(active.streak.penalty.score, 2);
        assert_eq!(active.streak.penalty.reasons, vec!["Persistent fever (active)"]);

        let resolved = analyze(&history, &entry(Some(37.2), None));
        assert_eq!(resolved.streak.penalty.score, 1);
        assert_eq!(resolved.streak.penalty.reasons, vec!["Recent fever history (monitor)"]);

        let unknown = analyze(&history, &entry(None, None));
        assert_eq!(unknown.streak.penalty.score, 1);
    }

    #[test]
    fn fever_streak_uses_only_the_last_three_temperatures() {
        let history = temps(&[38.5, 38.5, 37.0, 38.2, 38.3, 38.1]);
        assert_eq!(analyze(&history, &entry(Some(38.0), None)).streak.penalty.score, 2);

        let history = temps(&[38.5, 38.5, 38.5, 37.0, 38.3, 38.1]);
        assert!(analyze(&history, &entry(Some(38.0), None)).streak.penalty.is_empty());
    }

    #[test]
    fn steep_pain_slope_escalates() {
        let result = analyze(&pains(&[2.0, 3.0, 4.0, 5.0]), &entry(Some(37.0), Some(5.0)));
        assert_eq!(result.slope.level, RiskLevel::Warning);
        assert_eq!(result.slope.reasons, vec!["Pain rising steadily across recent logs"]);
        assert!((result.slope.pain_slope.unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn steep_temperature_slope_escalates() {
        let result = analyze(&temps(&[37.0, 37.3, 37.6]), &entry(Some(37.8), Some(2.0)));
        assert_eq!(result.slope.level, RiskLevel::Warning);
        assert_eq!(
            result.slope.reasons,
            vec!["Temperature rising steadily across recent logs"]
        );
        // no fever streak: below 38 throughout
        assert!(result.streak.penalty.is_empty());
    }

    #[test]
    fn gentle_slopes_do_not_escalate() {
        let result = analyze(&temps(&[37.0, 37.1, 37.2, 37.3]), &entry(Some(37.3), Some(2.0)));
        assert_eq!(result.slope.level, RiskLevel::Normal);
        assert!(result.slope.reasons.is_empty());
    }

    #[test]
    fn slope_only_fits_the_recent_window() {
        // Steep rise long ago, flat for the last five entries.
        let history = pains(&[0.0, 5.0, 9.0, 3.0, 3.0, 3.0, 3.0, 3.0]);
        let result = analyze(&history, &entry(Some(37.0), Some(3.0)));
        assert_eq!(result.slope.level, RiskLevel::Normal);
        assert!(result.slope.pain_slope.unwrap().abs() < 1e-9);
    }

    #[test]
    fn sparse_values_are_not_fitted() {
        let history = vec![
            entry(Some(37.0), Some(1.0)),
            entry(Some(37.0), None),
            entry(Some(37.0), Some(6.0)),
        ];
        let result = analyze(&history, &entry(Some(37.0), Some(6.0)));
        assert_eq!(result.slope.pain_slope, None);
        assert_eq!(result.slope.level, RiskLevel::Normal);
    }
}
