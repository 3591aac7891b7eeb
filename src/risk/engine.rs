use chrono::NaiveDateTime;

use crate::config::EngineConfig;
use crate::models::{EngineInput, RiskLevel, SurgeryType};

use super::aggregate::{combine, confidence, score_band, DataQuality};
use super::baseline::compute_baseline;
use super::escalation::EscalationMapper;
use super::messages::AlertMessages;
use super::predictive::{NoopPredictor, PredictiveModel};
use super::threshold::{
    baseline_deviation, critical_findings, physiological_score, surgery_adjustment, symptom_score,
};
use super::trend::analyze_trends;
use super::types::{Baseline, EvaluationResult, RiskEvaluator, SignalBreakdown};
use super::validation::validate_inputs;

/// Default implementation of the risk engine.
/// Runs validation, baselining, threshold scoring, and trend detection, then
/// aggregates them into one verdict. Holds only immutable configuration.
pub struct DefaultRiskEngine {
    pub(crate) config: EngineConfig,
    pub(crate) predictor: Box<dyn PredictiveModel>,
}

impl DefaultRiskEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_predictor(config, Box::new(NoopPredictor))
    }

    pub fn with_predictor(config: EngineConfig, predictor: Box<dyn PredictiveModel>) -> Self {
        Self { config, predictor }
    }

    /// Result returned when there is nothing to evaluate.
    fn no_data_result() -> EvaluationResult {
        EvaluationResult {
            risk: RiskLevel::Normal,
            score: 0,
            confidence: 0,
            alerts: vec![AlertMessages::NO_DATA.to_string()],
            missing_fields: vec![],
            recommended_action: EscalationMapper::NO_DATA_ACTION.to_string(),
            signals: SignalBreakdown::default(),
            baseline: None,
        }
    }

    fn evaluate_reading(
        &self,
        reading: &EngineInput,
        history: &[EngineInput],
        surgery_type: SurgeryType,
        baseline: Option<&Baseline>,
        now: NaiveDateTime,
    ) -> EvaluationResult {
        let cfg = &self.config;
        let t = &cfg.thresholds;
        let mut alerts = Vec::new();
        let mut score = 0;

        let validation_issues = validate_inputs(reading, &cfg.ranges);
        alerts.extend(validation_issues.iter().cloned());

        let baseline = match baseline {
            Some(b) => Some(b.clone()),
            None => compute_baseline(history, cfg.baseline_window, t),
        };

        let missing_fields = reading.missing_fields();

        let stale = reading
            .hours_since(now)
            .is_some_and(|hours| hours > cfg.confidence.stale_hours);
        if stale {
            alerts.push(AlertMessages::STALE.to_string());
        }

        let criticals = critical_findings(reading, t);
        alerts.extend(criticals.iter().map(|c| c.alert().to_string()));

        let trends = analyze_trends(history, reading, &cfg.trend, t);
        let trend_level = trends.level();

        for card in [
            physiological_score(reading, t),
            symptom_score(reading, t),
            trends.streak.penalty,
            baseline_deviation(reading, baseline.as_ref(), t),
            surgery_adjustment(reading, surgery_type, t),
        ] {
            score += card.score;
            alerts.extend(card.reasons);
        }

        alerts.extend(trends.slope.reasons.iter().cloned());

        let predictive = self.predictor.predict(reading, history);
        if predictive > RiskLevel::Normal {
            alerts.push(AlertMessages::PREDICTIVE_FLAG.to_string());
        }

        let signals = SignalBreakdown {
            threshold: score_band(score, !criticals.is_empty(), t),
            trend: trend_level,
            predictive,
        };
        let risk = combine(&signals.levels());

        let quality = DataQuality {
            history_len: history.len(),
            missing_fields: missing_fields.len(),
            stale,
            has_validation_issues: !validation_issues.is_empty(),
        };
        let confidence = confidence(&quality, &cfg.confidence);

        tracing::debug!(
            threshold = signals.threshold.as_str(),
            trend = signals.trend.as_str(),
            predictive = signals.predictive.as_str(),
            model = self.predictor.name(),
            "Risk sub-signals"
        );

        EvaluationResult {
            risk,
            score,
            confidence,
            alerts,
            missing_fields,
            recommended_action: EscalationMapper::for_level(risk).recommended_action,
            signals,
            baseline,
        }
    }
}

impl Default for DefaultRiskEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl RiskEvaluator for DefaultRiskEngine {
    fn evaluate_at(
        &self,
        reading: Option<&EngineInput>,
        history: &[EngineInput],
        surgery_type: SurgeryType,
        baseline: Option<&Baseline>,
        now: NaiveDateTime,
    ) -> EvaluationResult {
        let reading = match reading {
            Some(r) if !r.is_empty() => r,
            _ => {
                tracing::info!("Risk evaluation skipped: no data provided");
                return Self::no_data_result();
            }
        };

        // Only the most recent window is ever considered.
        let history = &history[history.len().saturating_sub(self.config.history_limit)..];

        let result = self.evaluate_reading(reading, history, surgery_type, baseline, now);

        tracing::info!(
            risk = result.risk.as_str(),
            score = result.score,
            confidence = result.confidence,
            alerts = result.alerts.len(),
            history = history.len(),
            surgery_type = surgery_type.as_str(),
            "Risk evaluation complete"
        );

        result
    }
}
