use crate::models::{EngineInput, RiskLevel};

/// A pluggable predictive scorer consulted alongside the rule layers.
///
/// Returns a coarse severity band: 0 = normal, 1 = warning, 2 = critical.
/// Implementations must be deterministic for a given input; the engine's
/// result is expected to be reproducible.
pub trait PredictiveModel: Send + Sync {
    fn name(&self) -> &str;

    fn predict_band(&self, reading: &EngineInput, history: &[EngineInput]) -> u8;

    fn predict(&self, reading: &EngineInput, history: &[EngineInput]) -> RiskLevel {
        RiskLevel::from_band(self.predict_band(reading, history))
    }
}

/// Default model: no opinion, always the lowest band.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPredictor;

impl PredictiveModel for NoopPredictor {
    fn name(&self) -> &str {
        "noop"
    }

    fn predict_band(&self, _reading: &EngineInput, _history: &[EngineInput]) -> u8 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_predictor_is_always_normal() {
        let reading = EngineInput {
            spo2: Some(80.0),
            breathlessness: true,
            ..Default::default()
        };
        assert_eq!(NoopPredictor.predict(&reading, &[]), RiskLevel::Normal);
        assert_eq!(NoopPredictor.name(), "noop");
    }
}
