use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::models::{EngineInput, SurgeryType, SymptomLog};
use crate::risk::RiskEvaluator;

use super::store::LogStore;
use super::types::RiskAssessment;
use super::MonitorError;

/// Load a patient's recent logs as engine input, oldest first.
///
/// `exclude` drops the log being assessed when the app stored it before
/// asking for a verdict. A failing backend yields an empty history: the
/// engine treats that as low-confidence input rather than an error.
pub fn fetch_history<S: LogStore + ?Sized>(
    store: &S,
    patient_id: &str,
    limit: usize,
    exclude: Option<&Uuid>,
    now: NaiveDateTime,
) -> Vec<EngineInput> {
    let mut logs = match store.recent_logs(patient_id, limit + usize::from(exclude.is_some())) {
        Ok(logs) => logs,
        Err(e) => {
            tracing::warn!(error = %e, "History fetch failed, evaluating without history");
            return Vec::new();
        }
    };

    logs.retain(|log| Some(&log.log_id) != exclude);
    logs.truncate(limit);
    logs.reverse();
    logs.iter().map(|log| log.to_engine_input(now)).collect()
}

/// Submit-log flow: history in, verdict out, verdict recorded.
pub struct RecoveryMonitor<S, E> {
    store: S,
    engine: E,
    history_limit: usize,
}

impl<S: LogStore, E: RiskEvaluator> RecoveryMonitor<S, E> {
    pub fn new(store: S, engine: E, history_limit: usize) -> Self {
        Self {
            store,
            engine,
            history_limit,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Assess a submitted log at the current local time.
    pub fn submit_log(
        &self,
        log: &SymptomLog,
        surgery_type: SurgeryType,
    ) -> Result<RiskAssessment, MonitorError> {
        self.submit_log_at(log, surgery_type, chrono::Local::now().naive_local())
    }

    pub fn submit_log_at(
        &self,
        log: &SymptomLog,
        surgery_type: SurgeryType,
        now: NaiveDateTime,
    ) -> Result<RiskAssessment, MonitorError> {
        let history = fetch_history(
            &self.store,
            &log.patient_id,
            self.history_limit,
            Some(&log.log_id),
            now,
        );
        let reading = log.to_engine_input(now);

        let result = self
            .engine
            .evaluate_at(Some(&reading), &history, surgery_type, None, now);
        let assessment = RiskAssessment::from_result(log.log_id, result, now);

        self.store.record_assessment(&assessment)?;

        if assessment.needs_doctor() {
            tracing::warn!(
                log_id = %log.log_id,
                "High-risk log recorded, doctor notification required"
            );
        } else {
            tracing::info!(
                log_id = %log.log_id,
                risk = assessment.risk.as_str(),
                "Log assessed"
            );
        }

        Ok(assessment)
    }
}
