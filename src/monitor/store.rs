use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::models::SymptomLog;

use super::types::RiskAssessment;
use super::StoreError;

/// Storage backend consulted around each evaluation.
pub trait LogStore: Send + Sync {
    /// Up to `limit` most recent logs for a patient, newest first.
    fn recent_logs(&self, patient_id: &str, limit: usize) -> Result<Vec<SymptomLog>, StoreError>;

    /// Attach a verdict to the log it was computed for.
    fn record_assessment(&self, assessment: &RiskAssessment) -> Result<(), StoreError>;
}

/// In-memory log store backed by RwLock.
pub struct InMemoryLogStore {
    pub(crate) logs: RwLock<Vec<SymptomLog>>,
    pub(crate) assessments: RwLock<HashMap<Uuid, RiskAssessment>>,
}

impl InMemoryLogStore {
    pub fn new() -> Self {
        Self {
            logs: RwLock::new(Vec::new()),
            assessments: RwLock::new(HashMap::new()),
        }
    }

    pub fn insert_log(&self, log: SymptomLog) -> Result<(), StoreError> {
        let mut logs = self.logs.write().map_err(|_| StoreError::LockFailed)?;
        logs.push(log);
        Ok(())
    }

    pub fn assessment(&self, log_id: &Uuid) -> Result<Option<RiskAssessment>, StoreError> {
        let assessments = self
            .assessments
            .read()
            .map_err(|_| StoreError::LockFailed)?;
        Ok(assessments.get(log_id).cloned())
    }
}

impl Default for InMemoryLogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LogStore for InMemoryLogStore {
    fn recent_logs(&self, patient_id: &str, limit: usize) -> Result<Vec<SymptomLog>, StoreError> {
        let logs = self.logs.read().map_err(|_| StoreError::LockFailed)?;

        // Ties on created_at fall back to insertion order, later first.
        let mut matching: Vec<(usize, &SymptomLog)> = logs
            .iter()
            .enumerate()
            .filter(|(_, log)| log.patient_id == patient_id)
            .collect();
        matching.sort_by(|(ia, a), (ib, b)| {
            b.created_at.cmp(&a.created_at).then(ib.cmp(ia))
        });

        Ok(matching
            .into_iter()
            .take(limit)
            .map(|(_, log)| log.clone())
            .collect())
    }

    fn record_assessment(&self, assessment: &RiskAssessment) -> Result<(), StoreError> {
        let known = self
            .logs
            .read()
            .map_err(|_| StoreError::LockFailed)?
            .iter()
            .any(|log| log.log_id == assessment.log_id);
        if !known {
            return Err(StoreError::LogNotFound(assessment.log_id));
        }

        let mut assessments = self
            .assessments
            .write()
            .map_err(|_| StoreError::LockFailed)?;
        assessments.insert(assessment.log_id, assessment.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};

    use super::*;
    use crate::risk::{DefaultRiskEngine, RiskEvaluator};

    fn day(n: i64) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
            + Duration::days(n)
    }

    fn log_on(patient: &str, n: i64, pain: f64) -> SymptomLog {
        let mut log = SymptomLog::new(patient);
        log.created_at = Some(day(n));
        log.pain = Some(pain);
        log
    }

    #[test]
    fn recent_logs_newest_first_and_limited() {
        let store = InMemoryLogStore::new();
        store.insert_log(log_on("p-1", 2, 2.0)).unwrap();
        store.insert_log(log_on("p-1", 0, 0.0)).unwrap();
        store.insert_log(log_on("p-2", 5, 9.0)).unwrap();
        store.insert_log(log_on("p-1", 1, 1.0)).unwrap();
        store.insert_log(log_on("p-1", 3, 3.0)).unwrap();

        let logs = store.recent_logs("p-1", 3).unwrap();
        let pains: Vec<f64> = logs.iter().filter_map(|l| l.pain).collect();
        assert_eq!(pains, vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn unknown_patient_has_no_logs() {
        let store = InMemoryLogStore::new();
        store.insert_log(log_on("p-1", 0, 1.0)).unwrap();
        assert!(store.recent_logs("p-9", 10).unwrap().is_empty());
    }

    #[test]
    fn assessment_requires_known_log() {
        let store = InMemoryLogStore::new();
        let log = log_on("p-1", 0, 1.0);
        let result = DefaultRiskEngine::default().evaluate_at(
            Some(&log.to_engine_input(day(0))),
            &[],
            Default::default(),
            None,
            day(0),
        );
        let assessment = RiskAssessment::from_result(log.log_id, result, day(0));

        assert!(matches!(
            store.record_assessment(&assessment),
            Err(StoreError::LogNotFound(_))
        ));

        store.insert_log(log.clone()).unwrap();
        store.record_assessment(&assessment).unwrap();
        assert_eq!(store.assessment(&log.log_id).unwrap(), Some(assessment));
    }
}
