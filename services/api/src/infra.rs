use chrono::NaiveDate;
use deposit_case::error::AppError;
use deposit_case::workflows::deposit::{
    AnalysisId, AnalysisRecord, IntakeRecord, ReportRepository, RepositoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryReportRepository {
    records: Arc<Mutex<HashMap<AnalysisId, AnalysisRecord>>>,
}

impl InMemoryReportRepository {
    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<AnalysisId, AnalysisRecord>>, RepositoryError>
    {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))
    }
}

impl ReportRepository for InMemoryReportRepository {
    fn insert(&self, record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError> {
        let mut guard = self.lock()?;
        if guard.contains_key(&record.analysis_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.analysis_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &AnalysisId) -> Result<Option<AnalysisRecord>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.get(id).cloned())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn read_intake(path: &Path) -> Result<IntakeRecord, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let intake = serde_json::from_str(&raw)?;
    Ok(intake)
}
