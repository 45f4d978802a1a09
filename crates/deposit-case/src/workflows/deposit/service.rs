use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use super::analysis::CaseStrengthEngine;
use super::domain::{AnalysisId, IntakeRecord};
use super::repository::{AnalysisRecord, ReportRepository, RepositoryError};
use super::timeline::Clock;

/// Service composing the decision engine, the clock, and report storage.
pub struct CaseAnalysisService<R, C> {
    engine: Arc<CaseStrengthEngine>,
    repository: Arc<R>,
    clock: Arc<C>,
    sequence: AtomicU64,
}

impl<R, C> CaseAnalysisService<R, C>
where
    R: ReportRepository + 'static,
    C: Clock + 'static,
{
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self::with_engine(Arc::new(CaseStrengthEngine::standard()), repository, clock)
    }

    pub fn with_engine(
        engine: Arc<CaseStrengthEngine>,
        repository: Arc<R>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            engine,
            repository,
            clock,
            sequence: AtomicU64::new(1),
        }
    }

    pub fn engine(&self) -> &CaseStrengthEngine {
        &self.engine
    }

    fn next_analysis_id(&self) -> AnalysisId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        AnalysisId(format!("case-{id:06}"))
    }

    /// Run the engine and persist the snapshot. `today` defaults to the injected clock.
    pub fn analyze(
        &self,
        intake: IntakeRecord,
        today: Option<NaiveDate>,
    ) -> Result<AnalysisRecord, AnalysisServiceError> {
        let today = today.unwrap_or_else(|| self.clock.today());
        let outcome = self.engine.analyze(&intake, today);
        let analysis_id = self.next_analysis_id();

        info!(
            analysis_id = %analysis_id.0,
            score = outcome.report.case_strength.score,
            leverage_points = outcome.report.leverage_points.len(),
            valid = outcome.validation.is_valid(),
            "case analysis stored"
        );

        let stored = self.repository.insert(AnalysisRecord {
            analysis_id,
            intake,
            outcome,
        })?;
        Ok(stored)
    }

    pub fn get(&self, analysis_id: &AnalysisId) -> Result<AnalysisRecord, AnalysisServiceError> {
        let record = self
            .repository
            .fetch(analysis_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
