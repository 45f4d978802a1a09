use serde::{Deserialize, Serialize};

use super::domain::{AnalysisId, IntakeRecord};
use super::report::{AnalysisOutcome, CaseAnalysisReport, ValidationReport};

/// Stored analysis run: the intake as submitted plus the produced outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub analysis_id: AnalysisId,
    pub intake: IntakeRecord,
    pub outcome: AnalysisOutcome,
}

impl AnalysisRecord {
    pub fn snapshot(&self) -> AnalysisSnapshot {
        AnalysisSnapshot {
            analysis_id: self.analysis_id.clone(),
            report: self.outcome.report.clone(),
            validation: self.outcome.validation.clone(),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
/// Records are write-once; reports are never mutated after creation.
pub trait ReportRepository: Send + Sync {
    fn insert(&self, record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError>;
    fn fetch(&self, id: &AnalysisId) -> Result<Option<AnalysisRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Wire view returned by the HTTP surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSnapshot {
    pub analysis_id: AnalysisId,
    pub report: CaseAnalysisReport,
    pub validation: ValidationReport,
}
