//! Security deposit case analysis: intake in, one ranked and scored report out.
//!
//! Stages run strictly forward: timeline, context, issue detection, leverage
//! scoring, recovery projection, strategy, report assembly, validation. Every
//! stage is a pure function of its inputs and the injected "today".

pub mod analysis;
pub mod context;
pub mod domain;
pub mod evaluation;
pub mod issues;
pub mod recovery;
pub mod report;
pub mod repository;
pub mod router;
pub mod service;
pub mod statutes;
pub mod strategy;
pub mod timeline;

#[cfg(test)]
mod tests;

pub use analysis::CaseStrengthEngine;
pub use context::{parse_money, EvaluationContext};
pub use domain::{AnalysisId, CommunicationChannel, IntakeRecord, ReturnStatus, TriState};
pub use evaluation::{
    DecisionTables, Grade, LeverageAssessment, LeverageEngine, RecommendedAction,
    ScoreComponent, StrategicPosition, Urgency,
};
pub use issues::{DetectedIssue, IssueDetector, IssueRegistry, Severity};
pub use recovery::{OutcomeProbabilities, RecoveryEstimate};
pub use report::{AnalysisOutcome, CaseAnalysisReport, ValidationReport};
pub use repository::{AnalysisRecord, AnalysisSnapshot, ReportRepository, RepositoryError};
pub use router::{analysis_router, AnalysisRequest};
pub use service::{AnalysisServiceError, CaseAnalysisService};
pub use statutes::{StatuteReference, StatuteTable};
pub use strategy::StrategyRecommendation;
pub use timeline::{Clock, FixedClock, SystemClock, Timeline, RETURN_DEADLINE_DAYS};
