use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, warn};

use super::context::EvaluationContext;
use super::domain::IntakeRecord;
use super::evaluation::{DecisionTables, LeverageEngine};
use super::issues::IssueRegistry;
use super::recovery::{estimate_recovery, win_probability, RecoveryInputs};
use super::report::{assemble_report, validate_report, AnalysisOutcome, ReportParts};
use super::strategy::assemble_strategy;
use super::timeline::Timeline;

/// The case-strength decision engine: a pure function of intake and date.
#[derive(Clone)]
pub struct CaseStrengthEngine {
    tables: Arc<DecisionTables>,
    registry: Arc<IssueRegistry>,
    leverage: LeverageEngine,
}

impl CaseStrengthEngine {
    pub fn new(tables: Arc<DecisionTables>, registry: Arc<IssueRegistry>) -> Self {
        let leverage = LeverageEngine::new(tables.clone());
        Self {
            tables,
            registry,
            leverage,
        }
    }

    pub fn standard() -> Self {
        Self::new(
            Arc::new(DecisionTables::standard()),
            Arc::new(IssueRegistry::standard()),
        )
    }

    pub fn tables(&self) -> &DecisionTables {
        &self.tables
    }

    pub fn context_for(&self, intake: &IntakeRecord, today: NaiveDate) -> EvaluationContext {
        let timeline = Timeline::compute(&intake.move_out_date, today);
        EvaluationContext::build(intake, timeline)
    }

    pub fn analyze(&self, intake: &IntakeRecord, today: NaiveDate) -> AnalysisOutcome {
        let context = self.context_for(intake, today);
        debug!(
            days_since_move_out = ?context.days_since_move_out(),
            past_deadline = ?context.timeline.past_deadline,
            "timeline computed"
        );

        let issues = self.registry.detect(&context);
        debug!(issue_count = issues.len(), "issue detection complete");

        let assessment = self.leverage.assess(&context, &issues);
        debug!(
            score = assessment.score,
            position = assessment.position.label(),
            "leverage scored"
        );

        let win_probability = win_probability(assessment.score, &context);
        let recovery = estimate_recovery(
            &RecoveryInputs::from_context(&context, assessment.score),
            &self.tables.recovery_bands,
        );
        let strategy = assemble_strategy(
            assessment.score,
            context.total_deposit(),
            &self.tables.score_bands,
        );

        let report = assemble_report(
            ReportParts {
                today,
                context: &context,
                issues,
                assessment,
                win_probability,
                recovery,
                strategy,
            },
            &self.tables.statutes,
        );

        let validation = validate_report(&report);
        if !validation.is_valid() {
            warn!(problems = ?validation.problems, "case report failed shape validation");
        }

        AnalysisOutcome { report, validation }
    }
}

impl Default for CaseStrengthEngine {
    fn default() -> Self {
        Self::standard()
    }
}
