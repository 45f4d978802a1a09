mod bands;
mod config;
pub(crate) mod rules;

pub use bands::{
    standard_recovery_bands, standard_score_bands, BandTable, BandTableError, Banded, Grade,
    RecommendedAction, RecoveryBandEntry, ScoreBandEntry, StrategicPosition, Urgency,
};
pub use config::{DecisionTables, GRADE_A_FLOOR, PENALTY_SCORE_FLOOR, STATUTORY_PENALTY};
pub use rules::{bad_faith_indicators, BadFaithIndicator, LeverageFactor};

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::context::EvaluationContext;
use super::issues::{DetectedIssue, SeverityCounts};

/// Stateless scorer that maps a case context onto the score band table.
#[derive(Debug, Clone)]
pub struct LeverageEngine {
    tables: Arc<DecisionTables>,
}

impl LeverageEngine {
    pub fn new(tables: Arc<DecisionTables>) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &DecisionTables {
        &self.tables
    }

    pub fn assess(
        &self,
        context: &EvaluationContext,
        issues: &[DetectedIssue],
    ) -> LeverageAssessment {
        let counts = SeverityCounts::tally(issues);
        let (components, score, signals) = rules::score_case(context, counts);
        let band = self.tables.score_bands.lookup(score);

        LeverageAssessment {
            score,
            grade: grade_for(score, band),
            position: band.position,
            action: band.action,
            urgency: band.urgency,
            components,
            bad_faith_indicators: signals.bad_faith,
        }
    }
}

/// Grade A sits above the STRONG floor; every other grade comes from the band.
pub fn grade_for(score: u8, band: &ScoreBandEntry) -> Grade {
    if score >= GRADE_A_FLOOR {
        Grade::A
    } else {
        band.grade
    }
}

/// Discrete contribution to the leverage score, kept for transparent audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: LeverageFactor,
    pub score: u32,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeverageAssessment {
    pub score: u8,
    pub grade: Grade,
    pub position: StrategicPosition,
    pub action: RecommendedAction,
    pub urgency: Urgency,
    pub components: Vec<ScoreComponent>,
    pub bad_faith_indicators: Vec<BadFaithIndicator>,
}
