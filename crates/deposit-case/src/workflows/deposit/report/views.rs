use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::workflows::deposit::domain::ReturnStatus;
use crate::workflows::deposit::evaluation::{
    BadFaithIndicator, Grade, ScoreComponent, StrategicPosition, Urgency,
};
use crate::workflows::deposit::issues::DetectedIssue;
use crate::workflows::deposit::recovery::RecoveryEstimate;
use crate::workflows::deposit::statutes::StatuteReference;
use crate::workflows::deposit::strategy::StrategyRecommendation;
use crate::workflows::deposit::timeline::Timeline;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseOverview {
    pub tenant_name: String,
    pub landlord_name: String,
    pub property_address: String,
    pub total_deposit: f64,
    pub return_status: ReturnStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistStatus {
    Met,
    NotMet,
    Unknown,
}

impl ChecklistStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ChecklistStatus::Met => "Met",
            ChecklistStatus::NotMet => "Not met",
            ChecklistStatus::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub requirement: String,
    pub status: ChecklistStatus,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statute: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStrength {
    pub score: u8,
    pub grade: Grade,
    pub position: StrategicPosition,
    pub urgency: Urgency,
    pub win_probability: u8,
    pub components: Vec<ScoreComponent>,
    pub bad_faith_indicators: Vec<BadFaithIndicator>,
}

/// Immutable result of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseAnalysisReport {
    pub generated_on: NaiveDate,
    pub case: CaseOverview,
    pub timeline: Timeline,
    pub compliance_checklist: Vec<ChecklistItem>,
    pub leverage_points: Vec<DetectedIssue>,
    pub case_strength: CaseStrength,
    pub recovery: RecoveryEstimate,
    pub strategy: StrategyRecommendation,
    pub statutes: Vec<StatuteReference>,
    pub disclaimers: Vec<String>,
}

/// Advisory shape check; problems never block report delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub problems: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.problems.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub report: CaseAnalysisReport,
    pub validation: ValidationReport,
}
