use chrono::NaiveDate;

use super::views::{
    CaseAnalysisReport, CaseOverview, CaseStrength, ChecklistItem, ChecklistStatus,
};
use crate::workflows::deposit::context::EvaluationContext;
use crate::workflows::deposit::domain::{ReturnStatus, TriState};
use crate::workflows::deposit::evaluation::LeverageAssessment;
use crate::workflows::deposit::issues::DetectedIssue;
use crate::workflows::deposit::recovery::RecoveryEstimate;
use crate::workflows::deposit::statutes::{
    StatuteTable, FORWARDING_ADDRESS, ITEMIZED_ACCOUNTING, REFUND_DEADLINE,
};
use crate::workflows::deposit::strategy::StrategyRecommendation;

const DISCLAIMERS: &[&str] = &[
    "This analysis is informational and is not legal advice.",
    "Scores and projections are estimates based only on the facts you entered.",
    "Deadlines are counted in calendar days from the move-out date you provided.",
    "Consult a licensed attorney or local legal aid office before filing suit.",
];

/// Everything the report is composed from, produced by the upstream stages.
pub(crate) struct ReportParts<'a> {
    pub today: NaiveDate,
    pub context: &'a EvaluationContext,
    pub issues: Vec<DetectedIssue>,
    pub assessment: LeverageAssessment,
    pub win_probability: u8,
    pub recovery: RecoveryEstimate,
    pub strategy: StrategyRecommendation,
}

pub(crate) fn assemble_report(
    parts: ReportParts<'_>,
    statutes: &StatuteTable,
) -> CaseAnalysisReport {
    let ReportParts {
        today,
        context,
        issues,
        assessment,
        win_probability,
        recovery,
        strategy,
    } = parts;

    let core = [REFUND_DEADLINE, ITEMIZED_ACCOUNTING, FORWARDING_ADDRESS];
    let cited = issues
        .iter()
        .flat_map(|issue| issue.statute_citations.iter().map(String::as_str));
    let statute_refs = statutes.resolve(core.into_iter().chain(cited));

    CaseAnalysisReport {
        generated_on: today,
        case: CaseOverview {
            tenant_name: context.tenant_name.clone(),
            landlord_name: context.landlord_name.clone(),
            property_address: context.property_address.clone(),
            total_deposit: recovery.total_deposit,
            return_status: context.return_status,
        },
        timeline: context.timeline,
        compliance_checklist: compliance_checklist(context),
        leverage_points: issues,
        case_strength: CaseStrength {
            score: assessment.score,
            grade: assessment.grade,
            position: assessment.position,
            urgency: assessment.urgency,
            win_probability,
            components: assessment.components,
            bad_faith_indicators: assessment.bad_faith_indicators,
        },
        recovery,
        strategy,
        statutes: statute_refs,
        disclaimers: DISCLAIMERS.iter().map(|line| line.to_string()).collect(),
    }
}

fn tri_state_status(answer: TriState) -> ChecklistStatus {
    match answer {
        TriState::Yes => ChecklistStatus::Met,
        TriState::No => ChecklistStatus::NotMet,
        TriState::Unknown => ChecklistStatus::Unknown,
    }
}

/// A timely response is a full refund, or any refund backed by an itemized list.
/// The intake carries no response date, so a response seen after the deadline
/// cannot be placed on either side of it.
fn deadline_response_status(context: &EvaluationContext) -> (ChecklistStatus, String) {
    let responded = context.is_fully_returned || context.itemization_provided;
    let partial_only = context.deposit_returned && !responded;

    match (context.timeline.past_deadline, context.timeline.days_until_deadline) {
        (Some(false), Some(remaining)) if responded => (
            ChecklistStatus::Met,
            format!("landlord responded with {remaining} day(s) left on the deadline"),
        ),
        (Some(false), Some(remaining)) if partial_only => (
            ChecklistStatus::Unknown,
            format!("partial refund received, itemized list still due in {remaining} day(s)"),
        ),
        (Some(false), Some(remaining)) => (
            ChecklistStatus::Unknown,
            format!("deadline still running, {remaining} day(s) left"),
        ),
        (Some(true), _) if responded => (
            ChecklistStatus::Unknown,
            "landlord responded, but the response date is unknown".to_string(),
        ),
        (Some(true), _) if partial_only => (
            ChecklistStatus::NotMet,
            format!(
                "{} day(s) past the deadline with a partial refund and no itemized list",
                context.timeline.days_overdue().unwrap_or_default()
            ),
        ),
        (Some(true), _) => (
            ChecklistStatus::NotMet,
            format!(
                "{} day(s) past the deadline with no response",
                context.timeline.days_overdue().unwrap_or_default()
            ),
        ),
        _ => (
            ChecklistStatus::Unknown,
            "move-out date could not be read".to_string(),
        ),
    }
}

fn compliance_checklist(context: &EvaluationContext) -> Vec<ChecklistItem> {
    let refund_status = match context.return_status {
        ReturnStatus::Full => ChecklistStatus::Met,
        ReturnStatus::Partial | ReturnStatus::None => ChecklistStatus::NotMet,
    };

    let deadline_status = deadline_response_status(context);

    vec![
        ChecklistItem {
            requirement: "Deposit refunded in full".to_string(),
            status: refund_status,
            detail: format!("return status: {}", context.return_status.label()),
            statute: Some(REFUND_DEADLINE.to_string()),
        },
        ChecklistItem {
            requirement: "Itemized list of deductions provided".to_string(),
            status: tri_state_status(context.itemization_answer),
            detail: format!("tenant answered: {}", context.itemization_answer.label()),
            statute: Some(ITEMIZED_ACCOUNTING.to_string()),
        },
        ChecklistItem {
            requirement: "Forwarding address given in writing".to_string(),
            status: tri_state_status(context.forwarding_answer),
            detail: match context.forwarding_address_date {
                Some(date) => format!("provided on {date}"),
                None => format!("tenant answered: {}", context.forwarding_answer.label()),
            },
            statute: Some(FORWARDING_ADDRESS.to_string()),
        },
        ChecklistItem {
            requirement: "Landlord responded within 30 days".to_string(),
            status: deadline_status.0,
            detail: deadline_status.1,
            statute: Some(REFUND_DEADLINE.to_string()),
        },
    ]
}
