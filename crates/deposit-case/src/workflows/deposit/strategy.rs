//! Action plans keyed by the recommended action of the score band.

use serde::{Deserialize, Serialize};

use super::evaluation::{BandTable, RecommendedAction, ScoreBandEntry, Urgency};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionStep {
    pub order: u8,
    pub step: String,
    pub deadline: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalationPhase {
    pub phase: u8,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyRecommendation {
    pub action: RecommendedAction,
    pub urgency: Urgency,
    pub rationale: String,
    pub timeline_estimate: String,
    pub cost_estimate: String,
    pub next_steps: Vec<ActionStep>,
    pub if_no_response: String,
    pub escalation_path: Vec<EscalationPhase>,
}

struct ContentBlock {
    rationale: String,
    timeline_estimate: &'static str,
    cost_estimate: &'static str,
    next_steps: Vec<(String, &'static str)>,
    if_no_response: &'static str,
    escalation_path: [(&'static str, &'static str); 4],
}

pub fn assemble_strategy(
    score: u8,
    deposit_amount: f64,
    bands: &BandTable<ScoreBandEntry>,
) -> StrategyRecommendation {
    let band = bands.lookup(score);
    let content = content_block(band.action, deposit_amount);

    StrategyRecommendation {
        action: band.action,
        urgency: band.urgency,
        rationale: content.rationale,
        timeline_estimate: content.timeline_estimate.to_string(),
        cost_estimate: content.cost_estimate.to_string(),
        next_steps: content
            .next_steps
            .into_iter()
            .enumerate()
            .map(|(index, (step, deadline))| ActionStep {
                order: index as u8 + 1,
                step,
                deadline: deadline.to_string(),
            })
            .collect(),
        if_no_response: content.if_no_response.to_string(),
        escalation_path: content
            .escalation_path
            .iter()
            .enumerate()
            .map(|(index, (name, description))| EscalationPhase {
                phase: index as u8 + 1,
                name: name.to_string(),
                description: description.to_string(),
            })
            .collect(),
    }
}

fn content_block(action: RecommendedAction, deposit_amount: f64) -> ContentBlock {
    let amount = if deposit_amount > 0.0 {
        format!("${deposit_amount:.2}")
    } else {
        "your deposit".to_string()
    };

    match action {
        RecommendedAction::SendDemandLetter => ContentBlock {
            rationale: format!(
                "The facts show a clear statutory violation. A formal demand for {amount} \
                 puts the landlord on notice of the bad-faith penalty and usually resolves the \
                 dispute without court."
            ),
            timeline_estimate: "2-4 weeks for a response; 6-10 weeks if filed in justice court",
            cost_estimate: "About $10 for certified mail; about $55 filing fee if escalated",
            next_steps: vec![
                (
                    format!("Send a demand letter for {amount} by certified mail"),
                    "Within 3 days",
                ),
                (
                    "Set a 10-day payment deadline in the letter".to_string(),
                    "In the letter",
                ),
                (
                    "Assemble lease, photos, receipts and correspondence into one file".to_string(),
                    "Within 7 days",
                ),
                (
                    "File a small claims petition if the deadline passes unpaid".to_string(),
                    "Day 11 after delivery",
                ),
            ],
            if_no_response: "File a small claims petition in the justice court for the \
                             precinct where the property is located, asking for the deposit, \
                             the $100 penalty and treble damages.",
            escalation_path: [
                ("Demand letter", "Certified-mail demand citing the refund deadline."),
                ("Final notice", "Short follow-up stating the filing date."),
                ("Small claims filing", "Petition in justice court with evidence attached."),
                ("Judgment collection", "Abstract of judgment or writ if still unpaid."),
            ],
        },
        RecommendedAction::RequestItemization => ContentBlock {
            rationale: format!(
                "Your position is solid but not yet decisive. A written request for an \
                 itemized accounting of {amount} either produces the refund or documents the \
                 landlord's failure to justify deductions."
            ),
            timeline_estimate: "1-3 weeks for the landlord to respond",
            cost_estimate: "Under $10 for certified mail",
            next_steps: vec![
                (
                    "Send a written request for an itemized list of deductions".to_string(),
                    "Within 5 days",
                ),
                (
                    "Confirm your forwarding address in the same letter".to_string(),
                    "In the letter",
                ),
                (
                    "Log every response, call and message with dates".to_string(),
                    "Ongoing",
                ),
            ],
            if_no_response: "Re-run the analysis after the deadline passes; silence past the \
                             30-day mark usually moves the case to a demand letter.",
            escalation_path: [
                ("Itemization request", "Written request for the accounting."),
                ("Demand letter", "Formal demand once the deadline passes."),
                ("Small claims filing", "Justice court petition if still unresolved."),
                ("Judgment collection", "Enforce any judgment obtained."),
            ],
        },
        RecommendedAction::GatherEvidence => ContentBlock {
            rationale: format!(
                "Some leverage exists, but the record is thin. Strengthen the evidence around \
                 {amount} before making formal demands."
            ),
            timeline_estimate: "1-2 weeks to assemble documentation",
            cost_estimate: "Minimal; copies and postage only",
            next_steps: vec![
                (
                    "Collect move-in and move-out photos or video".to_string(),
                    "Within 7 days",
                ),
                (
                    "Locate the signed lease and deposit receipt".to_string(),
                    "Within 7 days",
                ),
                (
                    "Send your forwarding address in writing if not yet done".to_string(),
                    "Immediately",
                ),
            ],
            if_no_response: "Keep documenting. Once evidence is complete, request an \
                             itemization in writing.",
            escalation_path: [
                ("Evidence collection", "Photos, lease, receipts, messages."),
                ("Itemization request", "Ask for the accounting in writing."),
                ("Demand letter", "Formal demand if deductions are unsupported."),
                ("Small claims filing", "Justice court as a last resort."),
            ],
        },
        RecommendedAction::ReviewSituation => ContentBlock {
            rationale: format!(
                "No clear violation appears in the facts provided about {amount}. Review the \
                 details and watch the refund deadline before acting."
            ),
            timeline_estimate: "Reassess within 2 weeks or when the deadline passes",
            cost_estimate: "None",
            next_steps: vec![
                (
                    "Double-check the move-out date and any payments received".to_string(),
                    "This week",
                ),
                (
                    "Keep all landlord correspondence in one place".to_string(),
                    "Ongoing",
                ),
            ],
            if_no_response: "If the deadline passes without a refund or itemization, run the \
                             analysis again.",
            escalation_path: [
                ("Review", "Confirm the facts and dates."),
                ("Evidence collection", "Gather supporting documents."),
                ("Itemization request", "Ask for the accounting in writing."),
                ("Demand letter", "Escalate only if a violation emerges."),
            ],
        },
    }
}
