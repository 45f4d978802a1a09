use super::{DetectorError, IssueDetector, IssueFinding, Severity};
use crate::workflows::deposit::context::EvaluationContext;
use crate::workflows::deposit::statutes::{
    BAD_FAITH_LIABILITY, FORWARDING_ADDRESS, ITEMIZED_ACCOUNTING, NORMAL_WEAR_DEFINITION,
    REFUND_DEADLINE,
};
use crate::workflows::deposit::timeline::RETURN_DEADLINE_DAYS;

/// Substring vocabulary for wear-and-tear disputes in tenant notes.
///
/// Plain substring matching: "wear" also hits "sweater", and synonyms such as "scratched
/// floors" are missed. No labelled corpus exists to tune it against reviewer judgment.
pub const WEAR_AND_TEAR_KEYWORDS: &[&str] = &[
    "wear", "tear", "carpet", "paint", "scuff", "nail hole", "faded", "worn",
];

fn money(amount: f64) -> String {
    format!("${amount:.2}")
}

fn elapsed_days(context: &EvaluationContext, detector: &'static str) -> Result<i64, DetectorError> {
    context
        .days_since_move_out()
        .ok_or(DetectorError::TimelineUnknown { detector })
}

fn timeline_facts(context: &EvaluationContext, days: i64) -> Vec<String> {
    let mut facts = Vec::new();
    if let Some(move_out) = context.timeline.move_out_date {
        facts.push(format!("Move-out date: {move_out}"));
    }
    facts.push(format!("Days since move-out: {days}"));
    if let Some(deadline) = context.timeline.deadline_date {
        facts.push(format!("Statutory refund deadline: {deadline}"));
    }
    facts
}

pub struct DeadlineMissedFullDeposit;

impl IssueDetector for DeadlineMissedFullDeposit {
    fn id(&self) -> &'static str {
        "deadline_missed_full_deposit"
    }

    fn severity(&self) -> Severity {
        Severity::High
    }

    fn rank_weight(&self) -> u32 {
        100
    }

    fn matches(&self, context: &EvaluationContext) -> bool {
        context.past_deadline() && !context.deposit_returned && !context.itemization_provided
    }

    fn build(&self, context: &EvaluationContext) -> Result<IssueFinding, DetectorError> {
        let days = elapsed_days(context, self.id())?;
        let overdue = days - RETURN_DEADLINE_DAYS;

        let mut supporting_facts = timeline_facts(context, days);
        supporting_facts.push(format!("Days past deadline: {overdue}"));
        supporting_facts.push(format!("Total deposit paid: {}", money(context.total_deposit())));
        supporting_facts.push(format!("Amount returned: {}", money(context.amount_returned)));
        supporting_facts.push("Itemized list of deductions received: no".to_string());

        Ok(IssueFinding {
            title: "Refund deadline missed with the full deposit withheld".to_string(),
            rationale: format!(
                "The landlord had {RETURN_DEADLINE_DAYS} days after move-out to refund the deposit \
                 or send an itemized list of deductions. {days} days have passed ({days} - \
                 {RETURN_DEADLINE_DAYS} = {overdue} days late) and nothing was refunded or \
                 itemized, so the landlord is presumed to be acting in bad faith and loses the \
                 right to keep any part of the deposit."
            ),
            supporting_facts,
            statute_citations: vec![REFUND_DEADLINE, ITEMIZED_ACCOUNTING, BAD_FAITH_LIABILITY],
            recommended_steps: vec![
                format!(
                    "Send a written demand for the full {} by certified mail, return receipt requested",
                    money(context.amount_still_owed())
                ),
                "Cite the 30-day refund rule and the bad-faith presumption in the demand".to_string(),
                "Give the landlord 10 days to pay before filing in justice court".to_string(),
                "Keep copies of the lease, move-out photos and every message sent".to_string(),
            ],
        })
    }
}

pub struct DeadlineMissedNoItemization;

impl IssueDetector for DeadlineMissedNoItemization {
    fn id(&self) -> &'static str {
        "deadline_missed_no_itemization_only"
    }

    fn severity(&self) -> Severity {
        Severity::High
    }

    fn rank_weight(&self) -> u32 {
        90
    }

    fn matches(&self, context: &EvaluationContext) -> bool {
        context.past_deadline() && context.is_partial_return() && !context.itemization_provided
    }

    fn build(&self, context: &EvaluationContext) -> Result<IssueFinding, DetectorError> {
        let days = elapsed_days(context, self.id())?;
        let overdue = days - RETURN_DEADLINE_DAYS;
        let withheld = context.amount_still_owed();

        let mut supporting_facts = timeline_facts(context, days);
        supporting_facts.push(format!("Total deposit paid: {}", money(context.total_deposit())));
        supporting_facts.push(format!("Amount returned: {}", money(context.amount_returned)));
        supporting_facts.push(format!("Amount still withheld: {}", money(withheld)));
        supporting_facts.push("Itemized list of deductions received: no".to_string());

        Ok(IssueFinding {
            title: "Partial refund sent without the required itemization".to_string(),
            rationale: format!(
                "A landlord who keeps part of a deposit must explain every deduction in writing \
                 within {RETURN_DEADLINE_DAYS} days. {days} days have passed ({overdue} days \
                 late) and {} is still withheld without an itemized list, so the deductions are \
                 unsupported and the withheld balance is recoverable.",
                money(withheld)
            ),
            supporting_facts,
            statute_citations: vec![ITEMIZED_ACCOUNTING, BAD_FAITH_LIABILITY],
            recommended_steps: vec![
                format!(
                    "Demand the withheld {} in writing, noting no itemization was provided",
                    money(withheld)
                ),
                "Keep the partial refund check or transfer record as evidence".to_string(),
                "Do not sign any release or settlement language on the partial payment".to_string(),
            ],
        })
    }
}

pub struct WithinDeadlineDepositWithheld;

impl IssueDetector for WithinDeadlineDepositWithheld {
    fn id(&self) -> &'static str {
        "within_30_days_deposit_withheld"
    }

    fn severity(&self) -> Severity {
        Severity::High
    }

    fn rank_weight(&self) -> u32 {
        80
    }

    fn matches(&self, context: &EvaluationContext) -> bool {
        context.within_deadline() && context.timeline.days_at_least(1) && context.landlord_silent()
    }

    fn build(&self, context: &EvaluationContext) -> Result<IssueFinding, DetectorError> {
        let days = elapsed_days(context, self.id())?;
        let remaining = RETURN_DEADLINE_DAYS - days;

        let mut supporting_facts = timeline_facts(context, days);
        supporting_facts.push(format!("Days left before the deadline: {remaining}"));
        supporting_facts.push(format!("Total deposit paid: {}", money(context.total_deposit())));
        supporting_facts.push("Refund or itemized list received so far: no".to_string());

        Ok(IssueFinding {
            title: "Deposit still withheld as the refund deadline approaches".to_string(),
            rationale: format!(
                "{days} days have passed since move-out and nothing has been refunded or \
                 itemized. The landlord has {remaining} day(s) left ({RETURN_DEADLINE_DAYS} - \
                 {days}); if the deadline passes in silence, bad faith is presumed."
            ),
            supporting_facts,
            statute_citations: vec![REFUND_DEADLINE, BAD_FAITH_LIABILITY],
            recommended_steps: vec![
                "Confirm the landlord has your forwarding address in writing".to_string(),
                "Calendar the deadline date and check your mail daily until then".to_string(),
                "Gather move-out photos, the lease and the deposit receipt now".to_string(),
                "Prepare a demand letter to send the day after the deadline passes".to_string(),
            ],
        })
    }
}

pub struct NoForwardingAddress;

impl IssueDetector for NoForwardingAddress {
    fn id(&self) -> &'static str {
        "no_forwarding_address"
    }

    fn severity(&self) -> Severity {
        Severity::Medium
    }

    fn rank_weight(&self) -> u32 {
        60
    }

    fn matches(&self, context: &EvaluationContext) -> bool {
        !context.forwarding_provided && !context.deposit_returned
    }

    fn build(&self, context: &EvaluationContext) -> Result<IssueFinding, DetectorError> {
        let mut supporting_facts = vec!["Written forwarding address provided: no".to_string()];
        if let Some(days) = context.days_since_move_out() {
            supporting_facts.push(format!("Days since move-out: {days}"));
        }
        supporting_facts.push(format!("Amount returned: {}", money(context.amount_returned)));

        Ok(IssueFinding {
            title: "No written forwarding address on record".to_string(),
            rationale: "The landlord is not obligated to refund the deposit or itemize \
                        deductions until the tenant gives a written forwarding address. Without \
                        one, the bad-faith presumption is much harder to rely on."
                .to_string(),
            supporting_facts,
            statute_citations: vec![FORWARDING_ADDRESS],
            recommended_steps: vec![
                "Send your forwarding address to the landlord in writing today".to_string(),
                "Use certified mail or email so the delivery date can be proven".to_string(),
                "Record the date sent; keep the receipt with your case file".to_string(),
            ],
        })
    }
}

pub struct NormalWearConcern;

impl IssueDetector for NormalWearConcern {
    fn id(&self) -> &'static str {
        "normal_wear_concern"
    }

    fn severity(&self) -> Severity {
        Severity::Medium
    }

    fn rank_weight(&self) -> u32 {
        50
    }

    fn matches(&self, context: &EvaluationContext) -> bool {
        !context.is_fully_returned && !context.note_keywords(WEAR_AND_TEAR_KEYWORDS).is_empty()
    }

    fn build(&self, context: &EvaluationContext) -> Result<IssueFinding, DetectorError> {
        let keywords = context.note_keywords(WEAR_AND_TEAR_KEYWORDS);
        if keywords.is_empty() {
            return Err(DetectorError::Failed {
                detector: self.id(),
                reason: "no wear-and-tear keywords present".to_string(),
            });
        }

        Ok(IssueFinding {
            title: "Charges may cover normal wear and tear".to_string(),
            rationale: "Your notes describe conditions such as worn carpet or paint touch-ups. \
                        Deterioration from ordinary use is normal wear and tear and cannot be \
                        deducted from a security deposit."
                .to_string(),
            supporting_facts: vec![
                format!("Tenant notes mention: {}", keywords.join(", ")),
                format!("Deposit return status: {}", context.return_status.label()),
            ],
            statute_citations: vec![NORMAL_WEAR_DEFINITION, ITEMIZED_ACCOUNTING],
            recommended_steps: vec![
                "Compare move-in and move-out photos of the affected areas".to_string(),
                "Note the age of carpet and paint; older finishes wear out on their own".to_string(),
                "Dispute each wear-related charge in writing".to_string(),
            ],
        })
    }
}

/// Keeps a partial refund that did come with an itemized list from going unflagged.
pub struct ItemizedDeductionsReview;

impl IssueDetector for ItemizedDeductionsReview {
    fn id(&self) -> &'static str {
        "itemized_deductions_review"
    }

    fn severity(&self) -> Severity {
        Severity::Low
    }

    fn rank_weight(&self) -> u32 {
        20
    }

    fn matches(&self, context: &EvaluationContext) -> bool {
        context.itemization_provided && !context.is_fully_returned
    }

    fn build(&self, context: &EvaluationContext) -> Result<IssueFinding, DetectorError> {
        Ok(IssueFinding {
            title: "Review each itemized deduction".to_string(),
            rationale: "An itemized list was provided, so the dispute turns on whether each \
                        deduction is for real damage rather than ordinary use."
                .to_string(),
            supporting_facts: vec![
                "Itemized list of deductions received: yes".to_string(),
                format!("Amount still withheld: {}", money(context.amount_still_owed())),
            ],
            statute_citations: vec![ITEMIZED_ACCOUNTING, NORMAL_WEAR_DEFINITION],
            recommended_steps: vec![
                "Ask for receipts or invoices backing each deduction".to_string(),
                "Mark any line item that describes normal wear and tear".to_string(),
            ],
        })
    }
}
