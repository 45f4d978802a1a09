use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::domain::{CommunicationChannel, IntakeRecord, ReturnStatus, TriState};
use super::timeline::{parse_intake_date, Timeline};

/// Normalized view over an intake record plus its timeline.
///
/// Every downstream stage reads this instead of the raw intake, so tri-state answers
/// and money strings are interpreted exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationContext {
    pub tenant_name: String,
    pub landlord_name: String,
    pub property_address: String,
    pub timeline: Timeline,
    pub deposit_amount: f64,
    pub pet_deposit_amount: f64,
    pub amount_returned: f64,
    pub return_status: ReturnStatus,
    /// Any refund at all, partial or full.
    pub deposit_returned: bool,
    pub is_fully_returned: bool,
    pub itemization_provided: bool,
    pub forwarding_provided: bool,
    /// Raw answers, kept only for checklist display.
    pub itemization_answer: TriState,
    pub forwarding_answer: TriState,
    pub forwarding_address_date: Option<NaiveDate>,
    pub communication_methods: BTreeSet<CommunicationChannel>,
    pub lease_document_present: bool,
    notes_lower: String,
}

impl EvaluationContext {
    pub fn build(intake: &IntakeRecord, timeline: Timeline) -> Self {
        let return_status = intake.deposit_returned;
        let notes_lower = intake
            .tenant_notes
            .as_deref()
            .unwrap_or_default()
            .to_lowercase();
        let lease_document_present = intake
            .lease_text
            .as_deref()
            .map(|text| !text.trim().is_empty())
            .unwrap_or(false);

        Self {
            tenant_name: intake.tenant_name.trim().to_string(),
            landlord_name: intake.landlord_name.trim().to_string(),
            property_address: intake.property_address.trim().to_string(),
            timeline,
            deposit_amount: parse_money(intake.deposit_amount.as_deref()),
            pet_deposit_amount: parse_money(intake.pet_deposit_amount.as_deref()),
            amount_returned: parse_money(intake.amount_returned.as_deref()),
            return_status,
            deposit_returned: return_status != ReturnStatus::None,
            is_fully_returned: return_status == ReturnStatus::Full,
            itemization_provided: intake.itemization_received.is_yes(),
            forwarding_provided: intake.forwarding_address_provided.is_yes(),
            itemization_answer: intake.itemization_received,
            forwarding_answer: intake.forwarding_address_provided,
            forwarding_address_date: intake
                .forwarding_address_date
                .as_deref()
                .and_then(parse_intake_date),
            communication_methods: intake.communication_methods.clone(),
            lease_document_present,
            notes_lower,
        }
    }

    pub fn total_deposit(&self) -> f64 {
        self.deposit_amount + self.pet_deposit_amount
    }

    pub fn amount_still_owed(&self) -> f64 {
        if self.is_fully_returned && self.amount_returned <= 0.0 {
            return 0.0;
        }
        (self.total_deposit() - self.amount_returned).max(0.0)
    }

    pub fn is_partial_return(&self) -> bool {
        self.return_status == ReturnStatus::Partial
    }

    pub fn days_since_move_out(&self) -> Option<i64> {
        self.timeline.days_since_move_out
    }

    pub fn past_deadline(&self) -> bool {
        self.timeline.is_past_deadline()
    }

    pub fn within_deadline(&self) -> bool {
        self.timeline.is_within_deadline()
    }

    pub fn communication_count(&self) -> usize {
        self.communication_methods.len()
    }

    /// Nothing refunded and nothing itemized: the landlord has been silent.
    pub fn landlord_silent(&self) -> bool {
        !self.deposit_returned && !self.itemization_provided
    }

    /// Keywords from `vocabulary` that appear anywhere in the tenant notes.
    pub fn note_keywords(&self, vocabulary: &[&'static str]) -> Vec<&'static str> {
        vocabulary
            .iter()
            .copied()
            .filter(|keyword| self.notes_lower.contains(keyword))
            .collect()
    }
}

/// Amounts above this are treated as entry errors.
const MONEY_CEILING: f64 = 1_000_000_000.0;

/// Parse a form money string; anything unusable becomes zero.
pub fn parse_money(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };

    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|ch| !matches!(ch, '$' | ',' | ' '))
        .collect();

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 && value <= MONEY_CEILING => {
            round_cents(value)
        }
        _ => 0.0,
    }
}

pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
