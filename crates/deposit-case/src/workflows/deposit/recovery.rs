use serde::{Deserialize, Serialize};

use super::context::{round_cents, EvaluationContext};
use super::domain::ReturnStatus;
use super::evaluation::{BandTable, RecoveryBandEntry, PENALTY_SCORE_FLOOR, STATUTORY_PENALTY};

const WIN_PROBABILITY_SCALE: f64 = 0.85;
const FORWARDING_BOOST: f64 = 1.1;
const LEASE_EVIDENCE_BOOST: f64 = 1.05;
const LEASE_EVIDENCE_CAP: f64 = 95.0;
const APPROACHING_DEADLINE_FLOOR: f64 = 40.0;
const APPROACHING_DEADLINE_DAYS: i64 = 20;
const WIN_PROBABILITY_MIN: f64 = 5.0;
const WIN_PROBABILITY_MAX: f64 = 95.0;

/// Facts the estimator needs, detached from the full context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecoveryInputs {
    pub deposit_amount: f64,
    pub pet_deposit_amount: f64,
    pub score: u8,
    pub past_deadline: Option<bool>,
    pub return_status: ReturnStatus,
    pub amount_returned: f64,
}

impl RecoveryInputs {
    pub fn from_context(context: &EvaluationContext, score: u8) -> Self {
        Self {
            deposit_amount: context.deposit_amount,
            pet_deposit_amount: context.pet_deposit_amount,
            score,
            past_deadline: context.timeline.past_deadline,
            return_status: context.return_status,
            amount_returned: context.amount_returned,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeProbabilities {
    pub full_recovery: u8,
    pub partial_recovery: u8,
    pub no_recovery: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoveryEstimate {
    pub total_deposit: f64,
    pub amount_returned: f64,
    pub amount_still_owed: f64,
    pub statutory_penalty: f64,
    pub best_case: f64,
    pub likely_case: f64,
    pub worst_case: f64,
    pub probabilities: OutcomeProbabilities,
    pub confidence_note: String,
}

impl RecoveryEstimate {
    fn no_deposit() -> Self {
        Self {
            total_deposit: 0.0,
            amount_returned: 0.0,
            amount_still_owed: 0.0,
            statutory_penalty: 0.0,
            best_case: 0.0,
            likely_case: 0.0,
            worst_case: 0.0,
            probabilities: OutcomeProbabilities {
                full_recovery: 0,
                partial_recovery: 0,
                no_recovery: 100,
            },
            confidence_note: "No deposit amount provided.".to_string(),
        }
    }
}

/// Project best, likely and worst recoveries from the recovery band for `score`.
pub fn estimate_recovery(
    inputs: &RecoveryInputs,
    bands: &BandTable<RecoveryBandEntry>,
) -> RecoveryEstimate {
    let total_deposit = sanitize(inputs.deposit_amount) + sanitize(inputs.pet_deposit_amount);
    if total_deposit <= 0.0 {
        return RecoveryEstimate::no_deposit();
    }

    let amount_returned = match inputs.return_status {
        // A "full" answer with no amount entered still means nothing is owed.
        ReturnStatus::Full if sanitize(inputs.amount_returned) <= 0.0 => total_deposit,
        _ => sanitize(inputs.amount_returned),
    };
    let amount_still_owed = (total_deposit - amount_returned).max(0.0);
    let past_deadline = inputs.past_deadline == Some(true);
    let penalty = if past_deadline && inputs.score >= PENALTY_SCORE_FLOOR {
        STATUTORY_PENALTY
    } else {
        0.0
    };

    let band = bands.lookup(inputs.score);
    let mut likely_case = amount_still_owed * band.likely_multiplier;
    if band.likely_adds_penalty && past_deadline {
        likely_case += penalty;
    }

    RecoveryEstimate {
        total_deposit: round_cents(total_deposit),
        amount_returned: round_cents(amount_returned),
        amount_still_owed: round_cents(amount_still_owed),
        statutory_penalty: penalty,
        best_case: round_cents(amount_still_owed + penalty),
        likely_case: round_cents(likely_case),
        worst_case: round_cents(amount_still_owed * band.worst_multiplier),
        probabilities: OutcomeProbabilities {
            full_recovery: band.prob_full,
            partial_recovery: band.prob_partial,
            no_recovery: band.prob_none,
        },
        confidence_note: band.confidence_note.to_string(),
    }
}

fn sanitize(amount: f64) -> f64 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}

/// Chance of prevailing, as a whole percentage in `[5, 95]`.
pub fn win_probability(score: u8, context: &EvaluationContext) -> u8 {
    let mut probability = score as f64 * WIN_PROBABILITY_SCALE;

    if context.forwarding_provided {
        probability *= FORWARDING_BOOST;
    }
    if context.lease_document_present {
        probability = (probability * LEASE_EVIDENCE_BOOST).min(LEASE_EVIDENCE_CAP);
    }

    // The score stays structurally low until the deadline actually passes.
    let approaching = context.within_deadline()
        && context.timeline.days_at_least(APPROACHING_DEADLINE_DAYS)
        && context.landlord_silent();
    if approaching {
        probability = probability.max(APPROACHING_DEADLINE_FLOOR);
    }

    probability
        .clamp(WIN_PROBABILITY_MIN, WIN_PROBABILITY_MAX)
        .round() as u8
}
