use serde::{Deserialize, Serialize};

use super::ScoreComponent;
use crate::workflows::deposit::context::EvaluationContext;
use crate::workflows::deposit::issues::SeverityCounts;

pub(crate) const TIMELINE_CAP: u32 = 40;
pub(crate) const LANDLORD_BEHAVIOR_CAP: u32 = 30;
pub(crate) const TENANT_COMPLIANCE_CAP: u32 = 20;
pub(crate) const ISSUE_SEVERITY_CAP: u32 = 20;

const BAD_FAITH_POINTS_EACH: u32 = 8;
const BAD_FAITH_POINTS_MAX: u32 = 25;
const EXTENDED_SILENCE_BONUS: u32 = 5;
const EXTENDED_SILENCE_DAYS: i64 = 45;
const APPROACHING_DEADLINE_DAYS: i64 = 20;

/// The four additive factor groups of the leverage score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeverageFactor {
    Timeline,
    LandlordBehavior,
    TenantCompliance,
    IssueSeverity,
}

/// Signals of landlord non-responsiveness; the score counts distinct members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadFaithIndicator {
    ProlongedSilence,
    IgnoredRepeatedContact,
    DeadlinePassedInSilence,
}

impl BadFaithIndicator {
    pub const fn label(self) -> &'static str {
        match self {
            BadFaithIndicator::ProlongedSilence => {
                "45+ days without a refund or itemized deductions"
            }
            BadFaithIndicator::IgnoredRepeatedContact => {
                "deadline passed despite contact through two or more channels"
            }
            BadFaithIndicator::DeadlinePassedInSilence => {
                "deadline passed with no refund and no itemization"
            }
        }
    }
}

/// One `(predicate, points)` pair in a first-match-wins chain.
pub(crate) struct FactorRule {
    pub key: &'static str,
    pub points: u32,
    pub applies: fn(&EvaluationContext) -> bool,
}

fn past_deadline_zero_response(ctx: &EvaluationContext) -> bool {
    ctx.past_deadline() && ctx.landlord_silent()
}

fn past_deadline_partial_no_itemization(ctx: &EvaluationContext) -> bool {
    ctx.past_deadline() && ctx.is_partial_return() && !ctx.itemization_provided
}

fn past_deadline_with_itemization(ctx: &EvaluationContext) -> bool {
    ctx.past_deadline() && ctx.itemization_provided && !ctx.is_fully_returned
}

fn past_deadline_other_withheld(ctx: &EvaluationContext) -> bool {
    ctx.past_deadline() && !ctx.is_fully_returned
}

fn approaching_deadline(ctx: &EvaluationContext) -> bool {
    ctx.within_deadline()
        && ctx.timeline.days_at_least(APPROACHING_DEADLINE_DAYS)
        && ctx.landlord_silent()
}

fn early_withholding(ctx: &EvaluationContext) -> bool {
    ctx.within_deadline() && ctx.timeline.days_at_least(1) && ctx.landlord_silent()
}

fn approaching_deadline_monitor(ctx: &EvaluationContext) -> bool {
    ctx.within_deadline()
        && ctx.timeline.days_at_least(APPROACHING_DEADLINE_DAYS)
        && !ctx.is_fully_returned
}

/// Timeline chain in priority order; at most one rule contributes.
pub(crate) const TIMELINE_RULES: &[FactorRule] = &[
    FactorRule {
        key: "past_deadline_zero_response",
        points: 40,
        applies: past_deadline_zero_response,
    },
    FactorRule {
        key: "past_deadline_partial_no_itemization",
        points: 30,
        applies: past_deadline_partial_no_itemization,
    },
    FactorRule {
        key: "past_deadline_with_itemization",
        points: 18,
        applies: past_deadline_with_itemization,
    },
    FactorRule {
        key: "past_deadline_other_withheld",
        points: 25,
        applies: past_deadline_other_withheld,
    },
    FactorRule {
        key: "approaching_deadline",
        points: 40,
        applies: approaching_deadline,
    },
    FactorRule {
        key: "early_withholding",
        points: 20,
        applies: early_withholding,
    },
    FactorRule {
        key: "approaching_deadline_monitor",
        points: 8,
        applies: approaching_deadline_monitor,
    },
];

pub(crate) fn first_match<'r>(
    rules: &'r [FactorRule],
    ctx: &EvaluationContext,
) -> Option<&'r FactorRule> {
    rules.iter().find(|rule| (rule.applies)(ctx))
}

pub fn bad_faith_indicators(ctx: &EvaluationContext) -> Vec<BadFaithIndicator> {
    let mut indicators = Vec::new();

    if ctx.timeline.days_at_least(EXTENDED_SILENCE_DAYS) && ctx.landlord_silent() {
        indicators.push(BadFaithIndicator::ProlongedSilence);
    }
    if ctx.past_deadline() && !ctx.is_fully_returned && ctx.communication_count() >= 2 {
        indicators.push(BadFaithIndicator::IgnoredRepeatedContact);
    }
    if ctx.past_deadline() && ctx.landlord_silent() {
        indicators.push(BadFaithIndicator::DeadlinePassedInSilence);
    }

    indicators
}

fn timeline_component(ctx: &EvaluationContext) -> ScoreComponent {
    match first_match(TIMELINE_RULES, ctx) {
        Some(rule) => ScoreComponent {
            factor: LeverageFactor::Timeline,
            score: rule.points.min(TIMELINE_CAP),
            notes: rule.key.replace('_', " "),
        },
        None if !ctx.timeline.is_known() => ScoreComponent {
            factor: LeverageFactor::Timeline,
            score: 0,
            notes: "move-out date unknown".to_string(),
        },
        None => ScoreComponent {
            factor: LeverageFactor::Timeline,
            score: 0,
            notes: "no timeline leverage".to_string(),
        },
    }
}

fn landlord_component(ctx: &EvaluationContext, indicators: &[BadFaithIndicator]) -> ScoreComponent {
    let mut score = (indicators.len() as u32 * BAD_FAITH_POINTS_EACH).min(BAD_FAITH_POINTS_MAX);
    let extended_silence = ctx.past_deadline()
        && ctx.timeline.days_at_least(EXTENDED_SILENCE_DAYS)
        && ctx.landlord_silent();
    if extended_silence {
        score += EXTENDED_SILENCE_BONUS;
    }

    let notes = if indicators.is_empty() {
        "no bad-faith indicators".to_string()
    } else {
        let labels: Vec<&str> = indicators.iter().map(|indicator| indicator.label()).collect();
        format!(
            "{} bad-faith indicator(s): {}{}",
            indicators.len(),
            labels.join("; "),
            if extended_silence {
                " (+ extended silence)"
            } else {
                ""
            }
        )
    };

    ScoreComponent {
        factor: LeverageFactor::LandlordBehavior,
        score: score.min(LANDLORD_BEHAVIOR_CAP),
        notes,
    }
}

fn tenant_component(ctx: &EvaluationContext) -> ScoreComponent {
    let mut score = 0;
    let mut notes = Vec::new();

    if ctx.forwarding_provided {
        score += 10;
        notes.push("forwarding address provided");
        if ctx.past_deadline() && !ctx.deposit_returned {
            score += 8;
            notes.push("deadline ran after address was given");
        }
        if ctx.within_deadline() && ctx.landlord_silent() {
            score += 15;
            notes.push("address on file while deadline is running");
        }
    }
    if ctx.lease_document_present {
        score += 5;
        notes.push("lease document supplied");
    }
    if ctx.communication_count() > 0 {
        score += 5;
        notes.push("communication logged");
    }

    ScoreComponent {
        factor: LeverageFactor::TenantCompliance,
        score: score.min(TENANT_COMPLIANCE_CAP),
        notes: if notes.is_empty() {
            "no tenant compliance evidence".to_string()
        } else {
            notes.join(", ")
        },
    }
}

fn severity_component(counts: SeverityCounts) -> ScoreComponent {
    let high = (counts.high * 10).min(20);
    let medium = (counts.medium * 3).min(10);

    ScoreComponent {
        factor: LeverageFactor::IssueSeverity,
        score: (high + medium).min(ISSUE_SEVERITY_CAP),
        notes: format!("{} high, {} medium severity issue(s)", counts.high, counts.medium),
    }
}

pub(crate) struct ScoreSignals {
    pub bad_faith: Vec<BadFaithIndicator>,
}

pub(crate) fn score_case(
    ctx: &EvaluationContext,
    counts: SeverityCounts,
) -> (Vec<ScoreComponent>, u8, ScoreSignals) {
    let bad_faith = bad_faith_indicators(ctx);

    let components = vec![
        timeline_component(ctx),
        landlord_component(ctx, &bad_faith),
        tenant_component(ctx),
        severity_component(counts),
    ];

    let total: u32 = components.iter().map(|component| component.score).sum();
    let total = total.min(100) as u8;

    (components, total, ScoreSignals { bad_faith })
}
