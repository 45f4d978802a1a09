use super::common::*;
use crate::workflows::deposit::domain::{CommunicationChannel, ReturnStatus, TriState};
use crate::workflows::deposit::evaluation::rules::{first_match, TIMELINE_RULES};
use crate::workflows::deposit::evaluation::{
    bad_faith_indicators, BadFaithIndicator, Grade, LeverageFactor, RecommendedAction,
    StrategicPosition, Urgency,
};
use crate::workflows::deposit::issues::Severity;
use pretty_assertions::assert_eq;

fn component_score(
    components: &[crate::workflows::deposit::evaluation::ScoreComponent],
    factor: LeverageFactor,
) -> u32 {
    components
        .iter()
        .find(|component| component.factor == factor)
        .map(|component| component.score)
        .unwrap_or_else(|| panic!("missing {factor:?} component"))
}

#[test]
fn clean_violation_is_strong_with_demand_letter() {
    let outcome = engine().analyze(&clean_violation(), today());
    let strength = &outcome.report.case_strength;

    assert_eq!(strength.position, StrategicPosition::Strong);
    assert_eq!(outcome.report.strategy.action, RecommendedAction::SendDemandLetter);
    assert_eq!(strength.urgency, Urgency::High);
    assert!(matches!(strength.grade, Grade::A | Grade::B));
    assert_eq!(strength.score, 99);
    assert_eq!(
        strength.bad_faith_indicators,
        vec![
            BadFaithIndicator::ProlongedSilence,
            BadFaithIndicator::IgnoredRepeatedContact,
            BadFaithIndicator::DeadlinePassedInSilence,
        ]
    );
}

#[test]
fn full_compliance_is_uncertain_below_weak_floor() {
    let outcome = engine().analyze(&full_compliance(), today());
    let strength = &outcome.report.case_strength;

    assert!(strength.score < 25, "score {}", strength.score);
    assert_eq!(strength.position, StrategicPosition::Uncertain);
    assert_eq!(strength.grade, Grade::F);
    assert!(outcome
        .report
        .leverage_points
        .iter()
        .all(|issue| issue.severity == Severity::Low));
}

#[test]
fn approaching_deadline_is_never_uncertain() {
    let outcome = engine().analyze(&approaching_deadline(), today());
    let strength = &outcome.report.case_strength;

    assert_eq!(strength.score, 70);
    assert_eq!(strength.position, StrategicPosition::Moderate);
    assert!(strength.win_probability >= 40);
    assert_eq!(
        component_score(&strength.components, LeverageFactor::Timeline),
        40
    );
}

#[test]
fn partial_refund_without_itemization_scores_moderate() {
    let outcome = engine().analyze(&partial_refund(), today());
    let strength = &outcome.report.case_strength;

    assert_eq!(
        component_score(&strength.components, LeverageFactor::Timeline),
        30
    );
    assert_eq!(
        component_score(&strength.components, LeverageFactor::TenantCompliance),
        15
    );
    assert_eq!(strength.score, 55);
    assert_eq!(strength.position, StrategicPosition::Moderate);
    assert_eq!(outcome.report.recovery.amount_still_owed, 600.0);
}

#[test]
fn timeline_rules_use_first_match() {
    // Past deadline with zero response also satisfies the generic withheld rule.
    let context = context_for(&intake(40));
    let rule = first_match(TIMELINE_RULES, &context).expect("a rule applies");
    assert_eq!(rule.key, "past_deadline_zero_response");
    assert_eq!(rule.points, 40);

    let mut itemized = intake(40);
    itemized.itemization_received = TriState::Yes;
    let rule = first_match(TIMELINE_RULES, &context_for(&itemized)).expect("a rule applies");
    assert_eq!(rule.key, "past_deadline_with_itemization");
    assert_eq!(rule.points, 18);
}

#[test]
fn monitor_rule_applies_after_partial_refund_inside_window() {
    let mut record = intake(25);
    record.deposit_returned = ReturnStatus::Partial;
    record.amount_returned = Some("500".to_string());

    let rule = first_match(TIMELINE_RULES, &context_for(&record)).expect("a rule applies");

    assert_eq!(rule.key, "approaching_deadline_monitor");
    assert_eq!(rule.points, 8);
}

#[test]
fn no_timeline_rule_for_fully_returned_or_unknown_dates() {
    assert!(first_match(TIMELINE_RULES, &context_for(&full_compliance())).is_none());

    let mut record = intake(40);
    record.move_out_date = "unknown".to_string();
    assert!(first_match(TIMELINE_RULES, &context_for(&record)).is_none());
}

#[test]
fn ignored_contact_needs_two_channels_and_a_passed_deadline() {
    let mut record = partial_refund();
    assert!(bad_faith_indicators(&context_for(&record)).is_empty());

    record.communication_methods =
        channels(&[CommunicationChannel::Email, CommunicationChannel::Phone]);
    assert_eq!(
        bad_faith_indicators(&context_for(&record)),
        vec![BadFaithIndicator::IgnoredRepeatedContact]
    );

    let mut early = approaching_deadline();
    early.communication_methods = record.communication_methods.clone();
    assert!(bad_faith_indicators(&context_for(&early)).is_empty());
}

#[test]
fn components_respect_their_caps() {
    let mut record = clean_violation();
    record.lease_text = Some("Lease agreement".to_string());
    record.tenant_notes = Some("worn carpet".to_string());

    let outcome = engine().analyze(&record, today());
    let components = &outcome.report.case_strength.components;

    assert!(component_score(components, LeverageFactor::Timeline) <= 40);
    assert!(component_score(components, LeverageFactor::LandlordBehavior) <= 30);
    assert_eq!(
        component_score(components, LeverageFactor::TenantCompliance),
        20
    );
    assert!(component_score(components, LeverageFactor::IssueSeverity) <= 20);
    assert_eq!(outcome.report.case_strength.score, 100);
    assert_eq!(outcome.report.case_strength.grade, Grade::A);
}

/// Exhaustive sweep over the discrete intake dimensions.
#[test]
fn high_issue_never_coexists_with_uncertain_position() {
    let statuses = [ReturnStatus::None, ReturnStatus::Partial, ReturnStatus::Full];
    let answers = [TriState::Yes, TriState::No, TriState::Unknown];
    let mut checked = 0;

    for days in [0_i64, 1, 10, 19, 20, 22, 29, 30, 31, 44, 45, 90, 400] {
        for status in statuses {
            for itemization in answers {
                for forwarding in answers {
                    for notes in [None, Some("faded paint")] {
                        for methods in [
                            Vec::new(),
                            vec![CommunicationChannel::Email],
                            vec![CommunicationChannel::Email, CommunicationChannel::Letter],
                        ] {
                            let mut record = intake(days);
                            record.deposit_returned = status;
                            record.amount_returned = match status {
                                ReturnStatus::Partial => Some("300".to_string()),
                                ReturnStatus::Full => Some("1500".to_string()),
                                ReturnStatus::None => None,
                            };
                            record.itemization_received = itemization;
                            record.forwarding_address_provided = forwarding;
                            record.tenant_notes = notes.map(str::to_string);
                            record.communication_methods = channels(&methods);

                            let report = engine().analyze(&record, today()).report;
                            let has_high = report
                                .leverage_points
                                .iter()
                                .any(|issue| issue.severity == Severity::High);

                            assert!(report.case_strength.score <= 100);
                            if has_high {
                                assert_ne!(
                                    report.case_strength.position,
                                    StrategicPosition::Uncertain,
                                    "HIGH issue with UNCERTAIN position for {record:?}"
                                );
                            }
                            checked += 1;
                        }
                    }
                }
            }
        }
    }

    assert_eq!(checked, 13 * 3 * 3 * 3 * 2 * 3);
}
