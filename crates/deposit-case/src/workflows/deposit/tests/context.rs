use super::common::*;
use crate::workflows::deposit::context::parse_money;
use crate::workflows::deposit::domain::{IntakeRecord, ReturnStatus, TriState};
use crate::workflows::deposit::issues::WEAR_AND_TEAR_KEYWORDS;

#[test]
fn unknown_answers_never_count_as_compliance() {
    let mut record = intake(35);
    record.itemization_received = TriState::Unknown;
    record.forwarding_address_provided = TriState::Unknown;

    let context = context_for(&record);

    assert!(!context.itemization_provided);
    assert!(!context.forwarding_provided);
    assert_eq!(context.itemization_answer, TriState::Unknown);
}

#[test]
fn unrecognized_tri_state_strings_deserialize_as_unknown() {
    let record: IntakeRecord = serde_json::from_str(
        r#"{"tenant_name":"A","move_out_date":"2025-01-01","itemization_received":"maybe"}"#,
    )
    .expect("intake parses");

    assert_eq!(record.itemization_received, TriState::Unknown);
    assert_eq!(record.forwarding_address_provided, TriState::Unknown);
    assert_eq!(record.deposit_returned, ReturnStatus::None);
}

#[test]
fn money_strings_parse_to_finite_non_negative_values() {
    assert_eq!(parse_money(Some("$1,500.00")), 1500.0);
    assert_eq!(parse_money(Some(" 1 250.5 ")), 1250.5);
    assert_eq!(parse_money(Some("12.346")), 12.35);
    assert_eq!(parse_money(Some("fifteen hundred")), 0.0);
    assert_eq!(parse_money(Some("-200")), 0.0);
    assert_eq!(parse_money(Some("NaN")), 0.0);
    assert_eq!(parse_money(Some("inf")), 0.0);
    assert_eq!(parse_money(Some("")), 0.0);
    assert_eq!(parse_money(None), 0.0);
}

#[test]
fn total_deposit_includes_pet_deposit() {
    let mut record = intake(40);
    record.pet_deposit_amount = Some("250".to_string());

    let context = context_for(&record);

    assert_eq!(context.total_deposit(), 1750.0);
    assert_eq!(context.amount_still_owed(), 1750.0);
}

#[test]
fn partial_refund_leaves_the_balance_owed() {
    let context = context_for(&partial_refund());

    assert!(context.deposit_returned);
    assert!(!context.is_fully_returned);
    assert!(context.is_partial_return());
    assert_eq!(context.amount_still_owed(), 600.0);
}

#[test]
fn full_return_without_amount_owes_nothing() {
    let mut record = intake(12);
    record.deposit_returned = ReturnStatus::Full;

    let context = context_for(&record);

    assert_eq!(context.amount_still_owed(), 0.0);
    assert!(!context.landlord_silent());
}

#[test]
fn note_keywords_match_case_insensitively() {
    let mut record = intake(40);
    record.tenant_notes = Some("Charged for CARPET cleaning and a few Nail Holes".to_string());

    let context = context_for(&record);

    assert_eq!(
        context.note_keywords(WEAR_AND_TEAR_KEYWORDS),
        vec!["carpet", "nail hole"]
    );
}

#[test]
fn blank_lease_text_is_not_evidence() {
    let mut record = intake(40);
    record.lease_text = Some("   \n".to_string());
    assert!(!context_for(&record).lease_document_present);

    record.lease_text = Some("Security deposit: $1,500".to_string());
    assert!(context_for(&record).lease_document_present);
}
