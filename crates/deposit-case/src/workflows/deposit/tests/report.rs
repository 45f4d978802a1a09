use super::common::*;
use crate::workflows::deposit::domain::TriState;
use crate::workflows::deposit::report::{validate_report, ChecklistStatus};
use crate::workflows::deposit::statutes::StatuteTable;
use pretty_assertions::assert_eq;

#[test]
fn canonical_scenarios_pass_shape_validation() {
    for record in [
        clean_violation(),
        full_compliance(),
        approaching_deadline(),
        partial_refund(),
    ] {
        let outcome = engine().analyze(&record, today());
        assert!(
            outcome.validation.is_valid(),
            "problems: {:?}",
            outcome.validation.problems
        );
        assert_eq!(outcome.report.generated_on, today());
        assert!(!outcome.report.disclaimers.is_empty());
    }
}

#[test]
fn statutes_list_core_sections_then_cited_ones() {
    let report = engine().analyze(&clean_violation(), today()).report;
    let ids: Vec<&str> = report.statutes.iter().map(|s| s.id.as_str()).collect();

    assert_eq!(ids, vec!["92.103", "92.104", "92.107", "92.109"]);
    assert!(report.statutes[0]
        .url
        .ends_with("PR.92.htm#92.103"));
}

#[test]
fn every_citation_resolves_against_the_table() {
    let table = StatuteTable::texas_property_code();
    let mut record = intake(40);
    record.tenant_notes = Some("scuff marks".to_string());

    let report = engine().analyze(&record, today()).report;

    for issue in &report.leverage_points {
        for citation in &issue.statute_citations {
            assert!(table.contains(citation), "unknown citation {citation}");
            assert!(report.statutes.iter().any(|s| &s.id == citation));
        }
    }
}

#[test]
fn checklist_reflects_intake_answers() {
    let report = engine().analyze(&clean_violation(), today()).report;
    let statuses: Vec<ChecklistStatus> = report
        .compliance_checklist
        .iter()
        .map(|item| item.status)
        .collect();

    assert_eq!(
        statuses,
        vec![
            ChecklistStatus::NotMet,
            ChecklistStatus::NotMet,
            ChecklistStatus::Met,
            ChecklistStatus::NotMet,
        ]
    );
    assert_eq!(
        report.compliance_checklist[3].detail,
        "15 day(s) past the deadline with no response"
    );
}

#[test]
fn late_partial_refund_does_not_meet_the_deadline() {
    let report = engine().analyze(&partial_refund(), today()).report;
    let item = &report.compliance_checklist[3];

    assert_eq!(
        report.leverage_points[0].id,
        "deadline_missed_no_itemization_only"
    );
    assert_eq!(item.requirement, "Landlord responded within 30 days");
    assert_eq!(item.status, ChecklistStatus::NotMet);
    assert_eq!(
        item.detail,
        "10 day(s) past the deadline with a partial refund and no itemized list"
    );
}

#[test]
fn deadline_item_tracks_response_kind_and_timing() {
    let timely = engine().analyze(&full_compliance(), today()).report;
    assert_eq!(timely.compliance_checklist[3].status, ChecklistStatus::Met);

    let mut early_partial = partial_refund();
    early_partial.move_out_date = moved_out(12);
    let report = engine().analyze(&early_partial, today()).report;
    assert_eq!(report.compliance_checklist[3].status, ChecklistStatus::Unknown);

    let mut late_itemized = partial_refund();
    late_itemized.itemization_received = TriState::Yes;
    let report = engine().analyze(&late_itemized, today()).report;
    assert_eq!(report.compliance_checklist[3].status, ChecklistStatus::Unknown);
    assert_eq!(
        report.compliance_checklist[3].detail,
        "landlord responded, but the response date is unknown"
    );
}

#[test]
fn unknown_timeline_is_reported_not_fatal() {
    let mut record = clean_violation();
    record.move_out_date = "last spring".to_string();

    let outcome = engine().analyze(&record, today());

    assert!(!outcome.validation.is_valid());
    assert!(outcome
        .validation
        .problems
        .iter()
        .any(|problem| problem.contains("timeline is unknown")));
    assert_eq!(outcome.report.timeline.days_since_move_out, None);
    assert_eq!(
        outcome.report.compliance_checklist[3].status,
        ChecklistStatus::Unknown
    );
}

#[test]
fn validation_flags_tampered_reports() {
    let mut report = engine().analyze(&intake(40), today()).report;
    report.leverage_points.reverse();
    report.strategy.escalation_path.pop();
    report.recovery.probabilities.no_recovery += 1;
    report.statutes.retain(|statute| statute.id != "92.109");

    let validation = validate_report(&report);

    assert_eq!(validation.problems.len(), 4, "{:?}", validation.problems);
}

#[test]
fn identical_inputs_produce_identical_json() {
    let first = engine().analyze(&clean_violation(), today());
    let second = engine().analyze(&clean_violation(), today());

    let first = serde_json::to_string(&first).expect("serializes");
    let second = serde_json::to_string(&second).expect("serializes");
    assert_eq!(first, second);
}

#[test]
fn report_json_uses_stable_enum_names() {
    let outcome = engine().analyze(&clean_violation(), today());
    let json = serde_json::to_value(&outcome.report).expect("serializes");

    assert_eq!(json["case_strength"]["position"], "STRONG");
    assert_eq!(json["strategy"]["action"], "SEND_DEMAND_LETTER");
    assert_eq!(json["leverage_points"][0]["severity"], "HIGH");
    assert_eq!(json["timeline"]["past_deadline"], true);
}
