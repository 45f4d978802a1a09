use super::views::{CaseAnalysisReport, ValidationReport};

const ESCALATION_PHASES: usize = 4;

/// Check presence and shape of every report section.
pub fn validate_report(report: &CaseAnalysisReport) -> ValidationReport {
    let mut problems = Vec::new();

    if report.case.tenant_name.is_empty() {
        problems.push("case.tenant_name is empty".to_string());
    }
    if report.case.landlord_name.is_empty() {
        problems.push("case.landlord_name is empty".to_string());
    }
    if !report.timeline.is_known() {
        problems.push("timeline is unknown: move-out date could not be parsed".to_string());
    }
    if report.compliance_checklist.is_empty() {
        problems.push("compliance_checklist is empty".to_string());
    }

    let ranked = report
        .leverage_points
        .windows(2)
        .all(|pair| pair[0].rank_weight >= pair[1].rank_weight);
    if !ranked {
        problems.push("leverage_points are not ordered by rank_weight".to_string());
    }

    for issue in &report.leverage_points {
        for citation in &issue.statute_citations {
            if !report.statutes.iter().any(|statute| &statute.id == citation) {
                problems.push(format!(
                    "leverage point `{}` cites unknown statute {citation}",
                    issue.id
                ));
            }
        }
    }

    if report.case_strength.score > 100 {
        problems.push(format!(
            "case_strength.score {} exceeds 100",
            report.case_strength.score
        ));
    }
    if report.case_strength.components.is_empty() {
        problems.push("case_strength.components is empty".to_string());
    }

    let probabilities = &report.recovery.probabilities;
    let total = probabilities.full_recovery as u16
        + probabilities.partial_recovery as u16
        + probabilities.no_recovery as u16;
    if total != 100 {
        problems.push(format!("recovery probabilities sum to {total}, not 100"));
    }

    if report.strategy.next_steps.is_empty() {
        problems.push("strategy.next_steps is empty".to_string());
    }
    if report.strategy.escalation_path.len() != ESCALATION_PHASES {
        problems.push(format!(
            "strategy.escalation_path has {} phases, expected {ESCALATION_PHASES}",
            report.strategy.escalation_path.len()
        ));
    }
    if report.statutes.is_empty() {
        problems.push("statutes is empty".to_string());
    }
    if report.disclaimers.is_empty() {
        problems.push("disclaimers is empty".to_string());
    }

    ValidationReport { problems }
}
