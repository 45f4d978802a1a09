use crate::infra::{parse_date, read_intake};
use chrono::{Duration, NaiveDate};
use clap::Args;
use deposit_case::config::AppConfig;
use deposit_case::error::AppError;
use deposit_case::workflows::deposit::{
    AnalysisOutcome, CaseAnalysisReport, CaseStrengthEngine, Clock, CommunicationChannel,
    IntakeRecord, ReturnStatus, SystemClock, TriState,
};
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Path to an intake JSON file
    #[arg(long)]
    pub(crate) intake: PathBuf,
    /// Evaluation date (YYYY-MM-DD). Defaults to today in the configured calendar.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the full report as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluation date (YYYY-MM-DD). Defaults to today in the configured calendar.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

fn resolve_today(today: Option<NaiveDate>) -> Result<NaiveDate, AppError> {
    match today {
        Some(date) => Ok(date),
        None => {
            let config = AppConfig::load()?;
            Ok(SystemClock::new(config.calendar).today())
        }
    }
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        intake,
        today,
        json,
    } = args;

    let today = resolve_today(today)?;
    let intake = read_intake(&intake)?;
    let outcome = CaseStrengthEngine::standard().analyze(&intake, today);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print!("{}", render_outcome(&outcome));
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = resolve_today(args.today)?;
    let engine = CaseStrengthEngine::standard();

    println!("Security deposit case analysis demo ({today})");
    for (label, intake) in sample_cases(today) {
        let outcome = engine.analyze(&intake, today);
        println!("\n=== {label} ===");
        print!("{}", render_outcome(&outcome));
    }
    Ok(())
}

pub(crate) fn sample_cases(today: NaiveDate) -> Vec<(&'static str, IntakeRecord)> {
    let moved_out = |days: i64| (today - Duration::days(days)).format("%Y-%m-%d").to_string();
    let base = IntakeRecord {
        tenant_name: "Maria Alvarez".to_string(),
        landlord_name: "Hillcrest Property Group".to_string(),
        property_address: "1400 Oak Ridge Dr, Apt 12, Austin, TX".to_string(),
        deposit_amount: Some("$1,500".to_string()),
        forwarding_address_provided: TriState::Yes,
        itemization_received: TriState::No,
        communication_methods: [CommunicationChannel::Email, CommunicationChannel::CertifiedMail]
            .into_iter()
            .collect(),
        ..IntakeRecord::default()
    };

    vec![
        (
            "Deadline missed, full deposit withheld",
            IntakeRecord {
                move_out_date: moved_out(45),
                forwarding_address_date: Some(moved_out(44)),
                ..base.clone()
            },
        ),
        (
            "Deadline approaching, landlord silent",
            IntakeRecord {
                move_out_date: moved_out(22),
                tenant_notes: Some("Carpet was already worn when I moved in.".to_string()),
                ..base.clone()
            },
        ),
        (
            "Partial refund without itemization",
            IntakeRecord {
                move_out_date: moved_out(40),
                deposit_amount: Some("1000".to_string()),
                deposit_returned: ReturnStatus::Partial,
                amount_returned: Some("400".to_string()),
                ..base
            },
        ),
    ]
}

pub(crate) fn render_outcome(outcome: &AnalysisOutcome) -> String {
    let mut out = render_report(&outcome.report);
    if !outcome.validation.is_valid() {
        let _ = writeln!(out, "\nReport warnings");
        for problem in &outcome.validation.problems {
            let _ = writeln!(out, "- {problem}");
        }
    }
    out
}

pub(crate) fn render_report(report: &CaseAnalysisReport) -> String {
    let mut out = String::new();
    let case = &report.case;
    let strength = &report.case_strength;

    let _ = writeln!(out, "{} v. {}", case.tenant_name, case.landlord_name);
    if !case.property_address.is_empty() {
        let _ = writeln!(out, "Property: {}", case.property_address);
    }
    match (
        report.timeline.days_since_move_out,
        report.timeline.deadline_date,
    ) {
        (Some(days), Some(deadline)) => {
            let _ = writeln!(out, "Days since move-out: {days} (deadline {deadline})");
        }
        _ => {
            let _ = writeln!(out, "Days since move-out: unknown (move-out date unreadable)");
        }
    }

    let _ = writeln!(
        out,
        "Case strength: {}/100, grade {}, {} position, {} urgency, win probability {}%",
        strength.score,
        strength.grade.label(),
        strength.position.label(),
        strength.urgency.label(),
        strength.win_probability
    );
    for component in &strength.components {
        let _ = writeln!(
            out,
            "  {:?}: {} ({})",
            component.factor, component.score, component.notes
        );
    }

    if report.leverage_points.is_empty() {
        let _ = writeln!(out, "\nLeverage points: none");
    } else {
        let _ = writeln!(out, "\nLeverage points");
        for issue in &report.leverage_points {
            let _ = writeln!(
                out,
                "- [{}] {} ({})",
                issue.severity.label(),
                issue.title,
                issue.statute_citations.join(", ")
            );
        }
    }

    let recovery = &report.recovery;
    let _ = writeln!(
        out,
        "\nRecovery: best ${:.2}, likely ${:.2}, worst ${:.2} (owed ${:.2})",
        recovery.best_case, recovery.likely_case, recovery.worst_case, recovery.amount_still_owed
    );

    let _ = writeln!(out, "\nRecommended action: {}", report.strategy.action.label());
    for step in &report.strategy.next_steps {
        let _ = writeln!(out, "{}. {} [{}]", step.order, step.step, step.deadline);
    }

    out
}
