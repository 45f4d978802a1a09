mod summary;
mod validation;
pub mod views;

pub use validation::validate_report;
pub use views::{
    AnalysisOutcome, CaseAnalysisReport, CaseOverview, CaseStrength, ChecklistItem,
    ChecklistStatus, ValidationReport,
};

pub(crate) use summary::{assemble_report, ReportParts};
