//! Independent compliance rules evaluated against the case context.

mod detectors;

pub use detectors::{
    DeadlineMissedFullDeposit, DeadlineMissedNoItemization, ItemizedDeductionsReview,
    NoForwardingAddress, NormalWearConcern, WithinDeadlineDepositWithheld,
    WEAR_AND_TEAR_KEYWORDS,
};

use std::panic::{catch_unwind, AssertUnwindSafe};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::context::EvaluationContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
        }
    }
}

/// A ranked leverage point produced by one detector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedIssue {
    pub id: String,
    pub severity: Severity,
    pub rank_weight: u32,
    pub title: String,
    pub rationale: String,
    pub supporting_facts: Vec<String>,
    pub statute_citations: Vec<String>,
    pub recommended_steps: Vec<String>,
}

/// Content half of a finding; identity and severity come from the detector itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueFinding {
    pub title: String,
    pub rationale: String,
    pub supporting_facts: Vec<String>,
    pub statute_citations: Vec<&'static str>,
    pub recommended_steps: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum DetectorError {
    #[error("detector `{detector}` requires a known move-out timeline")]
    TimelineUnknown { detector: &'static str },
    #[error("detector `{detector}` failed: {reason}")]
    Failed {
        detector: &'static str,
        reason: String,
    },
}

/// One compliance scenario. Implementations must not depend on other detectors.
pub trait IssueDetector: Send + Sync {
    fn id(&self) -> &'static str;
    fn severity(&self) -> Severity;
    fn rank_weight(&self) -> u32;
    fn matches(&self, context: &EvaluationContext) -> bool;
    fn build(&self, context: &EvaluationContext) -> Result<IssueFinding, DetectorError>;
}

/// Ordered detector set; declaration order breaks rank ties.
pub struct IssueRegistry {
    detectors: Vec<Box<dyn IssueDetector>>,
}

impl IssueRegistry {
    pub fn standard() -> Self {
        Self::with_detectors(vec![
            Box::new(DeadlineMissedFullDeposit),
            Box::new(DeadlineMissedNoItemization),
            Box::new(WithinDeadlineDepositWithheld),
            Box::new(NoForwardingAddress),
            Box::new(NormalWearConcern),
            Box::new(ItemizedDeductionsReview),
        ])
    }

    pub fn with_detectors(detectors: Vec<Box<dyn IssueDetector>>) -> Self {
        Self { detectors }
    }

    pub fn detector_ids(&self) -> Vec<&'static str> {
        self.detectors.iter().map(|detector| detector.id()).collect()
    }

    /// Run every detector; failures are logged and skipped.
    pub fn detect(&self, context: &EvaluationContext) -> Vec<DetectedIssue> {
        let mut issues = Vec::new();

        for detector in &self.detectors {
            let outcome = catch_unwind(AssertUnwindSafe(|| {
                if detector.matches(context) {
                    detector.build(context).map(Some)
                } else {
                    Ok(None)
                }
            }));

            match outcome {
                Ok(Ok(Some(finding))) => {
                    debug!(detector = detector.id(), "issue detected");
                    issues.push(DetectedIssue {
                        id: detector.id().to_string(),
                        severity: detector.severity(),
                        rank_weight: detector.rank_weight(),
                        title: finding.title,
                        rationale: finding.rationale,
                        supporting_facts: finding.supporting_facts,
                        statute_citations: finding
                            .statute_citations
                            .into_iter()
                            .map(str::to_string)
                            .collect(),
                        recommended_steps: finding.recommended_steps,
                    });
                }
                Ok(Ok(None)) => {}
                Ok(Err(err)) => {
                    warn!(detector = detector.id(), error = %err, "issue detector failed; skipping");
                }
                Err(_) => {
                    warn!(detector = detector.id(), "issue detector panicked; skipping");
                }
            }
        }

        // Stable sort keeps registry order for equal weights.
        issues.sort_by(|left, right| right.rank_weight.cmp(&left.rank_weight));
        issues
    }
}

impl Default for IssueRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Severity tallies consumed by the scoring engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl SeverityCounts {
    pub fn tally(issues: &[DetectedIssue]) -> Self {
        issues
            .iter()
            .fold(Self::default(), |mut counts, issue| {
                match issue.severity {
                    Severity::High => counts.high += 1,
                    Severity::Medium => counts.medium += 1,
                    Severity::Low => counts.low += 1,
                }
                counts
            })
    }
}
