use serde::{Deserialize, Serialize};

/// Letter grades, declared worst-first so ordering follows case strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    F,
    D,
    C,
    B,
    A,
}

impl Grade {
    pub const fn label(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrategicPosition {
    Uncertain,
    Weak,
    Moderate,
    Strong,
}

impl StrategicPosition {
    pub const fn label(self) -> &'static str {
        match self {
            StrategicPosition::Uncertain => "UNCERTAIN",
            StrategicPosition::Weak => "WEAK",
            StrategicPosition::Moderate => "MODERATE",
            StrategicPosition::Strong => "STRONG",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendedAction {
    ReviewSituation,
    GatherEvidence,
    RequestItemization,
    SendDemandLetter,
}

impl RecommendedAction {
    pub const fn label(self) -> &'static str {
        match self {
            RecommendedAction::ReviewSituation => "REVIEW_SITUATION",
            RecommendedAction::GatherEvidence => "GATHER_EVIDENCE",
            RecommendedAction::RequestItemization => "REQUEST_ITEMIZATION",
            RecommendedAction::SendDemandLetter => "SEND_DEMAND_LETTER",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    pub const fn label(self) -> &'static str {
        match self {
            Urgency::Low => "LOW",
            Urgency::Medium => "MEDIUM",
            Urgency::High => "HIGH",
        }
    }
}

/// Anything addressable by a minimum-score threshold.
pub trait Banded {
    fn min_score(&self) -> u8;

    /// Rules one entry must satisfy on its own.
    fn check(&self) -> Result<(), BandTableError> {
        Ok(())
    }

    /// Rules between this entry and the next band below it.
    fn check_above(&self, _lower: &Self) -> Result<(), BandTableError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBandEntry {
    pub min_score: u8,
    pub grade: Grade,
    pub position: StrategicPosition,
    pub action: RecommendedAction,
    pub urgency: Urgency,
}

impl Banded for ScoreBandEntry {
    fn min_score(&self) -> u8 {
        self.min_score
    }

    fn check_above(&self, lower: &Self) -> Result<(), BandTableError> {
        if self.grade < lower.grade {
            return Err(BandTableError::Regression {
                min_score: self.min_score,
                field: "grade",
            });
        }
        if self.position < lower.position {
            return Err(BandTableError::Regression {
                min_score: self.min_score,
                field: "position",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecoveryBandEntry {
    pub min_score: u8,
    pub likely_multiplier: f64,
    pub likely_adds_penalty: bool,
    pub worst_multiplier: f64,
    pub prob_full: u8,
    pub prob_partial: u8,
    pub prob_none: u8,
    pub confidence_note: &'static str,
}

impl RecoveryBandEntry {
    pub fn probability_total(&self) -> u16 {
        self.prob_full as u16 + self.prob_partial as u16 + self.prob_none as u16
    }
}

impl Banded for RecoveryBandEntry {
    fn min_score(&self) -> u8 {
        self.min_score
    }

    fn check(&self) -> Result<(), BandTableError> {
        let total = self.probability_total();
        if total != 100 {
            return Err(BandTableError::ProbabilitiesNotClosed {
                min_score: self.min_score,
                total,
            });
        }
        Ok(())
    }

    fn check_above(&self, lower: &Self) -> Result<(), BandTableError> {
        if self.likely_multiplier < lower.likely_multiplier {
            return Err(BandTableError::Regression {
                min_score: self.min_score,
                field: "likely_multiplier",
            });
        }
        if self.worst_multiplier < lower.worst_multiplier {
            return Err(BandTableError::Regression {
                min_score: self.min_score,
                field: "worst_multiplier",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BandTableError {
    #[error("band table must contain at least one entry")]
    Empty,
    #[error("band table must include a zero-score floor entry")]
    MissingFloor,
    #[error("band threshold {min_score} appears more than once")]
    DuplicateThreshold { min_score: u8 },
    #[error("band {min_score} probabilities sum to {total}, not 100")]
    ProbabilitiesNotClosed { min_score: u8, total: u16 },
    #[error("band {min_score} lowers `{field}` below the band beneath it")]
    Regression { min_score: u8, field: &'static str },
}

/// Ordered threshold table; entries are kept highest threshold first.
#[derive(Debug, Clone, PartialEq)]
pub struct BandTable<T> {
    entries: Vec<T>,
}

impl<T: Banded> BandTable<T> {
    pub fn new(mut entries: Vec<T>) -> Result<Self, BandTableError> {
        if entries.is_empty() {
            return Err(BandTableError::Empty);
        }
        entries.sort_by(|left, right| right.min_score().cmp(&left.min_score()));
        if entries.last().map(Banded::min_score) != Some(0) {
            return Err(BandTableError::MissingFloor);
        }
        for entry in &entries {
            entry.check()?;
        }
        for pair in entries.windows(2) {
            let (upper, lower) = (&pair[0], &pair[1]);
            if upper.min_score() == lower.min_score() {
                return Err(BandTableError::DuplicateThreshold {
                    min_score: upper.min_score(),
                });
            }
            upper.check_above(lower)?;
        }
        Ok(Self { entries })
    }

    /// First entry whose floor the score reaches, scanning from the top.
    pub fn lookup(&self, score: u8) -> &T {
        self.entries
            .iter()
            .find(|entry| score >= entry.min_score())
            .unwrap_or_else(|| &self.entries[self.entries.len() - 1])
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }
}

pub fn standard_score_bands() -> Vec<ScoreBandEntry> {
    vec![
        ScoreBandEntry {
            min_score: 75,
            grade: Grade::B,
            position: StrategicPosition::Strong,
            action: RecommendedAction::SendDemandLetter,
            urgency: Urgency::High,
        },
        ScoreBandEntry {
            min_score: 50,
            grade: Grade::C,
            position: StrategicPosition::Moderate,
            action: RecommendedAction::RequestItemization,
            urgency: Urgency::Medium,
        },
        ScoreBandEntry {
            min_score: 25,
            grade: Grade::D,
            position: StrategicPosition::Weak,
            action: RecommendedAction::GatherEvidence,
            urgency: Urgency::Low,
        },
        ScoreBandEntry {
            min_score: 0,
            grade: Grade::F,
            position: StrategicPosition::Uncertain,
            action: RecommendedAction::ReviewSituation,
            urgency: Urgency::Low,
        },
    ]
}

pub fn standard_recovery_bands() -> Vec<RecoveryBandEntry> {
    vec![
        RecoveryBandEntry {
            min_score: 80,
            likely_multiplier: 1.0,
            likely_adds_penalty: true,
            worst_multiplier: 0.75,
            prob_full: 70,
            prob_partial: 25,
            prob_none: 5,
            confidence_note: "High confidence: the record shows a clear statutory violation.",
        },
        RecoveryBandEntry {
            min_score: 65,
            likely_multiplier: 0.85,
            likely_adds_penalty: true,
            worst_multiplier: 0.5,
            prob_full: 55,
            prob_partial: 35,
            prob_none: 10,
            confidence_note: "Good confidence: strong facts with some room for landlord defenses.",
        },
        RecoveryBandEntry {
            min_score: 50,
            likely_multiplier: 0.65,
            likely_adds_penalty: false,
            worst_multiplier: 0.3,
            prob_full: 40,
            prob_partial: 40,
            prob_none: 20,
            confidence_note: "Moderate confidence: outcome depends on documentation and negotiation.",
        },
        RecoveryBandEntry {
            min_score: 25,
            likely_multiplier: 0.4,
            likely_adds_penalty: false,
            worst_multiplier: 0.1,
            prob_full: 25,
            prob_partial: 40,
            prob_none: 35,
            confidence_note: "Limited confidence: more evidence is needed before escalating.",
        },
        RecoveryBandEntry {
            min_score: 0,
            likely_multiplier: 0.15,
            likely_adds_penalty: false,
            worst_multiplier: 0.0,
            prob_full: 10,
            prob_partial: 30,
            prob_none: 60,
            confidence_note: "Low confidence: no clear violation is established yet.",
        },
    ]
}
