use super::bands::{
    standard_recovery_bands, standard_score_bands, BandTable, BandTableError, RecoveryBandEntry,
    ScoreBandEntry,
};
use crate::workflows::deposit::statutes::StatuteTable;

/// Score at which grade A is awarded, above the STRONG band's own floor.
pub const GRADE_A_FLOOR: u8 = 90;
/// Flat statutory penalty added to recoveries in bad-faith cases.
pub const STATUTORY_PENALTY: f64 = 100.0;
/// Minimum score before the statutory penalty is projected.
pub const PENALTY_SCORE_FLOOR: u8 = 60;

/// Immutable lookup data built once at startup and shared by every analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTables {
    pub score_bands: BandTable<ScoreBandEntry>,
    pub recovery_bands: BandTable<RecoveryBandEntry>,
    pub statutes: StatuteTable,
}

impl DecisionTables {
    pub fn new(
        score_bands: Vec<ScoreBandEntry>,
        recovery_bands: Vec<RecoveryBandEntry>,
        statutes: StatuteTable,
    ) -> Result<Self, BandTableError> {
        Ok(Self {
            score_bands: BandTable::new(score_bands)?,
            recovery_bands: BandTable::new(recovery_bands)?,
            statutes,
        })
    }

    pub fn standard() -> Self {
        Self {
            score_bands: BandTable::new(standard_score_bands())
                .unwrap_or_else(|err| unreachable!("standard score bands are valid: {err}")),
            recovery_bands: BandTable::new(standard_recovery_bands())
                .unwrap_or_else(|err| unreachable!("standard recovery bands are valid: {err}")),
            statutes: StatuteTable::texas_property_code(),
        }
    }
}

impl Default for DecisionTables {
    fn default() -> Self {
        Self::standard()
    }
}
