//! Data access errors.
//!
//! Lookup errors explain why an engine call failed closed; data errors are
//! integrity findings reported by bundle validation.

use crate::error::{CalcError, ErrorSeverity};

use super::keys::Affinity;

/// Reasons an engine call could not resolve its inputs against the bundle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("weapon '{0}' not found")]
    WeaponNotFound(String),

    #[error("weapon '{weapon}' has no {affinity} affinity")]
    AffinityNotFound { weapon: String, affinity: Affinity },

    #[error("upgrade level +{level} exceeds maximum +{max}")]
    UpgradeLevelOutOfRange { level: u32, max: u32 },

    #[error("reinforce table {0} not found")]
    ReinforceTableNotFound(u32),

    #[error("reinforce table {table} has no level +{level}")]
    ReinforceLevelNotFound { table: u32, level: u32 },

    #[error("curve {0} not found")]
    CurveNotFound(u32),

    #[error("special effect {0} not found")]
    SpEffectNotFound(u32),

    #[error("sword art '{0}' not found")]
    SwordArtNotFound(String),

    #[error("attack element correct {0} not found")]
    ElementCorrectNotFound(i32),

    #[error("final damage rate {0} not found")]
    FinalDamageRateNotFound(u32),
}

impl CalcError for LookupError {
    fn severity(&self) -> ErrorSeverity {
        use LookupError::*;
        match self {
            // The caller asked for something the bundle never had
            WeaponNotFound(_)
            | AffinityNotFound { .. }
            | UpgradeLevelOutOfRange { .. }
            | SwordArtNotFound(_) => ErrorSeverity::Validation,

            // A record points at something that is not there
            ReinforceTableNotFound(_)
            | ReinforceLevelNotFound { .. }
            | CurveNotFound(_)
            | SpEffectNotFound(_)
            | ElementCorrectNotFound(_)
            | FinalDamageRateNotFound(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use LookupError::*;
        match self {
            WeaponNotFound(_) => "LOOKUP_WEAPON_NOT_FOUND",
            AffinityNotFound { .. } => "LOOKUP_AFFINITY_NOT_FOUND",
            UpgradeLevelOutOfRange { .. } => "LOOKUP_UPGRADE_LEVEL_OUT_OF_RANGE",
            ReinforceTableNotFound(_) => "LOOKUP_REINFORCE_TABLE_NOT_FOUND",
            ReinforceLevelNotFound { .. } => "LOOKUP_REINFORCE_LEVEL_NOT_FOUND",
            CurveNotFound(_) => "LOOKUP_CURVE_NOT_FOUND",
            SpEffectNotFound(_) => "LOOKUP_SP_EFFECT_NOT_FOUND",
            SwordArtNotFound(_) => "LOOKUP_SWORD_ART_NOT_FOUND",
            ElementCorrectNotFound(_) => "LOOKUP_ELEMENT_CORRECT_NOT_FOUND",
            FinalDamageRateNotFound(_) => "LOOKUP_FINAL_DAMAGE_RATE_NOT_FOUND",
        }
    }
}

/// Integrity findings in a data bundle.
///
/// A bundle with findings still loads; the engine fails closed on exactly the
/// weapons and skills these point at.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DataError {
    #[error("{weapon} ({affinity}) references missing curve {curve_id}")]
    DanglingCurve {
        weapon: String,
        affinity: Affinity,
        curve_id: u32,
    },

    #[error("{weapon} ({affinity}) references missing reinforce table {table}")]
    DanglingReinforceTable {
        weapon: String,
        affinity: Affinity,
        table: u32,
    },

    #[error("{weapon} ({affinity}) goes to +{max_level} but reinforce table {table} stops at +{last_level}")]
    ShortReinforceTable {
        weapon: String,
        affinity: Affinity,
        table: u32,
        max_level: u32,
        last_level: u32,
    },

    #[error("reinforce table {table} level +{level} unlocks missing special effect {sp_effect}")]
    DanglingSpEffect { table: u32, level: u32, sp_effect: u32 },

    #[error("sword art '{sword_art}' hit {hit} references missing {kind} {id}")]
    DanglingSkillReference {
        sword_art: String,
        hit: usize,
        kind: &'static str,
        id: i64,
    },

    #[error("skill name '{name}' maps to missing sword art {id}")]
    DanglingSkillName { name: String, id: u32 },
}

impl CalcError for DataError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        use DataError::*;
        match self {
            DanglingCurve { .. } => "DATA_DANGLING_CURVE",
            DanglingReinforceTable { .. } => "DATA_DANGLING_REINFORCE_TABLE",
            ShortReinforceTable { .. } => "DATA_SHORT_REINFORCE_TABLE",
            DanglingSpEffect { .. } => "DATA_DANGLING_SP_EFFECT",
            DanglingSkillReference { .. } => "DATA_DANGLING_SKILL_REFERENCE",
            DanglingSkillName { .. } => "DATA_DANGLING_SKILL_NAME",
        }
    }
}
