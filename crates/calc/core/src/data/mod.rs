//! Immutable data bundles consumed by the engines.
//!
//! Both bundles are produced by an external build step and handed to the
//! engines by reference. Nothing in here computes damage; it only describes
//! weapons, skills and the tables that scale them.
//!
//! # Layout
//!
//! ```text
//! PrecomputedData
//!   weapons          name → ResolvedWeapon → Affinity → AffinityData
//!   curves           id → CurveDefinition
//!   reinforce_rates  table → [level] → ReinforceRates
//!   sp_effects       id → SpEffect
//!
//! PrecomputedAowData
//!   sword_arts       id → SwordArt → [PrecomputedAowAttack]
//!   + element-correct, final-damage-rate, gem and bonus tables
//! ```

pub mod aow;
pub mod bundle;
pub mod curve;
pub mod error;
pub mod keys;
pub mod reinforce;
pub mod table;
pub mod weapon;
pub mod weapon_type;

pub use aow::{
    AffinityFlags, AttackElementCorrect, ElementCorrectEntry, FinalDamageRate, GemCompatibility,
    PrecomputedAowAttack, PrecomputedAowData, StatPointBonus, SwordArt,
};
pub use bundle::PrecomputedData;
pub use curve::CurveDefinition;
pub use error::{DataError, LookupError};
pub use keys::{
    Affinity, AttackAttribute, Attribute, DamageTable, DamageType, SpellKind, StatTable,
    StatusEffect, StatusTable,
};
pub use reinforce::{ReinforceRates, SpEffect};
pub use table::{Table, TableKey};
pub use weapon::{
    AffinityData, BaseDamageType, BaseStatScaling, GuardData, ResolvedWeapon, SpellScalingRecord,
    StatusEffectRecord, StatusScaling,
};
pub use weapon_type::WeaponType;
