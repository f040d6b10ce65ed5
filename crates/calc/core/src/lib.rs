//! Deterministic weapon and skill damage resolution.
//!
//! `calc-core` reproduces the game's arithmetic for Attack Rating, status
//! buildup, guard stats, skill (Ash of War) hits and enemy-facing damage, and
//! searches attribute allocations that maximise any of those numbers.
//!
//! Every engine is a pure function of its explicit inputs plus an immutable
//! data bundle ([`PrecomputedData`], [`PrecomputedAowData`]) supplied by the
//! caller. There is no global state; the only cache is the swappable
//! [`CurveCache`] owned by a calculator instance.
//!
//! # Architecture
//!
//! ```text
//! [ Curve Evaluator ]            scaling::curve
//!        ↓
//! [ Scaling Resolver ]           scaling::resolver
//!        ↓
//! [ Attack Rating ] [ Skill ]    weapon::*, skill::*
//!        ↓
//! [ Enemy Damage ] [ Optimizer ] combat::enemy, optimizer::*
//! ```
pub mod combat;
pub mod config;
pub mod data;
pub mod error;
pub mod optimizer;
pub mod round;
pub mod scaling;
pub mod skill;
pub mod stats;
pub mod weapon;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;

pub use combat::{
    AttackFrames, ComboKind, ComboPair, EnemyDamageInput, EnemyDamageResult, apply_negation,
    calculate_defense_reduction, calculate_enemy_damage, calculate_single_type_damage,
    classify_transition, pair_attacks,
};
pub use config::{CalcConfig, OptimizerConfig};
pub use data::{
    Affinity, AffinityData, AffinityFlags, AttackAttribute, AttackElementCorrect, Attribute,
    BaseDamageType, BaseStatScaling, CurveDefinition, DamageTable, DamageType, DataError,
    ElementCorrectEntry, FinalDamageRate, GemCompatibility, GuardData, LookupError,
    PrecomputedAowAttack, PrecomputedAowData, PrecomputedData, ReinforceRates, ResolvedWeapon,
    SpEffect, SpellKind, SpellScalingRecord, StatPointBonus, StatTable, StatusEffect,
    StatusEffectRecord, StatusScaling, StatusTable, SwordArt, Table, TableKey, WeaponType,
};
pub use error::{CalcError, ErrorSeverity};
pub use optimizer::{Solution, SolveOptions, StatConfig, Strategy, solve};
pub use scaling::{CurveCache, MemoCurveCache, NoCurveCache, evaluate_curve};
pub use skill::{
    AowAttackResult, AowCalculatorInput, AowCalculatorResult, SkillCalculator, SkillValue,
    calculate_skill, compute_bullet_damage, try_calculate_skill,
};
pub use stats::{PlayerStats, compute_effective_strength};
pub use weapon::{
    ArCalculator, ArOptions, ArResult, CriticalResult, DamageTypeResult, GuardResult,
    ScalingGrade, SpellScalingResult, StatusResult, calculate_ar, calculate_critical,
    calculate_guard_stats, calculate_weapon_ar, critical_value, try_calculate_ar,
};
