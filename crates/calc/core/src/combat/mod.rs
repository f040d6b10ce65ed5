//! Combat resolution against a target.
//!
//! Pure functions only; they take numbers the weapon and skill engines
//! produce and never look at the data bundles.
//!
//! # Core Functions
//!
//! - `calculate_defense_reduction`: 5-tier defense curve for one damage type
//! - `calculate_enemy_damage`: per-type reduction, negation, ceiling display
//! - `classify_transition`: true / pseudo / no combo from frame data

pub mod combo;
pub mod enemy;

pub use combo::{
    AttackFrames, ComboKind, ComboPair, PSEUDO_COMBO_WINDOW, classify_transition, pair_attacks,
};
pub use enemy::{
    EnemyDamageInput, EnemyDamageResult, apply_negation, calculate_defense_reduction,
    calculate_enemy_damage, calculate_single_type_damage, defense_multiplier,
};
