//! Weapon engines: Attack Rating, guard and critical damage.
//!
//! # Formula
//!
//! ```text
//! base     = attack_base × reinforce.attack[type]
//! percent  = override ? percent : percent × reinforce.correct[stat]
//! scaling  = Σ percent / 100 × curve(stat) × base
//! total    = base + scaling            (requirements met)
//!          = base × 0.6                (any scaling stat short)
//! ```

pub mod attack_rating;
pub mod critical;
pub mod grade;
pub mod guard;

pub use attack_rating::{
    ArCalculator, ArOptions, ArResult, DamageTypeResult, SpellScalingResult, StatusResult,
    calculate_ar, calculate_weapon_ar, try_calculate_ar,
};
pub use critical::{CriticalResult, calculate_critical, critical_value};
pub use grade::ScalingGrade;
pub use guard::{GuardResult, calculate_guard_stats, try_calculate_guard_stats};
