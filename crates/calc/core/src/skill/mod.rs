//! Skill (Ash of War) damage.
//!
//! Skills reuse the Attack Rating engine for motion hits, so any change to
//! AR propagates here unchanged. Bullets scale independently through their
//! element-correct table.

pub mod bullet;
pub mod engine;
pub mod result;
pub mod value;

pub use bullet::{compute_bullet_damage, power_per_upgrade, pwu_multiplier};
pub use engine::{SkillCalculator, calculate_skill, try_calculate_skill};
pub use result::{AowAttackResult, AowCalculatorInput, AowCalculatorResult};
pub use value::SkillValue;
