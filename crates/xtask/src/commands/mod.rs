//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod ar;
mod combos;
mod enemy;
mod export_fixtures;
mod guard;
mod optimize;
mod skill;
mod validate;

pub use ar::Ar;
pub use combos::Combos;
pub use enemy::Enemy;
pub use export_fixtures::ExportFixtures;
pub use guard::Guard;
pub use optimize::Optimize;
pub use skill::Skill;
pub use validate::Validate;
