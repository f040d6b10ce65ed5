//! Curve evaluation and stat scaling.
//!
//! ```text
//! [ evaluate_curve ]  level → saturation
//!      ↓
//! [ ScalingResolver ] base + Σ percent × saturation × base
//! ```

pub mod cache;
pub mod curve;
pub mod resolver;

pub use cache::{CurveCache, MemoCurveCache, NoCurveCache};
pub use curve::evaluate_curve;
pub use resolver::{
    ChannelResult, ScalingResolver, channel_penalized, effective_percent, stat_contribution,
};
