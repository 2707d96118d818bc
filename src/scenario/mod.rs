//! Scenario setup boundary.
//!
//! Supplies board dimensions or an ASCII terrain map, initial unit
//! placements, the engine config and the enemy policy, and validates them
//! before any rules run. Failures are reported as [`ScenarioError`]s
//! instead of panics, since scenario data usually comes from outside the
//! program.

mod builder;
mod error;

pub use builder::{parse_terrain, ScenarioBuilder};
pub use error::ScenarioError;
