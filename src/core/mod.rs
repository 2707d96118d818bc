//! Core engine types: vocabularies, tiles and grids, unit ids, committed
//! actions, RNG, configuration.
//!
//! Nothing in here knows about rules; the board and the turn machine are
//! built on top of these pieces.

pub mod types;
pub mod grid;
pub mod entity;
pub mod action;
pub mod rng;
pub mod config;

pub use types::{Alignment, MovementType, PhaseKind, Terrain, WeaponType};
pub use grid::{Grid, Tile};
pub use entity::UnitId;
pub use action::{MoveKind, MoveRecord};
pub use rng::GameRng;
pub use config::EngineConfig;
