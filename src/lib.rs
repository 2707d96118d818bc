//! # rust-tactics
//!
//! A rules engine for turn-based grid tactics.
//!
//! ## Design Principles
//!
//! 1. **Explicit Context**: The [`Engine`] owns the board and the phase.
//!    Every handler receives it; there is no ambient global state.
//!
//! 2. **Phases Own Their Data**: The turn cycle is a tagged union. The
//!    pending animation and the enemy queue only exist inside the phases
//!    where they mean something.
//!
//! 3. **Animation as a Pending Transition**: Commands mutate the board
//!    synchronously and return an animation request. The engine resumes
//!    only when the presentation layer hands that request's ticket back,
//!    so exactly one animation is in flight at a time.
//!
//! ## Architecture
//!
//! - **Derived Terrain**: Shield tiles are recomputed from unit adjacency
//!   after every occupancy change, never written by gameplay code.
//!
//! - **Fail Fast**: Calls that can only come from a desynced presentation
//!   layer panic. Illegal clicks are ordinary input and just deselect.
//!
//! ## Modules
//!
//! - `core`: Vocabularies, tiles and grids, unit ids, action records, RNG, configuration
//! - `units`: Unit profiles and turn flags
//! - `board`: Grid state, shields, legality predicates, reach generation, selection
//! - `rules`: Victory and defeat evaluation
//! - `policy`: Enemy target selection
//! - `phase`: Turn phase state machine
//! - `render`: Read-only snapshots for the presentation layer
//! - `scenario`: Validated scenario setup

pub mod core;
pub mod units;
pub mod board;
pub mod rules;
pub mod policy;
pub mod phase;
pub mod render;
pub mod scenario;

// Re-export commonly used types
pub use crate::core::{
    Alignment, MovementType, PhaseKind, Terrain, WeaponType,
    Grid, Tile, UnitId,
    MoveKind, MoveRecord,
    GameRng,
    EngineConfig,
};

pub use crate::units::Unit;

pub use crate::board::{Board, Reachable, Selection};

pub use crate::rules::GameResult;

pub use crate::policy::{CaptureFirst, EnemyPolicy, HoldPosition};

pub use crate::phase::{Animation, AnimationTicket, Engine, Input, Phase, Step};

pub use crate::render::{RenderState, TileHighlight, UnitView};

pub use crate::scenario::{ScenarioBuilder, ScenarioError};
