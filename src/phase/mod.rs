//! Turn phase state machine.
//!
//! The presentation layer talks to the engine through three calls:
//! - `on_tile_activated(tile)`: the only gameplay input
//! - `on_banner_dismissed()`: leaves the player/enemy phase banners
//! - `on_animation_complete(ticket, tile)`: resumes after an animation
//!
//! Each returns a [`Step`]. When a step carries an [`Animation`] the
//! engine is parked in an animation-only phase until the matching
//! completion arrives, so at most one animation is ever in flight.
//!
//! ## Example
//!
//! ```
//! use rust_tactics::board::Board;
//! use rust_tactics::core::{EngineConfig, MovementType, PhaseKind, Tile};
//! use rust_tactics::phase::Engine;
//! use rust_tactics::units::Unit;
//!
//! let mut board = Board::default();
//! board.add_unit(Unit::player("img/rook.gif", MovementType::Rook), Tile::new(7, 0));
//! let mut engine = Engine::new(board, EngineConfig::default());
//!
//! engine.on_banner_dismissed();
//! engine.on_tile_activated((7, 0));
//! let step = engine.on_tile_activated((3, 0));
//! let animation = step.animation.expect("move is animated");
//!
//! let step = engine.on_animation_complete(animation.ticket, animation.to);
//! assert_eq!(step.phase, PhaseKind::EnemyPhaseBanner);
//! ```

mod animation;
mod machine;
mod state;

pub use animation::{Animation, Step};
pub use machine::Engine;
pub use state::{AnimationTicket, Input, Pending, Phase};
