//! Board and grid state.
//!
//! The `Board` is the single source of truth for terrain, occupancy and
//! the active selection. Queries are pure; commands mutate and then
//! recompute derived shield terrain before returning.
//!
//! ## Example
//!
//! ```
//! use rust_tactics::board::Board;
//! use rust_tactics::core::{MovementType, Tile};
//! use rust_tactics::units::Unit;
//!
//! let mut board = Board::default();
//! board.add_unit(Unit::player("img/knight.gif", MovementType::Knight), Tile::new(0, 6));
//!
//! let reach = board.compute_reachable(Tile::new(0, 6));
//! assert!(reach.can_move_to(Tile::new(2, 5)));
//! assert!(reach.can_move_to(Tile::new(0, 6)));
//! ```

mod reach;
mod shields;
mod state;

pub use reach::{Reachable, Selection, ALL_DIRECTIONS, DIAGONALS, KNIGHT_OFFSETS, ORTHOGONALS};
pub use state::{Board, DEFAULT_COLS, DEFAULT_ROWS};
