//! Legality predicates and reachable-tile generation.
//!
//! Two shapes of generator cover every movement type:
//! - **Steps** (Knight, King): each offset is tested once. Passable tiles
//!   are moveable; otherwise the tile may be attackable.
//! - **Rays** (Bishop, Rook, Queen): walk outward while tiles are
//!   passable. The first blocking tile may be attackable; nothing past it
//!   is considered.
//!
//! The origin is always moveable: a unit may choose to stay put.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::state::Board;
use crate::core::{MovementType, Tile, UnitId};
use crate::units::Unit;

/// L-shaped jumps.
pub const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Diagonal directions.
pub const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Orthogonal directions.
pub const ORTHOGONALS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// All eight directions.
pub const ALL_DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Legal destinations for one unit.
///
/// Both lists are in generation order with no duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reachable {
    /// Tiles the unit may move to, origin first.
    pub moveable: Vec<Tile>,
    /// Tiles holding units it may capture.
    pub attackable: Vec<Tile>,
}

impl Reachable {
    /// Whether `tile` is a legal move destination.
    #[must_use]
    pub fn can_move_to(&self, tile: Tile) -> bool {
        self.moveable.contains(&tile)
    }

    /// Whether `tile` is a legal attack target.
    #[must_use]
    pub fn can_attack(&self, tile: Tile) -> bool {
        self.attackable.contains(&tile)
    }
}

/// The unit currently selected and where it can go.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// The selected unit.
    pub unit: UnitId,
    /// Its tile.
    pub origin: Tile,
    /// Its legal destinations.
    pub reach: Reachable,
}

impl Board {
    /// Whether `mover` may enter `tile`.
    ///
    /// Fails closed out of bounds. The tile must be unoccupied and its
    /// terrain must admit the mover's side and weapon.
    #[must_use]
    pub fn is_passable(&self, tile: Tile, mover: &Unit) -> bool {
        match self.terrain(tile) {
            Some(terrain) => {
                self.occupant_id(tile).is_none() && terrain.admits(mover.alignment, mover.attack)
            }
            None => false,
        }
    }

    /// Whether `attacker` may capture whatever stands on `tile`.
    ///
    /// Requires a weapon, an opposing occupant not defended against that
    /// weapon, and terrain that admits the attacker.
    #[must_use]
    pub fn is_attackable(&self, tile: Tile, attacker: &Unit) -> bool {
        let (Some(terrain), Some(defender)) = (self.terrain(tile), self.occupant(tile)) else {
            return false;
        };
        attacker.can_harm(defender) && terrain.admits(attacker.alignment, attacker.attack)
    }

    /// Legal destinations for the unit on `origin`.
    ///
    /// Panics if `origin` holds no unit.
    #[must_use]
    pub fn compute_reachable(&self, origin: Tile) -> Reachable {
        let Some(unit) = self.occupant(origin) else {
            panic!("No unit at {origin} to compute reach for");
        };

        let mut reach = Reachable {
            moveable: vec![origin],
            attackable: Vec::new(),
        };

        match unit.movement {
            MovementType::Knight => self.steps(origin, unit, &KNIGHT_OFFSETS, &mut reach),
            MovementType::King => self.steps(origin, unit, &ALL_DIRECTIONS, &mut reach),
            MovementType::Bishop => self.rays(origin, unit, &DIAGONALS, &mut reach),
            MovementType::Rook => self.rays(origin, unit, &ORTHOGONALS, &mut reach),
            MovementType::Queen => self.rays(origin, unit, &ALL_DIRECTIONS, &mut reach),
        }

        reach
    }

    fn steps(&self, origin: Tile, unit: &Unit, offsets: &[(isize, isize)], reach: &mut Reachable) {
        for &(d_row, d_col) in offsets {
            let Some(tile) = origin.offset(d_row, d_col) else {
                continue;
            };
            if self.is_passable(tile, unit) {
                reach.moveable.push(tile);
            } else if self.is_attackable(tile, unit) {
                reach.attackable.push(tile);
            }
        }
    }

    fn rays(&self, origin: Tile, unit: &Unit, directions: &[(isize, isize)], reach: &mut Reachable) {
        for &(d_row, d_col) in directions {
            let mut cursor = origin.offset(d_row, d_col);
            while let Some(tile) = cursor {
                if !self.is_passable(tile, unit) {
                    if self.is_attackable(tile, unit) {
                        reach.attackable.push(tile);
                    }
                    break;
                }
                reach.moveable.push(tile);
                cursor = tile.offset(d_row, d_col);
            }
        }
    }

    // === Selection ===

    /// Select the unit on `tile` and compute its reach.
    ///
    /// Replaces any previous selection. Panics if `tile` holds no unit.
    pub fn select(&mut self, tile: Tile) -> &Selection {
        let Some(unit) = self.occupant_id(tile) else {
            panic!("Cannot select {tile}: no unit there");
        };
        let reach = self.compute_reachable(tile);
        debug!(
            %unit,
            %tile,
            moveable = reach.moveable.len(),
            attackable = reach.attackable.len(),
            "unit selected"
        );
        self.selection.insert(Selection {
            unit,
            origin: tile,
            reach,
        })
    }

    /// Drop the active selection.
    pub fn deselect(&mut self) {
        self.selection = None;
    }

    /// The active selection, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }
}
