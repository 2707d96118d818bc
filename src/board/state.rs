//! Authoritative board state: terrain, occupancy, units.
//!
//! The `Board` owns every unit placed on it. Units live in an arena keyed
//! by `UnitId`; the occupant grid and the location index only ever hold
//! ids. The two indexes are kept in lockstep so that:
//! - a unit occupies at most one tile
//! - a tile holds at most one unit
//!
//! Every occupancy change ends with a shield recomputation, so derived
//! terrain is never stale when a query runs.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::reach::Selection;
use crate::core::{Alignment, Grid, Terrain, Tile, UnitId};
use crate::units::Unit;

/// Default board height.
pub const DEFAULT_ROWS: usize = 8;

/// Default board width.
pub const DEFAULT_COLS: usize = 8;

/// The grid, the units on it, and the active selection.
#[derive(Clone, Debug)]
pub struct Board {
    pub(super) terrain: Grid<Terrain>,
    pub(super) occupants: Grid<Option<UnitId>>,
    pub(super) units: FxHashMap<UnitId, Unit>,
    locations: FxHashMap<UnitId, Tile>,
    pub(super) selection: Option<Selection>,
    next_id: UnitId,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl Board {
    /// Create an all-`Empty` board.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::from_terrain(Grid::with_value(rows, cols, Terrain::Empty))
    }

    /// Create a board from authored terrain.
    ///
    /// Panics if the layout contains shield tiles; those are derived.
    #[must_use]
    pub fn from_terrain(terrain: Grid<Terrain>) -> Self {
        assert!(
            terrain.iter().all(|(_, t)| !t.is_shield()),
            "Shield terrain is derived and cannot be authored"
        );

        let occupants = Grid::with_value(terrain.rows(), terrain.cols(), None);
        Self {
            terrain,
            occupants,
            units: FxHashMap::default(),
            locations: FxHashMap::default(),
            selection: None,
            next_id: UnitId(0),
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.terrain.rows()
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.terrain.cols()
    }

    /// Whether a tile lies on the board.
    #[must_use]
    pub fn contains(&self, tile: Tile) -> bool {
        self.terrain.contains(tile)
    }

    // === Terrain ===

    /// Terrain at a tile, or `None` when out of bounds.
    #[must_use]
    pub fn terrain(&self, tile: Tile) -> Option<Terrain> {
        self.terrain.get(tile).copied()
    }

    /// The full terrain grid, shields included.
    #[must_use]
    pub fn terrain_grid(&self) -> &Grid<Terrain> {
        &self.terrain
    }

    /// Author a tile's terrain during setup.
    ///
    /// Panics if `terrain` is a shield or the tile is out of bounds.
    pub fn set_terrain(&mut self, tile: Tile, terrain: Terrain) {
        assert!(!terrain.is_shield(), "Shield terrain is derived and cannot be authored");
        self.terrain[tile] = terrain;
        self.recompute_shields();
    }

    // === Units ===

    /// Id of the unit on a tile.
    #[must_use]
    pub fn occupant_id(&self, tile: Tile) -> Option<UnitId> {
        self.occupants.get(tile).copied().flatten()
    }

    /// The unit on a tile.
    #[must_use]
    pub fn occupant(&self, tile: Tile) -> Option<&Unit> {
        self.occupant_id(tile).and_then(|id| self.units.get(&id))
    }

    /// The occupancy grid.
    #[must_use]
    pub fn occupant_grid(&self) -> &Grid<Option<UnitId>> {
        &self.occupants
    }

    /// Look up a unit on the board.
    #[must_use]
    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(&id)
    }

    /// Where a unit stands.
    #[must_use]
    pub fn find_unit(&self, id: UnitId) -> Option<Tile> {
        self.locations.get(&id).copied()
    }

    /// Take ownership of a unit and put it on `tile`.
    ///
    /// Setup-time operation with no legality check beyond the occupancy
    /// invariant: panics if the tile is out of bounds or already occupied.
    pub fn add_unit(&mut self, unit: Unit, tile: Tile) -> UnitId {
        let id = self.next_id;
        self.next_id = id.next();
        self.units.insert(id, unit);
        self.place_unit(id, tile);
        id
    }

    /// Put a unit already owned by this board on `tile`, lifting it from
    /// wherever it stood.
    ///
    /// Panics if the unit is unknown, the tile is out of bounds, or another
    /// unit holds the tile.
    pub fn place_unit(&mut self, id: UnitId, tile: Tile) {
        assert!(self.units.contains_key(&id), "{id} is not owned by this board");
        assert!(self.contains(tile), "Cannot place {id} at {tile}: out of bounds");
        match self.occupant_id(tile) {
            Some(other) if other != id => panic!("Cannot place {id} at {tile}: held by {other}"),
            _ => {}
        }

        if let Some(old) = self.locations.insert(id, tile) {
            self.occupants[old] = None;
        }
        self.occupants[tile] = Some(id);
        self.recompute_shields();
        debug_assert!(self.is_consistent());
    }

    /// Relocate a unit, destroying whatever stands on the destination.
    ///
    /// Legality is the caller's responsibility. Returns the captured unit.
    /// Panics if the mover is not on the board or the destination is out
    /// of bounds.
    pub fn move_unit(&mut self, id: UnitId, to: Tile) -> Option<Unit> {
        let Some(from) = self.find_unit(id) else {
            panic!("Cannot move {id}: not on the board");
        };
        assert!(self.contains(to), "Cannot move {id} to {to}: out of bounds");

        let captured = match self.occupant_id(to) {
            Some(defender) if defender != id => self.take(defender),
            _ => None,
        };

        self.occupants[from] = None;
        self.occupants[to] = Some(id);
        self.locations.insert(id, to);
        self.recompute_shields();
        debug_assert!(self.is_consistent());

        debug!(unit = %id, %from, %to, captured = captured.is_some(), "unit moved");
        captured
    }

    /// Take a unit off the board for good.
    ///
    /// Returns the unit, or `None` if it was not on the board.
    pub fn remove_unit(&mut self, id: UnitId) -> Option<Unit> {
        let unit = self.take(id)?;
        self.recompute_shields();
        Some(unit)
    }

    /// Detach a unit from every index without recomputing shields.
    fn take(&mut self, id: UnitId) -> Option<Unit> {
        let tile = self.locations.remove(&id)?;
        self.occupants[tile] = None;
        if self.selection.as_ref().is_some_and(|s| s.unit == id) {
            self.selection = None;
        }
        self.units.remove(&id)
    }

    // === Alignment queries ===

    /// Tiles holding units of one side, in row-major order.
    #[must_use]
    pub fn tiles_with_units_of(&self, alignment: Alignment) -> Vec<Tile> {
        self.occupants
            .iter()
            .filter_map(|(tile, id)| {
                let unit = self.units.get(id.as_ref()?)?;
                (unit.alignment == alignment).then_some(tile)
            })
            .collect()
    }

    /// Ids of units of one side, in row-major order of their tiles.
    #[must_use]
    pub fn units_of(&self, alignment: Alignment) -> Vec<UnitId> {
        self.tiles_with_units_of(alignment)
            .into_iter()
            .filter_map(|tile| self.occupant_id(tile))
            .collect()
    }

    /// Number of units of one side on the board.
    #[must_use]
    pub fn count_of(&self, alignment: Alignment) -> usize {
        self.units.values().filter(|u| u.alignment == alignment).count()
    }

    /// Whether every unit of one side has acted. Vacuously true for an
    /// empty side.
    #[must_use]
    pub fn all_units_moved(&self, alignment: Alignment) -> bool {
        self.units
            .values()
            .filter(|u| u.alignment == alignment)
            .all(|u| u.already_moved)
    }

    /// Clear the acted flag on every unit of one side.
    pub fn reset_already_moved(&mut self, alignment: Alignment) {
        for unit in self.units.values_mut().filter(|u| u.alignment == alignment) {
            unit.already_moved = false;
        }
    }

    /// Mark a unit as having acted. Panics if the unit is not on the board.
    pub fn mark_moved(&mut self, id: UnitId) {
        match self.units.get_mut(&id) {
            Some(unit) => unit.already_moved = true,
            None => panic!("Cannot mark {id} as moved: not on the board"),
        }
    }

    /// Check the occupancy invariants. Used by tests and debug assertions.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let placed = self.occupants.iter().filter(|(_, id)| id.is_some()).count();
        placed == self.units.len()
            && placed == self.locations.len()
            && self
                .locations
                .iter()
                .all(|(id, tile)| self.occupant_id(*tile) == Some(*id))
    }
}
