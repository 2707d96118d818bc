//! Read-only render snapshots.
//!
//! A `RenderState` is everything the presentation layer needs to redraw
//! the board: terrain (shields included), a view of every unit, the
//! active selection, a per-tile highlight, and the turn bookkeeping. It is
//! an owned copy, so holding one never blocks the engine.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Selection};
use crate::core::{Alignment, Grid, MovementType, PhaseKind, Terrain, Tile, UnitId, WeaponType};
use crate::rules::GameResult;

/// How a tile should be presented for input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileHighlight {
    /// Nothing happens on click.
    #[default]
    NotClickable,
    /// A unit the player may select.
    ClickablePiece,
    /// The selected unit.
    SelectedPiece,
    /// A legal move destination.
    MoveableTile,
    /// A legal attack target.
    AttackableTile,
}

/// What the presentation layer sees of a unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitView {
    /// Board id.
    pub id: UnitId,
    /// Opaque visual reference.
    pub sprite: String,
    /// Side.
    pub alignment: Alignment,
    /// Movement pattern.
    pub movement: MovementType,
    /// Attack weapon.
    pub attack: Option<WeaponType>,
    /// Defense type.
    pub defense: Option<WeaponType>,
    /// Whether the unit has acted this turn.
    pub already_moved: bool,
}

/// Snapshot of everything drawable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderState {
    /// Terrain, derived shields included.
    pub terrain: Grid<Terrain>,
    /// Unit on each tile.
    pub occupants: Grid<Option<UnitView>>,
    /// Input affordance for each tile.
    pub highlights: Grid<TileHighlight>,
    /// The active selection.
    pub selection: Option<Selection>,
    /// Current phase.
    pub phase: PhaseKind,
    /// Turn counter.
    pub turn: u32,
    /// Set once the match is decided.
    pub outcome: Option<GameResult>,
}

impl RenderState {
    /// Snapshot a board in a given phase.
    #[must_use]
    pub fn capture(board: &Board, phase: PhaseKind, turn: u32, outcome: Option<GameResult>) -> Self {
        let occupants = board.occupant_grid().map(|_, id| {
            let id = (*id)?;
            let unit = board.unit(id)?;
            Some(UnitView {
                id,
                sprite: unit.sprite.clone(),
                alignment: unit.alignment,
                movement: unit.movement,
                attack: unit.attack,
                defense: unit.defense,
                already_moved: unit.already_moved,
            })
        });

        let highlights = if outcome.is_some() {
            board.terrain_grid().map(|_, _| TileHighlight::NotClickable)
        } else {
            highlight(board, phase)
        };

        Self {
            terrain: board.terrain_grid().clone(),
            occupants,
            highlights,
            selection: board.selection().cloned(),
            phase,
            turn,
            outcome,
        }
    }

    /// The unit view on a tile.
    #[must_use]
    pub fn unit_at(&self, tile: Tile) -> Option<&UnitView> {
        self.occupants.get(tile)?.as_ref()
    }
}

fn highlight(board: &Board, phase: PhaseKind) -> Grid<TileHighlight> {
    let mut grid = board.terrain_grid().map(|_, _| TileHighlight::NotClickable);

    match (phase, board.selection()) {
        (PhaseKind::PlayerTurn, _) => {
            for tile in board.tiles_with_units_of(Alignment::Player) {
                if board.occupant(tile).is_some_and(|u| u.is_ready()) {
                    grid[tile] = TileHighlight::ClickablePiece;
                }
            }
        }
        (PhaseKind::UnitSelected, Some(selection)) => {
            for &tile in &selection.reach.moveable {
                grid[tile] = TileHighlight::MoveableTile;
            }
            for &tile in &selection.reach.attackable {
                grid[tile] = TileHighlight::AttackableTile;
            }
            grid[selection.origin] = TileHighlight::SelectedPiece;
        }
        _ => {}
    }

    grid
}
