//! Victory and defeat evaluation.
//!
//! The match is decided by two events:
//! - A player unit is captured: immediate defeat.
//! - The last player unit leaves through a goal tile: victory.
//!
//! Both are evaluated right after the event that could cause them, never
//! on a timer.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::board::Board;
use crate::core::{Alignment, Terrain, UnitId};
use crate::units::Unit;

/// Result of a decided match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Every player unit reached a goal.
    Victory,
    /// A player unit was captured.
    Defeat,
}

impl GameResult {
    /// Check if the player won.
    #[must_use]
    pub fn is_victory(self) -> bool {
        self == GameResult::Victory
    }
}

/// True iff no player unit remains on the board.
#[must_use]
pub fn check_victory(board: &Board) -> bool {
    board.count_of(Alignment::Player) == 0
}

/// Outcome of a capture, decided on the spot.
#[must_use]
pub fn evaluate_capture(captured: &Unit) -> Option<GameResult> {
    if captured.alignment == Alignment::Player {
        info!(sprite = %captured.sprite, "player unit captured, match lost");
        Some(GameResult::Defeat)
    } else {
        None
    }
}

/// Remove `id` if it is a player unit standing on a goal tile.
///
/// Returns `Some(Victory)` when that was the last player unit, `None`
/// otherwise (including when nothing was removed).
pub fn exit_through_goal(board: &mut Board, id: UnitId) -> Option<GameResult> {
    let tile = board.find_unit(id)?;
    let on_goal = board.terrain(tile) == Some(Terrain::Goal);
    let is_player = board.unit(id)?.alignment == Alignment::Player;
    if !(on_goal && is_player) {
        return None;
    }

    board.remove_unit(id);
    info!(unit = %id, %tile, "unit reached goal");

    if check_victory(board) {
        info!("last player unit escaped, match won");
        Some(GameResult::Victory)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MovementType, Tile};

    #[test]
    fn test_is_victory() {
        assert!(GameResult::Victory.is_victory());
        assert!(!GameResult::Defeat.is_victory());
    }

    #[test]
    fn test_check_victory_counts_player_units_only() {
        let mut board = Board::new(3, 3);
        assert!(check_victory(&board));

        board.add_unit(Unit::enemy("e", MovementType::King), Tile::new(0, 0));
        assert!(check_victory(&board));

        board.add_unit(Unit::player("p", MovementType::King), Tile::new(2, 2));
        assert!(!check_victory(&board));
    }

    #[test]
    fn test_evaluate_capture() {
        let hero = Unit::player("p", MovementType::Rook);
        let grunt = Unit::enemy("e", MovementType::Rook);

        assert_eq!(evaluate_capture(&hero), Some(GameResult::Defeat));
        assert_eq!(evaluate_capture(&grunt), None);
    }

    #[test]
    fn test_exit_through_goal() {
        let mut board = Board::new(3, 3);
        board.set_terrain(Tile::new(0, 2), Terrain::Goal);
        let a = board.add_unit(Unit::player("a", MovementType::King), Tile::new(0, 2));
        let b = board.add_unit(Unit::player("b", MovementType::King), Tile::new(2, 0));

        assert_eq!(exit_through_goal(&mut board, b), None);
        assert!(board.find_unit(b).is_some());

        assert_eq!(exit_through_goal(&mut board, a), None);
        assert!(board.find_unit(a).is_none());

        board.move_unit(b, Tile::new(0, 2));
        assert_eq!(exit_through_goal(&mut board, b), Some(GameResult::Victory));
        assert!(board.tiles_with_units_of(Alignment::Player).is_empty());
    }
}
