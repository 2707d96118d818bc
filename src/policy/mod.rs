//! Enemy target selection.
//!
//! During the enemy phase the turn machine selects each enemy unit in
//! turn, then asks an `EnemyPolicy` which of the selection's tiles to act
//! on. Policies are trait-based so smarter strategies can be swapped in
//! without touching the turn machine.

use crate::board::{Board, Selection};
use crate::core::{GameRng, Tile};

/// Strategy for picking an enemy unit's destination.
pub trait EnemyPolicy: std::fmt::Debug {
    /// Choose a tile from the board's active selection.
    ///
    /// The returned tile must be in the selection's moveable or attackable
    /// set. Called only while a selection is active.
    fn choose_target(&mut self, board: &Board, rng: &mut GameRng) -> Tile;
}

fn active_selection(board: &Board) -> &Selection {
    match board.selection() {
        Some(selection) => selection,
        None => panic!("Enemy policy consulted without an active selection"),
    }
}

// =============================================================================
// Capture First
// =============================================================================

/// Attack-seeking policy.
///
/// Takes the first attackable tile if there is one; otherwise wanders to a
/// uniformly random moveable tile (which may be the unit's own tile).
#[derive(Clone, Copy, Debug, Default)]
pub struct CaptureFirst;

impl EnemyPolicy for CaptureFirst {
    fn choose_target(&mut self, board: &Board, rng: &mut GameRng) -> Tile {
        let selection = active_selection(board);
        if let Some(&target) = selection.reach.attackable.first() {
            return target;
        }
        rng.choose(&selection.reach.moveable)
            .copied()
            .unwrap_or(selection.origin)
    }
}

// =============================================================================
// Hold Position
// =============================================================================

/// Policy that never moves or attacks.
///
/// Useful for scripted scenarios and tests where the enemy must stay put.
#[derive(Clone, Copy, Debug, Default)]
pub struct HoldPosition;

impl EnemyPolicy for HoldPosition {
    fn choose_target(&mut self, board: &Board, _rng: &mut GameRng) -> Tile {
        active_selection(board).origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MovementType, WeaponType};
    use crate::units::Unit;

    #[test]
    fn test_capture_first_prefers_attack() {
        let mut board = Board::new(3, 3);
        board.add_unit(
            Unit::enemy("e", MovementType::King).with_attack(WeaponType::Physical),
            Tile::new(1, 1),
        );
        board.add_unit(Unit::player("p", MovementType::King), Tile::new(2, 2));
        board.select(Tile::new(1, 1));

        let mut rng = GameRng::new(1);
        for _ in 0..10 {
            assert_eq!(CaptureFirst.choose_target(&board, &mut rng), Tile::new(2, 2));
        }
    }

    #[test]
    fn test_capture_first_wanders_within_reach() {
        let mut board = Board::new(5, 5);
        board.add_unit(Unit::enemy("e", MovementType::Rook), Tile::new(2, 2));
        let reach = board.select(Tile::new(2, 2)).reach.clone();

        let mut rng = GameRng::new(3);
        for _ in 0..50 {
            let target = CaptureFirst.choose_target(&board, &mut rng);
            assert!(reach.can_move_to(target));
        }
    }

    #[test]
    fn test_capture_first_is_seed_deterministic() {
        let mut board = Board::new(6, 6);
        board.add_unit(Unit::enemy("e", MovementType::Queen), Tile::new(3, 3));
        board.select(Tile::new(3, 3));

        let picks = |seed| {
            let mut rng = GameRng::new(seed);
            (0..8)
                .map(|_| CaptureFirst.choose_target(&board, &mut rng))
                .collect::<Vec<_>>()
        };

        assert_eq!(picks(11), picks(11));
    }

    #[test]
    fn test_hold_position() {
        let mut board = Board::new(3, 3);
        board.add_unit(Unit::enemy("e", MovementType::King), Tile::new(0, 1));
        board.select(Tile::new(0, 1));

        assert_eq!(
            HoldPosition.choose_target(&board, &mut GameRng::new(0)),
            Tile::new(0, 1)
        );
    }

    #[test]
    #[should_panic(expected = "without an active selection")]
    fn test_policy_without_selection_panics() {
        let board = Board::new(3, 3);
        CaptureFirst.choose_target(&board, &mut GameRng::new(0));
    }
}
