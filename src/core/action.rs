//! Committed unit actions.
//!
//! Every move or attack the turn machine commits is recorded as a
//! `MoveRecord`, used for:
//! - Driving the presentation layer's animation for that action
//! - Replay/debugging
//! - Asserting match flow in tests

use serde::{Deserialize, Serialize};

use super::entity::UnitId;
use super::grid::Tile;
use super::types::Alignment;

/// What a committed action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Relocation to a free tile (possibly the unit's own tile).
    Move,
    /// Capture of an opposing unit by moving onto its tile.
    Attack,
}

/// A committed action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn counter at the time of the action.
    pub turn: u32,

    /// Side that acted.
    pub alignment: Alignment,

    /// The acting unit.
    pub unit: UnitId,

    /// Where it started.
    pub from: Tile,

    /// Where it ended.
    pub to: Tile,

    /// Move or attack.
    pub kind: MoveKind,

    /// The unit destroyed by an attack.
    pub captured: Option<UnitId>,
}

impl MoveRecord {
    /// Whether the unit chose to stay in place.
    #[must_use]
    pub fn is_wait(&self) -> bool {
        self.kind == MoveKind::Move && self.from == self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: MoveKind, to: Tile, captured: Option<UnitId>) -> MoveRecord {
        MoveRecord {
            turn: 1,
            alignment: Alignment::Player,
            unit: UnitId(0),
            from: Tile::new(2, 2),
            to,
            kind,
            captured,
        }
    }

    #[test]
    fn test_is_wait() {
        assert!(record(MoveKind::Move, Tile::new(2, 2), None).is_wait());
        assert!(!record(MoveKind::Move, Tile::new(2, 3), None).is_wait());
        assert!(!record(MoveKind::Attack, Tile::new(2, 2), Some(UnitId(1))).is_wait());
    }

    #[test]
    fn test_record_serialization() {
        let r = record(MoveKind::Attack, Tile::new(3, 3), Some(UnitId(4)));
        let json = serde_json::to_string(&r).unwrap();
        let back: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
