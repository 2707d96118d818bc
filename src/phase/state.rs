//! Phase states and the inputs that drive them.
//!
//! Each phase variant owns exactly the data that is only meaningful while
//! it is active: the animation waiting on its completion signal, and the
//! enemy units still to act. The flat [`PhaseKind`] tag is derived from it.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::{PhaseKind, Tile, UnitId};

/// Identifies one in-flight animation.
///
/// The presentation layer hands the ticket back when the animation ends;
/// a stale or unknown ticket means the two sides are out of sync.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimationTicket(pub u64);

impl std::fmt::Display for AnimationTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ticket({})", self.0)
    }
}

/// A committed action waiting for its animation to finish.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pending {
    /// Ticket issued with the animation request.
    pub ticket: AnimationTicket,
    /// The acting unit.
    pub unit: UnitId,
    /// Where the animation ends.
    pub to: Tile,
}

impl Pending {
    /// Panics unless the completion signal matches this pending action.
    pub fn confirm(&self, ticket: AnimationTicket, at: Tile) {
        assert_eq!(
            ticket, self.ticket,
            "Animation completion for {ticket} while {} is pending",
            self.ticket
        );
        assert_eq!(
            at, self.to,
            "Animation {ticket} reported ending at {at}, expected {}",
            self.to
        );
    }
}

/// The live turn-cycle state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the player-phase banner to be dismissed.
    PlayerPhaseBanner,
    /// Waiting for the player to pick a ready unit.
    PlayerTurn,
    /// A unit is selected; the board holds the selection.
    UnitSelected,
    /// A player action is animating.
    UnitAnimation {
        /// The action being animated.
        pending: Pending,
    },
    /// Waiting for the enemy-phase banner to be dismissed.
    EnemyPhaseBanner,
    /// Enemy sequence between animations.
    EnemyTurn {
        /// Enemy units still to act, snapshotted when the sequence began.
        queue: VecDeque<UnitId>,
    },
    /// An enemy action is animating.
    EnemyUnitAnimation {
        /// The action being animated.
        pending: Pending,
        /// Enemy units still to act after this one.
        queue: VecDeque<UnitId>,
    },
}

impl Phase {
    /// The flat tag for this phase.
    #[must_use]
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::PlayerPhaseBanner => PhaseKind::PlayerPhaseBanner,
            Phase::PlayerTurn => PhaseKind::PlayerTurn,
            Phase::UnitSelected => PhaseKind::UnitSelected,
            Phase::UnitAnimation { .. } => PhaseKind::UnitAnimation,
            Phase::EnemyPhaseBanner => PhaseKind::EnemyPhaseBanner,
            Phase::EnemyTurn { .. } => PhaseKind::EnemyTurn,
            Phase::EnemyUnitAnimation { .. } => PhaseKind::EnemyUnitAnimation,
        }
    }

    /// The pending animation, if this is an animation phase.
    #[must_use]
    pub fn pending(&self) -> Option<&Pending> {
        match self {
            Phase::UnitAnimation { pending } | Phase::EnemyUnitAnimation { pending, .. } => {
                Some(pending)
            }
            _ => None,
        }
    }
}

/// Everything the presentation layer can tell the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    /// A tile was clicked or otherwise activated.
    TileActivated(Tile),
    /// A phase banner was dismissed.
    BannerDismissed,
    /// An animation finished at `at`.
    AnimationComplete {
        /// Ticket from the animation request.
        ticket: AnimationTicket,
        /// Final tile of the animated unit.
        at: Tile,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending() -> Pending {
        Pending {
            ticket: AnimationTicket(3),
            unit: UnitId(1),
            to: Tile::new(2, 2),
        }
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(Phase::PlayerPhaseBanner.kind(), PhaseKind::PlayerPhaseBanner);
        assert_eq!(
            Phase::EnemyTurn { queue: VecDeque::new() }.kind(),
            PhaseKind::EnemyTurn
        );
        assert_eq!(
            Phase::UnitAnimation { pending: pending() }.kind(),
            PhaseKind::UnitAnimation
        );
    }

    #[test]
    fn test_pending_only_in_animation_phases() {
        assert!(Phase::PlayerTurn.pending().is_none());
        assert_eq!(
            Phase::EnemyUnitAnimation {
                pending: pending(),
                queue: VecDeque::new()
            }
            .pending(),
            Some(&pending())
        );
    }

    #[test]
    fn test_confirm_accepts_matching_signal() {
        pending().confirm(AnimationTicket(3), Tile::new(2, 2));
    }

    #[test]
    #[should_panic(expected = "while Ticket(3) is pending")]
    fn test_confirm_rejects_stale_ticket() {
        pending().confirm(AnimationTicket(2), Tile::new(2, 2));
    }

    #[test]
    #[should_panic(expected = "expected (2, 2)")]
    fn test_confirm_rejects_wrong_tile() {
        pending().confirm(AnimationTicket(3), Tile::new(0, 0));
    }
}
