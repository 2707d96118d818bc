//! What the engine hands back to the presentation layer.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::state::AnimationTicket;
use crate::core::{MoveKind, PhaseKind, Tile, UnitId};
use crate::rules::GameResult;

/// Request to animate a committed action.
///
/// The board already reflects the action when this is issued. The engine
/// will not advance until [`Engine::on_animation_complete`](super::Engine::on_animation_complete)
/// is called with `ticket` and `to`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animation {
    /// Hand this back on completion.
    pub ticket: AnimationTicket,
    /// The acting unit.
    pub unit: UnitId,
    /// Start tile.
    pub from: Tile,
    /// End tile.
    pub to: Tile,
    /// Move or attack.
    pub kind: MoveKind,
    /// Unit destroyed by the action, already gone from the board.
    pub captured: Option<UnitId>,
    /// Wait this long after the animation before signalling completion.
    pub pause_after: Duration,
}

/// Result of feeding one input to the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Phase after the input was handled.
    pub phase: PhaseKind,
    /// At most one animation to play.
    pub animation: Option<Animation>,
    /// Set once the match is decided.
    pub outcome: Option<GameResult>,
}

impl Step {
    /// Whether the match is over.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}
