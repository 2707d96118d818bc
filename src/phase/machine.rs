//! The turn phase state machine.
//!
//! `Engine` owns the board, the current phase, and everything needed to
//! run the enemy phase without player input. All input goes through
//! [`Engine::dispatch`], a single transition function keyed by
//! `(phase, input)`:
//!
//! | Phase | Input | Next |
//! |---|---|---|
//! | PlayerPhaseBanner | banner dismissed | PlayerTurn |
//! | PlayerTurn | ready player unit | UnitSelected |
//! | PlayerTurn | anything else | PlayerTurn |
//! | UnitSelected | moveable / attackable tile | UnitAnimation |
//! | UnitSelected | other tile | PlayerTurn |
//! | UnitAnimation | completion | PlayerTurn, or EnemyPhaseBanner once every player unit has acted |
//! | EnemyPhaseBanner | banner dismissed | EnemyTurn → EnemyUnitAnimation |
//! | EnemyUnitAnimation | completion | next EnemyUnitAnimation, or PlayerPhaseBanner |
//!
//! Tile activations in any other phase are ignored. Banner dismissals and
//! animation completions in the wrong phase are caller bugs and panic.

use std::collections::VecDeque;
use std::time::Duration;

use im::Vector;
use tracing::{debug, info, instrument};

use super::animation::{Animation, Step};
use super::state::{AnimationTicket, Input, Pending, Phase};
use crate::board::Board;
use crate::core::{Alignment, EngineConfig, GameRng, MoveKind, MoveRecord, Tile, UnitId};
use crate::policy::{CaptureFirst, EnemyPolicy};
use crate::render::RenderState;
use crate::rules::{check_victory, evaluate_capture, exit_through_goal, GameResult};

/// Turn-based tactics rules engine.
#[derive(Debug)]
pub struct Engine {
    board: Board,
    phase: Phase,
    policy: Box<dyn EnemyPolicy>,
    rng: GameRng,
    config: EngineConfig,
    turn: u32,
    outcome: Option<GameResult>,
    history: Vector<MoveRecord>,
    next_ticket: u64,
}

impl Engine {
    /// Create an engine with the default enemy policy.
    #[must_use]
    pub fn new(board: Board, config: EngineConfig) -> Self {
        Self::with_policy(board, config, Box::new(CaptureFirst))
    }

    /// Create an engine with a custom enemy policy.
    #[must_use]
    pub fn with_policy(board: Board, config: EngineConfig, policy: Box<dyn EnemyPolicy>) -> Self {
        Self {
            board,
            phase: Phase::PlayerPhaseBanner,
            policy,
            rng: GameRng::new(config.seed),
            config,
            turn: 1,
            outcome: None,
            history: Vector::new(),
            next_ticket: 0,
        }
    }

    // === Entry points ===

    /// A tile was activated by the player.
    pub fn on_tile_activated(&mut self, tile: impl Into<Tile>) -> Step {
        self.dispatch(Input::TileActivated(tile.into()))
    }

    /// A phase banner was dismissed.
    pub fn on_banner_dismissed(&mut self) -> Step {
        self.dispatch(Input::BannerDismissed)
    }

    /// The animation identified by `ticket` finished with its unit at `at`.
    pub fn on_animation_complete(&mut self, ticket: AnimationTicket, at: impl Into<Tile>) -> Step {
        self.dispatch(Input::AnimationComplete {
            ticket,
            at: at.into(),
        })
    }

    /// Feed one input through the transition table.
    ///
    /// Once the match is decided every input is ignored.
    #[instrument(skip(self), fields(phase = %self.phase.kind(), turn = self.turn))]
    pub fn dispatch(&mut self, input: Input) -> Step {
        if let Some(outcome) = self.outcome {
            debug!(?outcome, "match decided, input ignored");
            return self.step(None);
        }

        // Every arm below installs the next phase.
        let phase = std::mem::replace(&mut self.phase, Phase::PlayerTurn);
        match (phase, input) {
            (Phase::PlayerPhaseBanner, Input::BannerDismissed) => self.begin_player_turn(),
            (Phase::EnemyPhaseBanner, Input::BannerDismissed) => self.begin_enemy_turn(),
            (phase, Input::BannerDismissed) => {
                panic!("Banner dismissed during {}", phase.kind())
            }

            (Phase::PlayerTurn, Input::TileActivated(tile)) => self.pick_unit(tile),
            (Phase::UnitSelected, Input::TileActivated(tile)) => self.pick_destination(tile),
            (phase, Input::TileActivated(tile)) => {
                debug!(%tile, phase = %phase.kind(), "tile ignored outside player input phases");
                self.phase = phase;
                self.step(None)
            }

            (Phase::UnitAnimation { pending }, Input::AnimationComplete { ticket, at }) => {
                pending.confirm(ticket, at);
                self.finish_player_action(pending)
            }
            (Phase::EnemyUnitAnimation { pending, queue }, Input::AnimationComplete { ticket, at }) => {
                pending.confirm(ticket, at);
                self.finish_enemy_action(pending, queue)
            }
            (phase, Input::AnimationComplete { ticket, .. }) => {
                panic!("Animation {ticket} completed during {}", phase.kind())
            }
        }
    }

    // === Player phase ===

    fn begin_player_turn(&mut self) -> Step {
        debug!(turn = self.turn, "player turn begins");
        self.phase = Phase::PlayerTurn;
        // nobody left to act: the side has already won
        if check_victory(&self.board) {
            self.decide(GameResult::Victory);
        }
        self.step(None)
    }

    fn pick_unit(&mut self, tile: Tile) -> Step {
        let selectable = self
            .board
            .occupant(tile)
            .is_some_and(|u| u.alignment == Alignment::Player && u.is_ready());

        if selectable {
            self.board.select(tile);
            self.phase = Phase::UnitSelected;
        } else {
            self.phase = Phase::PlayerTurn;
        }
        self.step(None)
    }

    fn pick_destination(&mut self, tile: Tile) -> Step {
        let Some(selection) = self.board.selection().cloned() else {
            panic!("UnitSelected phase without an active selection");
        };

        let kind = if selection.reach.can_attack(tile) {
            MoveKind::Attack
        } else if selection.reach.can_move_to(tile) {
            MoveKind::Move
        } else {
            debug!(%tile, "illegal destination, selection cleared");
            self.board.deselect();
            self.phase = Phase::PlayerTurn;
            return self.step(None);
        };

        let (pending, animation) = self.commit(selection.unit, selection.origin, tile, kind);
        self.phase = Phase::UnitAnimation { pending };
        self.step(Some(animation))
    }

    fn finish_player_action(&mut self, pending: Pending) -> Step {
        self.board.mark_moved(pending.unit);

        if let Some(outcome) = exit_through_goal(&mut self.board, pending.unit) {
            self.decide(outcome);
            self.phase = Phase::PlayerTurn;
            return self.step(None);
        }

        if self.board.all_units_moved(Alignment::Player) {
            self.board.reset_already_moved(Alignment::Player);
            debug!("every player unit has acted");
            self.phase = Phase::EnemyPhaseBanner;
        } else {
            self.phase = Phase::PlayerTurn;
        }
        self.step(None)
    }

    // === Enemy phase ===

    fn begin_enemy_turn(&mut self) -> Step {
        let queue: VecDeque<UnitId> = self.board.units_of(Alignment::Enemy).into();
        debug!(enemies = queue.len(), "enemy turn begins");
        self.advance_enemies(queue)
    }

    /// Act with the next enemy still on the board, or end the enemy turn.
    fn advance_enemies(&mut self, mut queue: VecDeque<UnitId>) -> Step {
        self.phase = Phase::EnemyTurn {
            queue: queue.clone(),
        };

        while let Some(unit) = queue.pop_front() {
            let Some(origin) = self.board.find_unit(unit) else {
                debug!(%unit, "enemy left the board mid-sequence, skipped");
                continue;
            };

            let reach = self.board.select(origin).reach.clone();
            let target = self.policy.choose_target(&self.board, &mut self.rng);
            self.board.deselect();

            let kind = if reach.can_attack(target) {
                MoveKind::Attack
            } else if reach.can_move_to(target) {
                MoveKind::Move
            } else {
                panic!("Enemy policy chose {target}, outside the reach of {unit}");
            };

            let (pending, animation) = self.commit(unit, origin, target, kind);
            self.phase = Phase::EnemyUnitAnimation { pending, queue };
            return self.step(Some(animation));
        }

        self.board.reset_already_moved(Alignment::Enemy);
        self.turn += 1;
        debug!(turn = self.turn, "enemy turn complete");
        self.phase = Phase::PlayerPhaseBanner;
        self.step(None)
    }

    fn finish_enemy_action(&mut self, pending: Pending, queue: VecDeque<UnitId>) -> Step {
        self.board.mark_moved(pending.unit);
        self.advance_enemies(queue)
    }

    // === Shared ===

    /// Apply an action to the board and issue its animation request.
    fn commit(&mut self, unit: UnitId, from: Tile, to: Tile, kind: MoveKind) -> (Pending, Animation) {
        let Some(alignment) = self.board.unit(unit).map(|u| u.alignment) else {
            panic!("Cannot commit an action for {unit}: not on the board");
        };

        self.board.deselect();
        let captured_id = self.board.occupant_id(to).filter(|&d| d != unit);
        let captured = self.board.move_unit(unit, to);

        self.history.push_back(MoveRecord {
            turn: self.turn,
            alignment,
            unit,
            from,
            to,
            kind,
            captured: captured_id,
        });

        if let Some(outcome) = captured.as_ref().and_then(evaluate_capture) {
            self.decide(outcome);
        }

        let ticket = AnimationTicket(self.next_ticket);
        self.next_ticket += 1;

        let pause_after = match alignment {
            Alignment::Player => Duration::ZERO,
            Alignment::Enemy => self.config.enemy_pause(),
        };

        debug!(%unit, %from, %to, ?kind, %ticket, "action committed");
        (
            Pending { ticket, unit, to },
            Animation {
                ticket,
                unit,
                from,
                to,
                kind,
                captured: captured_id,
                pause_after,
            },
        )
    }

    fn decide(&mut self, outcome: GameResult) {
        info!(?outcome, turn = self.turn, "match decided");
        self.outcome = Some(outcome);
    }

    fn step(&self, animation: Option<Animation>) -> Step {
        Step {
            phase: self.phase.kind(),
            animation,
            outcome: self.outcome,
        }
    }

    // === Queries ===

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The live phase.
    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Completed enemy phases plus one.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The match outcome, once decided.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        self.outcome
    }

    /// Every action committed so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// The configuration the engine was built with.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read-only snapshot for redrawing.
    #[must_use]
    pub fn render_state(&self) -> RenderState {
        RenderState::capture(&self.board, self.phase.kind(), self.turn, self.outcome)
    }
}
