//! Victory/defeat evaluation.
//!
//! The turn machine calls into these functions after every event that can
//! end the match: captures, and player units reaching a goal. The board
//! itself never decides the match.

pub mod victory;

pub use victory::{check_victory, evaluate_capture, exit_through_goal, GameResult};
