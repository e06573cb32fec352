//! Match engine
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One update per animation frame, no wall-clock time
//! - No randomness
//! - No rendering or platform dependencies

pub mod frame;
pub mod state;
pub mod tick;

pub use frame::{Frame, Rect};
pub use state::{Ball, MatchConfig, MatchPhase, MatchState, Paddle, Scores, Side};
pub use tick::{
    TickInput, TickOutcome, advance_ball, check_match_over, opponent_step, play_again,
    reset, resolve_boundaries, start_game, tick,
};
