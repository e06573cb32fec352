//! Per-frame match update
//!
//! One call to [`tick`] per animation frame. The individual steps are public
//! so the presentation layer and tests can drive them separately.

use glam::Vec2;

use super::frame::Frame;
use super::state::{Ball, MatchConfig, MatchPhase, MatchState, Side};
use crate::consts::*;

/// Input gathered since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Clamped bottom paddle x from the last pointer move, if any
    pub paddle_x: Option<f32>,
}

/// What happened during one tick
#[derive(Debug, Clone)]
pub struct TickOutcome {
    /// Snapshot taken before the state advanced
    pub frame: Frame,
    /// Side that scored this tick
    pub scored: Option<Side>,
    /// Set on the tick the match ends
    pub winner: Option<Side>,
}

/// Begin a new match, replacing any previous state
pub fn start_game(config: MatchConfig) -> MatchState {
    let mut state = MatchState::new(config);
    reset(&mut state);
    state.phase = MatchPhase::Running;
    log::info!(
        "Match started (ball speed {:.0}, computer speed {:.0})",
        config.initial_speed_y.abs(),
        config.computer_speed
    );
    state
}

/// Fresh match for the Play Again control. Only an Over match can be replaced,
/// so a repeated click cannot cut a new match short.
pub fn play_again(state: &MatchState) -> Option<MatchState> {
    state.is_over().then(|| start_game(state.config))
}

/// Advance the match by one frame
///
/// Outside `Running` the state is left untouched, pointer input included,
/// and only the snapshot is returned.
pub fn tick(state: &mut MatchState, input: &TickInput) -> TickOutcome {
    if state.phase != MatchPhase::Running {
        return TickOutcome {
            frame: Frame::capture(state),
            scored: None,
            winner: None,
        };
    }

    if let Some(x) = input.paddle_x {
        state.move_player_paddle(x);
    }

    let frame = Frame::capture(state);
    state.ticks += 1;

    advance_ball(state);
    let scored = resolve_boundaries(state);
    opponent_step(state);
    let winner = check_match_over(state);

    TickOutcome {
        frame,
        scored,
        winner,
    }
}

/// Re-center the ball and serve it toward the player
pub fn reset(state: &mut MatchState) {
    state.ball = Ball::centered(Vec2::new(state.ball.speed.x, SERVE_SPEED_Y));
    state.paddle_contact = false;
}

/// Move the ball one step
pub fn advance_ball(state: &mut MatchState) {
    state.ball.pos.y += -state.ball.speed.y;

    // No drift until the player has moved and returned the ball once
    if state.player_moved && state.paddle_contact {
        state.ball.pos.x += state.ball.speed.x;
    }
}

/// Wall bounces, paddle hits and misses. Returns the side that scored.
pub fn resolve_boundaries(state: &mut MatchState) -> Option<Side> {
    let mut scored = None;

    // Side walls, only when heading outward
    let ball = &mut state.ball;
    if (ball.pos.x < 0.0 && ball.speed.x < 0.0)
        || (ball.pos.x > SURFACE_WIDTH && ball.speed.x > 0.0)
    {
        ball.speed.x = -ball.speed.x;
    }

    // Player paddle (bottom)
    if state.ball.pos.y > SURFACE_HEIGHT - PADDLE_DIFF {
        if state.ball.over_paddle(&state.paddle_bottom) {
            player_paddle_hit(state);
        } else if state.ball.pos.y > SURFACE_HEIGHT {
            score_point(state, Side::Computer);
            scored = Some(Side::Computer);
        }
    }

    // Computer paddle (top). Not exclusive with the bottom check.
    if state.ball.pos.y < PADDLE_DIFF {
        if state.ball.over_paddle(&state.paddle_top) {
            if state.player_moved {
                state.ball.speed.y = (state.ball.speed.y + COMPUTER_HIT_BOOST).min(MAX_SPEED_Y);
            }
            state.ball.speed.y = -state.ball.speed.y;
        } else if state.ball.pos.y < 0.0 {
            score_point(state, Side::Player);
            scored = Some(Side::Player);
        }
    }

    scored
}

fn player_paddle_hit(state: &mut MatchState) {
    state.paddle_contact = true;

    if state.player_moved {
        state.ball.speed.y -= PLAYER_HIT_BOOST;
        if state.ball.speed.y < -MAX_SPEED_Y {
            state.ball.speed.y = -MAX_SPEED_Y;
            if !state.rubber_banded {
                state.rubber_banded = true;
                state.computer_speed = RUBBER_BAND_COMPUTER_SPEED;
                log::debug!(
                    "Ball speed saturated at tick {}, computer speed now {}",
                    state.ticks,
                    state.computer_speed
                );
            }
        }
    }
    state.ball.speed.y = -state.ball.speed.y;

    // Hit angle from where the ball met the paddle
    let trajectory_x = state.ball.pos.x - state.paddle_bottom.center();
    state.ball.speed.x = trajectory_x;
}

fn score_point(state: &mut MatchState, side: Side) {
    reset(state);
    state.scores.award(side);
    log::info!(
        "{} scores ({} - {})",
        side.label(),
        state.scores.player,
        state.scores.computer
    );
}

/// Chase the ball with the computer paddle
pub fn opponent_step(state: &mut MatchState) {
    if !state.player_moved {
        return;
    }

    let paddle = &mut state.paddle_top;
    if paddle.center() < state.ball.pos.x {
        paddle.set_x(paddle.x + state.computer_speed);
    } else {
        paddle.set_x(paddle.x - state.computer_speed);
    }
}

/// End the match once a side reaches the winning score
pub fn check_match_over(state: &mut MatchState) -> Option<Side> {
    let winner = state.winner()?;
    state.phase = MatchPhase::Over;
    log::info!(
        "{} after {} ticks ({} - {})",
        winner.banner(),
        state.ticks,
        state.scores.player,
        state.scores.computer
    );
    Some(winner)
}
