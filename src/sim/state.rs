//! Match state and core simulation types
//!
//! Everything the engine mutates between ticks lives in `MatchState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::clamp_paddle_x;
use crate::consts::*;

/// Coarse match lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Not started yet
    Idle,
    /// Ball in play
    Running,
    /// One side reached the winning score
    Over,
}

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Human, bottom paddle
    Player,
    /// Opponent, top paddle
    Computer,
}

impl Side {
    /// Name shown on the game-over panel
    pub fn label(&self) -> &'static str {
        match self {
            Side::Player => "Player 1",
            Side::Computer => "Computer",
        }
    }

    /// Game-over banner text
    pub fn banner(&self) -> String {
        format!("{} Wins!", self.label())
    }
}

/// Per-device speeds injected at match start
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub initial_speed_x: f32,
    pub initial_speed_y: f32,
    pub computer_speed: f32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            initial_speed_x: -1.0,
            initial_speed_y: -1.0,
            computer_speed: 10.0,
        }
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    /// Center in surface coordinates (y grows downward)
    pub pos: Vec2,
    /// `x` is the horizontal step per tick. `y` is upward-positive:
    /// the ball moves by `-speed.y` each tick.
    pub speed: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at the surface midpoint with the given speed
    pub fn centered(speed: Vec2) -> Self {
        Self {
            pos: Vec2::new(SURFACE_WIDTH / 2.0, SURFACE_HEIGHT / 2.0),
            speed,
            radius: BALL_RADIUS,
        }
    }

    /// Whether the ball's x falls on the paddle span `[x, x + width)`
    pub fn over_paddle(&self, paddle: &Paddle) -> bool {
        self.pos.x >= paddle.x && self.pos.x < paddle.x + PADDLE_WIDTH
    }
}

/// A paddle. Only x varies; the row is fixed per side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub x: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self { x: PADDLE_START_X }
    }
}

impl Paddle {
    /// Set position, clamped to the surface
    pub fn set_x(&mut self, x: f32) {
        self.x = clamp_paddle_x(x);
    }

    /// Horizontal center
    pub fn center(&self) -> f32 {
        self.x + PADDLE_DIFF
    }
}

/// Match score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scores {
    pub player: u32,
    pub computer: u32,
}

impl Scores {
    /// Award exactly one point
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Computer => self.computer += 1,
        }
    }
}

/// Complete match state
#[derive(Debug, Clone, PartialEq)]
pub struct MatchState {
    pub ball: Ball,
    /// Human paddle
    pub paddle_bottom: Paddle,
    /// Computer paddle
    pub paddle_top: Paddle,
    /// Set by the first pointer movement of the match
    pub player_moved: bool,
    /// Ball has bounced off the bottom paddle since the last reset
    pub paddle_contact: bool,
    /// Opponent step per tick
    pub computer_speed: f32,
    /// The one-time opponent speed change has fired
    pub rubber_banded: bool,
    pub scores: Scores,
    pub phase: MatchPhase,
    /// Speeds this match was configured with
    pub config: MatchConfig,
    /// Engine ticks run this match
    pub ticks: u64,
}

impl MatchState {
    /// Fresh, not-yet-started match
    pub fn new(config: MatchConfig) -> Self {
        Self {
            ball: Ball::centered(Vec2::new(config.initial_speed_x, config.initial_speed_y)),
            paddle_bottom: Paddle::default(),
            paddle_top: Paddle::default(),
            player_moved: false,
            paddle_contact: false,
            computer_speed: config.computer_speed,
            rubber_banded: false,
            scores: Scores::default(),
            phase: MatchPhase::Idle,
            config,
            ticks: 0,
        }
    }

    /// Move the human paddle (clamped) and mark the player as engaged
    pub fn move_player_paddle(&mut self, x: f32) {
        self.paddle_bottom.set_x(x);
        self.player_moved = true;
    }

    /// Winner, if a score has reached the target (player checked first)
    pub fn winner(&self) -> Option<Side> {
        if self.scores.player == WINNING_SCORE {
            Some(Side::Player)
        } else if self.scores.computer == WINNING_SCORE {
            Some(Side::Computer)
        } else {
            None
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == MatchPhase::Over
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_and_centered() {
        let state = MatchState::default();
        assert_eq!(state.phase, MatchPhase::Idle);
        assert_eq!(state.ball.pos, Vec2::new(250.0, 350.0));
        assert_eq!(state.paddle_bottom.x, 225.0);
        assert_eq!(state.paddle_top.x, 225.0);
        assert!(!state.player_moved);
        assert!(!state.paddle_contact);
        assert_eq!(state.scores, Scores::default());
    }

    #[test]
    fn test_move_player_paddle_clamps() {
        let mut state = MatchState::default();
        state.move_player_paddle(-40.0);
        assert_eq!(state.paddle_bottom.x, 0.0);
        assert!(state.player_moved);

        state.move_player_paddle(480.0);
        assert_eq!(state.paddle_bottom.x, 450.0);

        state.move_player_paddle(120.5);
        assert_eq!(state.paddle_bottom.x, 120.5);
    }

    #[test]
    fn test_over_paddle_is_half_open() {
        let paddle = Paddle { x: 225.0 };
        let mut ball = Ball::centered(Vec2::ZERO);

        ball.pos.x = 225.0;
        assert!(ball.over_paddle(&paddle));
        ball.pos.x = 274.9;
        assert!(ball.over_paddle(&paddle));
        ball.pos.x = 275.0;
        assert!(!ball.over_paddle(&paddle));
        ball.pos.x = 224.9;
        assert!(!ball.over_paddle(&paddle));
    }

    #[test]
    fn test_winner_labels() {
        assert_eq!(Side::Player.banner(), "Player 1 Wins!");
        assert_eq!(Side::Computer.banner(), "Computer Wins!");
    }

    #[test]
    fn test_winner_prefers_player() {
        let mut state = MatchState::default();
        assert_eq!(state.winner(), None);
        state.scores = Scores { player: 7, computer: 7 };
        assert_eq!(state.winner(), Some(Side::Player));
        state.scores = Scores { player: 3, computer: 7 };
        assert_eq!(state.winner(), Some(Side::Computer));
    }
}
