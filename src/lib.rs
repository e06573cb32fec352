//! Ping Pong - a single-screen paddle game against the computer
//!
//! Core modules:
//! - `sim`: Match engine (ball motion, bounces, scoring, opponent)
//! - `renderer`: WebGPU rendering of the per-tick frame snapshot
//! - `platform`: Pointer input mapping and browser glue
//! - `settings`: Device profiles and user preferences

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{DeviceProfile, Settings};
pub use sim::{MatchPhase, MatchState, Side, TickInput, TickOutcome, start_game, tick};

/// Game configuration constants
pub mod consts {
    /// Drawing surface dimensions (logical units)
    pub const SURFACE_WIDTH: f32 = 500.0;
    pub const SURFACE_HEIGHT: f32 = 700.0;

    /// Paddle size
    pub const PADDLE_WIDTH: f32 = 50.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Scoring band at each paddle's wall, also half a paddle width
    pub const PADDLE_DIFF: f32 = 25.0;
    /// Paddle x both paddles start at (centered)
    pub const PADDLE_START_X: f32 = 225.0;
    /// Fixed paddle rows (top edge of each paddle rect)
    pub const PADDLE_BOTTOM_Y: f32 = SURFACE_HEIGHT - 20.0;
    pub const PADDLE_TOP_Y: f32 = 10.0;
    /// Rightmost allowed paddle x
    pub const PADDLE_MAX_X: f32 = SURFACE_WIDTH - PADDLE_WIDTH;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 5.0;
    /// Vertical speed injected after every reset (negative = toward the player)
    pub const SERVE_SPEED_Y: f32 = -3.0;
    /// Vertical speed cap after paddle hits
    pub const MAX_SPEED_Y: f32 = 5.0;
    /// Speed added to the ball on each bottom paddle hit
    pub const PLAYER_HIT_BOOST: f32 = 1.0;
    /// Speed added to the ball on each top paddle hit
    pub const COMPUTER_HIT_BOOST: f32 = 5.0;
    /// Opponent speed once the ball speed saturates
    pub const RUBBER_BAND_COMPUTER_SPEED: f32 = 6.0;

    /// Points needed to win a match
    pub const WINNING_SCORE: u32 = 7;

    /// Center divider
    pub const CENTER_LINE_Y: f32 = 350.0;
    pub const CENTER_LINE_DASH: f32 = 4.0;

    /// Score text anchors
    pub const PLAYER_SCORE_POS: (f32, f32) = (20.0, SURFACE_HEIGHT / 2.0 + 50.0);
    pub const COMPUTER_SCORE_POS: (f32, f32) = (20.0, SURFACE_HEIGHT / 2.0 - 30.0);

    /// Viewports at or below this width use the compact profile
    pub const COMPACT_VIEWPORT_MAX_WIDTH: f32 = 600.0;
}

/// Clamp a paddle x-position to the playable range
#[inline]
pub fn clamp_paddle_x(x: f32) -> f32 {
    x.clamp(0.0, consts::PADDLE_MAX_X)
}
