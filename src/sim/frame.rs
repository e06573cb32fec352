//! Drawable snapshot of a match
//!
//! Taken at the start of every tick and handed to the presentation layer.

use glam::Vec2;

use super::state::{MatchState, Scores};
use crate::consts::*;

/// Axis-aligned rectangle, origin top-left
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub size: Vec2,
    pub paddle_bottom: Rect,
    pub paddle_top: Rect,
    pub ball_center: Vec2,
    pub ball_radius: f32,
    /// Row of the dashed divider
    pub center_line_y: f32,
    pub dash: f32,
    pub scores: Scores,
    pub player_score_pos: Vec2,
    pub computer_score_pos: Vec2,
}

impl Frame {
    pub fn capture(state: &MatchState) -> Self {
        Self {
            size: Vec2::new(SURFACE_WIDTH, SURFACE_HEIGHT),
            paddle_bottom: Rect::new(
                state.paddle_bottom.x,
                PADDLE_BOTTOM_Y,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            ),
            paddle_top: Rect::new(state.paddle_top.x, PADDLE_TOP_Y, PADDLE_WIDTH, PADDLE_HEIGHT),
            ball_center: state.ball.pos,
            ball_radius: state.ball.radius,
            center_line_y: CENTER_LINE_Y,
            dash: CENTER_LINE_DASH,
            scores: state.scores,
            player_score_pos: Vec2::from(PLAYER_SCORE_POS),
            computer_score_pos: Vec2::from(COMPUTER_SCORE_POS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_layout() {
        let mut state = MatchState::default();
        state.paddle_top.x = 100.0;
        state.scores.player = 3;

        let frame = Frame::capture(&state);
        assert_eq!(frame.size, Vec2::new(500.0, 700.0));
        assert_eq!(frame.paddle_bottom, Rect::new(225.0, 680.0, 50.0, 10.0));
        assert_eq!(frame.paddle_top, Rect::new(100.0, 10.0, 50.0, 10.0));
        assert_eq!(frame.ball_center, Vec2::new(250.0, 350.0));
        assert_eq!(frame.ball_radius, 5.0);
        assert_eq!(frame.center_line_y, 350.0);
        assert_eq!(frame.player_score_pos, Vec2::new(20.0, 400.0));
        assert_eq!(frame.computer_score_pos, Vec2::new(20.0, 320.0));
        assert_eq!(frame.scores.player, 3);
    }
}
