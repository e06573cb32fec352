//! Frame -> vertex list

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::sim::{Frame, Rect};

const BALL_SEGMENTS: u32 = 24;
const CENTER_LINE_THICKNESS: f32 = 1.0;

/// Build the full triangle list for a frame, back to front
pub fn build_vertices(frame: &Frame) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(1024);

    let background = Rect::new(0.0, 0.0, frame.size.x, frame.size.y);
    vertices.extend(shapes::rect(&background, colors::BACKGROUND));

    vertices.extend(shapes::rect(&frame.paddle_bottom, colors::PADDLE));
    vertices.extend(shapes::rect(&frame.paddle_top, colors::PADDLE));

    vertices.extend(shapes::dashed_hline(
        frame.center_line_y,
        0.0,
        frame.size.x,
        frame.dash,
        CENTER_LINE_THICKNESS,
        colors::CENTER_LINE,
    ));

    vertices.extend(shapes::circle(
        frame.ball_center,
        frame.ball_radius,
        colors::BALL,
        BALL_SEGMENTS,
    ));

    vertices.extend(shapes::number(
        frame.scores.player,
        frame.player_score_pos,
        colors::SCORE,
    ));
    vertices.extend(shapes::number(
        frame.scores.computer,
        frame.computer_score_pos,
        colors::SCORE,
    ));

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::MatchState;

    #[test]
    fn test_starts_with_background() {
        let frame = Frame::capture(&MatchState::default());
        let vertices = build_vertices(&frame);
        assert!(vertices[..6].iter().all(|v| v.color == colors::BACKGROUND));
    }

    #[test]
    fn test_vertex_budget() {
        let frame = Frame::capture(&MatchState::default());
        let vertices = build_vertices(&frame);

        // background + 2 paddles + 63 dashes + ball + two zeros
        let expected = 6 + 12 + 63 * 6 + BALL_SEGMENTS as usize * 3 + 2 * 6 * 6;
        assert_eq!(vertices.len(), expected);
    }

    #[test]
    fn test_ball_drawn_at_frame_position() {
        let mut state = MatchState::default();
        state.ball.pos = glam::Vec2::new(40.0, 600.0);
        let vertices = build_vertices(&Frame::capture(&state));

        assert!(
            vertices
                .iter()
                .any(|v| v.position == [40.0, 600.0] && v.color == colors::BALL)
        );
    }
}
