//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in surface coordinates.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Seven-segment glyph size
pub const DIGIT_WIDTH: f32 = 14.0;
pub const DIGIT_HEIGHT: f32 = 24.0;
pub const DIGIT_STROKE: f32 = 3.0;
pub const DIGIT_SPACING: f32 = 6.0;

/// Lit segments per digit, bit 0 = top (a) through bit 6 = middle (g)
const DIGIT_SEGMENTS: [u8; 10] = [
    0b011_1111, // 0
    0b000_0110, // 1
    0b101_1011, // 2
    0b100_1111, // 3
    0b110_0110, // 4
    0b110_1101, // 5
    0b111_1101, // 6
    0b000_0111, // 7
    0b111_1111, // 8
    0b110_1111, // 9
];

/// Generate vertices for a filled rectangle
pub fn rect(r: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (r.x, r.y);
    let (x1, y1) = (r.x + r.width, r.y + r.height);

    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a horizontal dashed line from `x0` to `x1`.
/// Dashes and gaps are both `dash` long, starting with a dash.
pub fn dashed_hline(
    y: f32,
    x0: f32,
    x1: f32,
    dash: f32,
    thickness: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    if dash <= 0.0 {
        return vertices;
    }

    let mut x = x0;
    while x < x1 {
        let end = (x + dash).min(x1);
        let segment = Rect::new(x, y - thickness / 2.0, end - x, thickness);
        vertices.extend(rect(&segment, color));
        x += dash * 2.0;
    }

    vertices
}

/// Segment rectangles for one digit with its top-left corner at `origin`
pub fn digit_segments(digit: u8, origin: Vec2) -> Vec<Rect> {
    let Some(&mask) = DIGIT_SEGMENTS.get(digit as usize) else {
        return Vec::new();
    };

    let (x, y) = (origin.x, origin.y);
    let (w, h, t) = (DIGIT_WIDTH, DIGIT_HEIGHT, DIGIT_STROKE);
    let half = h / 2.0;

    let segments = [
        Rect::new(x, y, w, t),                        // a
        Rect::new(x + w - t, y, t, half),             // b
        Rect::new(x + w - t, y + half, t, half),      // c
        Rect::new(x, y + h - t, w, t),                // d
        Rect::new(x, y + half, t, half),              // e
        Rect::new(x, y, t, half),                     // f
        Rect::new(x, y + half - t / 2.0, w, t),       // g
    ];

    segments
        .into_iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, r)| r)
        .collect()
}

/// Generate vertices for a number whose baseline-left corner is `anchor`,
/// the way text is anchored on a 2D canvas
pub fn number(value: u32, anchor: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    let top = anchor.y - DIGIT_HEIGHT;

    for (i, ch) in value.to_string().bytes().enumerate() {
        let x = anchor.x + i as f32 * (DIGIT_WIDTH + DIGIT_SPACING);
        for segment in digit_segments(ch - b'0', Vec2::new(x, top)) {
            vertices.extend(rect(&segment, color));
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_rect_covers_corners() {
        let vertices = rect(&Rect::new(10.0, 20.0, 50.0, 10.0), WHITE);
        assert_eq!(vertices.len(), 6);
        let xs: Vec<f32> = vertices.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = vertices.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 60.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 30.0);
    }

    #[test]
    fn test_circle_stays_within_radius() {
        let center = Vec2::new(250.0, 350.0);
        let vertices = circle(center, 5.0, WHITE, 16);
        assert_eq!(vertices.len(), 48);
        for v in &vertices {
            let d = Vec2::new(v.position[0], v.position[1]).distance(center);
            assert!(d <= 5.0 + 1e-4);
        }
    }

    #[test]
    fn test_dashed_line_alternates() {
        // 0..20 with dash 4 -> dashes at 0, 8, 16
        let vertices = dashed_hline(350.0, 0.0, 20.0, 4.0, 1.0, WHITE);
        assert_eq!(vertices.len(), 3 * 6);

        let full = dashed_hline(350.0, 0.0, 500.0, 4.0, 1.0, WHITE);
        assert_eq!(full.len(), 63 * 6);
        assert!(full.iter().all(|v| v.position[0] <= 500.0));
    }

    #[test]
    fn test_digit_segment_counts() {
        let counts: Vec<usize> = (0..10)
            .map(|d| digit_segments(d, Vec2::ZERO).len())
            .collect();
        assert_eq!(counts, vec![6, 2, 5, 5, 4, 5, 6, 3, 7, 6]);
        assert!(digit_segments(10, Vec2::ZERO).is_empty());
    }

    #[test]
    fn test_number_sits_on_baseline() {
        let vertices = number(7, Vec2::new(20.0, 400.0), WHITE);
        assert_eq!(vertices.len(), 3 * 6);
        assert!(vertices.iter().all(|v| v.position[1] <= 400.0));
        assert!(vertices.iter().all(|v| v.position[1] >= 400.0 - DIGIT_HEIGHT));

        let two_digits = number(10, Vec2::new(20.0, 400.0), WHITE);
        assert_eq!(two_digits.len(), (2 + 6) * 6);
    }
}
