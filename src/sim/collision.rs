//! Paddle collision detection
//!
//! Balls are tested by their axis-aligned bounding box against the paddle
//! rectangle. Touching edges count as a hit.

use super::state::{Ball, Paddle};

/// Inclusive 1D interval overlap
#[inline]
pub fn spans_overlap(a_min: f32, a_max: f32, b_min: f32, b_max: f32) -> bool {
    a_max >= b_min && a_min <= b_max
}

/// Whether the ball's vertical extent reaches the paddle's band
#[inline]
pub fn in_paddle_band(ball: &Ball, paddle: &Paddle) -> bool {
    spans_overlap(ball.top(), ball.bottom(), paddle.y, paddle.bottom())
}

/// Check whether a ball overlaps the paddle on both axes
pub fn ball_paddle_overlap(ball: &Ball, paddle: &Paddle) -> bool {
    in_paddle_band(ball, paddle)
        && spans_overlap(ball.left(), ball.right(), paddle.x, paddle.right())
}

/// Check whether a ball has fallen completely below the arena
#[inline]
pub fn ball_below_arena(ball: &Ball, arena_height: f32) -> bool {
    ball.top() > arena_height
}
