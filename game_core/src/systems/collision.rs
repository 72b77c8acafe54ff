use rand::Rng;

use crate::components::Ball;
use crate::rect::Rect;
use crate::resources::GameRng;

/// Bounce the ball off the player's paddle.
///
/// The vertical drift is re-rolled in `[-spread_y, spread_y]`, the horizontal
/// direction flips and the ball is pushed out to the paddle's right edge.
/// Returns whether the ball was hit.
pub fn deflect_off_player(paddle: &Rect, ball: &mut Ball, spread_y: i32, rng: &mut GameRng) -> bool {
    if !paddle.intersects(&ball.rect) {
        return false;
    }
    ball.change.y = rng.0.gen_range(-spread_y..=spread_y);
    ball.change.x = -ball.change.x;
    ball.rect.set_left(paddle.right());
    true
}

/// Bounce the ball off the enemy's paddle. Deterministic: only the horizontal
/// direction flips, and the ball is pushed out to the paddle's left edge.
pub fn deflect_off_enemy(paddle: &Rect, ball: &mut Ball) -> bool {
    if !paddle.intersects(&ball.rect) {
        return false;
    }
    ball.change.x = -ball.change.x;
    ball.rect.set_right(paddle.left());
    true
}
