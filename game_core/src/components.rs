use glam::IVec2;
use rand::Rng;

use crate::rect::Rect;
use crate::resources::GameRng;
use crate::surface::{Color, Surface};

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub rect: Rect,
    pub change: IVec2, // Pixels per tick
}

impl Ball {
    pub fn new(pos: IVec2, size: IVec2) -> Self {
        Self {
            rect: Rect::new(pos, size),
            change: IVec2::ZERO,
        }
    }

    /// Bounce off the top and bottom edges, then move one tick
    pub fn update(&mut self, screen_height: i32) {
        if self.rect.top() < 0 {
            self.change.y = -self.change.y;
            self.rect.set_top(0);
        } else if self.rect.bottom() > screen_height {
            self.change.y = -self.change.y;
            self.rect.set_bottom(screen_height);
        }
        self.rect.pos += self.change;
    }

    /// Serve from `pos`, always heading left, with a random vertical drift
    pub fn reset(&mut self, pos: IVec2, speed_x: i32, spread_y: i32, rng: &mut GameRng) {
        self.rect.pos = pos;
        self.change = IVec2::new(-speed_x, rng.0.gen_range(-spread_y..=spread_y));
    }

    pub fn draw(&self, surface: &mut dyn Surface, color: Color) {
        surface.draw_rect(self.rect, color);
    }
}

/// Paddle component - either side's bat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    pub fn new(pos: IVec2, size: IVec2) -> Self {
        Self {
            rect: Rect::new(pos, size),
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface, color: Color) {
        surface.draw_rect(self.rect, color);
    }
}

/// Keyboard-driven vertical velocity of the player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerControl {
    pub change: i32, // -speed = up, 0 = stop, speed = down
    pub speed: i32,
}

impl PlayerControl {
    pub fn new(speed: i32) -> Self {
        Self { change: 0, speed }
    }

    pub fn go_up(&mut self) {
        self.change = -self.speed;
    }

    pub fn go_down(&mut self) {
        self.change = self.speed;
    }

    pub fn stop(&mut self) {
        self.change = 0;
    }
}

/// Marks the paddle steered by the ball-tracking script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnemyTracker;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_moves_by_change() {
        let mut ball = Ball::new(IVec2::new(100, 100), IVec2::splat(12));
        ball.change = IVec2::new(-5, 3);
        ball.update(480);
        assert_eq!(ball.rect.pos, IVec2::new(95, 103));
    }

    #[test]
    fn test_ball_bounces_off_top_before_moving() {
        let mut ball = Ball::new(IVec2::new(100, -3), IVec2::splat(12));
        ball.change = IVec2::new(5, -4);
        ball.update(480);
        assert_eq!(ball.change, IVec2::new(5, 4), "Vertical velocity inverted");
        assert_eq!(ball.rect.pos, IVec2::new(105, 4), "Clamped to 0 then moved");
    }

    #[test]
    fn test_ball_bounces_off_bottom_before_moving() {
        let mut ball = Ball::new(IVec2::new(100, 470), IVec2::splat(12));
        ball.change = IVec2::new(5, 4);
        ball.update(480);
        assert_eq!(ball.change.y, -4);
        assert_eq!(ball.rect.bottom(), 476, "Clamped to 480 then moved up 4");
    }

    #[test]
    fn test_ball_touching_edge_does_not_bounce() {
        let mut ball = Ball::new(IVec2::new(100, 0), IVec2::splat(12));
        ball.change = IVec2::new(5, -2);
        ball.update(480);
        assert_eq!(ball.change.y, -2, "Top == 0 is still in bounds");
        assert_eq!(ball.rect.top(), -2);
    }

    #[test]
    fn test_ball_reset_serves_left_from_position() {
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(IVec2::new(3, 3), IVec2::splat(12));
        ball.change = IVec2::new(5, 5);
        for _ in 0..50 {
            ball.reset(IVec2::new(320, 240), 5, 3, &mut rng);
            assert_eq!(ball.rect.pos, IVec2::new(320, 240));
            assert_eq!(ball.change.x, -5, "Always serves to the left");
            assert!((-3..=3).contains(&ball.change.y));
        }
    }

    #[test]
    fn test_player_control_directions() {
        let mut control = PlayerControl::new(5);
        assert_eq!(control.change, 0);
        control.go_up();
        assert_eq!(control.change, -5);
        control.go_down();
        assert_eq!(control.change, 5);
        control.stop();
        assert_eq!(control.change, 0);
    }
}
