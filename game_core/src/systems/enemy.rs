use hecs::World;

use super::{current_ball, deflect_off_enemy, store_ball};
use crate::{Config, EnemyTracker, Events, Paddle, Rect, SoundTrigger};

/// Scripted opponent: move the paddle's center toward the ball's center.
///
/// Moves `step` pixels per call, and snaps exactly onto the ball's center once
/// it is within `step`, so it never overshoots or oscillates.
pub fn track(paddle: Rect, ball: Rect, step: i32) -> Rect {
    let mut next = paddle;
    let target = ball.center_y();
    let center = paddle.center_y();

    if center > target {
        if center - target <= step {
            next.set_center_y(target);
        } else {
            next.pos.y -= step;
        }
    } else if center < target {
        if target - center <= step {
            next.set_center_y(target);
        } else {
            next.pos.y += step;
        }
    }
    next
}

/// Move the enemy paddle toward the ball, then deflect the ball if they touch
pub fn update_enemy(
    world: &mut World,
    config: &Config,
    events: &mut Events,
    sound: &mut dyn SoundTrigger,
) {
    let mut ball = match current_ball(world) {
        Some(ball) => ball,
        None => return,
    };

    let mut hit = false;
    for (_entity, (paddle, _tracker)) in world.query_mut::<(&mut Paddle, &EnemyTracker)>() {
        paddle.rect = track(paddle.rect, ball.rect, config.enemy_step);

        if deflect_off_enemy(&paddle.rect, &mut ball) {
            hit = true;
            sound.play();
        }
    }

    if hit {
        events.ball_hit_paddle = true;
        store_ball(world, ball);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_enemy, Silent};
    use glam::IVec2;

    fn paddle_at(y: i32) -> Rect {
        Rect::from_xywh(575, y, 15, 50)
    }

    fn ball_centered_at(center_y: i32) -> Rect {
        let mut ball = Rect::from_xywh(300, 0, 12, 12);
        ball.set_center_y(center_y);
        ball
    }

    #[test]
    fn test_track_moves_up_by_step() {
        let next = track(paddle_at(200), ball_centered_at(100), 4);
        assert_eq!(next.top(), 196);
        assert_eq!(next.left(), 575, "Only vertical movement");
    }

    #[test]
    fn test_track_moves_down_by_step() {
        let next = track(paddle_at(200), ball_centered_at(400), 4);
        assert_eq!(next.top(), 204);
    }

    #[test]
    fn test_track_snaps_within_step() {
        let paddle = paddle_at(200); // center 225
        let next = track(paddle, ball_centered_at(222), 4);
        assert_eq!(next.center_y(), 222, "Snapped from above");

        let next = track(paddle, ball_centered_at(229), 4);
        assert_eq!(next.center_y(), 229, "Snapped from below, diff == step");
    }

    #[test]
    fn test_track_holds_when_aligned() {
        let paddle = paddle_at(200);
        let next = track(paddle, ball_centered_at(225), 4);
        assert_eq!(next, paddle);
    }

    #[test]
    fn test_track_converges_without_oscillation() {
        let ball = ball_centered_at(37);
        let mut paddle = paddle_at(400);
        let mut last_distance = (paddle.center_y() - ball.center_y()).abs();

        for _ in 0..200 {
            paddle = track(paddle, ball, 4);
            let distance = (paddle.center_y() - ball.center_y()).abs();
            assert!(distance <= last_distance, "Distance never grows");
            assert!(last_distance - distance <= 4, "Never moves more than a step");
            last_distance = distance;
        }
        assert_eq!(paddle.center_y(), ball.center_y(), "Converged exactly");

        let settled = paddle;
        for _ in 0..10 {
            paddle = track(paddle, ball, 4);
        }
        assert_eq!(paddle, settled, "Stays put once aligned");
    }

    #[test]
    fn test_update_enemy_deflects_ball() {
        let mut world = World::new();
        let config = Config::new();
        let mut events = Events::new();
        let mut sound = Silent;
        create_enemy(&mut world, &config);
        // Enemy starts at (575, 240); its center lines up with a ball at y = 259
        create_ball(&mut world, &config, IVec2::new(570, 259), IVec2::new(5, 2));

        update_enemy(&mut world, &config, &mut events, &mut sound);

        let ball = current_ball(&world).unwrap();
        assert_eq!(ball.change, IVec2::new(-5, 2));
        assert_eq!(ball.rect.right(), 575);
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_update_enemy_without_ball_is_noop() {
        let mut world = World::new();
        let config = Config::new();
        let mut events = Events::new();
        create_enemy(&mut world, &config);

        update_enemy(&mut world, &config, &mut events, &mut Silent);

        let top = world
            .query::<(&Paddle, &EnemyTracker)>()
            .iter()
            .next()
            .map(|(_e, (p, _))| p.rect.top())
            .unwrap();
        assert_eq!(top, 240);
        assert!(!events.ball_hit_paddle);
    }
}
