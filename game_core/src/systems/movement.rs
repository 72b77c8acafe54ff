use hecs::World;

use super::{current_ball, deflect_off_player, store_ball};
use crate::{Ball, Config, Events, GameRng, Paddle, PlayerControl, SoundTrigger};

/// Bounce the ball off the top/bottom edges and advance it one tick
pub fn move_ball(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.rect.top() < 0 || ball.rect.bottom() > config.screen_height {
            events.ball_hit_wall = true;
        }
        ball.update(config.screen_height);
    }
}

/// Stop the player's paddle at the screen edges, deflect the ball, then move the paddle
pub fn update_player(
    world: &mut World,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
    sound: &mut dyn SoundTrigger,
) {
    let mut ball = match current_ball(world) {
        Some(ball) => ball,
        None => return,
    };

    let mut hit = false;
    for (_entity, (paddle, control)) in world.query_mut::<(&mut Paddle, &mut PlayerControl)>() {
        // Halts further drift only; the paddle is not pulled back on screen
        if paddle.rect.top() <= 0 && control.change < 0 {
            control.change = 0;
        } else if paddle.rect.bottom() >= config.screen_height && control.change > 0 {
            control.change = 0;
        }

        if deflect_off_player(&paddle.rect, &mut ball, config.deflect_spread_y, rng) {
            hit = true;
            sound.play();
        }

        paddle.rect.pos.y += control.change;
    }

    if hit {
        events.ball_hit_paddle = true;
        store_ball(world, ball);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_player, Events};
    use glam::IVec2;

    #[derive(Default)]
    struct CountingSound {
        plays: u32,
    }

    impl SoundTrigger for CountingSound {
        fn play(&mut self) {
            self.plays += 1;
        }
    }

    fn setup_world() -> (World, Config, GameRng, Events, CountingSound) {
        (
            World::new(),
            Config::new(),
            GameRng::new(12345),
            Events::new(),
            CountingSound::default(),
        )
    }

    fn player(world: &World) -> (Paddle, PlayerControl) {
        world
            .query::<(&Paddle, &PlayerControl)>()
            .iter()
            .next()
            .map(|(_e, (p, c))| (*p, *c))
            .unwrap()
    }

    fn ball(world: &World) -> Ball {
        current_ball(world).unwrap()
    }

    #[test]
    fn test_ball_stays_near_vertical_bounds() {
        let (mut world, config, _rng, mut events, _sound) = setup_world();
        create_ball(&mut world, &config, IVec2::new(300, 5), IVec2::new(-1, -5));

        for _ in 0..2000 {
            let before = ball(&world);
            move_ball(&mut world, &config, &mut events);
            let after = ball(&world);
            let max_step = before.change.y.abs();
            assert!(after.rect.top() >= -max_step, "Ball escaped the top");
            assert!(
                after.rect.bottom() <= config.screen_height + max_step,
                "Ball escaped the bottom"
            );
            if before.rect.top() < 0 {
                assert!(after.rect.top() >= 0, "Out-of-bounds ball is clamped back");
            }
        }
    }

    #[test]
    fn test_move_ball_flags_wall_hit() {
        let (mut world, config, _rng, mut events, _sound) = setup_world();
        create_ball(&mut world, &config, IVec2::new(300, -2), IVec2::new(5, -3));

        move_ball(&mut world, &config, &mut events);

        assert!(events.ball_hit_wall);
        assert_eq!(ball(&world).change.y, 3);
    }

    #[test]
    fn test_player_moves_by_change() {
        let (mut world, config, mut rng, mut events, mut sound) = setup_world();
        create_ball(&mut world, &config, IVec2::new(320, 240), IVec2::ZERO);
        create_player(&mut world, &config);
        for (_e, control) in world.query_mut::<&mut PlayerControl>() {
            control.go_down();
        }

        update_player(&mut world, &config, &mut rng, &mut events, &mut sound);

        let (paddle, _) = player(&world);
        assert_eq!(paddle.rect.top(), 245);
    }

    #[test]
    fn test_player_stops_at_top_without_repositioning() {
        let (mut world, config, mut rng, mut events, mut sound) = setup_world();
        create_ball(&mut world, &config, IVec2::new(320, 240), IVec2::ZERO);
        create_player(&mut world, &config);
        for (_e, (paddle, control)) in world.query_mut::<(&mut Paddle, &mut PlayerControl)>() {
            paddle.rect.set_top(-3);
            control.go_up();
        }

        update_player(&mut world, &config, &mut rng, &mut events, &mut sound);

        let (paddle, control) = player(&world);
        assert_eq!(control.change, 0, "Upward drift halted");
        assert_eq!(paddle.rect.top(), -3, "Paddle is not pulled back");
    }

    #[test]
    fn test_player_stops_at_bottom() {
        let (mut world, config, mut rng, mut events, mut sound) = setup_world();
        create_ball(&mut world, &config, IVec2::new(320, 240), IVec2::ZERO);
        create_player(&mut world, &config);
        for (_e, (paddle, control)) in world.query_mut::<(&mut Paddle, &mut PlayerControl)>() {
            paddle.rect.set_bottom(config.screen_height);
            control.go_down();
        }

        update_player(&mut world, &config, &mut rng, &mut events, &mut sound);

        let (paddle, control) = player(&world);
        assert_eq!(control.change, 0);
        assert_eq!(paddle.rect.bottom(), config.screen_height);
    }

    #[test]
    fn test_player_can_leave_edge_in_other_direction() {
        let (mut world, config, mut rng, mut events, mut sound) = setup_world();
        create_ball(&mut world, &config, IVec2::new(320, 240), IVec2::ZERO);
        create_player(&mut world, &config);
        for (_e, (paddle, control)) in world.query_mut::<(&mut Paddle, &mut PlayerControl)>() {
            paddle.rect.set_top(0);
            control.go_down();
        }

        update_player(&mut world, &config, &mut rng, &mut events, &mut sound);

        let (paddle, control) = player(&world);
        assert_eq!(control.change, 5);
        assert_eq!(paddle.rect.top(), 5);
    }

    #[test]
    fn test_player_hit_pushes_ball_out_and_beeps() {
        let (mut world, config, mut rng, mut events, mut sound) = setup_world();
        create_player(&mut world, &config);
        let (paddle, _) = player(&world);
        let ball_pos = IVec2::new(paddle.rect.right() - 4, paddle.rect.top() + 10);
        create_ball(&mut world, &config, ball_pos, IVec2::new(-5, 1));

        update_player(&mut world, &config, &mut rng, &mut events, &mut sound);

        let after = ball(&world);
        assert_eq!(after.rect.left(), paddle.rect.right());
        assert_eq!(after.change.x, 5);
        assert!(events.ball_hit_paddle);
        assert_eq!(sound.plays, 1);
    }

    #[test]
    fn test_no_player_update_without_ball() {
        let (mut world, config, mut rng, mut events, mut sound) = setup_world();
        create_player(&mut world, &config);

        update_player(&mut world, &config, &mut rng, &mut events, &mut sound);

        assert!(!events.ball_hit_paddle);
        assert_eq!(sound.plays, 0);
    }
}
