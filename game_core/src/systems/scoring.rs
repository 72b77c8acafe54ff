use hecs::World;

use super::{current_ball, store_ball};
use crate::{Config, Events, GameRng, Paddle, PlayerControl, Score, Side};

/// Check if the ball left the screen sideways (scoring).
///
/// The ball is served again from the center and the player's paddle is
/// re-centered. The enemy paddle keeps its position.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let mut ball = match current_ball(world) {
        Some(ball) => ball,
        None => return,
    };

    let scorer = if ball.rect.left() < 0 {
        Side::Enemy
    } else if ball.rect.left() > config.screen_width {
        Side::Player
    } else {
        return;
    };

    score.increment(scorer);
    events.scored = Some(scorer);
    log::info!(
        "{scorer:?} scored, player {} - enemy {}",
        score.player,
        score.enemy
    );

    ball.reset(
        config.screen_center(),
        config.ball_speed_x,
        config.serve_spread_y,
        rng,
    );
    store_ball(world, ball);

    for (_entity, (paddle, _control)) in world.query_mut::<(&mut Paddle, &PlayerControl)>() {
        paddle.rect.set_center_y(config.screen_height / 2);
    }
}
