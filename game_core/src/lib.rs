pub mod components;
pub mod config;
pub mod fsm;
pub mod game;
pub mod input;
pub mod params;
pub mod rect;
pub mod resources;
pub mod surface;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use game::*;
pub use input::*;
pub use params::*;
pub use rect::*;
pub use resources::*;
pub use surface::*;

use glam::IVec2;
use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    sound: &mut dyn SoundTrigger,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Move ball (bounces off top/bottom first)
    move_ball(world, config, events);

    // 2. Player paddle: edge stop, deflection, movement
    update_player(world, config, rng, events, sound);

    // 3. Enemy paddle: track the ball, deflection
    update_enemy(world, config, events, sound);

    // 4. Check scoring (ball left the screen sideways)
    check_scoring(world, config, score, events, rng);
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, config: &Config, pos: IVec2, change: IVec2) -> hecs::Entity {
    let mut ball = Ball::new(pos, config.ball_size);
    ball.change = change;
    world.spawn((ball,))
}

/// Helper to create the keyboard-controlled paddle
pub fn create_player(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((
        Paddle::new(config.player_start(), config.paddle_size),
        PlayerControl::new(config.player_speed),
    ))
}

/// Helper to create the ball-tracking paddle
pub fn create_enemy(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((
        Paddle::new(config.enemy_start(), config.paddle_size),
        EnemyTracker,
    ))
}
