pub mod collision;
pub mod enemy;
pub mod movement;
pub mod scoring;

pub use collision::*;
pub use enemy::*;
pub use movement::*;
pub use scoring::*;

use hecs::World;

use crate::components::Ball;

/// Copy of the ball, so paddle queries can run without holding a borrow on it
pub(crate) fn current_ball(world: &World) -> Option<Ball> {
    world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball)
}

/// Write a modified ball copy back into the world
pub(crate) fn store_ball(world: &mut World, ball: Ball) {
    for (_entity, stored) in world.query_mut::<&mut Ball>() {
        *stored = ball;
    }
}
