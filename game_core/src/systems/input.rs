use hecs::World;

use crate::{InputQueue, Paddle, PlayerId};

/// Set a paddle's direction from a -1/0/+1 input.
///
/// The stored direction is the input scaled by the paddle's speed, so a held
/// key moves the paddle `speed * speed` pixels per tick.
pub fn apply_paddle_input(world: &mut World, player: PlayerId, dir: i8) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.player == player {
            paddle.set_direction(i32::from(dir.signum()) * paddle.speed);
        }
    }
}

/// Apply queued inputs in arrival order and empty the queue
pub fn ingest_inputs(world: &mut World, queue: &mut InputQueue) {
    for (player, dir) in queue.inputs.drain(..) {
        apply_paddle_input(world, player, dir);
    }
}
