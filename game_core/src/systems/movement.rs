use crate::{Ball, Paddle};
use hecs::World;

/// Apply paddle movement based on current directions
pub fn move_paddles(world: &mut World) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.advance();
    }
}

/// Move ball by its directions times speed
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.advance();
    }
}
