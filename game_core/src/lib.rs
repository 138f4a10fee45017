//! Deterministic fixed-step Pong simulation
//!
//! The [`Engine`] owns both paddles, the ball and the score. A driver calls
//! [`Engine::tick`] at a fixed cadence and draws the returned [`Snapshot`];
//! an input layer feeds [`Engine::apply_input`] between ticks.

pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod map;
pub mod params;
pub mod resources;
pub mod snapshot;
pub mod systems;

pub use components::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use geometry::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use snapshot::*;

use hecs::World;
use systems::*;

/// Run one simulation step and report the winner, if the step produced one
pub fn step(
    world: &mut World,
    arena: &Arena,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<PlayerId> {
    // 1. Move paddles and ball
    move_paddles(world);
    move_ball(world);

    // 2. Walls, paddles, paddle bounds
    check_collisions(world, arena, events);

    // 3. Check scoring (ball exited arena)
    check_scoring(world, arena, score, events, rng);

    // 4. Win check
    score.has_winner(arena.win_score)
}

/// Helper to create a paddle entity at its starting position
pub fn create_paddle(world: &mut World, player: PlayerId, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::new(player, &config.arena(), config.paddle_speed),))
}

/// Helper to create the ball entity
pub fn create_ball(
    world: &mut World,
    rect: Rect,
    x_direction: i32,
    y_direction: i32,
    speed: i32,
) -> hecs::Entity {
    world.spawn((Ball::new(rect, x_direction, y_direction, speed),))
}
