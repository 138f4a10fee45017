use glam::IVec2;
use rand::Rng;

use crate::{Arena, GameRng, Rect};

/// Which side a paddle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    /// Left paddle
    One,
    /// Right paddle
    Two,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// 1 or 2, as shown to players
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

/// Paddle component - a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub player: PlayerId,
    pub rect: Rect,
    /// Signed per-tick multiplier: -speed = up, 0 = stop, +speed = down
    pub y_direction: i32,
    pub speed: i32,
}

impl Paddle {
    pub fn new(player: PlayerId, arena: &Arena, speed: i32) -> Self {
        Self {
            player,
            rect: Rect::new(
                arena.paddle_spawn(player),
                IVec2::new(arena.paddle_width, arena.paddle_height),
            ),
            y_direction: 0,
            speed,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_direction(&mut self, y_direction: i32) {
        self.y_direction = y_direction;
    }

    /// Move by one tick. Bounds are the engine's job.
    pub fn advance(&mut self) {
        self.rect.pos.y += self.y_direction * self.speed;
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub rect: Rect,
    /// Signed horizontal multiplier, -1 = left, +1 = right
    pub x_direction: i32,
    /// Signed vertical multiplier. Paddle deflection can push it past +/-1 or to 0.
    pub y_direction: i32,
    pub speed: i32,
}

impl Ball {
    pub fn new(rect: Rect, x_direction: i32, y_direction: i32, speed: i32) -> Self {
        Self {
            rect,
            x_direction,
            y_direction,
            speed,
        }
    }

    /// Serve a new ball from the horizontal center at a random height and diagonal
    pub fn serve(arena: &Arena, speed: i32, rng: &mut GameRng) -> Self {
        let y = rng.0.gen_range(0..arena.height - arena.ball_size);
        let x_direction = if rng.0.gen_bool(0.5) { 1 } else { -1 };
        let y_direction = if rng.0.gen_bool(0.5) { 1 } else { -1 };

        Self::new(
            Rect::from_xywh(arena.ball_spawn_x(), y, arena.ball_size, arena.ball_size),
            x_direction,
            y_direction,
            speed,
        )
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Move by one tick. No bounds checks.
    pub fn advance(&mut self) {
        self.rect.pos.x += self.x_direction * self.speed;
        self.rect.pos.y += self.y_direction * self.speed;
    }
}
