use glam::IVec2;

use crate::PlayerId;

/// Fixed play field and entity dimensions, shared read-only by all systems
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arena {
    pub width: i32,
    pub height: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_inset: i32,
    pub ball_size: i32,
    pub win_score: u32,
}

impl Arena {
    /// Left edge of a player's paddle
    pub fn paddle_x(&self, player: PlayerId) -> i32 {
        match player {
            PlayerId::One => self.paddle_inset,
            PlayerId::Two => self.width - self.paddle_width - self.paddle_inset,
        }
    }

    /// Top edge of a vertically centered paddle
    pub fn paddle_center_y(&self) -> i32 {
        self.height / 2 - self.paddle_height / 2
    }

    /// Starting position of a player's paddle
    pub fn paddle_spawn(&self, player: PlayerId) -> IVec2 {
        IVec2::new(self.paddle_x(player), self.paddle_center_y())
    }

    /// Left edge of a freshly served ball
    pub fn ball_spawn_x(&self) -> i32 {
        self.width / 2 - self.ball_size / 2
    }

    /// Clamp a paddle's top edge so the paddle stays inside the arena
    pub fn clamp_paddle_y(&self, y: i32) -> i32 {
        y.clamp(0, self.height - self.paddle_height)
    }
}
