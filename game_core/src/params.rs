/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (pixels)
    pub const ARENA_WIDTH: i32 = 800;
    pub const ARENA_HEIGHT: i32 = 600;
    /// Largest accepted arena side; keeps every per-tick step well inside i32
    pub const MAX_ARENA_SIZE: i32 = 1 << 16;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 20;
    pub const PADDLE_HEIGHT: i32 = 100;
    pub const PADDLE_INSET: i32 = 10; // Gap between paddle and side wall
    pub const PADDLE_SPEED: i32 = 5;

    // Ball
    pub const BALL_SIZE: i32 = 20;
    pub const BALL_SPEED: i32 = 5;

    /// Divisor applied to the hit offset when deflecting off a paddle
    pub const DEFLECTION_DIVISOR: i32 = 10;

    // Score
    pub const WIN_SCORE: u32 = 5; // First to 5 wins

    // Timing
    pub const TICK_MS: u64 = 16; // ~60 Hz
}
