use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Arena, ConfigError, Params};

/// Game configuration
///
/// Every field has a default from [`Params`], so a TOML file only needs the
/// keys it wants to change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: i32,
    pub arena_height: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_inset: i32,
    pub paddle_speed: i32,
    pub ball_size: i32,
    pub ball_speed: i32,
    pub win_score: u32,
    pub tick_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            paddle_speed: Params::PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            win_score: Params::WIN_SCORE,
            tick_ms: Params::TICK_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a TOML config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config = Self::from_toml_str(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Immutable arena geometry derived from this config
    pub fn arena(&self) -> Arena {
        Arena {
            width: self.arena_width,
            height: self.arena_height,
            paddle_width: self.paddle_width,
            paddle_height: self.paddle_height,
            paddle_inset: self.paddle_inset,
            ball_size: self.ball_size,
            win_score: self.win_score,
        }
    }

    /// Reject geometry the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena_width", self.arena_width as i64),
            ("arena_height", self.arena_height as i64),
            ("paddle_width", self.paddle_width as i64),
            ("paddle_height", self.paddle_height as i64),
            ("paddle_speed", self.paddle_speed as i64),
            ("ball_size", self.ball_size as i64),
            ("ball_speed", self.ball_speed as i64),
            ("win_score", self.win_score as i64),
            ("tick_ms", self.tick_ms as i64),
        ];
        for (field, value) in positive {
            if value <= 0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if self.paddle_inset < 0 {
            return Err(ConfigError::Negative {
                field: "paddle_inset",
                value: self.paddle_inset as i64,
            });
        }

        for (field, value) in [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
        ] {
            if value > Params::MAX_ARENA_SIZE {
                return Err(ConfigError::TooLarge {
                    field,
                    value: value as i64,
                    max: Params::MAX_ARENA_SIZE as i64,
                });
            }
        }
        for (field, value) in [
            ("paddle_width", self.paddle_width),
            ("paddle_inset", self.paddle_inset),
            ("ball_speed", self.ball_speed),
        ] {
            if value >= self.arena_width {
                return Err(ConfigError::TooLarge {
                    field,
                    value: value as i64,
                    max: self.arena_width as i64 - 1,
                });
            }
        }
        // A held key moves a paddle speed * speed pixels per tick
        let paddle_step = self.paddle_speed as i64 * self.paddle_speed as i64;
        if paddle_step > self.arena_height as i64 {
            return Err(ConfigError::TooLarge {
                field: "paddle_speed",
                value: self.paddle_speed as i64,
                max: max_paddle_speed(self.arena_height),
            });
        }

        if self.paddle_height >= self.arena_height {
            return Err(ConfigError::ArenaTooSmall(format!(
                "paddle height {} does not fit in arena height {}",
                self.paddle_height, self.arena_height
            )));
        }
        if self.ball_size >= self.arena_height {
            return Err(ConfigError::ArenaTooSmall(format!(
                "ball size {} does not fit in arena height {}",
                self.ball_size, self.arena_height
            )));
        }

        // The serve position must sit strictly between the two paddles. Every
        // term is bounded by MAX_ARENA_SIZE by now, so none of this overflows.
        let arena = self.arena();
        let ball_left = arena.ball_spawn_x();
        let ball_right = ball_left + self.ball_size;
        let left_paddle_edge = arena.paddle_x(crate::PlayerId::One) + self.paddle_width;
        let right_paddle_edge = arena.paddle_x(crate::PlayerId::Two);
        if ball_left <= left_paddle_edge || ball_right >= right_paddle_edge {
            return Err(ConfigError::ArenaTooSmall(format!(
                "arena width {} leaves no room to serve between the paddles",
                self.arena_width
            )));
        }

        Ok(())
    }
}

/// Largest paddle speed whose per-tick step still fits in the arena height
fn max_paddle_speed(arena_height: i32) -> i64 {
    let height = arena_height as i64;
    let mut speed = 0;
    while (speed + 1) * (speed + 1) <= height {
        speed += 1;
    }
    speed
}
