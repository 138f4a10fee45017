use crate::PlayerId;

/// Match score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player1: u32,
    pub player2: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, player: PlayerId) {
        match player {
            PlayerId::One => self.player1 += 1,
            PlayerId::Two => self.player2 += 1,
        }
    }

    pub fn get(&self, player: PlayerId) -> u32 {
        match player {
            PlayerId::One => self.player1,
            PlayerId::Two => self.player2,
        }
    }

    pub fn has_winner(&self, win_score: u32) -> Option<PlayerId> {
        if self.player1 >= win_score {
            Some(PlayerId::One)
        } else if self.player2 >= win_score {
            Some(PlayerId::Two)
        } else {
            None
        }
    }
}

/// Match lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchPhase {
    /// Ball in play, ticks run physics
    #[default]
    Playing,
    /// Someone reached the win score; ticks are no-ops until restart
    GameOver,
}

/// Seedable random source for ball serves
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during the last tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub player1_scored: bool,
    pub player2_scored: bool,
    pub paddle_hit: Option<PlayerId>,
    pub wall_hit: bool,
    pub game_over: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn scored(&mut self, player: PlayerId) {
        match player {
            PlayerId::One => self.player1_scored = true,
            PlayerId::Two => self.player2_scored = true,
        }
    }
}

/// Pending paddle inputs, drained by the engine owner before a tick
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<(PlayerId, i8)>, // (player, direction: -1 = up, 0 = stop, 1 = down)
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    pub fn push_input(&mut self, player: PlayerId, dir: i8) {
        self.inputs.push((player, dir));
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}
