use crate::{Arena, PlayerId, Rect};

/// Read-only view of the match handed to the renderer after each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    /// Physics steps run since the engine was created
    pub tick: u64,
    pub arena: Arena,
    pub paddle1: Rect,
    pub paddle2: Rect,
    pub ball: Rect,
    pub player1_score: u32,
    pub player2_score: u32,
    pub running: bool,
}

impl Snapshot {
    pub fn paddle(&self, player: PlayerId) -> Rect {
        match player {
            PlayerId::One => self.paddle1,
            PlayerId::Two => self.paddle2,
        }
    }

    pub fn score(&self, player: PlayerId) -> u32 {
        match player {
            PlayerId::One => self.player1_score,
            PlayerId::Two => self.player2_score,
        }
    }

    /// The player who reached the win score, once the match is over
    pub fn winner(&self) -> Option<PlayerId> {
        if self.running {
            return None;
        }
        if self.player1_score >= self.arena.win_score {
            Some(PlayerId::One)
        } else if self.player2_score >= self.arena.win_score {
            Some(PlayerId::Two)
        } else {
            None
        }
    }
}
