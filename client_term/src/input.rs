//! Keyboard input handling

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::PlayerId;

/// What a key event asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Paddle direction: -1 = up, 0 = stop, 1 = down
    Paddle(PlayerId, i8),
    /// Start a new match (only honoured once the current one is over)
    Restart,
    Quit,
}

/// Translate a terminal key event. Press and auto-repeat both count as key down.
pub fn handle_key_event(event: KeyEvent) -> Option<Command> {
    if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }
    match event.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => handle_key_down(event.code),
        KeyEventKind::Release => handle_key_up(event.code),
    }
}

/// Handle key down event
pub fn handle_key_down(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::Paddle(PlayerId::One, -1)),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::Paddle(PlayerId::One, 1)),
        KeyCode::Up => Some(Command::Paddle(PlayerId::Two, -1)),
        KeyCode::Down => Some(Command::Paddle(PlayerId::Two, 1)),
        KeyCode::Char(' ') => Some(Command::Restart),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        _ => None,
    }
}

/// Handle key up event. Releasing either of a player's keys stops that paddle.
pub fn handle_key_up(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Command::Paddle(PlayerId::One, 0))
        }
        KeyCode::Up | KeyCode::Down => Some(Command::Paddle(PlayerId::Two, 0)),
        _ => None,
    }
}

/// Synthesizes key-up for terminals that only report presses.
///
/// A held key shows up as a stream of repeats; once a player's key has been
/// quiet for longer than the hold window, their paddle is treated as released.
#[derive(Debug)]
pub struct HeldKeys {
    window: Duration,
    last_press: [Option<Instant>; 2],
}

impl HeldKeys {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_press: [None, None],
        }
    }

    fn slot(player: PlayerId) -> usize {
        match player {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn pressed(&mut self, player: PlayerId, now: Instant) {
        self.last_press[Self::slot(player)] = Some(now);
    }

    pub fn released(&mut self, player: PlayerId) {
        self.last_press[Self::slot(player)] = None;
    }

    /// Players whose key went quiet; each is reported once
    pub fn expired(&mut self, now: Instant) -> Vec<PlayerId> {
        let mut released = Vec::new();
        for player in PlayerId::ALL {
            if let Some(at) = self.last_press[Self::slot(player)] {
                if now.duration_since(at) > self.window {
                    self.released(player);
                    released.push(player);
                }
            }
        }
        released
    }
}
