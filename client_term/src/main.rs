//! Terminal Pong
//!
//! Drives a [`game_core::Engine`] at a fixed tick, feeds it keyboard input and
//! draws each snapshot with ratatui.

mod input;
mod render;

use std::error::Error;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::event::{
    self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::supports_keyboard_enhancement;
use game_core::{Config, Engine, Events, GameRng, InputQueue};
use ratatui::DefaultTerminal;

use input::{Command, HeldKeys};

/// How long a press-only terminal may go without a key repeat before the paddle stops
const HOLD_WINDOW: Duration = Duration::from_millis(120);

#[derive(Debug, PartialEq)]
struct Args {
    config: Option<PathBuf>,
    seed: Option<u64>,
    log: PathBuf,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            config: None,
            seed: None,
            log: PathBuf::from("pong.log"),
        }
    }
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args, String> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let mut value = || {
            args.next()
                .ok_or_else(|| format!("missing value for {}", arg))
        };
        match arg.as_str() {
            "--config" => parsed.config = Some(PathBuf::from(value()?)),
            "--seed" => {
                let raw = value()?;
                let seed = raw
                    .parse()
                    .map_err(|_| format!("invalid seed `{}`", raw))?;
                parsed.seed = Some(seed);
            }
            "--log" => parsed.log = PathBuf::from(value()?),
            other => return Err(format!("unknown argument `{}`", other)),
        }
    }
    Ok(parsed)
}

/// Log to a file; the terminal belongs to the renderer
fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn log_events(events: &Events) {
    if events.player1_scored {
        log::debug!("Point to player 1");
    }
    if events.player2_scored {
        log::debug!("Point to player 2");
    }
    if let Some(player) = events.paddle_hit {
        log::trace!("Return by player {}", player.number());
    }
}

fn run_loop(
    terminal: &mut DefaultTerminal,
    engine: &mut Engine,
    release_events: bool,
) -> io::Result<()> {
    let tick = Duration::from_millis(engine.config().tick_ms);
    let mut queue = InputQueue::new();
    let mut held = HeldKeys::new(HOLD_WINDOW);
    let mut snapshot = engine.snapshot();
    let mut next_tick = Instant::now() + tick;

    loop {
        terminal.draw(|frame| render::draw(frame, &snapshot))?;

        // Collect input until the next tick is due
        loop {
            let now = Instant::now();
            if now >= next_tick || !event::poll(next_tick - now)? {
                break;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            match input::handle_key_event(key) {
                Some(Command::Paddle(player, dir)) => {
                    if dir != 0 {
                        held.pressed(player, Instant::now());
                    } else {
                        held.released(player);
                    }
                    queue.push_input(player, dir);
                }
                Some(Command::Restart) if !engine.is_running() => {
                    engine.restart();
                    snapshot = engine.snapshot();
                }
                Some(Command::Quit) => return Ok(()),
                _ => {}
            }
        }

        if !release_events {
            for player in held.expired(Instant::now()) {
                queue.push_input(player, 0);
            }
        }

        engine.drain_inputs(&mut queue);
        snapshot = engine.tick();
        log_events(engine.events());

        // Late frames are dropped, not replayed
        next_tick += tick;
        let now = Instant::now();
        if next_tick < now {
            next_tick = now + tick;
        }
    }
}

/// Undo the keyboard enhancement push; returns whether the terminal took it
fn pop_keyboard_flags<W: io::Write>(out: &mut W) -> bool {
    match execute!(out, PopKeyboardEnhancementFlags) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Failed to restore keyboard flags: {}", e);
            false
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().skip(1))?;
    init_logging(&args.log)?;

    // Bad config is fatal before the terminal is touched
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::new(),
    };
    let seed = args.seed.unwrap_or_else(clock_seed);
    log::info!("Starting match with seed: {}", seed);
    let mut engine = Engine::new(config, GameRng::new(seed))?;

    let mut terminal = ratatui::try_init()?;
    let release_events = supports_keyboard_enhancement().unwrap_or(false);
    if release_events {
        execute!(
            io::stdout(),
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    } else {
        log::warn!("Terminal does not report key releases; paddles stop when keys go quiet");
    }

    let result = run_loop(&mut terminal, &mut engine, release_events);

    if release_events {
        pop_keyboard_flags(&mut io::stdout());
    }
    ratatui::restore();

    let score = engine.score();
    log::info!("Exiting at {} - {}", score.player1, score.player2);
    result?;
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("pong: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args, String> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_defaults_without_arguments() {
        assert_eq!(args(&[]).unwrap(), Args::default());
    }

    #[test]
    fn test_parses_all_flags() {
        let parsed = args(&["--config", "pong.toml", "--seed", "42", "--log", "out.log"]).unwrap();
        assert_eq!(parsed.config, Some(PathBuf::from("pong.toml")));
        assert_eq!(parsed.seed, Some(42));
        assert_eq!(parsed.log, PathBuf::from("out.log"));
    }

    #[test]
    fn test_rejects_bad_seed() {
        let err = args(&["--seed", "soon"]).unwrap_err();
        assert!(err.contains("soon"));
    }

    struct ClosedTerminal;

    impl io::Write for ClosedTerminal {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_pop_keyboard_flags_writes_escape() {
        let mut out = Vec::new();
        assert!(pop_keyboard_flags(&mut out));
        assert!(!out.is_empty());
    }

    #[test]
    fn test_pop_keyboard_flags_reports_failure() {
        assert!(!pop_keyboard_flags(&mut ClosedTerminal));
    }

    #[test]
    fn test_rejects_missing_value_and_unknown_flag() {
        assert!(args(&["--config"]).is_err());
        assert!(args(&["--fast"]).is_err());
    }
}
