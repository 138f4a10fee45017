use hecs::{Entity, World};

use crate::systems::{apply_paddle_input, ingest_inputs};
use crate::{
    create_paddle, step, Arena, Ball, Config, ConfigError, Events, GameRng, InputQueue,
    MatchPhase, Paddle, PlayerId, Rect, Score, Snapshot,
};

/// Owner of all match state.
///
/// Nothing outside the engine mutates the world; renderers get [`Snapshot`]s
/// and input arrives through [`Engine::apply_input`]. Every mutation goes
/// through `&mut self`; producers on other threads should fill an
/// [`InputQueue`] and let the owning thread drain it.
///
/// The two paddles and the ball are spawned once in [`Engine::new`] and never
/// despawned; restart mutates them in place.
pub struct Engine {
    world: World,
    paddles: [Entity; 2],
    ball: Entity,
    config: Config,
    arena: Arena,
    score: Score,
    phase: MatchPhase,
    events: Events,
    rng: GameRng,
    tick: u64,
}

impl Engine {
    /// Build a match from a validated config and an injected random source
    pub fn new(config: Config, mut rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let arena = config.arena();

        let mut world = World::new();
        let paddles = PlayerId::ALL.map(|player| create_paddle(&mut world, player, &config));
        let ball = world.spawn((Ball::serve(&arena, config.ball_speed, &mut rng),));

        log::info!(
            "Match created: {}x{} arena, first to {}",
            arena.width,
            arena.height,
            arena.win_score
        );

        Ok(Self {
            world,
            paddles,
            ball,
            config,
            arena,
            score: Score::new(),
            phase: MatchPhase::Playing,
            events: Events::new(),
            rng,
            tick: 0,
        })
    }

    /// Advance one fixed step. A no-op apart from clearing events once the match is over.
    pub fn tick(&mut self) -> Snapshot {
        self.events.clear();
        if self.phase == MatchPhase::GameOver {
            return self.snapshot();
        }

        self.tick += 1;
        let winner = step(
            &mut self.world,
            &self.arena,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );

        if let Some(winner) = winner {
            self.phase = MatchPhase::GameOver;
            self.events.game_over = true;
            log::info!(
                "Game over: player {} wins {} - {}",
                winner.number(),
                self.score.player1,
                self.score.player2
            );
        }

        self.snapshot()
    }

    /// Set a paddle's direction: -1 = up, 0 = stop, 1 = down. Allowed in any phase.
    pub fn apply_input(&mut self, player: PlayerId, dir: i8) {
        apply_paddle_input(&mut self.world, player, dir);
    }

    /// Apply everything queued since the last drain
    pub fn drain_inputs(&mut self, queue: &mut InputQueue) {
        ingest_inputs(&mut self.world, queue);
    }

    /// Reset scores, recenter paddles and serve a fresh ball.
    ///
    /// Paddle directions are left as they are so a held key keeps working.
    pub fn restart(&mut self) {
        self.score = Score::new();
        self.phase = MatchPhase::Playing;
        self.events.clear();

        let center_y = self.arena.paddle_center_y();
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.rect.pos.y = center_y;
        }
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            *ball = Ball::serve(&self.arena, self.config.ball_speed, &mut self.rng);
        }

        log::info!("Match restarted");
    }

    /// Current state for rendering
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick,
            arena: self.arena,
            paddle1: self.paddle_rect(PlayerId::One),
            paddle2: self.paddle_rect(PlayerId::Two),
            ball: self.ball().rect,
            player1_score: self.score.player1,
            player2_score: self.score.player2,
            running: self.is_running(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == MatchPhase::Playing
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Events recorded by the last call to [`Engine::tick`]
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn ball(&self) -> Ball {
        *self
            .world
            .get::<&Ball>(self.ball)
            .expect("ball entity lives as long as the engine")
    }

    pub fn paddle(&self, player: PlayerId) -> Paddle {
        let entity = self.paddles[player.number() as usize - 1];
        *self
            .world
            .get::<&Paddle>(entity)
            .expect("paddle entities live as long as the engine")
    }

    fn paddle_rect(&self, player: PlayerId) -> Rect {
        self.paddle(player).rect
    }
}
