use crate::{Arena, Ball, Events, GameRng, PlayerId, Score};
use hecs::World;

/// Check if ball left the arena (scoring)
///
/// The left exit tests the ball's left edge against 0 while the right exit
/// tests the same edge against the arena width, so a ball must travel a full
/// ball width further to score on the right.
pub fn check_scoring(
    world: &mut World,
    arena: &Arena,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.rect.x() < 0 {
            PlayerId::Two
        } else if ball.rect.x() > arena.width {
            PlayerId::One
        } else {
            continue;
        };

        score.increment(scorer);
        events.scored(scorer);
        log::debug!(
            "Player {} scores ({} - {})",
            scorer.number(),
            score.player1,
            score.player2
        );

        *ball = Ball::serve(arena, ball.speed, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Config, Rect};

    fn setup_world() -> (World, Arena, Score, Events, GameRng) {
        let world = World::new();
        let arena = Config::new().arena();
        let score = Score::new();
        let events = Events::new();
        let rng = GameRng::new(12345); // Fixed seed for deterministic tests
        (world, arena, score, events, rng)
    }

    #[test]
    fn test_player2_scores_when_ball_exits_left() {
        let (mut world, arena, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Rect::from_xywh(-1, 300, 20, 20), -1, 1, 5);

        check_scoring(&mut world, &arena, &mut score, &mut events, &mut rng);

        assert_eq!(score.player2, 1, "Player 2 should score");
        assert_eq!(score.player1, 0, "Player 1 should not score");
        assert!(events.player2_scored, "Should trigger player2_scored event");
    }

    #[test]
    fn test_player1_scores_when_ball_exits_right() {
        let (mut world, arena, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Rect::from_xywh(801, 300, 20, 20), 1, 1, 5);

        check_scoring(&mut world, &arena, &mut score, &mut events, &mut rng);

        assert_eq!(score.player1, 1, "Player 1 should score");
        assert_eq!(score.player2, 0);
        assert!(events.player1_scored);
    }

    #[test]
    fn test_right_exit_ignores_ball_width() {
        let (mut world, arena, mut score, mut events, mut rng) = setup_world();
        // Ball fully past the right wall but its left edge sits on the boundary
        create_ball(&mut world, Rect::from_xywh(800, 300, 20, 20), 1, 1, 5);

        check_scoring(&mut world, &arena, &mut score, &mut events, &mut rng);

        assert_eq!(score, Score::new(), "x == width is still in play");
    }

    #[test]
    fn test_new_ball_served_after_scoring() {
        let (mut world, arena, mut score, mut events, mut rng) = setup_world();
        let entity = create_ball(&mut world, Rect::from_xywh(-1, 300, 20, 20), -1, 1, 5);

        check_scoring(&mut world, &arena, &mut score, &mut events, &mut rng);

        let ball = world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.rect.x(), 390, "Ball should reset to horizontal center");
        assert_eq!(ball.speed, 5, "Serve keeps the ball speed");
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, arena, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Rect::from_xywh(0, 300, 20, 20), -1, 1, 5);

        check_scoring(&mut world, &arena, &mut score, &mut events, &mut rng);

        assert_eq!(score.player1, 0, "No score when ball in bounds");
        assert_eq!(score.player2, 0, "No score when ball in bounds");
        assert!(!events.player1_scored && !events.player2_scored, "No scoring events");
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, arena, mut score, mut events, mut rng) = setup_world();
        let entity = create_ball(&mut world, Rect::from_xywh(900, 300, 20, 20), 1, 0, 5);
        check_scoring(&mut world, &arena, &mut score, &mut events, &mut rng);
        events.clear();

        world.get::<&mut Ball>(entity).unwrap().rect.pos.x = 900;
        check_scoring(&mut world, &arena, &mut score, &mut events, &mut rng);

        assert_eq!(score.player1, 2, "Scores should accumulate");
        assert_eq!(score.player2, 0);
    }
}
