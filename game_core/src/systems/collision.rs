use crate::{Arena, Ball, Events, Paddle, Params, PlayerId, Rect};
use hecs::World;

/// Resolve ball/wall and ball/paddle contacts, then keep paddles inside the arena.
///
/// Order matters: each check reads the ball position left by the previous one.
pub fn check_collisions(world: &mut World, arena: &Arena, events: &mut Events) {
    // Collect paddle data without holding a borrow on the world
    let mut paddles: Vec<(PlayerId, Rect)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.player, p.rect))
        .collect();
    paddles.sort_by_key(|(player, _)| player.number());

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if bounce_off_walls(ball, arena) {
            events.wall_hit = true;
        }
        for (player, paddle) in &paddles {
            if deflect_off_paddle(ball, *player, paddle) {
                log::trace!("Ball hit paddle {}", player.number());
                events.paddle_hit = Some(*player);
            }
        }
    }

    clamp_paddles(world, arena);
}

/// Reflect vertically when the ball touches the top or bottom wall.
///
/// The ball is not pushed back inside, so it may overshoot for a tick.
pub fn bounce_off_walls(ball: &mut Ball, arena: &Arena) -> bool {
    if ball.rect.y() <= 0 || ball.rect.bottom() >= arena.height {
        ball.y_direction = -ball.y_direction;
        return true;
    }
    false
}

/// Send the ball back toward the opponent if it touches this paddle.
///
/// The ball is snapped flush against the paddle face and its vertical
/// direction becomes the hit offset from the paddle center divided by
/// [`Params::DEFLECTION_DIVISOR`], truncated toward zero.
pub fn deflect_off_paddle(ball: &mut Ball, player: PlayerId, paddle: &Rect) -> bool {
    if !ball.rect.intersects(paddle) {
        return false;
    }

    match player {
        PlayerId::One => {
            ball.x_direction = ball.x_direction.abs();
            ball.rect.pos.x = paddle.right();
        }
        PlayerId::Two => {
            ball.x_direction = -ball.x_direction.abs();
            ball.rect.pos.x = paddle.x() - ball.rect.width();
        }
    }

    let offset = ball.rect.center().y - paddle.center().y;
    ball.y_direction = offset / Params::DEFLECTION_DIVISOR;
    true
}

/// Clamp every paddle into `[0, height - paddle_height]`
pub fn clamp_paddles(world: &mut World, arena: &Arena) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.rect.pos.y = arena.clamp_paddle_y(paddle.rect.pos.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Config, Events};
    use hecs::Entity;

    fn setup_world() -> (World, Config, Arena, Events) {
        let world = World::new();
        let config = Config::new();
        let arena = config.arena();
        let events = Events::new();
        (world, config, arena, events)
    }

    fn ball_at(x: i32, y: i32, x_direction: i32, y_direction: i32) -> Ball {
        Ball::new(Rect::from_xywh(x, y, 20, 20), x_direction, y_direction, 5)
    }

    fn place_paddle(world: &mut World, config: &Config, player: PlayerId, y: i32) -> Entity {
        let entity = create_paddle(world, player, config);
        world.get::<&mut Paddle>(entity).unwrap().rect.pos.y = y;
        entity
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, _config, arena, mut events) = setup_world();
        // Ball at y=0 moving up; one tick of movement takes it to y=-5
        let entity = create_ball(&mut world, Rect::from_xywh(300, 0, 20, 20), 1, -1, 5);
        crate::systems::move_ball(&mut world);

        check_collisions(&mut world, &arena, &mut events);

        let ball = world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.y_direction, 1, "Ball should bounce down after hitting top wall");
        assert_eq!(ball.x_direction, 1, "X direction should be unchanged");
        assert_eq!(ball.rect.y(), -5, "Ball is not pushed back inside");
        assert!(events.wall_hit, "Should trigger wall_hit event");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, _config, arena, mut events) = setup_world();
        let entity = create_ball(&mut world, Rect::from_xywh(300, 580, 20, 20), -1, 1, 5);
        crate::systems::move_ball(&mut world);

        check_collisions(&mut world, &arena, &mut events);

        let ball = world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.y_direction, -1, "Ball should bounce up after hitting bottom wall");
        assert!(events.wall_hit);
    }

    #[test]
    fn test_no_bounce_in_open_field() {
        let arena = Config::new().arena();
        let mut ball = ball_at(300, 300, 1, 1);
        assert!(!bounce_off_walls(&mut ball, &arena));
        assert_eq!(ball.y_direction, 1);
    }

    #[test]
    fn test_center_hit_on_left_paddle_goes_straight() {
        let paddle = Rect::from_xywh(10, 250, 20, 100);
        let mut ball = ball_at(25, 295, -1, 1);

        assert!(deflect_off_paddle(&mut ball, PlayerId::One, &paddle));

        // (305 - 300) / 10 truncates to 0
        assert_eq!(ball.y_direction, 0);
        assert_eq!(ball.x_direction, 1, "Ball should head right after left paddle");
    }

    #[test]
    fn test_deflection_truncates_toward_zero() {
        let paddle = Rect::from_xywh(10, 250, 20, 100);

        // Offset -5: floor division would give -1
        let mut ball = ball_at(25, 285, -1, 1);
        deflect_off_paddle(&mut ball, PlayerId::One, &paddle);
        assert_eq!(ball.y_direction, 0);

        // Offset -14
        let mut ball = ball_at(25, 276, -1, 1);
        deflect_off_paddle(&mut ball, PlayerId::One, &paddle);
        assert_eq!(ball.y_direction, -1);

        // Offset +49
        let mut ball = ball_at(25, 339, -1, -1);
        deflect_off_paddle(&mut ball, PlayerId::One, &paddle);
        assert_eq!(ball.y_direction, 4);
    }

    #[test]
    fn test_left_paddle_hit_does_not_stick() {
        let paddle = Rect::from_xywh(10, 250, 20, 100);
        for depth in [0, 3, 12, 19] {
            let mut ball = ball_at(30 - depth, 300, -1, 1);
            deflect_off_paddle(&mut ball, PlayerId::One, &paddle);
            assert_eq!(
                ball.rect.x(),
                paddle.x() + paddle.width(),
                "Ball left edge should sit on paddle face (depth {})",
                depth
            );
        }
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let (mut world, config, arena, mut events) = setup_world();
        place_paddle(&mut world, &config, PlayerId::Two, 250);
        let entity = create_ball(&mut world, Rect::from_xywh(760, 320, 20, 20), 1, 0, 5);

        check_collisions(&mut world, &arena, &mut events);

        let ball = world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.x_direction, -1, "Ball should head left after right paddle");
        assert_eq!(ball.rect.right(), 770, "Ball right edge on paddle face");
        assert_eq!(ball.y_direction, 3, "(330 - 300) / 10");
        assert_eq!(events.paddle_hit, Some(PlayerId::Two));
    }

    #[test]
    fn test_paddle_hit_forces_direction_even_when_moving_away() {
        let paddle = Rect::from_xywh(10, 250, 20, 100);
        let mut ball = ball_at(29, 300, 1, 1);
        deflect_off_paddle(&mut ball, PlayerId::One, &paddle);
        assert_eq!(ball.x_direction, 1);
    }

    #[test]
    fn test_miss_leaves_ball_alone() {
        let paddle = Rect::from_xywh(10, 250, 20, 100);
        let mut ball = ball_at(25, 100, -1, 1);
        assert!(!deflect_off_paddle(&mut ball, PlayerId::One, &paddle));
        assert_eq!((ball.rect.x(), ball.x_direction, ball.y_direction), (25, -1, 1));
    }

    #[test]
    fn test_paddles_clamped_to_arena() {
        let (mut world, config, arena, mut events) = setup_world();
        let top = place_paddle(&mut world, &config, PlayerId::One, -40);
        let bottom = place_paddle(&mut world, &config, PlayerId::Two, 530);

        check_collisions(&mut world, &arena, &mut events);

        assert_eq!(world.get::<&Paddle>(top).unwrap().rect.y(), 0);
        assert_eq!(world.get::<&Paddle>(bottom).unwrap().rect.y(), 500);
    }
}
