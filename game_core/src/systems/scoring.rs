use crate::{Ball, Config, Direction, Events, Score, ServeState, Side};
use hecs::World;

/// Check if the ball fully left the arena. The side whose back wall it
/// crossed concedes the point; the next serve travels back toward the
/// conceder. Returns the scoring side, if any.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    serve: &mut ServeState,
    events: &mut Events,
) -> Option<Side> {
    let mut scored = None;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x + config.ball_radius < 0.0 {
            // Past the player's back wall: opponent scores
            score.increment(Side::Opponent);
            events.opponent_scored = true;
            serve.direction = Direction::Left;
            scored = Some(Side::Opponent);
        } else if ball.pos.x - config.ball_radius > config.arena_width {
            // Past the opponent's back wall: player scores
            score.increment(Side::Player);
            events.player_scored = true;
            serve.direction = Direction::Right;
            scored = Some(Side::Player);
        }

        if scored.is_some() {
            ball.park(config);
        }
    }

    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;

    fn setup() -> (World, Config, Score, ServeState, Events) {
        (
            World::new(),
            Config::new(),
            Score::new(),
            ServeState::new(),
            Events::new(),
        )
    }

    #[test]
    fn test_opponent_scores_when_ball_exits_left() {
        let (mut world, config, mut score, mut serve, mut events) = setup();
        create_ball(
            &mut world,
            glam::Vec2::new(-config.ball_radius - 1.0, 250.0),
            glam::Vec2::new(-240.0, 0.0),
            200.0,
        );

        let scored = check_scoring(&mut world, &config, &mut score, &mut serve, &mut events);

        assert_eq!(scored, Some(Side::Opponent));
        assert_eq!(score.opponent, 1);
        assert_eq!(score.player, 0);
        assert!(events.opponent_scored);
        assert_eq!(
            serve.direction,
            Direction::Left,
            "Next serve travels back toward the conceder"
        );
    }

    #[test]
    fn test_player_scores_when_ball_exits_right() {
        let (mut world, config, mut score, mut serve, mut events) = setup();
        create_ball(
            &mut world,
            glam::Vec2::new(config.arena_width + config.ball_radius + 1.0, 250.0),
            glam::Vec2::new(240.0, 0.0),
            200.0,
        );

        let scored = check_scoring(&mut world, &config, &mut score, &mut serve, &mut events);

        assert_eq!(scored, Some(Side::Player));
        assert_eq!(score.player, 1);
        assert_eq!(serve.direction, Direction::Right);
    }

    #[test]
    fn test_touching_edge_is_not_out() {
        let (mut world, config, mut score, mut serve, mut events) = setup();
        // Leading edge exactly at the wall: still in play
        create_ball(
            &mut world,
            glam::Vec2::new(config.ball_radius, 250.0),
            glam::Vec2::new(-240.0, 0.0),
            200.0,
        );

        let scored = check_scoring(&mut world, &config, &mut score, &mut serve, &mut events);

        assert_eq!(scored, None);
        assert_eq!(score.total(), 0);
    }

    #[test]
    fn test_ball_parked_after_score() {
        let (mut world, config, mut score, mut serve, mut events) = setup();
        let entity = create_ball(
            &mut world,
            glam::Vec2::new(-50.0, 250.0),
            glam::Vec2::new(-240.0, 30.0),
            200.0,
        );

        check_scoring(&mut world, &config, &mut score, &mut serve, &mut events);

        let ball = *world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.pos, config.ball_spawn());
        assert!(ball.is_parked());
    }
}
