use crate::{Ball, Config, Direction, Events, Paddle, Side};
use hecs::World;

/// Check ball collisions with walls and paddles.
///
/// Wall bounces are pure reflections: vy flips sign when the ball edge
/// crosses the top or bottom while still moving outward. The ball is not
/// repositioned, so minor clipping is possible.
///
/// Paddle hits are geometric, with no penetration resolution or sweep: a
/// ball whose leading edge has crossed the paddle's facing edge while its
/// center sits within the paddle's vertical span is sent back the other
/// way, with vy derived from the normalized hit offset. Both paddles are
/// checked independently each frame. A fast ball can tunnel through a
/// paddle when dt is large.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle extents first, then mutate the ball
    let paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let r = config.ball_radius;

        // Top/bottom walls
        if ball.pos.y - r <= 0.0 && ball.vel.y < 0.0 {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        } else if ball.pos.y + r >= config.arena_height && ball.vel.y > 0.0 {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }

        // Paddles
        for &(side, paddle_y) in &paddles {
            let within_span = ball.pos.y >= paddle_y && ball.pos.y <= paddle_y + config.paddle_height;
            if !within_span {
                continue;
            }

            let crossed = match side {
                Side::Player => ball.pos.x - r <= config.paddle_x(side) + config.paddle_width,
                Side::Opponent => ball.pos.x + r >= config.paddle_x(side),
            };
            if !crossed {
                continue;
            }

            let away = Direction::away_from(side);
            ball.dir = away;
            ball.vel.x = away.signum() * ball.vel.x.abs();

            let paddle_center = paddle_y + config.paddle_height / 2.0;
            let offset = (ball.pos.y - paddle_center) / (config.paddle_height / 2.0);
            ball.vel.y = offset * config.ball_deflect;

            events.ball_hit_paddle = true;
        }
    }
}
