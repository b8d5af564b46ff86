use crate::{Ball, Config, Difficulty, Events, GameRng, Paddle, PaddleReset, ServeState};
use hecs::World;
use rand::Rng;

/// Ease both paddles toward vertical center while a paddle reset is
/// active. This is a first-order filter, not a true lerp: each frame the
/// remaining distance is cut by the current progress fraction.
pub fn ease_paddles(world: &mut World, config: &Config, reset: &PaddleReset) {
    let target = config.paddle_center_y();
    let t = reset.t();
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y += (target - paddle.y) * t;
    }
}

/// Put the ball in play: centered, horizontal speed at the current
/// difficulty along the pending serve direction, vertical speed fixed
/// with a random sign. Snaps the multiplier back to its baseline first.
pub fn serve_ball(
    world: &mut World,
    config: &Config,
    difficulty: &mut Difficulty,
    serve: &ServeState,
    rng: &mut GameRng,
    events: &mut Events,
) {
    difficulty.on_serve();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos = config.ball_spawn();
        ball.dir = serve.direction;
        ball.vel.x = serve.direction.signum() * ball.base_speed * difficulty.multiplier;
        ball.vel.y = if rng.0.gen_bool(0.5) {
            config.ball_serve_vy
        } else {
            -config.ball_serve_vy
        };
    }

    events.serve = true;
}
