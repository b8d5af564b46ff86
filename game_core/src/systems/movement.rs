use crate::{Ball, Config, Paddle, PaddleIntent, Score, Time};
use hecs::World;

/// Current speed of a paddle: base plus a bonus per point its owner holds
pub fn paddle_speed(paddle: &Paddle, score: &Score, config: &Config) -> f32 {
    paddle.base_speed + score.of(paddle.side) as f32 * config.paddle_speed_per_point
}

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, time: &Time, config: &Config, score: &Score) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            let speed = paddle_speed(paddle, score, config);
            paddle.y += intent.dir as f32 * speed * time.dt;
            paddle.y = config.clamp_paddle_y(paddle.y);
        }
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * time.dt;
    }
}
