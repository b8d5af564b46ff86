use crate::{Ball, Config, Difficulty, Time};
use hecs::World;

/// Advance the in-play difficulty ramp and rescale the ball's velocity to
/// the new target speed. vx is forced to the target magnitude along the
/// ball's travel direction; |vy| is clamped to the target. A parked ball
/// (between serves) is left alone.
pub fn advance_difficulty(
    world: &mut World,
    time: &Time,
    config: &Config,
    difficulty: &mut Difficulty,
) {
    difficulty.advance(config.difficulty_ramp, time.dt);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.is_parked() {
            continue;
        }
        let target = ball.base_speed * difficulty.multiplier;
        ball.vel.x = ball.dir.signum() * target;
        ball.vel.y = ball.vel.y.clamp(-target, target);
    }
}
