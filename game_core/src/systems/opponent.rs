use crate::{Ball, Config, Paddle, PaddleIntent, Side};
use hecs::World;

/// Scripted opponent control: proportional tracking with a dead zone.
/// Moves toward the ball whenever it sits more than the tolerance away
/// from the paddle's vertical center; holds otherwise. Re-evaluated every
/// frame, no prediction, no reaction delay.
pub fn track_ball(world: &mut World, config: &Config) {
    let ball_y = {
        let mut query = world.query::<&Ball>();
        match query.iter().next() {
            Some((_e, ball)) => ball.pos.y,
            None => return,
        }
    };

    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side != Side::Opponent {
            continue;
        }
        let center = paddle.center_y(config);
        intent.dir = if ball_y < center - config.opponent_dead_zone {
            -1
        } else if ball_y > center + config.opponent_dead_zone {
            1
        } else {
            0
        };
    }
}
