pub mod components;
pub mod config;
pub mod fsm;
pub mod match_state;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use match_state::*;
pub use params::*;
pub use resources::*;

use hecs::World;

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32, base_speed: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y, base_speed), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(
    world: &mut World,
    pos: glam::Vec2,
    vel: glam::Vec2,
    base_speed: f32,
) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, base_speed),))
}
