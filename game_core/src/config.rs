use crate::components::Side;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub paddle_speed_per_point: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub ball_serve_vy: f32,
    pub ball_deflect: f32,
    pub opponent_dead_zone: f32,
    pub win_score: u32,
    pub difficulty_step: f32,
    pub difficulty_ramp: f32,
    pub match_scale_per_point: f32,
    pub paddle_reset_duration: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_speed_per_point: Params::PADDLE_SPEED_PER_POINT,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            ball_serve_vy: Params::BALL_SERVE_VY,
            ball_deflect: Params::BALL_DEFLECT,
            opponent_dead_zone: Params::OPPONENT_DEAD_ZONE,
            win_score: Params::WIN_SCORE,
            difficulty_step: Params::DIFFICULTY_STEP,
            difficulty_ramp: Params::DIFFICULTY_RAMP,
            match_scale_per_point: Params::MATCH_SCALE_PER_POINT,
            paddle_reset_duration: Params::PADDLE_RESET_DURATION,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// X position of a paddle's left edge
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_margin,
            Side::Opponent => self.arena_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Clamp a paddle's top edge to the arena
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.arena_height - self.paddle_height)
    }

    /// Top-edge Y that puts a paddle at vertical center
    pub fn paddle_center_y(&self) -> f32 {
        (self.arena_height - self.paddle_height) / 2.0
    }

    /// Arena center, where the ball is parked between serves
    pub fn ball_spawn(&self) -> glam::Vec2 {
        glam::Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Player), 30.0, "Player paddle X");
        assert_eq!(
            config.paddle_x(Side::Opponent),
            800.0 - 30.0 - 15.0,
            "Opponent paddle X"
        );
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-5.0), 0.0);
        assert_eq!(
            config.clamp_paddle_y(10_000.0),
            config.arena_height - config.paddle_height
        );
        let valid_y = 210.0;
        assert_eq!(config.clamp_paddle_y(valid_y), valid_y);
    }

    #[test]
    fn test_config_paddle_center_y() {
        let config = Config::new();
        assert_eq!(config.paddle_center_y(), (500.0 - 80.0) / 2.0);
    }
}
