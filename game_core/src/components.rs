use glam::Vec2;

use crate::config::Config;

/// Which side of the court an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,   // Left, human-controlled
    Opponent, // Right, scripted
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Horizontal travel direction of the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn signum(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    pub fn flip(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Direction pointing away from a paddle on the given side
    pub fn away_from(side: Side) -> Direction {
        match side {
            Side::Player => Direction::Right,
            Side::Opponent => Direction::Left,
        }
    }
}

/// Paddle component; y is the top edge, clamped to the arena
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
    pub base_speed: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32, base_speed: f32) -> Self {
        Self {
            side,
            y,
            base_speed,
        }
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.y + config.paddle_height / 2.0
    }
}

/// Movement intent for a paddle: -1 = up, 0 = hold, 1 = down
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component. `dir` is the authoritative horizontal direction:
/// set at serve, flipped on paddle hits, followed when velocity is
/// rescaled to the current difficulty.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub base_speed: f32,
    pub dir: Direction,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, base_speed: f32) -> Self {
        Self {
            pos,
            vel,
            base_speed,
            dir: Direction::Right,
        }
    }

    /// Park the ball at arena center with no motion, as between serves
    pub fn park(&mut self, config: &Config) {
        self.pos = config.ball_spawn();
        self.vel = Vec2::ZERO;
    }

    pub fn is_parked(&self) -> bool {
        self.vel == Vec2::ZERO
    }
}
