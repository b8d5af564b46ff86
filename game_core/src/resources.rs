use crate::components::{Direction, Side};

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { dt: 0.016, now: 0.0 }
    }
}

/// Match score; zeroed only on a full match reset
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Opponent => self.opponent += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.player + self.opponent
    }

    pub fn has_winner(&self, win_score: u32) -> Option<Side> {
        if self.player >= win_score {
            Some(Side::Player)
        } else if self.opponent >= win_score {
            Some(Side::Opponent)
        } else {
            None
        }
    }
}

/// Difficulty state. `base` is the multiplier's value at the start of each
/// serve and only ever grows; `multiplier` ramps continuously during play
/// and snaps back to `base` when the next serve begins.
#[derive(Debug, Clone, Copy)]
pub struct Difficulty {
    pub base: f32,
    pub multiplier: f32,
}

impl Difficulty {
    pub fn new() -> Self {
        Self {
            base: 1.0,
            multiplier: 1.0,
        }
    }

    /// Continuous in-play ramp
    pub fn advance(&mut self, rate: f32, dt: f32) {
        self.multiplier += rate * dt;
    }

    /// Per-point step, applied when a point is scored
    pub fn on_point(&mut self, step: f32) {
        self.base += step;
    }

    /// Start of a new serve
    pub fn on_serve(&mut self) {
        self.multiplier = self.base;
    }

    /// Full match reset to a scaled baseline
    pub fn reset_scaled(&mut self, scale: f32) {
        self.base = scale;
        self.multiplier = scale;
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::new()
    }
}

/// Points scored across every match this session; makes consecutive
/// matches start harder.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchTotals {
    pub points: u32,
}

impl MatchTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn absorb(&mut self, score: &Score) {
        self.points += score.total();
    }

    pub fn scale(&self, per_point: f32) -> f32 {
        1.0 + self.points as f32 * per_point
    }
}

/// Next serve direction, set when a point is scored (toward the side
/// that conceded) and consumed when the ball is served.
#[derive(Debug, Clone, Copy)]
pub struct ServeState {
    pub direction: Direction,
}

impl ServeState {
    pub fn new() -> Self {
        Self {
            direction: Direction::Right,
        }
    }
}

impl Default for ServeState {
    fn default() -> Self {
        Self::new()
    }
}

/// Timed easing of both paddles back to vertical center, active between
/// a scored point (or match reset) and the next serve.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleReset {
    pub active: bool,
    pub progress: f32, // 0..=1
}

impl PaddleReset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) {
        self.active = true;
        self.progress = 0.0;
    }

    /// Advance by dt/duration; returns true on the frame it completes
    pub fn advance(&mut self, dt: f32, duration: f32) -> bool {
        if !self.active {
            return false;
        }
        self.progress += dt / duration;
        if self.progress >= 1.0 {
            self.active = false;
            return true;
        }
        false
    }

    /// Per-frame easing factor
    pub fn t(&self) -> f32 {
        self.progress.min(1.0)
    }
}

/// Events that occurred during this update, read by the front end for
/// cosmetic feedback and cleared at the start of the next update
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub player_scored: bool,
    pub opponent_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub serve: bool,
    pub match_over: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Input command from the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Set the player's vertical intent: -1 up, 0 release, 1 down
    Move(i8),
    /// Toggle playing <-> paused
    TogglePause,
    /// Start the match, serve the next point, or restart after game over,
    /// depending on the current phase
    Confirm,
}

/// Pending input commands. Key handlers run between frames and push here;
/// the queue is drained at the top of the next update, so a frame never
/// observes a half-applied input.
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    pub commands: Vec<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cmd: Command) {
        self.commands.push(cmd);
    }

    pub fn drain(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}
