/// Game tuning parameters for the solo Pong match
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_MARGIN: f32 = 30.0; // Distance from the back wall
    pub const PADDLE_SPEED: f32 = 300.0; // units per second
    pub const PADDLE_SPEED_PER_POINT: f32 = 30.0; // Added per point the owner has scored

    // Ball
    pub const BALL_RADIUS: f32 = 12.0;
    pub const BALL_SPEED: f32 = 200.0; // Horizontal base speed
    pub const BALL_SERVE_VY: f32 = 150.0; // Vertical speed at serve, sign randomized
    pub const BALL_DEFLECT: f32 = 200.0; // vy per unit of normalized paddle-hit offset

    // Opponent
    pub const OPPONENT_DEAD_ZONE: f32 = 10.0; // Tracking tolerance around paddle center

    // Score
    pub const WIN_SCORE: u32 = 5; // First to 5 wins

    // Difficulty
    pub const DIFFICULTY_STEP: f32 = 0.08; // Added to the baseline on every point
    pub const DIFFICULTY_RAMP: f32 = 0.2; // Multiplier growth per second of play
    pub const MATCH_SCALE_PER_POINT: f32 = 0.05; // Restart scaling per lifetime point

    // Serve
    pub const PADDLE_RESET_DURATION: f32 = 0.4; // Seconds to ease paddles back to center
}
