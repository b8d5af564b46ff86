//! The owned match aggregate: world, resources, and phase machine.
//!
//! The front end holds exactly one of these, pushes `Command`s from key
//! handlers, calls `update(dt)` once per animation frame, and reads state
//! back for rendering. Nothing in here is global.

use hecs::World;

use crate::fsm::{MatchAction, MatchFsm, MatchPhase};
use crate::systems::{
    advance_difficulty, check_collisions, check_scoring, ease_paddles, move_ball, move_paddles,
    serve_ball, track_ball,
};
use crate::{
    create_ball, create_paddle, Ball, Command, CommandQueue, Config, Difficulty, Events, GameRng,
    MatchTotals, Paddle, PaddleIntent, PaddleReset, Score, ServeState, Side, Time,
};

pub struct MatchState {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub score: Score,
    pub difficulty: Difficulty,
    pub totals: MatchTotals,
    pub serve: ServeState,
    pub paddle_reset: PaddleReset,
    pub events: Events,
    pub commands: CommandQueue,
    pub rng: GameRng,
    fsm: MatchFsm,
}

impl MatchState {
    pub fn new(seed: u64) -> Self {
        Self::with_config(Config::new(), seed)
    }

    pub fn with_config(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let center = config.paddle_center_y();
        create_paddle(&mut world, Side::Player, center, config.paddle_speed);
        create_paddle(&mut world, Side::Opponent, center, config.paddle_speed);

        let mut ball = Ball::new(glam::Vec2::ZERO, glam::Vec2::ZERO, config.ball_speed);
        ball.park(&config);
        create_ball(&mut world, ball.pos, ball.vel, ball.base_speed);

        Self {
            world,
            time: Time::new(0.0, 0.0),
            config,
            score: Score::new(),
            difficulty: Difficulty::new(),
            totals: MatchTotals::new(),
            serve: ServeState::new(),
            paddle_reset: PaddleReset::new(),
            events: Events::new(),
            commands: CommandQueue::new(),
            rng: GameRng::new(seed),
            fsm: MatchFsm::new(),
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.fsm.phase()
    }

    /// Queue an input command for the next update
    pub fn push_command(&mut self, cmd: Command) {
        self.commands.push(cmd);
    }

    /// Advance the simulation by one frame. dt is seconds since the last
    /// frame and is taken as-is; a huge dt (tab switch) jumps the state
    /// accordingly.
    pub fn update(&mut self, dt: f32) {
        self.events.clear();

        for cmd in self.commands.drain() {
            self.apply(cmd);
        }

        // Full suspension: no physics, no difficulty growth, no easing
        if self.fsm.is_paused() {
            return;
        }

        self.time = Time::new(dt, self.time.now + dt);

        if self.paddle_reset.active {
            let done = self
                .paddle_reset
                .advance(dt, self.config.paddle_reset_duration);
            ease_paddles(&mut self.world, &self.config, &self.paddle_reset);
            // The opening serve of a match fires when the paddles settle
            if done && self.fsm.is_playing() && self.ball_parked() {
                serve_ball(
                    &mut self.world,
                    &self.config,
                    &mut self.difficulty,
                    &self.serve,
                    &mut self.rng,
                    &mut self.events,
                );
            }
        }

        if !self.fsm.is_playing() {
            return;
        }

        advance_difficulty(&mut self.world, &self.time, &self.config, &mut self.difficulty);
        track_ball(&mut self.world, &self.config);
        move_paddles(&mut self.world, &self.time, &self.config, &self.score);
        move_ball(&mut self.world, &self.time);
        check_collisions(&mut self.world, &self.config, &mut self.events);

        if check_scoring(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.serve,
            &mut self.events,
        )
        .is_some()
        {
            if let Some(winner) = self.score.has_winner(self.config.win_score) {
                self.fsm.transition(MatchAction::MatchWon);
                self.events.match_over = Some(winner);
            } else {
                self.difficulty.on_point(self.config.difficulty_step);
                self.fsm.transition(MatchAction::PointScored);
                self.paddle_reset.begin();
            }
        }
    }

    fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::Move(dir) => {
                for (_entity, (paddle, intent)) in
                    self.world.query_mut::<(&Paddle, &mut PaddleIntent)>()
                {
                    if paddle.side == Side::Player {
                        intent.dir = dir.clamp(-1, 1);
                    }
                }
            }
            Command::TogglePause => {
                if !self.fsm.transition(MatchAction::Pause) {
                    self.fsm.transition(MatchAction::Resume);
                }
            }
            Command::Confirm => match self.fsm.phase() {
                MatchPhase::Start => {
                    if self.fsm.transition(MatchAction::Start) {
                        self.reset_match();
                    }
                }
                MatchPhase::Waiting => {
                    if self.fsm.transition(MatchAction::Continue) {
                        serve_ball(
                            &mut self.world,
                            &self.config,
                            &mut self.difficulty,
                            &self.serve,
                            &mut self.rng,
                            &mut self.events,
                        );
                    }
                }
                MatchPhase::GameOver => {
                    if self.fsm.transition(MatchAction::Restart) {
                        self.reset_match();
                    }
                }
                _ => {}
            },
        }
    }

    /// Full match reset. Every point ever scored makes the next match
    /// start faster: base speeds and the difficulty baseline are rebuilt
    /// from the pristine constants times the session scale.
    fn reset_match(&mut self) {
        self.totals.absorb(&self.score);
        let scale = self.totals.scale(self.config.match_scale_per_point);

        self.score = Score::new();
        self.difficulty.reset_scaled(scale);
        self.serve = ServeState::new();

        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.base_speed = self.config.paddle_speed * scale;
        }
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.base_speed = self.config.ball_speed * scale;
            ball.park(&self.config);
        }

        self.paddle_reset.begin();
    }

    fn ball_parked(&self) -> bool {
        let mut query = self.world.query::<&Ball>();
        query
            .iter()
            .next()
            .map(|(_e, ball)| ball.is_parked())
            .unwrap_or(false)
    }

    // Read-only accessors for the render collaborator

    pub fn ball(&self) -> Option<Ball> {
        let mut query = self.world.query::<&Ball>();
        query.iter().next().map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        let mut query = self.world.query::<&Paddle>();
        query
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    fn started_match() -> MatchState {
        let mut m = MatchState::new(42);
        m.push_command(Command::Confirm);
        m.update(0.0);
        // Run the opening paddle reset out so the first serve fires
        for _ in 0..30 {
            m.update(0.02);
        }
        m
    }

    #[test]
    fn test_confirm_starts_match_and_serves() {
        let m = started_match();
        assert_eq!(m.phase(), MatchPhase::Playing);
        let ball = m.ball().unwrap();
        assert!(!ball.is_parked(), "Opening serve fired after paddle reset");
        assert!(ball.vel.x > 0.0, "First serve heads toward the opponent");
    }

    #[test]
    fn test_paused_update_changes_nothing() {
        let mut m = started_match();
        m.push_command(Command::TogglePause);
        m.update(0.016);
        assert_eq!(m.phase(), MatchPhase::Paused);

        let ball = m.ball().unwrap();
        let player_y = m.paddle(Side::Player).unwrap().y;
        let multiplier = m.difficulty.multiplier;

        for _ in 0..60 {
            m.update(0.016);
        }

        let after = m.ball().unwrap();
        assert_eq!(after.pos, ball.pos);
        assert_eq!(after.vel, ball.vel);
        assert_eq!(m.paddle(Side::Player).unwrap().y, player_y);
        assert_eq!(m.difficulty.multiplier, multiplier);
        assert_eq!(m.score.total(), 0);

        m.push_command(Command::TogglePause);
        m.update(0.016);
        assert_eq!(m.phase(), MatchPhase::Playing);
    }

    #[test]
    fn test_multiplier_non_decreasing_within_serve() {
        let mut m = started_match();
        let mut last = m.difficulty.multiplier;
        for _ in 0..50 {
            m.update(0.016);
            if m.phase() != MatchPhase::Playing {
                break;
            }
            assert!(m.difficulty.multiplier >= last);
            last = m.difficulty.multiplier;
        }
    }

    #[test]
    fn test_ball_exit_left_scores_for_opponent() {
        let mut m = started_match();
        // Plant the ball just past the left wall, clear of the paddle span
        for (_e, ball) in m.world.query_mut::<&mut Ball>() {
            ball.pos = glam::Vec2::new(-13.0, 30.0);
            ball.vel = glam::Vec2::new(-240.0, 0.0);
            ball.dir = Direction::Left;
        }

        m.update(0.001);

        assert_eq!(m.score.opponent, 1);
        assert_eq!(m.score.player, 0);
        assert_eq!(m.phase(), MatchPhase::Waiting);
        assert_eq!(m.serve.direction, Direction::Left);
        assert!(m.paddle_reset.active, "Paddle reset begins on the point");
        assert!(m.ball().unwrap().is_parked());
    }

    #[test]
    fn test_continue_serves_immediately() {
        let mut m = started_match();
        for (_e, ball) in m.world.query_mut::<&mut Ball>() {
            ball.pos = glam::Vec2::new(-13.0, 30.0);
            ball.vel = glam::Vec2::new(-240.0, 0.0);
            ball.dir = Direction::Left;
        }
        m.update(0.001);
        assert_eq!(m.phase(), MatchPhase::Waiting);
        let base = m.difficulty.base;

        m.push_command(Command::Confirm);
        m.update(0.0);

        assert_eq!(m.phase(), MatchPhase::Playing);
        assert_eq!(m.difficulty.multiplier, base, "Multiplier snaps to base at serve");
        let ball = m.ball().unwrap();
        let expected = -(ball.base_speed * m.difficulty.multiplier);
        assert!((ball.vel.x - expected).abs() < 1e-3, "Serve heads toward the conceder");
        assert_eq!(ball.vel.y.abs(), m.config.ball_serve_vy);
    }

    #[test]
    fn test_point_steps_base_difficulty() {
        let mut m = started_match();
        let base_before = m.difficulty.base;
        for (_e, ball) in m.world.query_mut::<&mut Ball>() {
            ball.pos = glam::Vec2::new(-13.0, 30.0);
            ball.vel = glam::Vec2::new(-240.0, 0.0);
            ball.dir = Direction::Left;
        }
        m.update(0.001);

        assert!((m.difficulty.base - (base_before + m.config.difficulty_step)).abs() < 1e-6);
    }

    #[test]
    fn test_win_latches_game_over() {
        let mut m = started_match();
        m.score.player = 4;

        for (_e, ball) in m.world.query_mut::<&mut Ball>() {
            ball.pos = glam::Vec2::new(m.config.arena_width + 13.0, 30.0);
            ball.vel = glam::Vec2::new(240.0, 0.0);
        }
        m.update(0.001);

        assert_eq!(m.phase(), MatchPhase::GameOver);
        assert_eq!(m.events.match_over, Some(Side::Player));

        // Stays there across updates and non-restart input
        m.push_command(Command::TogglePause);
        for _ in 0..30 {
            m.update(0.016);
        }
        assert_eq!(m.phase(), MatchPhase::GameOver);
    }

    #[test]
    fn test_restart_rescales_from_lifetime_points() {
        let mut m = started_match();
        m.score.player = 3;
        m.score.opponent = 4;
        for (_e, ball) in m.world.query_mut::<&mut Ball>() {
            ball.pos = glam::Vec2::new(-13.0, 30.0);
            ball.vel = glam::Vec2::new(-240.0, 0.0);
            ball.dir = Direction::Left;
        }
        m.update(0.001); // opponent reaches 5: game over

        m.push_command(Command::Confirm);
        m.update(0.0);

        assert_eq!(m.phase(), MatchPhase::Playing);
        assert_eq!(m.score.total(), 0);
        // 8 lifetime points -> 1.4x pristine speeds
        let ball = m.ball().unwrap();
        assert!((ball.base_speed - m.config.ball_speed * 1.4).abs() < 1e-3);
        let paddle = m.paddle(Side::Player).unwrap();
        assert!((paddle.base_speed - m.config.paddle_speed * 1.4).abs() < 1e-3);
        assert!((m.difficulty.base - 1.4).abs() < 1e-6);
        assert!(m.paddle_reset.active);
    }

    #[test]
    fn test_move_command_drives_player_intent() {
        let mut m = started_match();
        let y_before = m.paddle(Side::Player).unwrap().y;

        m.push_command(Command::Move(1));
        m.update(0.1);
        let y_down = m.paddle(Side::Player).unwrap().y;
        assert!(y_down > y_before);

        m.push_command(Command::Move(0));
        m.update(0.1);
        assert_eq!(m.paddle(Side::Player).unwrap().y, y_down, "Release holds position");
    }

    #[test]
    fn test_positions_stay_in_bounds() {
        let mut m = started_match();
        m.push_command(Command::Move(1));
        for i in 0..600 {
            if m.phase() == MatchPhase::Waiting {
                m.push_command(Command::Confirm);
            }
            m.update(0.016);
            if m.phase() == MatchPhase::GameOver && i % 7 == 0 {
                m.push_command(Command::Confirm);
            }

            for side in [Side::Player, Side::Opponent] {
                let y = m.paddle(side).unwrap().y;
                assert!(y >= 0.0 && y <= m.config.arena_height - m.config.paddle_height);
            }
        }
    }
}
