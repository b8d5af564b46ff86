//! Cosmetic state the renderer reads: ball trail, hit particles, screen
//! shake, and the game-over fade. Purely visual; nothing here feeds back
//! into the simulation, and it keeps animating while the match is paused.

use game_core::{Events, MatchPhase};
use glam::Vec2;
use std::collections::VecDeque;

const TRAIL_CAPACITY: usize = 14;
const PARTICLE_LIFETIME: f32 = 0.45;
const SHAKE_DECAY: f32 = 1.8; // trauma per second
const SHAKE_MAX_OFFSET: f32 = 9.0;
const FADE_DURATION: f32 = 0.6;

/// Recent ball positions, oldest first
#[derive(Debug, Default)]
pub struct BallTrail {
    points: VecDeque<Vec2>,
}

impl BallTrail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pos: Vec2) {
        if self.points.len() == TRAIL_CAPACITY {
            self.points.pop_front();
        }
        self.points.push_back(pos);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Age fraction of the sample at `index`: 0.0 for the oldest sample,
    /// 1.0 for the newest. A single-sample trail reads as 0.
    pub fn fade(&self, index: usize) -> f32 {
        if self.points.len() <= 1 {
            0.0
        } else {
            index as f32 / (self.points.len() - 1) as f32
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        self.points
            .iter()
            .enumerate()
            .map(|(i, &p)| (p, self.fade(i)))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub age: f32,
    pub lifetime: f32,
    pub size: f32,
}

impl Particle {
    /// 1.0 when fresh, 0.0 at expiry
    pub fn remaining(&self) -> f32 {
        (1.0 - self.age / self.lifetime).max(0.0)
    }
}

/// Short-lived burst particles, spawned on hits and points
#[derive(Debug, Default)]
pub struct Particles {
    particles: Vec<Particle>,
}

impl Particles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a radial burst. Spread comes from the spawn index, so bursts
    /// are deterministic for a given count.
    pub fn burst(&mut self, origin: Vec2, count: usize, speed: f32) {
        for i in 0..count {
            let angle = i as f32 * std::f32::consts::TAU / count.max(1) as f32;
            let pace = speed * (0.6 + 0.4 * (i % 3) as f32 / 2.0);
            self.particles.push(Particle {
                pos: origin,
                vel: Vec2::new(angle.cos(), angle.sin()) * pace,
                age: 0.0,
                lifetime: PARTICLE_LIFETIME + 0.05 * (i % 4) as f32,
                size: 2.0 + (i % 3) as f32,
            });
        }
    }

    pub fn update(&mut self, dt: f32) {
        for p in &mut self.particles {
            p.age += dt;
            p.pos += p.vel * dt;
        }
        self.particles.retain(|p| p.age < p.lifetime);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }
}

/// Trauma-based screen shake: impulses accumulate trauma, the drawn
/// offset is trauma squared on a fixed oscillation
#[derive(Debug, Default)]
pub struct ScreenShake {
    trauma: f32,
}

impl ScreenShake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, amount: f32) {
        self.trauma = (self.trauma + amount).min(1.0);
    }

    pub fn update(&mut self, dt: f32) {
        self.trauma = (self.trauma - SHAKE_DECAY * dt).max(0.0);
    }

    pub fn trauma(&self) -> f32 {
        self.trauma
    }

    pub fn offset(&self, now: f32) -> Vec2 {
        let amplitude = self.trauma * self.trauma * SHAKE_MAX_OFFSET;
        Vec2::new(
            (now * 47.0).sin() * amplitude,
            (now * 59.0).cos() * amplitude,
        )
    }
}

/// Game-over settle: the phase flips instantly for gating, this fade is
/// the visible transition
#[derive(Debug, Default)]
pub struct GameOverFade {
    active: bool,
    progress: f32,
}

impl GameOverFade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) {
        self.active = true;
        self.progress = 0.0;
    }

    pub fn reset(&mut self) {
        self.active = false;
        self.progress = 0.0;
    }

    pub fn update(&mut self, dt: f32) {
        if self.active {
            self.progress = (self.progress + dt / FADE_DURATION).min(1.0);
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }
}

/// All cosmetic state, advanced once per frame after the simulation update
#[derive(Debug, Default)]
pub struct Effects {
    pub trail: BallTrail,
    pub particles: Particles,
    pub shake: ScreenShake,
    pub fade: GameOverFade,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(
        &mut self,
        dt: f32,
        events: &Events,
        phase: MatchPhase,
        ball_pos: Vec2,
        ball_moving: bool,
    ) {
        if events.serve {
            self.trail.clear();
        }
        if phase == MatchPhase::Playing && ball_moving {
            self.trail.push(ball_pos);
        }

        if events.ball_hit_paddle {
            self.shake.add(0.3);
            self.particles.burst(ball_pos, 10, 130.0);
        }
        if events.ball_hit_wall {
            self.shake.add(0.15);
        }
        if events.player_scored || events.opponent_scored {
            self.shake.add(0.5);
            self.particles.burst(ball_pos, 16, 170.0);
        }
        if events.match_over.is_some() {
            self.fade.begin();
        }
        if events.serve || phase == MatchPhase::Start {
            self.fade.reset();
        }

        self.particles.update(dt);
        self.shake.update(dt);
        self.fade.update(dt);
    }
}
