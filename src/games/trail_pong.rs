//! Trail pong
//!
//! The hybrid: trail-laying runners defend their side walls against a ball
//! that ricochets off both players' trails. Unlike the trails duel, full
//! direction reversals are allowed; unlike pong, the ball's speed is
//! constant and every bounce (walls included) renormalizes to it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::{PlayerId, RoundEvent, Runner};
use crate::input::FrameInput;
use crate::sim::body::Ball;
use crate::sim::collision::{GoalSide, bounce_off_trail, bounce_off_walls, check_goal};
use crate::sim::rect::Rect;
use crate::sim::round::RoundState;
use crate::sim::trail::TrailCapacity;

/// Movement speed in pixels per frame
const PLAYER_SPEED: f32 = 7.0;
/// Side length of the player square
pub const PLAYER_SIZE: f32 = 30.0;
/// Collision radius of a single trail point
pub const TRAIL_RADIUS: f32 = 3.0;
/// Hard cap on each trail
const TRAIL_CAPACITY: usize = 30;
pub const BALL_RADIUS: f32 = 10.0;
/// The ball's constant speed
const BALL_SPEED: f32 = 350.0;
/// Seconds after a trail contact during which further trail contacts are
/// ignored; one physical touch would otherwise reflect many frames in a row
const COLLISION_COOLDOWN: f32 = 0.06;

/// One trail-pong session
#[derive(Debug, Clone)]
pub struct TrailPongGame {
    pub players: [Runner; 2],
    pub ball: Ball,
    pub round: RoundState,
    bounds: Rect,
    rng: Pcg32,
    /// Accumulated session time; the cooldown clock reads this
    time: f32,
    last_trail_hit: f32,
}

impl TrailPongGame {
    pub fn new(bounds: Rect, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let (s1, s2) = spawn_points(bounds);

        let mut ball = Ball::new(bounds.center(), BALL_RADIUS, BALL_SPEED);
        // Opening serve: any direction at all
        let angle: f32 = rng.random_range(0.0..std::f32::consts::TAU);
        ball.launch(Vec2::from_angle(angle));

        Self {
            players: [
                Runner::new(s1, PLAYER_SPEED, PLAYER_SIZE, TrailCapacity::Fixed(TRAIL_CAPACITY)),
                Runner::new(s2, PLAYER_SPEED, PLAYER_SIZE, TrailCapacity::Fixed(TRAIL_CAPACITY)),
            ],
            ball,
            round: RoundState::new(),
            bounds,
            rng,
            time: 0.0,
            last_trail_hit: -COLLISION_COOLDOWN,
        }
    }

    /// Fresh round: runners and trails back to the session start; the ball
    /// was already recentered when the goal was scored
    pub fn restart(&mut self) {
        let (s1, s2) = spawn_points(self.bounds);
        self.players[0].reset(s1);
        self.players[1].reset(s2);
        self.round.restart();
    }

    /// Re-enter the countdown after a pause, leaving the field as it is
    pub fn resume(&mut self) {
        self.round.reset_countdown();
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn scores(&self) -> (u32, u32) {
        (self.players[0].wins, self.players[1].wins)
    }

    /// Advance one frame: runners and trails, then the ball (walls and
    /// goals), then trail ricochets. A goal ends the round the same frame.
    pub fn update(&mut self, input: &FrameInput, dt: f32) -> Option<RoundEvent> {
        self.time += dt;
        if !self.round.advance(dt) {
            return None;
        }

        let [p1, p2] = &mut self.players;
        p1.body.steer(&input.p1);
        p2.body.steer(&input.p2);

        let time = self.time;
        for player in &mut self.players {
            player.body.advance();
            player.body.clamp_to_bounds(self.bounds);
            let center = player.body.center();
            player.trail.push(center, time);
        }

        self.ball.integrate(dt);
        bounce_off_walls(&mut self.ball, self.bounds.h, true);

        let mut event = None;
        if let Some(side) = check_goal(&self.ball, self.bounds.w) {
            let scorer = match side {
                GoalSide::Left => PlayerId::Two,
                GoalSide::Right => PlayerId::One,
            };
            self.players[scorer.index()].wins += 1;
            self.serve_after_goal(side);
            self.round.finish();
            event = Some(RoundEvent { winner: scorer });
        }

        // Both trails share one cooldown clock, so a single physical touch
        // reflects exactly once
        if self.cooldown_elapsed()
            && bounce_off_trail(&mut self.ball, self.players[0].trail.iter(), TRAIL_RADIUS)
        {
            self.last_trail_hit = self.time;
        }
        if self.cooldown_elapsed()
            && bounce_off_trail(&mut self.ball, self.players[1].trail.iter(), TRAIL_RADIUS)
        {
            self.last_trail_hit = self.time;
        }

        event
    }

    fn cooldown_elapsed(&self) -> bool {
        self.time - self.last_trail_hit >= COLLISION_COOLDOWN
    }

    /// Recenter the ball and serve toward the side that conceded; the
    /// speed never changes in this game
    fn serve_after_goal(&mut self, side: GoalSide) {
        self.ball.pos = self.bounds.center();
        let hor = match side {
            GoalSide::Left => -1.0,
            GoalSide::Right => 1.0,
        };
        let vert: f32 = self.rng.random_range(-1.0..1.0);
        self.ball.launch(Vec2::new(hor, vert));
    }
}

fn spawn_points(bounds: Rect) -> (Vec2, Vec2) {
    let half = PLAYER_SIZE / 2.0;
    (
        Vec2::new(bounds.w / 4.0 - half, bounds.h / 2.0 - half),
        Vec2::new(3.0 * bounds.w / 4.0 - half, bounds.h / 2.0 - half),
    )
}
