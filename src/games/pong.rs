//! Classic pong
//!
//! Two paddles, one accelerating ball. Every paddle hit steps the ball's
//! base speed up and renormalizes; wall bounces deliberately do not
//! renormalize, so the components are flipped as-is.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::{PlayerId, RoundEvent};
use crate::input::FrameInput;
use crate::sim::body::{Ball, Paddle};
use crate::sim::collision::{GoalSide, PaddleSide, bounce_off_walls, check_goal, deflect_off_paddle};
use crate::sim::rect::Rect;
use crate::sim::round::RoundState;

/// Paddle movement speed in pixels per frame
const PADDLE_SPEED: f32 = 10.0;
pub const PADDLE_WIDTH: f32 = 10.0;
pub const PADDLE_HEIGHT: f32 = 100.0;
/// Paddle inset from the side wall
const PADDLE_MARGIN: f32 = 20.0;
pub const BALL_RADIUS: f32 = 10.0;
/// Ball speed on every serve
const SERVE_SPEED: f32 = 600.0;
/// Speed gained on each paddle hit
const SPEED_INCREMENT: f32 = 30.0;

/// A paddle plus its win counter
#[derive(Debug, Clone)]
pub struct PaddlePlayer {
    pub paddle: Paddle,
    pub wins: u32,
}

/// One pong session
#[derive(Debug, Clone)]
pub struct PongGame {
    pub players: [PaddlePlayer; 2],
    pub ball: Ball,
    pub round: RoundState,
    bounds: Rect,
    rng: Pcg32,
}

impl PongGame {
    pub fn new(bounds: Rect, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let (s1, s2) = spawn_points(bounds);

        let mut ball = Ball::new(bounds.center(), BALL_RADIUS, SERVE_SPEED);
        // Opening serve: random side, shallow random angle
        let hor = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let vert: f32 = rng.random_range(-0.5..0.5);
        ball.launch(Vec2::new(hor, vert));

        Self {
            players: [
                PaddlePlayer {
                    paddle: Paddle::new(s1, PADDLE_SPEED, PADDLE_WIDTH, PADDLE_HEIGHT),
                    wins: 0,
                },
                PaddlePlayer {
                    paddle: Paddle::new(s2, PADDLE_SPEED, PADDLE_WIDTH, PADDLE_HEIGHT),
                    wins: 0,
                },
            ],
            ball,
            round: RoundState::new(),
            bounds,
            rng,
        }
    }

    /// Fresh round: paddles recentered, countdown restarted. The ball was
    /// already reset to center when the goal was scored.
    pub fn restart(&mut self) {
        let (s1, s2) = spawn_points(self.bounds);
        self.players[0].paddle.reset(s1);
        self.players[1].paddle.reset(s2);
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

    /// Advance one frame: paddles, then the ball (walls and goals), then
    /// paddle deflection. A goal ends the round the same frame.
    pub fn update(&mut self, input: &FrameInput, dt: f32) -> Option<RoundEvent> {
        if !self.round.advance(dt) {
            return None;
        }

        let [p1, p2] = &mut self.players;
        p1.paddle.steer(&input.p1);
        p2.paddle.steer(&input.p2);
        p1.paddle.advance(self.bounds);
        p2.paddle.advance(self.bounds);

        self.ball.integrate(dt);
        bounce_off_walls(&mut self.ball, self.bounds.h, false);

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

        // A recentered ball cannot overlap a paddle, so these are harmless
        // on a goal frame
        if !deflect_off_paddle(
            &mut self.ball,
            self.players[0].paddle.rect(),
            PaddleSide::Left,
            SPEED_INCREMENT,
        ) {
            deflect_off_paddle(
                &mut self.ball,
                self.players[1].paddle.rect(),
                PaddleSide::Right,
                SPEED_INCREMENT,
            );
        }

        event
    }

    /// Recenter the ball and serve toward the side that conceded, at the
    /// initial speed again
    fn serve_after_goal(&mut self, side: GoalSide) {
        self.ball.pos = self.bounds.center();
        self.ball.base_speed = SERVE_SPEED;
        let hor = match side {
            GoalSide::Left => -1.0,
            GoalSide::Right => 1.0,
        };
        let vert: f32 = self.rng.random_range(-0.5..0.5);
        self.ball.launch(Vec2::new(hor, vert));
    }
}

fn spawn_points(bounds: Rect) -> (Vec2, Vec2) {
    let y = bounds.h / 2.0 - PADDLE_HEIGHT / 2.0;
    (
        Vec2::new(PADDLE_MARGIN, y),
        Vec2::new(bounds.w - PADDLE_MARGIN - PADDLE_WIDTH, y),
    )
}
