//! Kinematic bodies: trail runners, paddles and balls
//!
//! Runners and paddles move per frame (direction times speed, no `dt`);
//! balls integrate velocity over `dt`. Both match the frame contract of the
//! games built on top.

use glam::Vec2;

use super::rect::Rect;
use crate::input::AxisInput;

/// A trail-laying runner: a square body that is always moving
#[derive(Debug, Clone)]
pub struct Mover {
    /// Top-left corner of the body square
    pub pos: Vec2,
    /// Unit movement direction
    pub dir: Vec2,
    /// Movement speed in pixels per frame
    pub speed: f32,
    /// Side length of the body square
    pub size: f32,
}

impl Mover {
    /// New runner facing up
    pub fn new(pos: Vec2, speed: f32, size: f32) -> Self {
        Self {
            pos,
            dir: Vec2::new(0.0, -1.0),
            speed,
            size,
        }
    }

    /// Back to a starting position, facing up
    pub fn reset(&mut self, pos: Vec2) {
        self.pos = pos;
        self.dir = Vec2::new(0.0, -1.0);
    }

    /// Center of the body square
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    /// Advance one frame along the current direction
    pub fn advance(&mut self) {
        self.pos += self.dir * self.speed;
    }

    /// Clip the body square into the playfield (edge inclusive)
    pub fn clamp_to_bounds(&mut self, bounds: Rect) {
        self.pos.x = self.pos.x.clamp(bounds.left(), bounds.right() - self.size);
        self.pos.y = self.pos.y.clamp(bounds.top(), bounds.bottom() - self.size);
    }

    /// Steer from held axis keys, rejecting instant 180° reversals:
    /// a key that exactly negates the current direction on its axis leaves
    /// that axis dead for the frame, so a runner can never drive straight
    /// back into the segment it just laid
    pub fn steer_no_reversal(&mut self, input: &AxisInput) {
        let requested = steering_request(self.dir, input, true);
        self.apply_steering(requested);
    }

    /// Steer from held axis keys; full reversals are allowed
    pub fn steer(&mut self, input: &AxisInput) {
        let requested = steering_request(self.dir, input, false);
        self.apply_steering(requested);
    }

    /// A non-zero request becomes the new direction; no keys held keeps the
    /// runner moving the way it was going
    fn apply_steering(&mut self, requested: Vec2) {
        if requested != Vec2::ZERO {
            self.dir = requested.normalize();
        }
    }
}

/// Intended direction from this frame's held keys, unnormalized.
///
/// With `block_reversal`, each axis is checked independently against the
/// current direction: a request that exactly negates the current component
/// is ignored and that axis stays at zero. The guard compares against the
/// *normalized* current direction, so a diagonal mover (components at
/// ±1/√2) can still turn onto either pure axis.
pub fn steering_request(current: Vec2, input: &AxisInput, block_reversal: bool) -> Vec2 {
    let mut requested = Vec2::ZERO;
    if input.up && !(block_reversal && current.y == 1.0) {
        requested.y = -1.0;
    } else if input.down && !(block_reversal && current.y == -1.0) {
        requested.y = 1.0;
    }
    if input.left && !(block_reversal && current.x == 1.0) {
        requested.x = -1.0;
    } else if input.right && !(block_reversal && current.x == -1.0) {
        requested.x = 1.0;
    }
    requested
}

/// A pong paddle: vertical movement along a fixed column
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    /// -1 up, 1 down, 0 still
    pub dir: f32,
    /// Movement speed in pixels per frame
    pub speed: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(pos: Vec2, speed: f32, width: f32, height: f32) -> Self {
        Self {
            pos,
            dir: 0.0,
            speed,
            width,
            height,
        }
    }

    /// Back to a starting position, standing still
    pub fn reset(&mut self, pos: Vec2) {
        self.pos = pos;
        self.dir = 0.0;
    }

    /// Set the movement direction from held keys
    pub fn steer(&mut self, input: &AxisInput) {
        self.dir = if input.up {
            -1.0
        } else if input.down {
            1.0
        } else {
            0.0
        };
    }

    /// Advance one frame and clamp inside the playfield
    pub fn advance(&mut self, bounds: Rect) {
        self.pos.y += self.dir * self.speed;
        self.pos.y = self.pos.y.clamp(bounds.top(), bounds.bottom() - self.height);
    }

    /// The paddle's rectangle for collision tests
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}

/// A free-moving ball whose speed snaps back to `base_speed` after
/// renormalizing bounces, so repeated reflections never drift the magnitude
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Speed the velocity is renormalized to after qualifying bounces
    pub base_speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32, base_speed: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            base_speed,
        }
    }

    /// Advance by velocity over `dt` seconds
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Reset the velocity's magnitude to `base_speed`, keeping direction.
    /// A zero velocity stays zero rather than dividing by zero.
    pub fn renormalize(&mut self) {
        self.vel = self.vel.normalize_or_zero() * self.base_speed;
    }

    /// Point the ball along `dir` at `base_speed`
    pub fn launch(&mut self, dir: Vec2) {
        self.vel = dir.normalize_or_zero() * self.base_speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn held(up: bool, down: bool, left: bool, right: bool) -> AxisInput {
        AxisInput {
            up,
            down,
            left,
            right,
        }
    }

    #[test]
    fn test_mover_advances_per_frame() {
        let mut mover = Mover::new(Vec2::new(100.0, 100.0), 5.0, 30.0);
        mover.advance();
        assert_eq!(mover.pos, Vec2::new(100.0, 95.0));
    }

    #[test]
    fn test_no_reversal_blocks_opposite_axis() {
        // Moving up; a down request leaves the y axis dead for the frame
        let request = steering_request(
            Vec2::new(0.0, -1.0),
            &held(false, true, false, false),
            true,
        );
        assert_eq!(request.y, 0.0);

        // The whole request zeroed out, so the mover keeps its direction
        let mut mover = Mover::new(Vec2::ZERO, 5.0, 30.0);
        mover.dir = Vec2::new(0.0, -1.0);
        mover.steer_no_reversal(&held(false, true, false, false));
        assert_eq!(mover.dir, Vec2::new(0.0, -1.0));

        // A sideways turn is still allowed; the blocked axis stays dead
        mover.steer_no_reversal(&held(false, true, true, false));
        assert_eq!(mover.dir, Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_no_reversal_allows_turn_from_diagonal() {
        // A diagonal direction has no component at exactly ±1, so turning
        // onto either pure axis is allowed
        let mut mover = Mover::new(Vec2::ZERO, 5.0, 30.0);
        mover.dir = Vec2::new(1.0, 1.0).normalize();
        mover.steer_no_reversal(&held(true, false, false, false));
        assert_eq!(mover.dir, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_free_steering_allows_reversal() {
        let mut mover = Mover::new(Vec2::ZERO, 7.0, 30.0);
        mover.dir = Vec2::new(0.0, -1.0);
        mover.steer(&held(false, true, false, false));
        assert_eq!(mover.dir, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_steering_normalizes_diagonals() {
        let mut mover = Mover::new(Vec2::ZERO, 5.0, 30.0);
        mover.steer(&held(true, false, false, true));
        assert!((mover.dir.length() - 1.0).abs() < 1e-6);
        assert!(mover.dir.x > 0.0 && mover.dir.y < 0.0);
    }

    #[test]
    fn test_no_keys_keeps_moving() {
        let mut mover = Mover::new(Vec2::ZERO, 5.0, 30.0);
        mover.dir = Vec2::new(1.0, 0.0);
        mover.steer(&held(false, false, false, false));
        assert_eq!(mover.dir, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_paddle_clamps_to_field() {
        let bounds = Rect::new(0.0, 0.0, 800.0, 600.0);
        let mut paddle = Paddle::new(Vec2::new(20.0, 10.0), 10.0, 10.0, 100.0);
        paddle.steer(&held(true, false, false, false));
        for _ in 0..10 {
            paddle.advance(bounds);
        }
        assert_eq!(paddle.pos.y, 0.0);

        paddle.steer(&held(false, true, false, false));
        for _ in 0..100 {
            paddle.advance(bounds);
        }
        assert_eq!(paddle.pos.y, 500.0);
    }

    #[test]
    fn test_ball_integrates_velocity() {
        let mut ball = Ball::new(Vec2::new(100.0, 100.0), 10.0, 600.0);
        ball.vel = Vec2::new(60.0, -30.0);
        ball.integrate(0.5);
        assert_eq!(ball.pos, Vec2::new(130.0, 85.0));
    }

    #[test]
    fn test_renormalize_restores_base_speed() {
        let mut ball = Ball::new(Vec2::ZERO, 10.0, 350.0);
        ball.vel = Vec2::new(3.0, 4.0);
        ball.renormalize();
        assert!((ball.vel.length() - 350.0).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn prop_clamp_keeps_mover_inside(
            x in -5000.0f32..5000.0,
            y in -5000.0f32..5000.0,
        ) {
            let bounds = Rect::new(0.0, 0.0, 800.0, 600.0);
            let mut mover = Mover::new(Vec2::new(x, y), 5.0, 30.0);
            mover.clamp_to_bounds(bounds);
            prop_assert!(mover.pos.x >= 0.0 && mover.pos.x <= 800.0 - 30.0);
            prop_assert!(mover.pos.y >= 0.0 && mover.pos.y <= 600.0 - 30.0);
        }

        #[test]
        fn prop_launch_speed_is_base_speed(
            dx in -1.0f32..1.0,
            dy in -1.0f32..1.0,
        ) {
            prop_assume!(dx.abs() > 1e-3 || dy.abs() > 1e-3);
            let mut ball = Ball::new(Vec2::ZERO, 10.0, 600.0);
            ball.launch(Vec2::new(dx, dy));
            prop_assert!((ball.vel.length() - 600.0).abs() < 1e-2);
        }
    }
}
