//! Collision detection and response for the minigames
//!
//! Two reflection policies coexist: rectangular paddle deflection (pong)
//! and circular trail-point reflection with depenetration (trail pong).
//! Wall bounces also differ per game in whether the speed is renormalized
//! afterwards; both variants live here and the sessions pick.

use glam::Vec2;

use super::body::Ball;
use super::rect::Rect;

/// How far past the exact contact distance the ball is pushed out of a
/// trail point, so the next frame does not immediately re-collide
const DEPENETRATION_EPSILON: f32 = 0.5;

/// Fraction of `base_speed` a full-edge paddle hit puts into the y axis
const DEFLECTION_FACTOR: f32 = 0.75;

/// Side wall a goal was scored through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalSide {
    Left,
    Right,
}

/// Side of the playfield a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleSide {
    Left,
    Right,
}

/// Reflect a velocity off a surface: v' = v - 2(v·n)n
#[inline]
pub fn reflect(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Bounce the ball off the top/bottom walls: position clamped flush to the
/// wall, y velocity inverted. With `renormalize` the speed is reset to
/// `base_speed` afterwards; without it the components are left untouched.
/// Returns true if a wall was hit.
pub fn bounce_off_walls(ball: &mut Ball, height: f32, renormalize: bool) -> bool {
    let mut hit = false;
    if ball.pos.y - ball.radius <= 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = -ball.vel.y;
        hit = true;
    } else if ball.pos.y + ball.radius >= height {
        ball.pos.y = height - ball.radius;
        ball.vel.y = -ball.vel.y;
        hit = true;
    }
    if hit && renormalize {
        ball.renormalize();
    }
    hit
}

/// Which side wall the ball's circle has crossed, if any
pub fn check_goal(ball: &Ball, width: f32) -> Option<GoalSide> {
    if ball.pos.x - ball.radius <= 0.0 {
        Some(GoalSide::Left)
    } else if ball.pos.x + ball.radius >= width {
        Some(GoalSide::Right)
    } else {
        None
    }
}

/// The ball's axis-aligned bounding square
pub fn ball_rect(ball: &Ball) -> Rect {
    Rect::new(
        ball.pos.x - ball.radius,
        ball.pos.y - ball.radius,
        ball.radius * 2.0,
        ball.radius * 2.0,
    )
}

/// Deflect the ball off a paddle if their rectangles overlap.
///
/// On contact the ball is repositioned flush against the paddle face, the
/// x velocity inverted, and the y velocity set proportional to how far from
/// the paddle center the ball struck. `base_speed` is then stepped up by
/// `speed_increment` and the velocity renormalized to it.
/// Returns true on contact.
pub fn deflect_off_paddle(
    ball: &mut Ball,
    paddle: Rect,
    side: PaddleSide,
    speed_increment: f32,
) -> bool {
    if !ball_rect(ball).overlaps(&paddle) {
        return false;
    }
    match side {
        PaddleSide::Left => ball.pos.x = paddle.right() + ball.radius,
        PaddleSide::Right => ball.pos.x = paddle.left() - ball.radius,
    }
    ball.vel.x = -ball.vel.x;
    let offset = (ball.pos.y - paddle.center().y) / (paddle.h / 2.0);
    ball.vel.y = offset * ball.base_speed * DEFLECTION_FACTOR;
    ball.base_speed += speed_increment;
    ball.renormalize();
    true
}

/// Bounce the ball off the first trail point it overlaps, in insertion
/// order. Exact duplicate points are only tested once. Returns true if a
/// reflection happened.
///
/// The outward normal is ball center minus trail point; at distance
/// exactly zero the canonical fallback normal (1, 0) is used instead of
/// dividing by zero. After reflecting and renormalizing, the ball is
/// pushed out along the normal by the overlap plus a small epsilon.
pub fn bounce_off_trail<I>(ball: &mut Ball, points: I, trail_radius: f32) -> bool
where
    I: IntoIterator<Item = Vec2>,
{
    let mut seen: Vec<Vec2> = Vec::new();
    for point in points {
        if seen.contains(&point) {
            continue;
        }
        seen.push(point);

        let to_center = ball.pos - point;
        let dist = to_center.length();
        if dist < ball.radius + trail_radius {
            let normal = if dist != 0.0 {
                to_center / dist
            } else {
                Vec2::X
            };
            ball.vel = reflect(ball.vel, normal);
            ball.renormalize();
            let overlap = ball.radius + trail_radius - dist;
            ball.pos += normal * (overlap + DEPENETRATION_EPSILON);
            return true;
        }
    }
    false
}

/// True if a circle at `center` comes within `radius + trail_radius` of
/// any of `points`
pub fn circle_hits_trail<I>(center: Vec2, radius: f32, points: I, trail_radius: f32) -> bool
where
    I: IntoIterator<Item = Vec2>,
{
    points
        .into_iter()
        .any(|p| center.distance(p) < radius + trail_radius)
}
