//! Minigame sessions
//!
//! Each session owns its bodies, trails, scores and round state for the
//! lifetime of one visit to the game (scores accumulate across rounds and
//! die when the player returns to the menu). The host advances a session
//! once per frame with an input snapshot and `dt`, and reads the public
//! state back for rendering.

pub mod connect_four;
pub mod pong;
pub mod trail_pong;
pub mod trails;

use glam::Vec2;

use crate::sim::body::Mover;
use crate::sim::trail::{Trail, TrailCapacity};

/// One of the two fixed player roles: player one is the left/purple side
/// (WASD), player two the right/blue side (arrows)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

/// Terminal round event reported to the host, which shows the game-over
/// overlay and waits for a restart command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundEvent {
    pub winner: PlayerId,
}

/// A trail-laying player: body, trail and win counter
#[derive(Debug, Clone)]
pub struct Runner {
    pub body: Mover,
    pub trail: Trail,
    pub wins: u32,
}

impl Runner {
    pub fn new(pos: Vec2, speed: f32, size: f32, capacity: TrailCapacity) -> Self {
        Self {
            body: Mover::new(pos, speed, size),
            trail: Trail::new(capacity),
            wins: 0,
        }
    }

    /// Back to the starting position with a fresh trail; wins persist
    pub fn reset(&mut self, pos: Vec2) {
        self.body.reset(pos);
        self.trail.clear();
    }
}
