//! Deterministic simulation components
//!
//! Everything the minigame sessions are built from lives here. This module
//! must stay pure and deterministic:
//! - Time only enters as the `dt` a caller passes in
//! - Seeded RNG only (owned by the sessions, never ambient)
//! - No rendering or platform dependencies
//!
//! Pause/cancel interrupts are host concerns: a paused session is simply not
//! advanced.

pub mod body;
pub mod collision;
pub mod rect;
pub mod round;
pub mod trail;

pub use body::{Ball, Mover, Paddle};
pub use collision::{GoalSide, PaddleSide, reflect};
pub use rect::Rect;
pub use round::{RoundPhase, RoundState};
pub use trail::{Trail, TrailCapacity};
