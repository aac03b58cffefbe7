//! Per-frame input snapshots
//!
//! The host polls the keyboard once per frame and hands the sessions plain
//! data; the simulation never touches the input APIs. Player one is on
//! WASD, player two on the arrow keys.

use macroquad::prelude::{KeyCode, is_key_down, is_key_pressed};

use crate::games::PlayerId;

/// Held state of one player's movement keys
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Movement snapshot for both players
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub p1: AxisInput,
    pub p2: AxisInput,
}

/// Edge-triggered turn commands for connect four
#[derive(Debug, Clone, Copy, Default)]
pub struct TurnInput {
    pub left: bool,
    pub right: bool,
    pub drop: bool,
}

/// Poll the held movement keys for both players
pub fn poll_movement() -> FrameInput {
    FrameInput {
        p1: AxisInput {
            up: is_key_down(KeyCode::W),
            down: is_key_down(KeyCode::S),
            left: is_key_down(KeyCode::A),
            right: is_key_down(KeyCode::D),
        },
        p2: AxisInput {
            up: is_key_down(KeyCode::Up),
            down: is_key_down(KeyCode::Down),
            left: is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::Right),
        },
    }
}

/// Poll this frame's turn commands for the given player (key presses, not
/// holds, so one tap is one move)
pub fn poll_turn(player: PlayerId) -> TurnInput {
    match player {
        PlayerId::One => TurnInput {
            left: is_key_pressed(KeyCode::A),
            right: is_key_pressed(KeyCode::D),
            drop: is_key_pressed(KeyCode::S),
        },
        PlayerId::Two => TurnInput {
            left: is_key_pressed(KeyCode::Left),
            right: is_key_pressed(KeyCode::Right),
            drop: is_key_pressed(KeyCode::Down),
        },
    }
}
