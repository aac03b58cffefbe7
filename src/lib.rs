//! Duel Arcade - a two-player arcade suite
//!
//! Four minigames behind one menu shell:
//! - Trails: light-trail duel, touch a trail and the opponent takes the round
//! - Pong: the classic
//! - Trail Pong: pong where the players are trail-laying runners
//! - Connect Four: turn-based four-in-a-row
//!
//! Core modules:
//! - `sim`: deterministic simulation components shared by the minigames
//! - `games`: one session type per minigame, built from `sim`
//! - `ui`: renderer-agnostic menu model and theme values
//! - `app`: the macroquad host (screen dispatch, overlays, drawing)

pub mod app;
pub mod games;
pub mod input;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::Settings;
