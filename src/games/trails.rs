//! Light-trail duel
//!
//! Two always-moving runners lay ever-growing trails; the first to touch a
//! trail loses the round. Movement is per frame; only the trail-growth
//! timer consumes `dt`.

use glam::Vec2;

use super::{PlayerId, RoundEvent, Runner};
use crate::input::FrameInput;
use crate::sim::collision::circle_hits_trail;
use crate::sim::rect::Rect;
use crate::sim::round::RoundState;
use crate::sim::trail::TrailCapacity;

/// Movement speed in pixels per frame
const PLAYER_SPEED: f32 = 5.0;
/// Side length of the player square
pub const PLAYER_SIZE: f32 = 30.0;
/// Collision radius of the player body
pub const PLAYER_RADIUS: f32 = 10.0;
/// Collision radius of a single trail point
pub const TRAIL_RADIUS: f32 = 3.0;
/// Trail capacity at round start
const START_TRAIL_LENGTH: usize = 10;
/// Hard cap on trail growth
const MAX_TRAIL_LENGTH: usize = 2000;
/// Trail capacity gained per second of round time
const GROWTH_PER_SECOND: f32 = 10.0;
/// Newest own-trail points excluded from self collision (the segment the
/// runner just laid cannot kill it)
const SELF_EXCLUSION: usize = 7;
/// Newest opposing-trail points excluded (grace for crossing paths)
const CROSS_EXCLUSION: usize = 4;

/// One trails session
#[derive(Debug, Clone)]
pub struct TrailsGame {
    pub players: [Runner; 2],
    pub round: RoundState,
    bounds: Rect,
    /// Round time driving trail growth; restarts and resumes reset it
    elapsed: f32,
}

impl TrailsGame {
    pub fn new(bounds: Rect) -> Self {
        let capacity = TrailCapacity::Growing {
            base: START_TRAIL_LENGTH,
            per_second: GROWTH_PER_SECOND,
            max: MAX_TRAIL_LENGTH,
        };
        let (s1, s2) = spawn_points(bounds);
        Self {
            players: [
                Runner::new(s1, PLAYER_SPEED, PLAYER_SIZE, capacity),
                Runner::new(s2, PLAYER_SPEED, PLAYER_SIZE, capacity),
            ],
            round: RoundState::new(),
            bounds,
            elapsed: 0.0,
        }
    }

    /// Fresh round: positions, directions and trails back to the session
    /// start; wins persist
    pub fn restart(&mut self) {
        let (s1, s2) = spawn_points(self.bounds);
        self.players[0].reset(s1);
        self.players[1].reset(s2);
        self.elapsed = 0.0;
        self.round.restart();
    }

    /// Re-enter the countdown after a pause, leaving the field as it is
    pub fn resume(&mut self) {
        self.elapsed = 0.0;
        self.round.reset_countdown();
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn scores(&self) -> (u32, u32) {
        (self.players[0].wins, self.players[1].wins)
    }

    /// Advance one frame. Physics is gated by the round machine; a
    /// terminal trail contact ends the round the same frame and credits
    /// the opponent.
    pub fn update(&mut self, input: &FrameInput, dt: f32) -> Option<RoundEvent> {
        self.elapsed += dt;
        if !self.round.advance(dt) {
            return None;
        }

        let [p1, p2] = &mut self.players;
        p1.body.steer_no_reversal(&input.p1);
        p2.body.steer_no_reversal(&input.p2);

        for player in &mut self.players {
            player.body.advance();
            player.body.clamp_to_bounds(self.bounds);
        }

        let elapsed = self.elapsed;
        for player in &mut self.players {
            let center = player.body.center();
            player.trail.push(center, elapsed);
        }

        if let Some(winner) = self.check_collisions() {
            self.players[winner.index()].wins += 1;
            self.round.finish();
            return Some(RoundEvent { winner });
        }
        None
    }

    /// First trail contact decides the round. Check order: player one
    /// against its own trail, then against player two's, then player two
    /// against player one's, then against its own.
    fn check_collisions(&self) -> Option<PlayerId> {
        let [p1, p2] = &self.players;
        let c1 = p1.body.center();
        let c2 = p2.body.center();

        if circle_hits_trail(
            c1,
            PLAYER_RADIUS,
            p1.trail.excluding_tail(SELF_EXCLUSION),
            TRAIL_RADIUS,
        ) || circle_hits_trail(
            c1,
            PLAYER_RADIUS,
            p2.trail.excluding_tail(CROSS_EXCLUSION),
            TRAIL_RADIUS,
        ) {
            return Some(PlayerId::Two);
        }
        if circle_hits_trail(
            c2,
            PLAYER_RADIUS,
            p1.trail.excluding_tail(CROSS_EXCLUSION),
            TRAIL_RADIUS,
        ) || circle_hits_trail(
            c2,
            PLAYER_RADIUS,
            p2.trail.excluding_tail(SELF_EXCLUSION),
            TRAIL_RADIUS,
        ) {
            return Some(PlayerId::One);
        }
        None
    }
}

fn spawn_points(bounds: Rect) -> (Vec2, Vec2) {
    let half = PLAYER_SIZE / 2.0;
    (
        Vec2::new(bounds.w / 4.0 - half, bounds.h / 2.0 - half),
        Vec2::new(3.0 * bounds.w / 4.0 - half, bounds.h / 2.0 - half),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::AxisInput;

    const DT: f32 = 1.0 / 60.0;

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 1200.0, 800.0)
    }

    fn skip_countdown(game: &mut TrailsGame) {
        game.update(&FrameInput::default(), 10.0);
    }

    #[test]
    fn test_frozen_during_countdown() {
        let mut game = TrailsGame::new(bounds());
        let before = game.players[0].body.pos;
        let input = FrameInput {
            p1: AxisInput {
                right: true,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(game.update(&input, DT).is_none());
        assert_eq!(game.players[0].body.pos, before);
        assert!(game.players[0].trail.is_empty());
    }

    #[test]
    fn test_players_move_and_lay_trails() {
        let mut game = TrailsGame::new(bounds());
        skip_countdown(&mut game);
        let before = game.players[0].body.pos;
        game.update(&FrameInput::default(), DT);
        // Default direction is up
        assert_eq!(game.players[0].body.pos, before + Vec2::new(0.0, -5.0));
        assert_eq!(game.players[0].trail.len(), 1);
    }

    #[test]
    fn test_self_collision_credits_opponent() {
        // Freeze player two far away and drive player one in a tight box
        // back onto its own trail, outside the 7-point exclusion window
        let mut game = TrailsGame::new(bounds());
        skip_countdown(&mut game);

        let hold = |up, down, left, right| FrameInput {
            p1: AxisInput {
                up,
                down,
                left,
                right,
            },
            p2: AxisInput::default(),
        };

        // Up the left side, across, down the right side, then back left
        // into the trail laid on the way up. Legs are long enough that the
        // revisited points are well past the exclusion window.
        let mut event = None;
        let legs = [
            (hold(true, false, false, false), 10),
            (hold(false, false, false, true), 4),
            (hold(false, true, false, false), 10),
            (hold(false, false, true, false), 6),
        ];
        'outer: for (input, frames) in legs {
            for _ in 0..frames {
                if let Some(e) = game.update(&input, DT) {
                    event = Some(e);
                    break 'outer;
                }
            }
        }

        let event = event.expect("closing the loop must end the round");
        assert_eq!(event.winner, PlayerId::Two);
        assert_eq!(game.scores(), (0, 1));
        assert!(game.round.is_round_over());

        // Terminal: further updates do nothing
        let frozen = game.players[0].body.pos;
        assert!(game.update(&FrameInput::default(), DT).is_none());
        assert_eq!(game.players[0].body.pos, frozen);
    }

    #[test]
    fn test_fresh_trail_segment_is_harmless() {
        // A runner moving in a straight line keeps overlapping its newest
        // trail points; the exclusion window must keep it alive
        let mut game = TrailsGame::new(bounds());
        skip_countdown(&mut game);
        for _ in 0..50 {
            assert!(game.update(&FrameInput::default(), DT).is_none());
        }
    }

    #[test]
    fn test_restart_preserves_scores() {
        let mut game = TrailsGame::new(bounds());
        skip_countdown(&mut game);
        game.players[1].wins = 3;
        game.round.finish();

        game.restart();
        assert_eq!(game.scores(), (0, 3));
        assert!(game.players[0].trail.is_empty());
        assert_eq!(game.round.countdown_remaining(), Some(3.0));
        let (s1, _) = spawn_points(bounds());
        assert_eq!(game.players[0].body.pos, s1);
    }

    #[test]
    fn test_trail_grows_with_round_time() {
        let mut game = TrailsGame::new(bounds());
        skip_countdown(&mut game);
        for _ in 0..300 {
            game.update(&FrameInput::default(), DT);
        }
        // Five seconds of play on top of the countdown: capacity is well
        // past the base but nowhere near the hard cap
        let len = game.players[0].trail.len();
        assert!(len > START_TRAIL_LENGTH, "trail should have grown: {len}");
        assert!(len < MAX_TRAIL_LENGTH);
    }
}
