//! Round lifecycle: countdown, play, round over
//!
//! One `RoundState` per minigame session. Pause is orthogonal and owned by
//! the host shell: a paused session is simply not advanced, and a resume
//! re-enters a fresh countdown rather than continuing the old one.

/// Countdown length at round start and after a resume (seconds)
pub const COUNTDOWN_SECS: f32 = 3.0;

/// Phase of the current round
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundPhase {
    /// Pre-round freeze; physics does not run
    CountingDown { remaining: f32 },
    /// Full physics every frame
    Playing,
    /// Terminal until the host requests a restart
    RoundOver,
}

/// Per-round state machine
#[derive(Debug, Clone, Copy)]
pub struct RoundState {
    phase: RoundPhase,
}

impl RoundState {
    pub fn new() -> Self {
        Self {
            phase: RoundPhase::CountingDown {
                remaining: COUNTDOWN_SECS,
            },
        }
    }

    /// Advance the countdown; returns true if physics should run this
    /// frame. The switch to `Playing` lands on the frame *after* the
    /// countdown is clamped to zero, so the final countdown tick is still
    /// rendered frozen.
    pub fn advance(&mut self, dt: f32) -> bool {
        match self.phase {
            RoundPhase::CountingDown { remaining } => {
                if remaining > 0.0 {
                    self.phase = RoundPhase::CountingDown {
                        remaining: (remaining - dt).max(0.0),
                    };
                    false
                } else {
                    self.phase = RoundPhase::Playing;
                    true
                }
            }
            RoundPhase::Playing => true,
            RoundPhase::RoundOver => false,
        }
    }

    /// End the round; terminal until `restart`
    pub fn finish(&mut self) {
        self.phase = RoundPhase::RoundOver;
    }

    /// Re-enter the countdown for a round restart. A restart while already
    /// counting down is ignored.
    pub fn restart(&mut self) {
        if !matches!(self.phase, RoundPhase::CountingDown { .. }) {
            self.reset_countdown();
        }
    }

    /// Unconditionally re-enter a full countdown. A resume after a pause is
    /// a fresh countdown, never a continuation.
    pub fn reset_countdown(&mut self) {
        self.phase = RoundPhase::CountingDown {
            remaining: COUNTDOWN_SECS,
        };
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.phase, RoundPhase::Playing)
    }

    pub fn is_round_over(&self) -> bool {
        matches!(self.phase, RoundPhase::RoundOver)
    }

    /// Remaining countdown seconds, while counting down
    pub fn countdown_remaining(&self) -> Option<f32> {
        match self.phase {
            RoundPhase::CountingDown { remaining } => Some(remaining),
            _ => None,
        }
    }

    /// Countdown number to display: truncated seconds plus one (3, 2, 1)
    pub fn countdown_display(&self) -> Option<u32> {
        self.countdown_remaining()
            .filter(|r| *r > 0.0)
            .map(|r| r as u32 + 1)
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}
