//! Round clock and phase state machine
//!
//! Countdown (3 s) -> Playing (round duration) -> GameOver. Both timers step
//! once per second; only an external restart leaves GameOver.

use serde::{Deserialize, Serialize};

use super::state::RoundPhase;
use crate::consts::COUNTDOWN_SECONDS;

/// What one elapsed second did to the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockTick {
    /// GameOver: nothing runs
    Idle,
    Countdown { remaining: u32 },
    /// Countdown hit zero, Playing begins
    Started,
    Remaining { secs: u32 },
    /// Round time ran out, GameOver begins
    Expired,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundClock {
    pub phase: RoundPhase,
    /// Seconds left in the pre-round countdown
    pub countdown: u32,
    /// Seconds left in the round
    pub time_left: u32,
}

impl RoundClock {
    pub fn new(round_secs: u32) -> Self {
        Self {
            phase: RoundPhase::Countdown,
            countdown: COUNTDOWN_SECONDS,
            time_left: round_secs,
        }
    }

    /// Advance whichever timer the current phase runs by one second
    pub fn second_elapsed(&mut self) -> ClockTick {
        match self.phase {
            RoundPhase::Countdown => {
                self.countdown = self.countdown.saturating_sub(1);
                if self.countdown == 0 {
                    self.phase = RoundPhase::Playing;
                    ClockTick::Started
                } else {
                    ClockTick::Countdown {
                        remaining: self.countdown,
                    }
                }
            }
            RoundPhase::Playing => {
                if self.time_left <= 1 {
                    self.time_left = 0;
                    self.phase = RoundPhase::GameOver;
                    ClockTick::Expired
                } else {
                    self.time_left -= 1;
                    ClockTick::Remaining {
                        secs: self.time_left,
                    }
                }
            }
            RoundPhase::GameOver => ClockTick::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_reaches_playing_after_three_seconds() {
        let mut clock = RoundClock::new(30);
        assert_eq!(clock.second_elapsed(), ClockTick::Countdown { remaining: 2 });
        assert_eq!(clock.second_elapsed(), ClockTick::Countdown { remaining: 1 });
        assert_eq!(clock.phase, RoundPhase::Countdown);
        assert_eq!(clock.second_elapsed(), ClockTick::Started);
        assert_eq!(clock.phase, RoundPhase::Playing);
        // Round time untouched by the countdown
        assert_eq!(clock.time_left, 30);
    }

    #[test]
    fn test_round_expires_after_duration() {
        let mut clock = RoundClock::new(30);
        clock.phase = RoundPhase::Playing;

        for expected in (1..30).rev() {
            assert_eq!(clock.second_elapsed(), ClockTick::Remaining { secs: expected });
        }
        assert_eq!(clock.phase, RoundPhase::Playing);
        assert_eq!(clock.second_elapsed(), ClockTick::Expired);
        assert_eq!(clock.phase, RoundPhase::GameOver);
        assert_eq!(clock.time_left, 0);
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut clock = RoundClock::new(1);
        clock.phase = RoundPhase::Playing;
        assert_eq!(clock.second_elapsed(), ClockTick::Expired);
        for _ in 0..5 {
            assert_eq!(clock.second_elapsed(), ClockTick::Idle);
            assert_eq!(clock.phase, RoundPhase::GameOver);
        }
    }
}
