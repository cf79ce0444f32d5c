//! Self-rearming one-shot clock for a round.
//!
//! The host owns the timer and feeds it the current instant. Each arm
//! schedules exactly one deadline; after it fires the timer is idle until
//! armed again, so at most one tick is ever outstanding.

use std::time::{Duration, Instant};

use crate::game::DiceGame;

/// A single outstanding deadline that must be re-armed after firing.
#[derive(Debug, Clone)]
pub struct RoundTimer {
    period: Duration,
    deadline: Option<Instant>,
}

impl RoundTimer {
    /// Create a disarmed timer with the given period.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            deadline: None,
        }
    }

    /// The configured period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Schedule the next firing one period after `now`, replacing any
    /// pending deadline.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.period);
    }

    /// Drop the pending deadline.
    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is pending.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left until the deadline, or `None` when disarmed.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// Consume the deadline if it has passed. Returns true at most once per arm.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Fire, tick the game, and re-arm while the round is still in progress.
    ///
    /// Re-arming is based on `now`, so a late poll delays later ticks
    /// instead of bursting to catch up.
    pub fn drive(&mut self, game: &mut DiceGame, now: Instant) -> bool {
        if !self.fire(now) {
            return false;
        }
        if !game.tick().won() {
            self.arm(now);
        }
        true
    }
}

impl Default for RoundTimer {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EngineConfig;
    use crate::die::DIE_COUNT;

    const SEC: Duration = Duration::from_secs(1);

    fn game() -> DiceGame {
        DiceGame::new(&EngineConfig::default().with_seed(9))
    }

    #[test]
    fn starts_disarmed() {
        let t = RoundTimer::default();
        assert!(!t.is_armed());
        assert_eq!(t.remaining(Instant::now()), None);
        assert_eq!(t.period(), SEC);
    }

    #[test]
    fn fires_once_per_arm() {
        let start = Instant::now();
        let mut t = RoundTimer::new(SEC);
        t.arm(start);
        assert!(!t.fire(start + Duration::from_millis(999)));
        assert!(t.fire(start + SEC));
        assert!(!t.fire(start + SEC * 5));
        assert!(!t.is_armed());
    }

    #[test]
    fn rearm_replaces_deadline() {
        let start = Instant::now();
        let mut t = RoundTimer::new(SEC);
        t.arm(start);
        t.arm(start + Duration::from_millis(500));
        assert!(!t.fire(start + SEC));
        assert!(t.fire(start + Duration::from_millis(1500)));
    }

    #[test]
    fn remaining_saturates() {
        let start = Instant::now();
        let mut t = RoundTimer::new(SEC);
        t.arm(start);
        assert_eq!(t.remaining(start), Some(SEC));
        assert_eq!(t.remaining(start + SEC * 3), Some(Duration::ZERO));
    }

    #[test]
    fn disarm_cancels() {
        let start = Instant::now();
        let mut t = RoundTimer::new(SEC);
        t.arm(start);
        t.disarm();
        assert!(!t.fire(start + SEC));
    }

    #[test]
    fn drive_ticks_and_rearms() {
        let start = Instant::now();
        let mut g = game();
        let mut t = RoundTimer::new(SEC);
        t.arm(start);
        for n in 1..=5u32 {
            assert!(t.drive(&mut g, start + SEC * n));
            assert!(t.is_armed());
        }
        assert_eq!(g.state().elapsed_seconds(), 5);
        assert!(!g.state().won());
    }

    #[test]
    fn drive_before_deadline_does_nothing() {
        let start = Instant::now();
        let mut g = game();
        let mut t = RoundTimer::new(SEC);
        t.arm(start);
        assert!(!t.drive(&mut g, start));
        assert_eq!(g.state().elapsed_seconds(), 0);
    }

    #[test]
    fn drive_stops_rearming_once_won() {
        let start = Instant::now();
        let mut g = game();
        let mut t = RoundTimer::new(SEC);
        t.arm(start);

        // Freeze dice until a win: freeze, then reroll the rest.
        let target = g.state().dice()[0].value;
        let mut rolls = 0;
        while !g.state().won() {
            for i in 0..DIE_COUNT {
                let die = g.state().dice()[i];
                if !die.frozen && die.value == target {
                    g.toggle_freeze(i).unwrap();
                }
            }
            if !g.state().won() {
                g.roll_all();
                rolls += 1;
                assert!(rolls < 1000);
            }
        }

        assert!(t.drive(&mut g, start + SEC));
        assert!(!t.is_armed());
        assert_eq!(g.state().elapsed_seconds(), 1);
    }
}
