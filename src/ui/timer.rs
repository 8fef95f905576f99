//! Repeating tick handle driven by the host event loop.
//!
//! The timer does not own a thread. The event loop asks for [`ScrollTimer::deadline`]
//! to size its poll timeout and calls [`ScrollTimer::fire`] after every wake-up.

use std::time::{Duration, Instant};

/// Default animation period for the overview marquee.
pub const DEFAULT_TICK: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct ScrollTimer {
    period: Duration,
    next_due: Option<Instant>,
}

impl ScrollTimer {
    /// A stopped timer with the given period.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Arm the timer; the first tick is due one period after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// When the next tick is due, if the timer is running.
    pub fn deadline(&self) -> Option<Instant> {
        self.next_due
    }

    /// Consume a due tick.
    ///
    /// Returns `true` at most once per call and re-arms one period after `now`,
    /// so a stalled loop does not replay missed ticks.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.period);
                true
            }
            _ => false,
        }
    }
}

impl Default for ScrollTimer {
    fn default() -> Self {
        Self::new(DEFAULT_TICK)
    }
}
