/// Repeating timer driven by elapsed wall time.
///
/// The frame loop feeds it `dt` every frame; it reports how many whole
/// periods elapsed so the caller can dispatch that many ticks.  A stopped
/// timer never reports a tick, so stopping it is all it takes to cancel
/// pending callbacks.

use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct PeriodicTimer {
    period: Duration,
    elapsed: Duration,
    active: bool,
}

impl PeriodicTimer {
    /// `period` must be non-zero; `GameConfig::validate` guarantees it.
    pub fn new(period: Duration) -> Self {
        PeriodicTimer {
            period,
            elapsed: Duration::ZERO,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// (Re)arm the timer; the first tick fires one full period from now.
    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.active = true;
    }

    pub fn stop(&mut self) {
        self.active = false;
        self.elapsed = Duration::ZERO;
    }

    /// Returns the number of ticks that became due during `dt`.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if !self.active || self.period.is_zero() {
            return 0;
        }
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fired += 1;
        }
        fired
    }
}
