use std::time::Duration;

use crate::constants::COUNTER_DURATION;

/// Stat counter that counts up to its target once it first comes into view.
#[derive(Debug, Clone)]
pub struct CountUp {
    target: u64,
    duration: Duration,
    started_at: Option<Duration>,
}

impl CountUp {
    pub fn new(target: u64) -> Self {
        Self { target, duration: COUNTER_DURATION, started_at: None }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_counted(&self) -> bool {
        self.started_at.is_some()
    }

    /// Starts counting at `now`. Only the first trigger counts.
    pub fn trigger(&mut self, now: Duration) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Linear progress toward the target, rounded down.
    pub fn value(&self, now: Duration) -> u64 {
        let Some(start) = self.started_at else {
            return 0;
        };
        let elapsed = now.saturating_sub(start);
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.target;
        }
        let counted = u128::from(self.target) * elapsed.as_nanos() / self.duration.as_nanos();
        counted.min(u128::from(self.target)) as u64
    }
}
