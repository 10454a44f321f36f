use std::time::Duration;

use tracing::debug;

use crate::state::AutoplayState;

/// Recurring timer that asks the carousel to advance every `interval`.
#[derive(Debug, Clone)]
pub struct AutoplayDriver {
    interval: Duration,
    state: AutoplayState,
}

impl AutoplayDriver {
    pub fn new(interval: Duration) -> Self {
        Self { interval, state: AutoplayState::Stopped }
    }

    pub fn state(&self) -> AutoplayState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, AutoplayState::Running { .. })
    }

    /// Starts the timer. Already running keeps the current schedule.
    pub fn start(&mut self, now: Duration) {
        if self.is_running() {
            return;
        }
        debug!(interval_ms = self.interval.as_millis() as u64, "autoplay started");
        self.state = AutoplayState::Running { next_tick: now + self.interval };
    }

    /// Cancels the timer if one is running.
    pub fn stop(&mut self) {
        if self.is_running() {
            debug!("autoplay stopped");
        }
        self.state = AutoplayState::Stopped;
    }

    pub fn next_tick(&self) -> Option<Duration> {
        match self.state {
            AutoplayState::Running { next_tick } => Some(next_tick),
            AutoplayState::Stopped => None,
        }
    }

    /// Consumes the tick due at or before `now` and returns its scheduled
    /// time. Ticks missed while the host stalled are skipped, not queued: the
    /// next one lands on the first slot of the original period after `now`.
    pub fn poll(&mut self, now: Duration) -> Option<Duration> {
        match self.state {
            AutoplayState::Running { next_tick } if now >= next_tick => {
                let period = self.interval.as_nanos();
                let missed = (now - next_tick).as_nanos() / period;
                let skip = Duration::from_nanos(((missed + 1) * period) as u64);
                if missed > 0 {
                    debug!(missed = missed as u64, "autoplay skipped overdue ticks");
                }
                self.state = AutoplayState::Running { next_tick: next_tick + skip };
                Some(next_tick)
            }
            _ => None,
        }
    }
}
