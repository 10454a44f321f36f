use std::time::Duration;

use crate::state::TransitionState;

/// Cooldown after an accepted cursor change. While in flight every
/// navigation request is rejected.
#[derive(Debug, Clone)]
pub struct TransitionGate {
    duration: Duration,
    state: TransitionState,
}

impl TransitionGate {
    pub fn new(duration: Duration) -> Self {
        Self { duration, state: TransitionState::Idle }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// True while a transition started before `now` has not yet run its full duration.
    pub fn is_in_flight(&self, now: Duration) -> bool {
        match self.state {
            TransitionState::InFlight { deadline } => now < deadline,
            TransitionState::Idle => false,
        }
    }

    /// Arms the gate at `now`. A zero duration never arms it.
    pub fn arm(&mut self, now: Duration) {
        if self.duration.is_zero() {
            return;
        }
        self.state = TransitionState::InFlight { deadline: now + self.duration };
    }

    /// Pending one-shot clear, if any.
    pub fn deadline(&self) -> Option<Duration> {
        match self.state {
            TransitionState::InFlight { deadline } => Some(deadline),
            TransitionState::Idle => None,
        }
    }

    /// Fires the deferred clear once its deadline is reached. Returns true if it fired.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.state {
            TransitionState::InFlight { deadline } if now >= deadline => {
                self.state = TransitionState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Drops a pending clear without waiting for it.
    pub fn cancel(&mut self) {
        self.state = TransitionState::Idle;
    }
}
