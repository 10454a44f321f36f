use std::time::Duration;

/// What happens at the ends of the sequence.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Wrap {
    #[default]
    Circular, // Last wraps to first and first to last
    Bounded,  // Stops at the ends, edge control disabled
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum TransitionState {
    #[default]
    Idle,
    InFlight { deadline: Duration }, // Cleared once `now >= deadline`
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum AutoplayState {
    #[default]
    Stopped,
    Running { next_tick: Duration },
}

/// An accepted cursor move, handed to listeners and returned to the caller.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct IndexChange {
    pub from: usize,
    pub to: usize,
}

/// Enabled state of the previous/next controls.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ControlState {
    pub prev_enabled: bool,
    pub next_enabled: bool,
}
