use std::time::Duration;

use tracing::{debug, trace};

use crate::gate::TransitionGate;
use crate::state::{ControlState, IndexChange, Wrap};

/// Handle returned by [`CursorController::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(IndexChange)>;

/// Bounded index into a fixed-length sequence, guarded by a transition gate.
pub struct CursorController {
    len: usize,
    cursor: usize,
    wrap: Wrap,
    gate: TransitionGate,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl CursorController {
    pub fn new(len: usize, wrap: Wrap, transition: Duration) -> Self {
        Self {
            len,
            cursor: 0,
            wrap,
            gate: TransitionGate::new(transition),
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Places the cursor on `index` (clamped) without starting a transition.
    pub fn starting_at(mut self, index: usize) -> Self {
        self.cursor = index.min(self.len.saturating_sub(1));
        self
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.cursor
    }

    pub fn gate(&self) -> &TransitionGate {
        &self.gate
    }

    pub fn is_in_flight(&self, now: Duration) -> bool {
        self.gate.is_in_flight(now)
    }

    /// Registers a listener called synchronously after every accepted change.
    pub fn subscribe(&mut self, listener: impl FnMut(IndexChange) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the listener was already gone.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn goto(&mut self, index: usize, now: Duration) -> Option<IndexChange> {
        if index == self.cursor || index >= self.len {
            trace!(index, cursor = self.cursor, len = self.len, "ignoring navigation request");
            return None;
        }
        if self.gate.is_in_flight(now) {
            trace!(index, "transition in flight, ignoring navigation request");
            return None;
        }

        let change = IndexChange { from: self.cursor, to: index };
        self.cursor = index;
        self.gate.arm(now);
        debug!(from = change.from, to = change.to, "cursor moved");

        for (_, listener) in self.listeners.iter_mut() {
            listener(change);
        }
        Some(change)
    }

    pub fn next(&mut self, now: Duration) -> Option<IndexChange> {
        let index = self.next_index()?;
        self.goto(index, now)
    }

    pub fn prev(&mut self, now: Duration) -> Option<IndexChange> {
        let index = self.prev_index()?;
        self.goto(index, now)
    }

    fn next_index(&self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        match self.wrap {
            Wrap::Circular => Some((self.cursor + 1) % self.len),
            Wrap::Bounded => (self.cursor + 1 < self.len).then_some(self.cursor + 1),
        }
    }

    fn prev_index(&self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        match self.wrap {
            Wrap::Circular => Some((self.cursor + self.len - 1) % self.len),
            Wrap::Bounded => self.cursor.checked_sub(1),
        }
    }

    /// Enabled state of the directional controls. Only the bounded variant
    /// disables a direction, at its edge.
    pub fn controls(&self) -> ControlState {
        let movable = self.len >= 2;
        match self.wrap {
            Wrap::Circular => ControlState { prev_enabled: movable, next_enabled: movable },
            Wrap::Bounded => ControlState {
                prev_enabled: movable && self.cursor > 0,
                next_enabled: movable && self.cursor + 1 < self.len,
            },
        }
    }

    /// One flag per item, true for the active indicator.
    pub fn indicators(&self) -> Vec<bool> {
        (0..self.len).map(|i| i == self.cursor).collect()
    }

    /// Fires the gate's deferred clear if it is due.
    pub fn tick(&mut self, now: Duration) -> bool {
        self.gate.poll(now)
    }

    pub(crate) fn pending_clear(&self) -> Option<Duration> {
        self.gate.deadline()
    }

    /// Cancels the pending clear and releases every listener.
    pub(crate) fn release(&mut self) {
        self.gate.cancel();
        self.listeners.clear();
    }
}

impl std::fmt::Debug for CursorController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CursorController")
            .field("len", &self.len)
            .field("cursor", &self.cursor)
            .field("wrap", &self.wrap)
            .field("gate", &self.gate)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
