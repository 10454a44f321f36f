use std::time::Duration;

use tracing::trace;

use crate::config::Bindings;
use crate::cursor::CursorController;
use crate::state::IndexChange;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
}

/// Raw input from the hosting UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Prev,
    Next,
    Indicator(usize),
    PointerDown { x: f32 },
    PointerUp { x: f32 },
    PointerCancel,
    PointerEnter,
    PointerLeave,
    Key(Key),
}

/// Direction decided by a completed gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Next, // Leftward motion
    Prev, // Rightward motion
}

/// Decides whether a horizontal drag from `start_x` to `end_x` is a swipe.
pub fn classify_swipe(start_x: f32, end_x: f32, threshold: f32) -> Option<Swipe> {
    let delta = start_x - end_x;
    if delta.abs() <= threshold {
        return None;
    }
    if delta > 0.0 { Some(Swipe::Next) } else { Some(Swipe::Prev) }
}

/// Maps the bound input families onto cursor calls.
#[derive(Debug, Clone)]
pub struct InputAdapter {
    bindings: Bindings,
    swipe_threshold: f32,
    drag_start: Option<f32>,
}

impl InputAdapter {
    pub fn new(bindings: Bindings, swipe_threshold: f32) -> Self {
        Self { bindings, swipe_threshold, drag_start: None }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_start.is_some()
    }

    /// Applies a navigation input. Hover and escape are not navigation and are
    /// left to the owner.
    pub fn apply(&mut self, input: Input, cursor: &mut CursorController, now: Duration) -> Option<IndexChange> {
        match input {
            Input::Prev if self.bindings.directional => cursor.prev(now),
            Input::Next if self.bindings.directional => cursor.next(now),
            Input::Indicator(index) if self.bindings.indicators.is_some() => cursor.goto(index, now),
            Input::PointerDown { x } if self.bindings.gestures => {
                self.drag_start = Some(x);
                None
            }
            Input::PointerUp { x } if self.bindings.gestures => {
                let start = self.drag_start.take()?;
                match classify_swipe(start, x, self.swipe_threshold)? {
                    Swipe::Next => cursor.next(now),
                    Swipe::Prev => cursor.prev(now),
                }
            }
            Input::PointerCancel => {
                self.drag_start = None;
                None
            }
            Input::Key(Key::ArrowRight) if self.bindings.keys => cursor.next(now),
            Input::Key(Key::ArrowLeft) if self.bindings.keys => cursor.prev(now),
            other => {
                trace!(?other, "input not bound");
                None
            }
        }
    }
}
