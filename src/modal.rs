use std::time::Duration;

use tracing::{debug, info};

use crate::cursor::CursorController;
use crate::input::{Input, Key};
use crate::state::{ControlState, IndexChange, Wrap};

/// Page-level state an open modal suspends.
pub trait PageHost {
    fn suspend_scroll(&mut self);
    fn restore_scroll(&mut self);
}

impl<T: PageHost + ?Sized> PageHost for &mut T {
    fn suspend_scroll(&mut self) {
        (**self).suspend_scroll();
    }

    fn restore_scroll(&mut self) {
        (**self).restore_scroll();
    }
}

/// Suspends page scroll for as long as it lives.
#[derive(Debug)]
pub struct ScrollLock<P: PageHost> {
    host: Option<P>,
}

impl<P: PageHost> ScrollLock<P> {
    pub fn acquire(mut host: P) -> Self {
        host.suspend_scroll();
        Self { host: Some(host) }
    }

    /// Restores scroll now and hands the host back.
    pub fn release(mut self) -> Option<P> {
        let mut host = self.host.take()?;
        host.restore_scroll();
        Some(host)
    }
}

impl<P: PageHost> Drop for ScrollLock<P> {
    fn drop(&mut self) {
        if let Some(host) = self.host.as_mut() {
            host.restore_scroll();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: String,
    pub caption: String,
}

impl GalleryImage {
    pub fn new(src: impl Into<String>, caption: impl Into<String>) -> Self {
        Self { src: src.into(), caption: caption.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    CloseControl,
    Backdrop,
    Escape,
}

/// Full-screen preview over a gallery, navigated without wrapping.
#[derive(Debug)]
pub struct ImageModal<P: PageHost> {
    images: Vec<GalleryImage>,
    cursor: CursorController,
    lock: Option<ScrollLock<P>>,
    closed_by: Option<CloseReason>,
}

impl<P: PageHost> ImageModal<P> {
    /// Opens on `start` (clamped into the gallery) and suspends page scroll.
    pub fn open(images: Vec<GalleryImage>, start: usize, host: P, transition: Duration) -> Self {
        let cursor = CursorController::new(images.len(), Wrap::Bounded, transition).starting_at(start);
        info!(images = images.len(), start = cursor.current(), "image modal opened");
        Self {
            images,
            cursor,
            lock: Some(ScrollLock::acquire(host)),
            closed_by: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.closed_by.is_none()
    }

    pub fn closed_by(&self) -> Option<CloseReason> {
        self.closed_by
    }

    pub fn current(&self) -> usize {
        self.cursor.current()
    }

    pub fn image(&self) -> Option<&GalleryImage> {
        self.images.get(self.cursor.current())
    }

    /// The page host, while the modal still holds it.
    pub fn host(&self) -> Option<&P> {
        self.lock.as_ref().and_then(|lock| lock.host.as_ref())
    }

    pub fn caption(&self) -> &str {
        self.image().map_or("", |image| image.caption.as_str())
    }

    /// Position label such as `3 / 7`.
    pub fn counter_label(&self) -> String {
        if self.images.is_empty() {
            return String::new();
        }
        format!("{} / {}", self.cursor.current() + 1, self.images.len())
    }

    pub fn controls(&self) -> ControlState {
        self.cursor.controls()
    }

    pub fn prev(&mut self, now: Duration) -> Option<IndexChange> {
        if !self.is_open() {
            return None;
        }
        self.cursor.tick(now);
        self.cursor.prev(now)
    }

    pub fn next(&mut self, now: Duration) -> Option<IndexChange> {
        if !self.is_open() {
            return None;
        }
        self.cursor.tick(now);
        self.cursor.next(now)
    }

    /// Arrow keys navigate, `Escape` closes. Other inputs are ignored.
    pub fn handle(&mut self, input: Input, now: Duration) -> Option<IndexChange> {
        match input {
            Input::Prev | Input::Key(Key::ArrowLeft) => self.prev(now),
            Input::Next | Input::Key(Key::ArrowRight) => self.next(now),
            Input::Key(Key::Escape) => {
                self.close(CloseReason::Escape);
                None
            }
            _ => None,
        }
    }

    /// Closes the modal and restores page scroll. Returns the host the first
    /// time; later calls are no-ops.
    pub fn close(&mut self, reason: CloseReason) -> Option<P> {
        if !self.is_open() {
            return None;
        }
        self.closed_by = Some(reason);
        self.cursor.release();
        debug!(?reason, "image modal closed");
        self.lock.take().and_then(ScrollLock::release)
    }
}
