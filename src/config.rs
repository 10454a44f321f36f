use std::time::Duration;

use crate::constants::*;
use crate::error::{Error, Result};
use crate::state::Wrap;

/// Which input families a carousel listens to. Absent families are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bindings {
    pub directional: bool,
    pub indicators: Option<usize>, // Number of indicator controls wired up
    pub gestures: bool,
    pub keys: bool,
}

impl Bindings {
    pub fn none() -> Self {
        Self { directional: false, indicators: None, gestures: false, keys: false }
    }

    /// Every family bound, with one indicator per item.
    pub fn all(items: usize) -> Self {
        Self { directional: true, indicators: Some(items), gestures: true, keys: true }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    pub wrap: Wrap,
    pub transition: Duration,       // Shared by the gate and the renderer's animation
    pub autoplay: Option<Duration>, // Autoplay interval, `None` for manual navigation only
    pub swipe_threshold: f32,
    pub bindings: Bindings,
}

impl CarouselConfig {
    /// Manually navigated, circular slideshow with every input family bound.
    pub fn slideshow(items: usize) -> Self {
        Self {
            wrap: Wrap::Circular,
            transition: TRANSITION_DURATION,
            autoplay: None,
            swipe_threshold: SWIPE_THRESHOLD,
            bindings: Bindings::all(items),
        }
    }

    /// Auto-rotating screenshot carousel: no controls, hover pauses it.
    pub fn auto_rotating() -> Self {
        Self {
            wrap: Wrap::Circular,
            transition: Duration::ZERO,
            autoplay: Some(AUTOPLAY_INTERVAL),
            swipe_threshold: SWIPE_THRESHOLD,
            bindings: Bindings::none(),
        }
    }

    pub fn with_wrap(mut self, wrap: Wrap) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }

    pub fn with_autoplay(mut self, interval: Option<Duration>) -> Self {
        self.autoplay = interval;
        self
    }

    pub fn with_swipe_threshold(mut self, pixels: f32) -> Self {
        self.swipe_threshold = pixels;
        self
    }

    pub fn with_bindings(mut self, bindings: Bindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Checks the wiring against the number of items the carousel will hold.
    pub fn validate(&self, items: usize) -> Result<()> {
        if let Some(indicators) = self.bindings.indicators {
            if indicators != items {
                return Err(Error::IndicatorCountMismatch { indicators, items });
            }
        }
        if self.autoplay == Some(Duration::ZERO) {
            return Err(Error::ZeroAutoplayInterval);
        }
        if !self.swipe_threshold.is_finite() || self.swipe_threshold <= 0.0 {
            return Err(Error::InvalidSwipeThreshold(self.swipe_threshold));
        }
        Ok(())
    }
}
