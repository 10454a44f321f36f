use std::time::Duration;

use tracing::{debug, info};

use crate::autoplay::AutoplayDriver;
use crate::config::CarouselConfig;
use crate::cursor::{CursorController, ListenerId};
use crate::error::Result;
use crate::input::{Input, InputAdapter};
use crate::state::{ControlState, IndexChange};

/// One attached gallery region: cursor, inputs and optional autoplay.
///
/// Time is the `Duration` elapsed since the region was attached; the host
/// passes it to every call and advances it with [`Carousel::tick`]. Dropping
/// the carousel (or calling [`Carousel::detach`]) cancels its pending
/// transition clear and autoplay timer and releases its listeners.
#[derive(Debug)]
pub struct Carousel {
    cursor: CursorController,
    input: InputAdapter,
    autoplay: Option<AutoplayDriver>,
    attached: bool,
}

impl Carousel {
    /// Attaches a carousel over `len` items. Autoplay, when configured, starts
    /// immediately.
    pub fn attach(len: usize, config: &CarouselConfig) -> Result<Self> {
        config.validate(len)?;

        let mut autoplay = config.autoplay.map(AutoplayDriver::new);
        if len >= 2 {
            if let Some(driver) = autoplay.as_mut() {
                driver.start(Duration::ZERO);
            }
        }

        info!(len, wrap = ?config.wrap, transition_ms = config.transition.as_millis() as u64, "carousel attached");
        Ok(Self {
            cursor: CursorController::new(len, config.wrap, config.transition),
            input: InputAdapter::new(config.bindings, config.swipe_threshold),
            autoplay,
            attached: true,
        })
    }

    pub fn current(&self) -> usize {
        self.cursor.current()
    }

    pub fn len(&self) -> usize {
        self.cursor.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cursor.is_empty()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_in_flight(&self, now: Duration) -> bool {
        self.cursor.is_in_flight(now)
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.as_ref().is_some_and(AutoplayDriver::is_running)
    }

    pub fn controls(&self) -> ControlState {
        self.cursor.controls()
    }

    pub fn indicators(&self) -> Vec<bool> {
        self.cursor.indicators()
    }

    /// Transition length shared by the gate and whatever animates the slides.
    pub fn transition(&self) -> Duration {
        self.cursor.gate().duration()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(IndexChange) + 'static) -> ListenerId {
        self.cursor.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.cursor.unsubscribe(id)
    }

    /// Feeds one input at `now`, after running every deadline that is due.
    ///
    /// Returns only the change made by `input`. An autoplay advance that came
    /// due before `now` is applied and reaches listeners, but is not returned;
    /// hosts that track changes through return values call [`Carousel::tick`]
    /// first.
    pub fn handle(&mut self, input: Input, now: Duration) -> Option<IndexChange> {
        if !self.attached {
            return None;
        }
        self.tick(now);

        match input {
            Input::PointerEnter => {
                self.pause();
                None
            }
            Input::PointerLeave => {
                self.resume(now);
                None
            }
            other => self.input.apply(other, &mut self.cursor, now),
        }
    }

    /// Stops autoplay, if this carousel has one.
    pub fn pause(&mut self) {
        if let Some(driver) = self.autoplay.as_mut() {
            driver.stop();
        }
    }

    /// Restarts autoplay one full interval from `now`.
    pub fn resume(&mut self, now: Duration) {
        if !self.attached || self.cursor.len() < 2 {
            return;
        }
        if let Some(driver) = self.autoplay.as_mut() {
            driver.start(now);
        }
    }

    /// Runs every gate clear and autoplay tick due at or before `now`, in
    /// timestamp order. A clear and a tick on the same instant run clear first.
    /// Autoplay fires at most once per call; ticks missed during a stall are
    /// dropped.
    pub fn tick(&mut self, now: Duration) -> Vec<IndexChange> {
        let mut changes = Vec::new();
        if !self.attached {
            return changes;
        }

        loop {
            let clear = self.cursor.pending_clear().filter(|at| *at <= now);
            let advance = self.autoplay.as_ref().and_then(AutoplayDriver::next_tick).filter(|at| *at <= now);

            match (clear, advance) {
                (Some(clear_at), Some(advance_at)) if clear_at <= advance_at => {
                    self.cursor.tick(clear_at);
                }
                (Some(clear_at), None) => {
                    self.cursor.tick(clear_at);
                }
                (_, Some(advance_at)) => {
                    if let Some(driver) = self.autoplay.as_mut() {
                        driver.poll(now);
                    }
                    changes.extend(self.cursor.next(advance_at));
                }
                (None, None) => break,
            }
        }
        changes
    }

    /// Cancels pending timers and releases listeners. Further input and ticks
    /// are ignored.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        self.cursor.release();
        if let Some(driver) = self.autoplay.as_mut() {
            driver.stop();
        }
        debug!("carousel detached");
    }
}

impl Drop for Carousel {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::config::Bindings;
    use crate::input::Key;
    use crate::state::Wrap;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn rotating(len: usize) -> Carousel {
        Carousel::attach(len, &CarouselConfig::auto_rotating()).unwrap()
    }

    #[test]
    fn autoplay_advances_every_interval() {
        let mut carousel = rotating(3);
        assert!(carousel.tick(ms(2999)).is_empty());
        assert_eq!(carousel.tick(ms(3000)), vec![IndexChange { from: 0, to: 1 }]);
        assert_eq!(carousel.tick(ms(6000)), vec![IndexChange { from: 1, to: 2 }]);
        assert_eq!(carousel.tick(ms(9000)), vec![IndexChange { from: 2, to: 0 }]);
    }

    #[test]
    fn stalled_host_advances_once() {
        let mut carousel = rotating(4);
        assert_eq!(carousel.tick(ms(30_000)), vec![IndexChange { from: 0, to: 1 }]);

        // the original period is kept: next slot after 30s is 33s
        assert!(carousel.tick(ms(32_999)).is_empty());
        assert_eq!(carousel.tick(ms(33_000)), vec![IndexChange { from: 1, to: 2 }]);
    }

    #[test]
    fn stalled_slideshow_advances_once() {
        let config = CarouselConfig::slideshow(5)
            .with_transition(ms(1200))
            .with_autoplay(Some(ms(3000)));
        let mut carousel = Carousel::attach(5, &config).unwrap();

        assert_eq!(carousel.tick(ms(30_000)).len(), 1);
        assert_eq!(carousel.current(), 1);
        assert_eq!(carousel.transition(), ms(1200));
    }

    #[test]
    fn transition_comes_from_the_config() {
        assert_eq!(rotating(3).transition(), Duration::ZERO);
        let config = CarouselConfig::slideshow(3).with_transition(ms(800));
        assert_eq!(Carousel::attach(3, &config).unwrap().transition(), ms(800));
    }

    #[test]
    fn hover_pauses_and_leave_reschedules() {
        let mut carousel = rotating(4);
        carousel.handle(Input::PointerEnter, ms(0));
        assert!(!carousel.is_autoplaying());
        assert!(carousel.tick(ms(3000)).is_empty());

        let mut carousel = rotating(4);
        carousel.handle(Input::PointerEnter, ms(0));
        carousel.handle(Input::PointerLeave, ms(500));
        assert!(carousel.tick(ms(3000)).is_empty());
        assert!(carousel.tick(ms(3499)).is_empty());
        assert_eq!(carousel.tick(ms(3500)), vec![IndexChange { from: 0, to: 1 }]);
    }

    #[test]
    fn repeated_leave_does_not_double_the_timer() {
        let mut carousel = rotating(4);
        carousel.handle(Input::PointerLeave, ms(100));
        carousel.handle(Input::PointerLeave, ms(200));
        assert_eq!(carousel.tick(ms(3000)).len(), 1);
        assert!(carousel.tick(ms(5999)).is_empty());
        assert_eq!(carousel.tick(ms(6000)).len(), 1);
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn single_item_never_autoplays() {
        let mut carousel = rotating(1);
        assert!(!carousel.is_autoplaying());
        carousel.handle(Input::PointerLeave, ms(0));
        assert!(carousel.tick(ms(30_000)).is_empty());
    }

    #[test]
    fn autoplay_tick_respects_the_gate() {
        let config = CarouselConfig::slideshow(5)
            .with_transition(ms(1200))
            .with_autoplay(Some(ms(3000)));
        let mut carousel = Carousel::attach(5, &config).unwrap();

        carousel.handle(Input::Next, ms(2500));
        // the tick at 3000 lands inside the transition started at 2500
        assert!(carousel.tick(ms(3000)).is_empty());
        assert_eq!(carousel.current(), 1);
        assert_eq!(carousel.tick(ms(6000)), vec![IndexChange { from: 1, to: 2 }]);
    }

    #[test]
    fn clear_runs_before_a_tick_on_the_same_instant() {
        let config = CarouselConfig::slideshow(5)
            .with_transition(ms(1000))
            .with_autoplay(Some(ms(3000)));
        let mut carousel = Carousel::attach(5, &config).unwrap();

        carousel.handle(Input::Next, ms(2000));
        assert_eq!(carousel.tick(ms(3000)), vec![IndexChange { from: 1, to: 2 }]);
    }

    #[test]
    fn detach_cancels_everything() {
        let calls = Rc::new(Cell::new(0));
        let mut carousel = rotating(3);
        let counter = Rc::clone(&calls);
        carousel.subscribe(move |_| counter.set(counter.get() + 1));

        carousel.detach();
        assert!(!carousel.is_attached());
        assert!(!carousel.is_autoplaying());
        assert!(carousel.tick(ms(10_000)).is_empty());
        assert_eq!(carousel.handle(Input::Next, ms(10_000)), None);
        carousel.handle(Input::PointerLeave, ms(10_000));
        assert!(!carousel.is_autoplaying());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn manual_slideshow_flow() {
        let config = CarouselConfig::slideshow(4).with_wrap(Wrap::Circular);
        let mut carousel = Carousel::attach(4, &config).unwrap();

        assert!(carousel.handle(Input::Indicator(3), ms(0)).is_some());
        assert_eq!(carousel.handle(Input::Key(Key::ArrowRight), ms(600)), None);
        assert_eq!(carousel.handle(Input::Key(Key::ArrowRight), ms(1200)), Some(IndexChange { from: 3, to: 0 }));
        assert_eq!(carousel.indicators(), vec![true, false, false, false]);
    }

    #[test]
    fn handle_returns_its_own_change_and_listeners_hear_autoplay() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let config = CarouselConfig::slideshow(4).with_transition(ms(0)).with_autoplay(Some(ms(3000)));
        let mut carousel = Carousel::attach(4, &config).unwrap();
        let sink = Rc::clone(&seen);
        carousel.subscribe(move |change| sink.borrow_mut().push(change));

        assert_eq!(carousel.handle(Input::Next, ms(3000)), Some(IndexChange { from: 1, to: 2 }));
        assert_eq!(*seen.borrow(), vec![IndexChange { from: 0, to: 1 }, IndexChange { from: 1, to: 2 }]);
    }

    #[test]
    fn rejects_mismatched_indicators() {
        let config = CarouselConfig::slideshow(3).with_bindings(Bindings::all(3));
        assert!(Carousel::attach(4, &config).is_err());
    }
}
