use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use carousel::{
    Bindings, Carousel, CarouselConfig, CloseReason, ControlState, Error, GalleryImage, ImageModal,
    IndexChange, Input, Key, PageHost, Wrap,
};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn slideshow(len: usize, wrap: Wrap) -> Carousel {
    let config = CarouselConfig::slideshow(len).with_wrap(wrap).with_transition(ms(1200));
    Carousel::attach(len, &config).unwrap()
}

#[test]
fn last_item_next_wraps_or_stops() {
    let mut circular = slideshow(4, Wrap::Circular);
    circular.handle(Input::Indicator(3), ms(0));
    assert_eq!(circular.handle(Input::Next, ms(1200)), Some(IndexChange { from: 3, to: 0 }));

    let mut bounded = slideshow(4, Wrap::Bounded);
    bounded.handle(Input::Indicator(3), ms(0));
    assert_eq!(bounded.handle(Input::Next, ms(1200)), None);
    assert_eq!(bounded.current(), 3);
    assert_eq!(bounded.controls(), ControlState { prev_enabled: true, next_enabled: false });
}

#[test]
fn hover_defers_the_next_advance() {
    let mut carousel = Carousel::attach(4, &CarouselConfig::auto_rotating()).unwrap();

    carousel.handle(Input::PointerEnter, ms(0));
    assert!(carousel.tick(ms(3000)).is_empty());

    carousel.handle(Input::PointerLeave, ms(500));
    assert!(carousel.tick(ms(3499)).is_empty());
    assert_eq!(carousel.tick(ms(3500)), vec![IndexChange { from: 0, to: 1 }]);
    assert_eq!(carousel.tick(ms(6500)), vec![IndexChange { from: 1, to: 2 }]);
}

#[test]
fn stalled_host_does_not_replay_missed_advances() {
    let mut carousel = Carousel::attach(5, &CarouselConfig::auto_rotating()).unwrap();
    let moves = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&moves);
    carousel.subscribe(move |change| sink.borrow_mut().push(change));

    assert_eq!(carousel.tick(ms(30_000)).len(), 1);
    assert_eq!(*moves.borrow(), vec![IndexChange { from: 0, to: 1 }]);
    assert_eq!(carousel.tick(ms(33_000)), vec![IndexChange { from: 1, to: 2 }]);
}

#[test]
fn swipe_threshold_scenario() {
    let mut carousel = slideshow(4, Wrap::Circular);
    let moves = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&moves);
    carousel.subscribe(move |change| sink.borrow_mut().push(change));

    carousel.handle(Input::PointerDown { x: 400.0 }, ms(0));
    carousel.handle(Input::PointerUp { x: 370.0 }, ms(100));
    assert!(moves.borrow().is_empty());

    carousel.handle(Input::PointerDown { x: 400.0 }, ms(200));
    carousel.handle(Input::PointerUp { x: 320.0 }, ms(300));
    assert_eq!(*moves.borrow(), vec![IndexChange { from: 0, to: 1 }]);
}

#[test]
fn gate_blocks_every_source_until_it_clears() {
    let mut carousel = slideshow(5, Wrap::Circular);
    carousel.handle(Input::Next, ms(0));

    for (input, at) in [
        (Input::Prev, 100),
        (Input::Indicator(4), 200),
        (Input::Key(Key::ArrowRight), 300),
        (Input::Next, 1199),
    ] {
        assert_eq!(carousel.handle(input, ms(at)), None);
    }
    carousel.handle(Input::PointerDown { x: 0.0 }, ms(400));
    assert_eq!(carousel.handle(Input::PointerUp { x: 200.0 }, ms(500)), None);

    assert!(carousel.is_in_flight(ms(1199)));
    assert!(!carousel.is_in_flight(ms(1200)));
    assert_eq!(carousel.handle(Input::Indicator(4), ms(1200)), Some(IndexChange { from: 1, to: 4 }));
}

#[test]
fn instances_are_independent() {
    let mut mobile = slideshow(3, Wrap::Circular);
    let mut website = slideshow(6, Wrap::Circular);

    mobile.handle(Input::Next, ms(0));
    assert_eq!(website.handle(Input::Next, ms(10)), Some(IndexChange { from: 0, to: 1 }));
    assert_eq!(mobile.current(), 1);
    assert_eq!(website.current(), 1);

    drop(mobile);
    assert!(website.handle(Input::Next, ms(1210)).is_some());
}

#[test]
fn one_hover_region_pauses_several_carousels() {
    let mut phones: Vec<Carousel> =
        (0..3).map(|_| Carousel::attach(3, &CarouselConfig::auto_rotating()).unwrap()).collect();

    for phone in phones.iter_mut() {
        phone.handle(Input::PointerEnter, ms(1000));
    }
    assert!(phones.iter_mut().all(|phone| phone.tick(ms(9000)).is_empty()));

    for phone in phones.iter_mut() {
        phone.handle(Input::PointerLeave, ms(9000));
    }
    assert!(phones.iter_mut().all(|phone| phone.tick(ms(12_000)).len() == 1));
}

#[test]
fn miswired_indicators_fail_at_attach() {
    let config = CarouselConfig::slideshow(4).with_bindings(Bindings::all(3));
    let err = Carousel::attach(4, &config).unwrap_err();
    assert!(matches!(err, Error::IndicatorCountMismatch { indicators: 3, items: 4 }));
    assert_eq!(err.to_string(), "3 indicators wired for 4 items");
}

#[derive(Default)]
struct Body {
    overflow_hidden: bool,
    restores: usize,
}

impl PageHost for Body {
    fn suspend_scroll(&mut self) {
        self.overflow_hidden = true;
    }

    fn restore_scroll(&mut self) {
        self.overflow_hidden = false;
        self.restores += 1;
    }
}

#[test]
fn preview_modal_walkthrough() {
    let images = vec![
        GalleryImage::new("shots/login.png", "Login"),
        GalleryImage::new("shots/home.png", "Home"),
        GalleryImage::new("shots/profile.png", "Profile"),
    ];
    let mut body = Body::default();
    {
        let mut modal = ImageModal::open(images, 0, &mut body, Duration::ZERO);
        assert_eq!(modal.controls(), ControlState { prev_enabled: false, next_enabled: true });

        modal.handle(Input::Key(Key::ArrowRight), ms(0));
        modal.handle(Input::Key(Key::ArrowRight), ms(10));
        modal.handle(Input::Key(Key::ArrowRight), ms(20));
        assert_eq!(modal.counter_label(), "3 / 3");
        assert_eq!(modal.caption(), "Profile");
        assert_eq!(modal.image().map(|image| image.src.as_str()), Some("shots/profile.png"));

        let body = modal.close(CloseReason::Backdrop).unwrap();
        assert!(!body.overflow_hidden);
    }
    assert_eq!(body.restores, 1);
}
