use std::time::Duration;

use raylib::prelude::*;
use tracing::info;

use carousel::constants::*;
use carousel::counter::CountUp;
use carousel::section::{Section, SectionTracker};
use carousel::typing::Typewriter;
use carousel::{Carousel, CloseReason, GalleryImage, ImageModal, IndexChange, Input, Key, PageHost};

use crate::slide::Slide;

const CLICK_SLOP: f32 = 5.0;       // Drags shorter than this are clicks
const BUTTON_RADIUS: f32 = 24.0;
const DOT_RADIUS: f32 = 6.0;
const DOT_SPACING: f32 = 22.0;
const MAX_SCROLL: f32 = 240.0;

/// Vertical page scroll, suspended while the image modal is open.
#[derive(Debug, Default)]
pub struct PageScroll {
    scroll_y: f32,
    locked: bool,
}

impl PageScroll {
    fn scroll_by(&mut self, amount: f32) {
        if !self.locked {
            self.scroll_y = (self.scroll_y + amount).clamp(0.0, MAX_SCROLL);
        }
    }
}

impl PageHost for PageScroll {
    fn suspend_scroll(&mut self) {
        self.locked = true;
    }

    fn restore_scroll(&mut self) {
        self.locked = false;
    }
}

/// Slide track position, animated over the carousel's transition duration.
#[derive(Debug, Clone, Copy)]
struct Track {
    from: f32,
    to: f32,
    started: Duration,
}

impl Track {
    fn offset(&self, now: Duration, duration: Duration) -> f32 {
        if duration.is_zero() {
            return self.to;
        }
        let t = (now.saturating_sub(self.started).as_secs_f32() / duration.as_secs_f32()).min(1.0);
        let t = 1.0 - (1.0 - t).powi(3); // easeOutCubic
        self.from + (self.to - self.from) * t
    }
}

struct OpenModal {
    modal: ImageModal<PageScroll>,
    opened_at: Duration,
}

pub struct Viewer {
    slides: Vec<Slide>,
    carousel: Carousel,
    track: Track,

    page: Option<PageScroll>, // None while the modal holds it
    modal: Option<OpenModal>,

    hovering: bool,
    press_x: Option<f32>,

    title: Typewriter,
    count: CountUp,
    sections: SectionTracker,
}

impl Viewer {
    pub fn new(slides: Vec<Slide>, carousel: Carousel, phrases: &[String]) -> Self {
        let count = CountUp::new(slides.len() as u64);
        Self {
            slides,
            carousel,
            track: Track { from: 0.0, to: 0.0, started: Duration::ZERO },
            page: Some(PageScroll::default()),
            modal: None,
            hovering: false,
            press_x: None,
            title: Typewriter::new(phrases),
            count,
            sections: SectionTracker::new(vec![
                Section { id: "gallery".into(), top: 0.0 },
                Section { id: "details".into(), top: 320.0 },
            ]),
        }
    }

    fn track_bounds(width: f32, height: f32) -> Rectangle {
        Rectangle::new(90.0, 110.0, width - 180.0, height - 230.0)
    }

    fn prev_button(height: f32) -> Vector2 {
        Vector2::new(45.0, 110.0 + (height - 230.0) * 0.5)
    }

    fn next_button(width: f32, height: f32) -> Vector2 {
        Vector2::new(width - 45.0, 110.0 + (height - 230.0) * 0.5)
    }

    fn dot_center(i: usize, count: usize, width: f32, height: f32) -> Vector2 {
        let row = DOT_SPACING * count.saturating_sub(1) as f32;
        Vector2::new(width * 0.5 - row * 0.5 + DOT_SPACING * i as f32, height - 95.0)
    }

    fn moved(&mut self, change: Option<IndexChange>, now: Duration) {
        if let Some(change) = change {
            let from = self.track.offset(now, self.carousel.transition());
            self.track = Track { from, to: change.to as f32, started: now };
        }
    }

    fn scroll_y(&self) -> f32 {
        let held = self.modal.as_ref().and_then(|open| open.modal.host());
        self.page.as_ref().or(held).map_or(0.0, |page| page.scroll_y)
    }

    /// Maps this frame's mouse and keyboard state to carousel and modal input.
    pub fn update(&mut self, rl: &RaylibHandle, now: Duration) {
        self.title.tick(now);
        self.count.trigger(now);

        for change in self.carousel.tick(now) {
            self.moved(Some(change), now);
        }

        if self.modal.is_some() {
            self.update_modal(rl, now);
            return;
        }

        let width = rl.get_screen_width() as f32;
        let height = rl.get_screen_height() as f32;
        let mouse = rl.get_mouse_position();
        let scroll = self.scroll_y();
        let mut track = Self::track_bounds(width, height);
        track.y -= scroll;

        if let Some(page) = self.page.as_mut() {
            page.scroll_by(-rl.get_mouse_wheel_move() * 40.0);
        }

        let inside = track.check_collision_point_rec(mouse);
        if inside != self.hovering {
            self.hovering = inside;
            let input = if inside { Input::PointerEnter } else { Input::PointerLeave };
            self.carousel.handle(input, now);
        }

        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            let change = self.carousel.handle(Input::Key(Key::ArrowRight), now);
            self.moved(change, now);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            let change = self.carousel.handle(Input::Key(Key::ArrowLeft), now);
            self.moved(change, now);
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let mut prev = Self::prev_button(height);
            let mut next = Self::next_button(width, height);
            prev.y -= scroll;
            next.y -= scroll;

            let input = if mouse.distance_to(prev) <= BUTTON_RADIUS {
                Some(Input::Prev)
            } else if mouse.distance_to(next) <= BUTTON_RADIUS {
                Some(Input::Next)
            } else {
                (0..self.slides.len())
                    .find(|&i| {
                        let mut dot = Self::dot_center(i, self.slides.len(), width, height);
                        dot.y -= scroll;
                        mouse.distance_to(dot) <= DOT_RADIUS * 2.0
                    })
                    .map(Input::Indicator)
            };

            match input {
                Some(input) => {
                    let change = self.carousel.handle(input, now);
                    self.moved(change, now);
                }
                None if inside => {
                    self.press_x = Some(mouse.x);
                    self.carousel.handle(Input::PointerDown { x: mouse.x }, now);
                }
                None => {}
            }
        }

        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Some(start) = self.press_x.take() {
                let change = self.carousel.handle(Input::PointerUp { x: mouse.x }, now);
                self.moved(change, now);
                if (mouse.x - start).abs() < CLICK_SLOP && inside {
                    self.open_modal(now);
                }
            }
        }
    }

    fn open_modal(&mut self, now: Duration) {
        let Some(page) = self.page.take() else {
            return;
        };
        let images = self
            .slides
            .iter()
            .map(|slide| GalleryImage::new(slide.src.clone(), slide.caption.clone()))
            .collect();

        self.carousel.pause();
        self.modal = Some(OpenModal {
            modal: ImageModal::open(images, self.carousel.current(), page, Duration::ZERO),
            opened_at: now,
        });
    }

    fn close_modal(&mut self, reason: CloseReason, now: Duration) {
        if let Some(mut open) = self.modal.take() {
            self.page = Some(open.modal.close(reason).unwrap_or_default());
            info!(?reason, "closed preview");
        }
        // Still hovering the track keeps autoplay paused until the pointer leaves
        if !self.hovering {
            self.carousel.resume(now);
        }
    }

    fn update_modal(&mut self, rl: &RaylibHandle, now: Duration) {
        let width = rl.get_screen_width() as f32;
        let height = rl.get_screen_height() as f32;
        let mouse = rl.get_mouse_position();

        let mut close = None;
        if let Some(open) = self.modal.as_mut() {
            if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
                open.modal.handle(Input::Key(Key::ArrowLeft), now);
            }
            if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
                open.modal.handle(Input::Key(Key::ArrowRight), now);
            }
            if rl.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
                close = Some(CloseReason::Escape);
            }

            if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
                let controls = open.modal.controls();
                let close_button = Vector2::new(width - 50.0, 50.0);
                let prev = Vector2::new(45.0, height * 0.5);
                let next = Vector2::new(width - 45.0, height * 0.5);
                let content = Rectangle::new(90.0, 80.0, width - 180.0, height - 160.0);

                if mouse.distance_to(close_button) <= BUTTON_RADIUS {
                    close = Some(CloseReason::CloseControl);
                } else if mouse.distance_to(prev) <= BUTTON_RADIUS {
                    if controls.prev_enabled {
                        open.modal.prev(now);
                    }
                } else if mouse.distance_to(next) <= BUTTON_RADIUS {
                    if controls.next_enabled {
                        open.modal.next(now);
                    }
                } else if !content.check_collision_point_rec(mouse) {
                    close = Some(CloseReason::Backdrop);
                }
            }
        }

        if let Some(reason) = close {
            self.close_modal(reason, now);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, now: Duration) {
        let width = d.get_screen_width() as f32;
        let height = d.get_screen_height() as f32;
        let scroll = self.scroll_y();

        d.clear_background(Color::new(30, 27, 46, 255));

        // Header
        d.draw_text(&self.title.text(), 40, (30.0 - scroll) as i32, 36, Color::WHITE);
        let count = format!("{} images", self.count.value(now));
        d.draw_text(&count, width as i32 - 200, (38.0 - scroll) as i32, 24, Color::LIGHTGRAY);
        let current_section = self.sections.current(scroll).unwrap_or("");
        for (i, id) in ["gallery", "details"].iter().enumerate() {
            let color = if *id == current_section { Color::SKYBLUE } else { Color::GRAY };
            d.draw_text(id, 40 + i as i32 * 110, (78.0 - scroll) as i32, 18, color);
        }

        // Slide track
        let mut track = Self::track_bounds(width, height);
        track.y -= scroll;
        let offset = self.track.offset(now, self.carousel.transition());
        for (i, slide) in self.slides.iter().enumerate() {
            let x = track.x + (i as f32 - offset) * track.width;
            if x + track.width < track.x || x > track.x + track.width {
                continue;
            }
            slide.draw(d, Rectangle::new(x, track.y, track.width, track.height), Color::WHITE);
        }
        // Mask slides sliding in or out of the track
        d.draw_rectangle_rec(Rectangle::new(0.0, track.y, track.x, track.height), Color::new(30, 27, 46, 255));
        d.draw_rectangle_rec(
            Rectangle::new(track.x + track.width, track.y, width - track.x - track.width, track.height),
            Color::new(30, 27, 46, 255),
        );

        // Controls
        let controls = self.carousel.controls();
        for (center, label, enabled) in [
            (Self::prev_button(height), "<", controls.prev_enabled),
            (Self::next_button(width, height), ">", controls.next_enabled),
        ] {
            let alpha = if enabled { 255 } else { 110 };
            d.draw_circle(center.x as i32, (center.y - scroll) as i32, BUTTON_RADIUS, Color::new(255, 255, 255, alpha / 4));
            d.draw_text(label, center.x as i32 - 6, (center.y - scroll) as i32 - 12, 24, Color::new(255, 255, 255, alpha));
        }
        for (i, active) in self.carousel.indicators().into_iter().enumerate() {
            let center = Self::dot_center(i, self.slides.len(), width, height);
            let color = if active { Color::SKYBLUE } else { Color::GRAY };
            d.draw_circle(center.x as i32, (center.y - scroll) as i32, DOT_RADIUS, color);
        }
        if let Some(slide) = self.slides.get(self.carousel.current()) {
            d.draw_text(&slide.caption, track.x as i32, (height - 70.0 - scroll) as i32, 22, Color::WHITE);
        }

        if let Some(open) = self.modal.as_ref() {
            self.draw_modal(d, open, now, width, height);
        }
    }

    fn draw_modal(&self, d: &mut RaylibDrawHandle, open: &OpenModal, now: Duration, width: f32, height: f32) {
        let fade = (now.saturating_sub(open.opened_at).as_secs_f32() / MODAL_FADE_DURATION.as_secs_f32()).min(1.0);
        let alpha = |max: f32| (max * fade) as u8;

        d.draw_rectangle(0, 0, width as i32, height as i32, Color::new(0, 0, 0, alpha(242.0)));

        let modal = &open.modal;
        if let Some(slide) = self.slides.get(modal.current()) {
            let content = Rectangle::new(90.0, 80.0, width - 180.0, height - 160.0);
            slide.draw(d, content, Color::new(255, 255, 255, alpha(255.0)));
        }

        let controls = modal.controls();
        for (center, label, enabled) in [
            (Vector2::new(45.0, height * 0.5), "<", controls.prev_enabled),
            (Vector2::new(width - 45.0, height * 0.5), ">", controls.next_enabled),
            (Vector2::new(width - 50.0, 50.0), "x", true),
        ] {
            let strength = if enabled { 1.0 } else { 0.5 };
            d.draw_circle(center.x as i32, center.y as i32, BUTTON_RADIUS, Color::new(255, 255, 255, alpha(51.0 * strength)));
            d.draw_text(label, center.x as i32 - 6, center.y as i32 - 12, 24, Color::new(255, 255, 255, alpha(255.0 * strength)));
        }

        d.draw_text(&modal.counter_label(), 40, 40, 22, Color::new(255, 255, 255, alpha(255.0)));
        d.draw_text(modal.caption(), 90, height as i32 - 60, 22, Color::new(255, 255, 255, alpha(255.0)));
    }
}
