//! Navigation core for portfolio galleries: the auto-rotating screenshot
//! carousel, the project slideshow and the image preview modal share one
//! cursor controller with a transition gate, an input adapter and an
//! optional autoplay driver.
//!
//! Nothing here reads a clock. Every call takes `now`, the time elapsed since
//! the component was attached, so the host decides how time advances.

pub mod autoplay;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod counter;
pub mod cursor;
pub mod error;
pub mod gallery;
pub mod gate;
pub mod input;
pub mod modal;
pub mod section;
pub mod state;
pub mod typing;

pub use crate::carousel::Carousel;
pub use crate::config::{Bindings, CarouselConfig};
pub use crate::cursor::{CursorController, ListenerId};
pub use crate::error::{Error, Result};
pub use crate::input::{Input, Key};
pub use crate::modal::{CloseReason, GalleryImage, ImageModal, PageHost};
pub use crate::state::{ControlState, IndexChange, Wrap};
