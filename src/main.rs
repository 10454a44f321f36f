use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use carousel::constants::*;
use carousel::gallery::{caption_for, load_sorted_image_paths, shuffle};
use carousel::{Bindings, Carousel, CarouselConfig, Wrap};

mod slide;
mod texture_loader;
mod view;

use crate::slide::Slide;
use crate::texture_loader::load_texture_with_exif_rotation;
use crate::view::Viewer;

/// Browse a directory of images as a carousel.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory holding the images
    image_directory: PathBuf,

    /// Stop at the first and last image instead of wrapping
    #[arg(long)]
    bounded: bool,

    /// Show the images in random order
    #[arg(long)]
    shuffle: bool,

    /// Milliseconds between automatic advances
    #[arg(long, default_value_t = AUTOPLAY_INTERVAL.as_millis() as u64)]
    autoplay_ms: u64,

    /// Only move on user input
    #[arg(long)]
    no_autoplay: bool,

    /// Slide transition length in milliseconds
    #[arg(long, default_value_t = TRANSITION_DURATION.as_millis() as u64)]
    transition_ms: u64,

    /// Minimum horizontal drag, in pixels, that counts as a swipe
    #[arg(long, default_value_t = SWIPE_THRESHOLD)]
    swipe_threshold: f32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut image_paths = load_sorted_image_paths(&args.image_directory)
        .with_context(|| format!("loading images from {:?}", args.image_directory))?;
    if args.shuffle {
        shuffle(&mut image_paths);
    }
    info!(directory = ?args.image_directory, images = image_paths.len(), "found images");

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH, RENDER_HEIGHT)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    rl.set_exit_key(None); // Escape closes the preview, not the window

    // --- Load Slides ---
    let mut slides = Vec::new();
    for path in &image_paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, path) {
            Ok(texture) => slides.push(Slide::new(texture, path.display().to_string(), caption_for(path))),
            Err(e) => warn!("skipping {:?}: {:#}", path.file_name().unwrap_or_default(), e),
        }
    }
    if slides.is_empty() {
        bail!("no slides could be loaded from {:?}", args.image_directory);
    }

    let config = CarouselConfig::slideshow(slides.len())
        .with_wrap(if args.bounded { Wrap::Bounded } else { Wrap::Circular })
        .with_transition(Duration::from_millis(args.transition_ms))
        .with_autoplay((!args.no_autoplay).then(|| Duration::from_millis(args.autoplay_ms)))
        .with_swipe_threshold(args.swipe_threshold)
        .with_bindings(Bindings::all(slides.len()));
    let carousel = Carousel::attach(slides.len(), &config)?;

    let directory = args
        .image_directory
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Gallery".to_string());
    let phrases = [directory, "Drag or use the arrow keys".to_string(), "Click to enlarge".to_string()];
    let mut viewer = Viewer::new(slides, carousel, &phrases);

    // --- Main Loop ---
    let start = Instant::now();
    while !rl.window_should_close() {
        let now = start.elapsed();
        viewer.update(&rl, now);

        let mut d = rl.begin_drawing(&thread);
        viewer.draw(&mut d, now);
    }

    info!("viewer closed");
    Ok(())
}
