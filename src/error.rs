use std::path::PathBuf;

/// Errors raised while wiring a component up. Navigation itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{indicators} indicators wired for {items} items")]
    IndicatorCountMismatch { indicators: usize, items: usize },

    #[error("autoplay interval must be greater than zero")]
    ZeroAutoplayInterval,

    #[error("swipe threshold must be a positive number of pixels, got {0}")]
    InvalidSwipeThreshold(f32),

    #[error("failed to read directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no image files found in directory {0:?}")]
    NoImages(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
