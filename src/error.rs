//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and codec errors, and provides semantic variants
//! for argument validation and composition failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Could not create image tiles from empty list of images")]
    EmptyInput,

    #[error("Unknown tile scaling mode: {mode}. Supported modes: min, max, avg")]
    InvalidScalingMode { mode: String },

    #[error("Could not place {images} images in grid with size: ({rows}, {cols})")]
    GridCapacity {
        images: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Scale factor must be positive, got: {factor}")]
    InvalidScaleFactor { factor: f64 },

    #[error("Raster dimensions must be greater than 0, got: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }
}
