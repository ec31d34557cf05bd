//! Error types and argument checks shared by every frame operation
//!
//! All failures raised by this crate are precondition violations detected
//! before any image data is touched. Loader failures come from the
//! [`ImageLoader`](crate::loader::ImageLoader) and are forwarded unchanged.

use std::io;
use thiserror::Error;

/// Error returned by an [`ImageLoader`](crate::loader::ImageLoader)
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    /// IO error while reading the image
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Image decoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    /// No image is registered under the requested name
    #[error("image '{name}' not found")]
    NotFound { name: String },
}

/// Error raised by frame-list, animation and sprite-sheet operations
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FramesError {
    /// A required value was absent
    #[error("{name} must not be null")]
    MissingArgument { name: &'static str },
    /// A numeric argument is outside its allowed range
    #[error("{name} {message}")]
    InvalidArgument { name: &'static str, message: &'static str },
    /// A frame list that must hold at least one frame was empty
    #[error("{name} must not be empty")]
    EmptyFrames { name: &'static str },
    /// A slicing region does not fit inside the source image
    #[error("region {width}x{height} at ({x}, {y}) repeated {frames} times exceeds source image ({source_width}x{source_height})")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        frames: u32,
        source_width: u32,
        source_height: u32,
    },
    /// A frame region or source image has no pixels
    #[error("region {width}x{height} has zero area")]
    ZeroArea { width: u32, height: u32 },
    /// A composed canvas would not fit in 32-bit dimensions
    #[error("canvas {width}x{height} is too large")]
    CanvasTooLarge { width: u64, height: u64 },
    /// The image loader failed
    #[error("failed to load '{name}': {source}")]
    Load {
        name: String,
        #[source]
        source: LoadError,
    },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, FramesError>;

/// Check that a signed coordinate or size is at least zero.
pub fn check_non_negative(name: &'static str, value: i32) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| FramesError::InvalidArgument { name, message: "must be at least 0" })
}

/// Check that a signed count is at least one.
pub fn check_at_least_one(name: &'static str, value: i32) -> Result<u32> {
    if value < 1 {
        return Err(FramesError::InvalidArgument { name, message: "must be at least 1" });
    }
    Ok(value as u32)
}

/// Unwrap a required optional value.
pub fn check_some<T>(name: &'static str, value: Option<T>) -> Result<T> {
    value.ok_or(FramesError::MissingArgument { name })
}

/// Check that a frame list holds at least one frame.
pub fn check_not_empty<T>(name: &'static str, frames: &[T]) -> Result<()> {
    if frames.is_empty() {
        return Err(FramesError::EmptyFrames { name });
    }
    Ok(())
}
