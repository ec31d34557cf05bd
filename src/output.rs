//! PNG output for frames and sprite sheets

use crate::config::PaddingMode;
use crate::slice::frame_names;
use image::RgbaImage;
use log::debug;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for output operations
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OutputError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Image encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    /// Frame naming failed
    #[error(transparent)]
    Frames(#[from] crate::error::FramesError),
}

/// Save an RGBA image to a PNG file, creating parent directories.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    image.save(path)?;
    Ok(())
}

/// Save a frame list as indexed files `dir/{base}{index}{suffix}`.
///
/// Names use the same zero padding as indexed-file loading, so the written
/// files can be read back with
/// [`frame_list_from_files`](crate::slice::frame_list_from_files).
/// The suffix selects the encoding (e.g. `.png`).
pub fn save_frame_list(
    frames: &[RgbaImage],
    dir: &Path,
    base: &str,
    suffix: &str,
    mode: PaddingMode,
) -> Result<Vec<PathBuf>, OutputError> {
    let count = i32::try_from(frames.len()).unwrap_or(i32::MAX);
    let names = frame_names(base, suffix, count, mode)?;
    debug!("saving {} frames to {}", frames.len(), dir.display());

    let mut paths = Vec::with_capacity(frames.len());
    for (frame, name) in frames.iter().zip(names) {
        let path = dir.join(name);
        save_png(frame, &path)?;
        paths.push(path);
    }
    Ok(paths)
}
