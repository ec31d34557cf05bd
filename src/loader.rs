//! Image loading seam
//!
//! Frame operations that take a name resolve it through an [`ImageLoader`].
//! Decoding is delegated to the `image` crate; every loaded image is
//! converted to RGBA.

use crate::error::LoadError;
use image::RgbaImage;
use log::debug;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Resolves an image name to a decoded RGBA image.
pub trait ImageLoader {
    fn load_image(&self, name: &str) -> Result<RgbaImage, LoadError>;
}

/// Loads images from files relative to a root directory.
#[derive(Debug, Clone, Default)]
pub struct FileLoader {
    root: PathBuf,
}

impl FileLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path for an image name.
    pub fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl ImageLoader for FileLoader {
    fn load_image(&self, name: &str) -> Result<RgbaImage, LoadError> {
        let path = self.resolve(name);
        if !path.exists() {
            return Err(LoadError::NotFound { name: name.to_string() });
        }
        debug!("loading {}", path.display());
        Ok(image::open(&path)?.to_rgba8())
    }
}

/// In-memory loader keyed by image name.
impl ImageLoader for HashMap<String, RgbaImage> {
    fn load_image(&self, name: &str) -> Result<RgbaImage, LoadError> {
        self.get(name)
            .cloned()
            .ok_or_else(|| LoadError::NotFound { name: name.to_string() })
    }
}

impl<L: ImageLoader + ?Sized> ImageLoader for &L {
    fn load_image(&self, name: &str) -> Result<RgbaImage, LoadError> {
        (**self).load_image(name)
    }
}
