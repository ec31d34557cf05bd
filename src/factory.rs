//! Frame factory - name-based and image-based entry points in one place
//!
//! [`Frames`] pairs an [`ImageLoader`] with a [`FramesConfig`]. Every
//! name-based method loads through the loader and then delegates to its
//! image-based counterpart.

use crate::animation::{LoopedFramesAnimation, MultipleFramesAnimation, SingleFrameAnimation};
use crate::config::FramesConfig;
use crate::error::{FramesError, Result};
use crate::loader::{FileLoader, ImageLoader};
use crate::slice::{frame_list_from_files, frame_list_from_sheet};
use crate::spritesheet::create_sprite_sheet;
use crate::transform;
use image::RgbaImage;

/// Builds frame lists, animations and sprite sheets.
#[derive(Debug, Clone)]
pub struct Frames<L> {
    loader: L,
    config: FramesConfig,
}

impl Frames<FileLoader> {
    /// Factory loading files from the configured root directory.
    pub fn from_config(config: FramesConfig) -> Self {
        let loader = FileLoader::new(config.loader.root.clone());
        Self { loader, config }
    }
}

impl<L: ImageLoader> Frames<L> {
    pub fn new(loader: L) -> Self {
        Self::with_config(loader, FramesConfig::default())
    }

    pub fn with_config(loader: L, config: FramesConfig) -> Self {
        Self { loader, config }
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn config(&self) -> &FramesConfig {
        &self.config
    }

    fn load(&self, name: &str) -> Result<RgbaImage> {
        self.loader
            .load_image(name)
            .map_err(|source| FramesError::Load { name: name.to_string(), source })
    }

    // Single frame

    pub fn create_animation(&self, image_name: &str) -> Result<SingleFrameAnimation> {
        Ok(self.create_animation_from_image(self.load(image_name)?))
    }

    pub fn create_animation_from_image(&self, image: RgbaImage) -> SingleFrameAnimation {
        SingleFrameAnimation::new(image)
    }

    // Indexed files

    pub fn create_animation_from_files(
        &self,
        image_name: &str,
        suffix: &str,
        frames: i32,
    ) -> Result<MultipleFramesAnimation> {
        self.create_animation_from_frames(&self.create_frame_list(image_name, suffix, frames)?)
    }

    pub fn create_looped_animation_from_files(
        &self,
        image_name: &str,
        suffix: &str,
        frames: i32,
    ) -> Result<LoopedFramesAnimation> {
        self.create_looped_animation_from_frames(&self.create_frame_list(image_name, suffix, frames)?)
    }

    // Sprite sheets

    pub fn create_animation_from_sheet(
        &self,
        image_name: &str,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        frames: i32,
    ) -> Result<MultipleFramesAnimation> {
        let image = self.load(image_name)?;
        self.create_animation_from_sheet_image(&image, x, y, width, height, frames)
    }

    pub fn create_animation_from_sheet_image(
        &self,
        image: &RgbaImage,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        frames: i32,
    ) -> Result<MultipleFramesAnimation> {
        let frame_list = frame_list_from_sheet(image, x, y, width, height, frames)?;
        self.create_animation_from_frames(&frame_list)
    }

    pub fn create_looped_animation_from_sheet(
        &self,
        image_name: &str,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        frames: i32,
    ) -> Result<LoopedFramesAnimation> {
        let image = self.load(image_name)?;
        self.create_looped_animation_from_sheet_image(&image, x, y, width, height, frames)
    }

    pub fn create_looped_animation_from_sheet_image(
        &self,
        image: &RgbaImage,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        frames: i32,
    ) -> Result<LoopedFramesAnimation> {
        let frame_list = frame_list_from_sheet(image, x, y, width, height, frames)?;
        self.create_looped_animation_from_frames(&frame_list)
    }

    // Pre-loaded frames

    pub fn create_animation_from_frames(&self, images: &[RgbaImage]) -> Result<MultipleFramesAnimation> {
        MultipleFramesAnimation::new(images)
    }

    pub fn create_looped_animation_from_frames(
        &self,
        images: &[RgbaImage],
    ) -> Result<LoopedFramesAnimation> {
        LoopedFramesAnimation::new(images)
    }

    // Frame lists

    /// Load `frames` indexed files named `image_name` + padded index + `suffix`.
    pub fn create_frame_list(&self, image_name: &str, suffix: &str, frames: i32) -> Result<Vec<RgbaImage>> {
        frame_list_from_files(&self.loader, image_name, suffix, frames, self.config.padding.mode)
    }

    pub fn create_frame_list_from_sheet(
        &self,
        image_name: &str,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        frames: i32,
    ) -> Result<Vec<RgbaImage>> {
        let image = self.load(image_name)?;
        self.create_frame_list_from_sheet_image(&image, x, y, width, height, frames)
    }

    pub fn create_frame_list_from_sheet_image(
        &self,
        image: &RgbaImage,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        frames: i32,
    ) -> Result<Vec<RgbaImage>> {
        frame_list_from_sheet(image, x, y, width, height, frames)
    }

    // Composition and transforms

    pub fn create_sprite_sheet(&self, frame_images: &[RgbaImage]) -> Result<RgbaImage> {
        create_sprite_sheet(frame_images)
    }

    pub fn create_sprite_sheet_from_files(
        &self,
        image_name: &str,
        suffix: &str,
        frames: i32,
    ) -> Result<RgbaImage> {
        create_sprite_sheet(&self.create_frame_list(image_name, suffix, frames)?)
    }

    pub fn flip_horizontally(&self, image: &RgbaImage) -> RgbaImage {
        transform::flip_horizontal(image)
    }

    pub fn flip_all_horizontally(&self, frame_images: &[RgbaImage]) -> Vec<RgbaImage> {
        transform::flip_all_horizontal(frame_images)
    }

    pub fn flip_vertically(&self, image: &RgbaImage) -> RgbaImage {
        transform::flip_vertical(image)
    }

    pub fn flip_all_vertically(&self, frame_images: &[RgbaImage]) -> Vec<RgbaImage> {
        transform::flip_all_vertical(frame_images)
    }

    /// Rotate `image` through `steps` evenly spaced angles using the configured filter.
    pub fn rotate(&self, image: &RgbaImage, steps: i32) -> Result<Vec<RgbaImage>> {
        transform::rotate(image, steps, self.config.rotation.filter)
    }
}
