//! Frames - sprite-frame animations built from images
//!
//! This library provides functionality to:
//! - Slice horizontal sprite-sheet strips and indexed image files into frame lists
//! - Play frame lists as single-frame, looped or play-once animations
//! - Compose frame lists into centered single-row sprite sheets
//! - Flip frames and generate rotated frame sets
//!
//! Images are `image::RgbaImage`. Loading goes through the [`ImageLoader`]
//! trait; the host application drives an [`Animation`] by calling
//! [`Animation::advance`] once per tick and drawing
//! [`Animation::current_frame`].

pub mod animation;
mod blend;
pub mod config;
pub mod error;
pub mod factory;
pub mod loader;
pub mod output;
pub mod slice;
pub mod spritesheet;
pub mod transform;

pub use animation::{Animation, LoopedFramesAnimation, MultipleFramesAnimation, SingleFrameAnimation};
pub use config::{FramesConfig, PaddingMode, RotationFilter};
pub use error::{FramesError, LoadError, Result};
pub use factory::Frames;
pub use loader::{FileLoader, ImageLoader};
